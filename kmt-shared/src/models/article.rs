use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::Timestamp;

/// Category a knowledge-base article belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    Faq,
    Guide,
    Policy,
}

impl ArticleType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Faq => "faq",
            Self::Guide => "guide",
            Self::Policy => "policy",
        }
    }

    /// Every article type, in the order forms present them.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Faq, Self::Guide, Self::Policy]
    }
}

impl fmt::Display for ArticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleType {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "faq" => Ok(Self::Faq),
            "guide" => Ok(Self::Guide),
            "policy" => Ok(Self::Policy),
            _ => Err("unknown article type"),
        }
    }
}

/// A knowledge-base article as the backend serializes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Backend-assigned identifier, empty until the article is saved.
    #[serde(default)]
    pub id: String,

    /// Title shown in lists and at the top of the reader view.
    pub title: String,

    /// One-line summary shown in list rows.
    pub description: String,

    /// Full article body.
    pub content: String,

    /// Category the article belongs to.
    pub article_type: ArticleType,

    /// Display name of the author.
    #[serde(default)]
    pub created_by: String,

    /// When the article was created.
    pub created_at: Timestamp,

    /// Whether the article has been approved for the reader view.
    #[serde(default)]
    pub approved: bool,
}

/// Payload of an article list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleList {
    pub articles: Vec<Article>,
}

/// Payload of a single-article response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleView {
    pub article: Article,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_json() {
        let json = r#"{
            "id": "a-17",
            "title": "Resetting your password",
            "description": "Self-service password reset steps.",
            "content": "Open the login page and...",
            "articleType": "faq",
            "createdBy": "Asha Patel",
            "createdAt": "2024-03-01T12:30:00Z",
            "approved": true
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "a-17");
        assert_eq!(article.article_type, ArticleType::Faq);
        assert!(article.approved);
    }

    #[test]
    fn approval_defaults_to_false() {
        let json = r#"{
            "title": "Draft",
            "description": "d",
            "content": "c",
            "articleType": "guide",
            "createdAt": "2024-03-01T12:30:00Z"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(!article.approved);
        assert!(article.id.is_empty());
        assert!(article.created_by.is_empty());
    }

    #[test]
    fn type_round_trips_through_strings() {
        for kind in ArticleType::all() {
            let parsed: ArticleType = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("memo".parse::<ArticleType>().is_err());
    }
}
