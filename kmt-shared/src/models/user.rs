use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    User,
}

impl UserRole {
    /// Canonical string representation used on the wire and in role
    /// selectors.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::User => "user",
        }
    }

    /// Every assignable role, in the order forms present them.
    #[must_use]
    pub fn all() -> [Self; 3] {
        [Self::Admin, Self::Manager, Self::User]
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "user" => Ok(Self::User),
            _ => Err("unknown user role"),
        }
    }
}

/// A user account as the backend serializes it.
///
/// The `password` field is part of the wire shape the backend exposes;
/// list views never render it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier, empty until the user is saved.
    #[serde(default)]
    pub id: String,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's email address, also the login name.
    pub email: String,

    /// The user's password.
    #[serde(default)]
    pub password: String,

    /// The role assigned to the user.
    pub user_role: UserRole,
}

impl User {
    /// First and last name joined for display.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload of a user list response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserList {
    pub users: Vec<User>,
}

/// Payload of a single-user response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "5a1c4e8f2b".to_string(),
            first_name: "Asha".to_string(),
            last_name: "Patel".to_string(),
            email: "asha.patel@example.com".to_string(),
            password: "secret".to_string(),
            user_role: UserRole::Manager,
        }
    }

    #[test]
    fn wire_shape_uses_camel_case_keys() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(json.contains("\"firstName\":\"Asha\""));
        assert!(json.contains("\"lastName\":\"Patel\""));
        assert!(json.contains("\"userRole\":\"manager\""));
    }

    #[test]
    fn decodes_backend_json() {
        let json = r#"{
            "id": "42",
            "firstName": "Li",
            "lastName": "Wei",
            "email": "li.wei@example.com",
            "password": "pw",
            "userRole": "admin"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.user_role, UserRole::Admin);
        assert_eq!(user.full_name(), "Li Wei");
    }

    #[test]
    fn missing_id_and_password_default_to_empty() {
        let json = r#"{
            "firstName": "New",
            "lastName": "Hire",
            "email": "new.hire@example.com",
            "userRole": "user"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.id.is_empty());
        assert!(user.password.is_empty());
    }

    #[test]
    fn role_round_trips_through_strings() {
        for role in UserRole::all() {
            let parsed: UserRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn user_list_envelope_payload() {
        let json = r#"{"users":[{"firstName":"A","lastName":"B","email":"a@b.c","userRole":"user"}]}"#;
        let list: UserList = serde_json::from_str(json).unwrap();
        assert_eq!(list.users.len(), 1);
        assert_eq!(list.users[0].email, "a@b.c");
    }
}
