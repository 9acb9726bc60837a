use crate::config::FrontendConfig;
use crate::session::{BrowserSession, Session, SessionProvider};
use kmt_shared::models::{
    Article, ArticleList, ArticleView, Envelope, LoginRequest, LoginResponse, StatusMessage, User,
    UserList, UserView,
};
use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, Method, RequestBuilder, header};

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = OnceCell::new();
}

/// Attach the bearer token to an outgoing request.
///
/// Pure request transformation: when an authenticated session is
/// present its token becomes the `Authorization` header value, verbatim
/// and unprefixed, the way the backend expects it. Without a usable
/// session the request passes through untouched.
pub fn authorize(request: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
    match session {
        Some(session) if !session.access_token.is_empty() => {
            request.header(header::AUTHORIZATION, session.access_token.as_str())
        }
        _ => request,
    }
}

/// Lightweight API client for the KMT admin console.
#[derive(Clone, Debug)]
pub struct ApiClient<S: SessionProvider + Clone = BrowserSession> {
    base_url: String,
    client: Client,
    sessions: S,
}

impl ApiClient {
    /// Create a client against the configured base URL, reading the
    /// session from browser storage.
    pub fn new(base_url: &str) -> Self {
        Self::with_sessions(base_url, BrowserSession)
    }

    /// The process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }
}

impl<S: SessionProvider + Clone> ApiClient<S> {
    /// Create a client with an explicit session provider.
    pub fn with_sessions(base_url: &str, sessions: S) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            sessions,
        }
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.api_url(path));
        authorize(builder, self.sessions.current().as_ref())
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, Error> {
        let response = self
            .request(Method::POST, "users/login")
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// List all user accounts.
    pub async fn list_users(&self) -> Result<Vec<User>, Error> {
        let response = self.request(Method::GET, "users").send().await?;
        let envelope: Envelope<UserList> = response.error_for_status()?.json().await?;
        Ok(envelope.success.users)
    }

    /// Fetch a single user by id.
    pub async fn get_user(&self, id: &str) -> Result<User, Error> {
        let response = self
            .request(Method::GET, &format!("users/{id}"))
            .send()
            .await?;
        let envelope: Envelope<UserView> = response.error_for_status()?.json().await?;
        Ok(envelope.success.user)
    }

    /// Create a new user account.
    pub async fn create_user(&self, user: &User) -> Result<StatusMessage, Error> {
        let response = self
            .request(Method::POST, "users")
            .json(user)
            .send()
            .await?;
        let envelope: Envelope<StatusMessage> = response.error_for_status()?.json().await?;
        Ok(envelope.success)
    }

    /// Update an existing user account.
    pub async fn update_user(&self, user: &User) -> Result<StatusMessage, Error> {
        let response = self
            .request(Method::PUT, &format!("users/{}", user.id))
            .json(user)
            .send()
            .await?;
        let envelope: Envelope<StatusMessage> = response.error_for_status()?.json().await?;
        Ok(envelope.success)
    }

    /// List all knowledge-base articles.
    pub async fn list_articles(&self) -> Result<Vec<Article>, Error> {
        let response = self.request(Method::GET, "articles").send().await?;
        let envelope: Envelope<ArticleList> = response.error_for_status()?.json().await?;
        Ok(envelope.success.articles)
    }

    /// Fetch a single article by id.
    pub async fn get_article(&self, id: &str) -> Result<Article, Error> {
        let response = self
            .request(Method::GET, &format!("articles/{id}"))
            .send()
            .await?;
        let envelope: Envelope<ArticleView> = response.error_for_status()?.json().await?;
        Ok(envelope.success.article)
    }

    /// Create a new article.
    pub async fn create_article(&self, article: &Article) -> Result<StatusMessage, Error> {
        let response = self
            .request(Method::POST, "articles")
            .json(article)
            .send()
            .await?;
        let envelope: Envelope<StatusMessage> = response.error_for_status()?.json().await?;
        Ok(envelope.success)
    }

    /// Update an existing article.
    pub async fn update_article(&self, article: &Article) -> Result<StatusMessage, Error> {
        let response = self
            .request(Method::PUT, &format!("articles/{}", article.id))
            .json(article)
            .send()
            .await?;
        let envelope: Envelope<StatusMessage> = response.error_for_status()?.json().await?;
        Ok(envelope.success)
    }
}
