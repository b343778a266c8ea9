//! Login / registration flow
//!
//! Holds the two-state mode toggle and the submit logic; the page component
//! only turns outcomes into notifications and navigation.

use crate::api::StorefrontApi;
use crate::error::ClientResult;
use crate::session::{Session, SessionStore};
use crate::web::HttpClient;
use vibecommerce_shared::Credentials;

/// Which form the auth view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    /// Text of the link that flips to the other mode.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Create new account",
            AuthMode::Register => "Already have an account?",
        }
    }
}

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Session stored. `user_id_missing` means the backend sent no user id,
    /// so views that need one will treat the session as incomplete.
    SignedIn { user_id_missing: bool },
    /// Account created; the form should switch to login.
    Registered,
}

/// Submits credentials and persists the session on login.
#[derive(Debug, Clone)]
pub struct AuthFlow<C, S> {
    api: StorefrontApi<C, S>,
}

impl<C: HttpClient, S: SessionStore> AuthFlow<C, S> {
    pub fn new(api: StorefrontApi<C, S>) -> Self {
        Self { api }
    }

    /// Logs in or registers, depending on `mode`. A successful login has
    /// already written the session when this returns.
    pub async fn submit(
        &self,
        mode: AuthMode,
        credentials: &Credentials,
    ) -> ClientResult<AuthOutcome> {
        let outcome = match mode {
            AuthMode::Login => self.login(credentials).await,
            AuthMode::Register => self.register(credentials).await,
        };
        if let Err(e) = &outcome {
            log_error!("[Auth] {} failed: {}", mode.title(), e);
        }
        outcome
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthOutcome> {
        let res = self.api.login(credentials).await?;

        let user_id = res.user_id().map(str::to_string);
        let user_id_missing = user_id.is_none();
        if user_id_missing {
            log_warn!("[Auth] userId not found in login response");
        }

        self.api.session().save(&Session::new(res.token, user_id))?;
        Ok(AuthOutcome::SignedIn { user_id_missing })
    }

    async fn register(&self, credentials: &Credentials) -> ClientResult<AuthOutcome> {
        self.api.register(credentials).await?;
        Ok(AuthOutcome::Registered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::*;
    use crate::error::ClientError;
    use crate::session::MemorySessionStore;
    use crate::web::http::MockHttpClient;
    use vibecommerce_shared::protocol::HttpMethod;

    fn credentials() -> Credentials {
        Credentials::new("a@b.com", "pw")
    }

    #[tokio::test]
    async fn test_login_stores_token_and_user_id() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Post,
            &auth_url("/users/login"),
            200,
            r#"{"token": "T", "user": {"_id": "U1"}}"#,
        );
        let session = MemorySessionStore::default();
        let flow = AuthFlow::new(test_api(&client, &session));

        let outcome = flow.submit(AuthMode::Login, &credentials()).await.unwrap();

        assert_eq!(outcome, AuthOutcome::SignedIn { user_id_missing: false });
        assert_eq!(session.load(), Some(Session::new("T", Some("U1".to_string()))));
        assert_eq!(
            client.requests()[0].body.as_deref(),
            Some(r#"{"email":"a@b.com","password":"pw"}"#)
        );
    }

    #[tokio::test]
    async fn test_login_without_user_id_still_signs_in() {
        let client = MockHttpClient::new();
        client.mock_response(HttpMethod::Post, &auth_url("/users/login"), 200, r#"{"token": "T"}"#);
        let session = MemorySessionStore::default();
        let flow = AuthFlow::new(test_api(&client, &session));

        let outcome = flow.submit(AuthMode::Login, &credentials()).await.unwrap();

        assert_eq!(outcome, AuthOutcome::SignedIn { user_id_missing: true });
        let stored = session.load().unwrap();
        assert_eq!(stored.token, "T");
        assert_eq!(stored.user_id(), None);
    }

    #[tokio::test]
    async fn test_failed_login_leaves_session_untouched() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Post,
            &auth_url("/users/login"),
            400,
            "Invalid credentials",
        );
        let session = MemorySessionStore::default();
        let flow = AuthFlow::new(test_api(&client, &session));

        let err = flow.submit(AuthMode::Login, &credentials()).await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 400, .. }));
        assert!(session.load().is_none());
    }

    #[tokio::test]
    async fn test_login_response_without_token_is_a_failure() {
        let client = MockHttpClient::new();
        client.mock_response(
            HttpMethod::Post,
            &auth_url("/users/login"),
            200,
            r#"{"message": "ok"}"#,
        );
        let session = MemorySessionStore::default();
        let flow = AuthFlow::new(test_api(&client, &session));

        let err = flow.submit(AuthMode::Login, &credentials()).await.unwrap_err();

        assert!(matches!(err, ClientError::Decode(_)));
        assert!(session.load().is_none());
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let client = MockHttpClient::new();
        client.mock_response(HttpMethod::Post, &auth_url("/users/register"), 201, "");
        let session = MemorySessionStore::default();
        let flow = AuthFlow::new(test_api(&client, &session));

        let outcome = flow.submit(AuthMode::Register, &credentials()).await.unwrap();

        assert_eq!(outcome, AuthOutcome::Registered);
        assert!(session.load().is_none());
        assert_eq!(client.requests()[0].url, "https://shop.test/users/register");
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled().toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.switch_prompt(), "Already have an account?");
    }
}
