//! Official authentication operations

use tokio_util::sync::CancellationToken;

use shared::{AuthResponse, LoginRequest, OfficialRegisterRequest};

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

const MIN_PASSWORD_CHARS: usize = 8;

/// Auth service facade
#[derive(Debug, Clone)]
pub struct AuthService {
    http: HttpClient,
    cancel: CancellationToken,
}

impl AuthService {
    pub(crate) fn new(http: HttpClient, cancel: CancellationToken) -> Self {
        Self { http, cancel }
    }

    /// Abort this facade's in-flight requests.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Register a new official account.
    ///
    /// The backend queues the account for manual admin verification; no
    /// token is returned and the account cannot authenticate until an
    /// admin approves it.
    pub async fn register(&self, request: OfficialRegisterRequest) -> ClientResult<()> {
        validate_registration(&request)?;
        self.http
            .post_unit("api/auth/register", &request, &self.cancel)
            .await
    }

    /// Log in with official credentials.
    ///
    /// Returns the token envelope; the caller decides whether to
    /// persist `access_token` into its [`SessionStore`], keeping the
    /// authentication dependency visible at the call site.
    ///
    /// [`SessionStore`]: crate::session::SessionStore
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthResponse> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Email and password are required".into(),
            ));
        }
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http
            .post("api/auth/login", &request, &self.cancel)
            .await
    }

    /// Log out locally.
    ///
    /// Clears the injected session; no server-side invalidation call is
    /// made (the backend exposes none).
    pub fn logout(&self) -> ClientResult<()> {
        self.http.session().clear()
    }
}

fn validate_registration(request: &OfficialRegisterRequest) -> ClientResult<()> {
    if request.email.trim().is_empty() || !request.email.contains('@') {
        return Err(ClientError::Validation("A valid email is required".into()));
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ClientError::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_CHARS
        )));
    }
    if request.full_name.trim().is_empty() {
        return Err(ClientError::Validation("Full name is required".into()));
    }
    if request.official_id_number.trim().is_empty() {
        return Err(ClientError::Validation(
            "Official ID number is required".into(),
        ));
    }
    Ok(())
}
