//! Top-level client assembly
//!
//! Wires configuration and session state into one transport and hands
//! out the service facades.

use tokio_util::sync::CancellationToken;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::services::{AuthService, OfficialService, ProblemService};
use crate::session::{SessionStore, TokenStorage};

/// Client for the SafeVoice backend
///
/// Holds one HTTP transport and the session context shared by every
/// facade. Each facade handed out carries a child cancellation token,
/// so a dismissed view can abort its own in-flight requests without
/// touching the others.
///
/// # Example
///
/// ```no_run
/// use safevoice_client::{ClientConfig, PageQuery, SafeVoiceClient};
///
/// # async fn example() -> Result<(), safevoice_client::ClientError> {
/// let config = ClientConfig::new("https://api.safevoice.example")
///     .with_token_dir("./state");
/// let client = SafeVoiceClient::from_config(config)?;
///
/// let page = client.problems().list(PageQuery::default()).await?;
/// println!("{} problems reported", page.total_elements);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SafeVoiceClient {
    http: HttpClient,
    session: SessionStore,
    cancel: CancellationToken,
}

impl SafeVoiceClient {
    /// Create a client with an explicit session context.
    pub fn new(config: ClientConfig, session: SessionStore) -> ClientResult<Self> {
        let http = HttpClient::new(&config, session.clone())?;
        Ok(Self {
            http,
            session,
            cancel: CancellationToken::new(),
        })
    }

    /// Create a client from configuration alone.
    ///
    /// Uses file-backed session storage when `token_dir` is set, a
    /// memory-only session otherwise.
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        let session = match &config.token_dir {
            Some(dir) => SessionStore::new(TokenStorage::new(dir)),
            None => SessionStore::in_memory(),
        };
        Self::new(config, session)
    }

    /// The session context shared by all facades.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Checks if the client holds a stored token.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Problem submission and listing.
    pub fn problems(&self) -> ProblemService {
        ProblemService::new(self.http.clone(), self.cancel.child_token())
    }

    /// Official authentication.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.http.clone(), self.cancel.child_token())
    }

    /// Official resolution upload.
    pub fn official(&self) -> OfficialService {
        OfficialService::new(self.http.clone(), self.cancel.child_token())
    }

    /// Abort every in-flight request issued through this client's
    /// facades.
    pub fn cancel_all(&self) {
        self.cancel.cancel();
    }
}
