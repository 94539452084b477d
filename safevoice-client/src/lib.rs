//! SafeVoice Client - HTTP client for the SafeVoice backend
//!
//! Provides session state, a bearer-token-injecting transport and typed
//! service facades over the SafeVoice civic-issue-reporting API.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod session;

pub use client::SafeVoiceClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use services::{AuthService, ImageUpload, NewProblem, OfficialService, ProblemService};
pub use session::{SessionStore, TokenStorage};

// Re-export shared types for convenience
pub use shared::{
    AuthResponse, Department, ErrorResponse, LoginRequest, OfficialRegisterRequest, PageQuery,
    Problem, ProblemPage, ProblemStatus, UpdateStatusRequest,
};
