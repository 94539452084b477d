//! Shared types for the SafeVoice client
//!
//! Wire-format DTOs exchanged with the SafeVoice backend, pagination
//! types and the backend error envelope. These types mirror the backend
//! API exactly; the client never transforms them beyond display.

pub mod client;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{
    AuthResponse, ErrorResponse, LoginRequest, OfficialRegisterRequest, UpdateStatusRequest,
};
pub use models::{Department, Problem, ProblemStatus};
pub use request::PageQuery;
pub use response::ProblemPage;
