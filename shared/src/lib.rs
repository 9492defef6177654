//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the web portal frontend and the
//! GenBank backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login and registration DTOs
//! - **[`validation`]**: Client-side submission checks run before any
//!   network call is made
//!
//! ## Wire Format
//!
//! Field names on the wire mirror the HTML form exactly, which means two of
//! them do not follow Rust naming: `confirm-password` and `phoneNumber` are
//! mapped with `#[serde(rename)]`. The `role` field serializes as the
//! uppercase strings `"GUARDIAN"` / `"DEPENDENT"` the backend expects.
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"username":"alice","password":"secret"}"#);
//! ```

pub mod dto;
pub mod validation;

// Re-export commonly used types for convenience
pub use dto::*;
pub use validation::*;
