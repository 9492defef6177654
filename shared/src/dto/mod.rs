//! # Data Transfer Objects (DTOs)
//!
//! Data structures used for communication between the web portal and the
//! backend via the REST API.
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: the HTML form's names verbatim (`confirm-password`
//!   and `phoneNumber` are mapped with `#[serde(rename)]`)
//! - **Optional fields**: omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Enums**: uppercase strings via `#[serde(rename_all = "UPPERCASE")]`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;

pub use auth::*;
