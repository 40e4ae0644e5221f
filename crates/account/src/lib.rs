//! `claimgate-account` — account orchestration.
//!
//! Coordinates registration, login, and claim-update workflows against the
//! identity store, deriving claim sets through the policy catalog. This is
//! the caller-facing surface of the service; it is protocol-agnostic
//! (transport adapters and field-level input validation sit in front of
//! it).

pub mod error;
pub mod projection;
pub mod request;
pub mod service;

pub use error::{AccountError, AccountResult};
pub use projection::UserWithClaims;
pub use request::{CreateUserRequest, LoginRequest, UpdateUserClaimsRequest};
pub use service::{AccountService, ADMIN_EMAIL};
