//! `claimgate-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no store or transport
//! concerns): strongly-typed identifiers, the case-insensitive email value
//! object, and the uniform `ServiceResult` contract returned by every
//! account operation.

pub mod email;
pub mod id;
pub mod result;

pub use email::Email;
pub use id::UserId;
pub use result::ServiceResult;
