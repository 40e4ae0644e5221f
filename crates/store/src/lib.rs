//! `claimgate-store` — identity store seam.
//!
//! The identity store owns all mutable state: user records, credentials
//! (including hashing and strength policy), session establishment, and
//! claim persistence. The account orchestrator only ever talks to the
//! [`IdentityStore`] trait; the in-memory implementation here is intended
//! for tests/dev, with production backends living behind the same trait.

pub mod error;
pub mod identity;
pub mod in_memory;
pub mod user;

pub use error::{StoreError, StoreResult};
pub use identity::IdentityStore;
pub use in_memory::InMemoryIdentityStore;
pub use user::{NewUser, User};
