//! `claimgate-policy` — policy catalog and claim synthesis.
//!
//! This crate is pure: given a policy and a user's identity attributes it
//! deterministically produces the capability claim set that user should
//! hold. No store or transport concerns live here.

pub mod catalog;
pub mod claim;
pub mod policy;

pub use catalog::{claims_for, claims_for_name, grants_for, replacement_claims, Grants};
pub use claim::{Capability, Claim, ClaimType};
pub use policy::{Policy, UnknownPolicy};
