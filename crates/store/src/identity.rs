//! The identity store trait.

use std::sync::Arc;

use async_trait::async_trait;

use claimgate_core::{Email, UserId};
use claimgate_policy::Claim;

use crate::error::StoreResult;
use crate::user::{NewUser, User};

/// External collaborator owning credential and claim persistence.
///
/// ## Contract
///
/// - Email lookups are case-insensitive; email uniqueness is enforced by
///   the store (it is the only uniqueness guarantee under concurrent
///   creates — a colliding create must be rejected, not crash).
/// - `create_credential` owns password hashing and strength policy;
///   rejection reasons are human-readable, one per failed check.
/// - `verify_password` has no side effects; `sign_in` establishes session
///   state and may fail independently of verification.
/// - `add_claims`/`remove_claims` are atomic: a batch is applied wholly or
///   not at all.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Create the user record together with its password credential.
    async fn create_credential(&self, user: &NewUser, password: &str) -> StoreResult<()>;

    /// Check the password without establishing any session state.
    async fn verify_password(&self, user: &User, password: &str) -> StoreResult<bool>;

    /// Establish session state for the user (side-effecting).
    async fn sign_in(&self, user: &User, password: &str) -> StoreResult<()>;

    async fn get_claims(&self, user: &User) -> StoreResult<Vec<Claim>>;

    async fn add_claims(&self, user: &User, claims: &[Claim]) -> StoreResult<()>;

    async fn remove_claims(&self, user: &User, claims: &[Claim]) -> StoreResult<()>;

    /// All users, in store-defined (insertion) order.
    async fn list_all(&self) -> StoreResult<Vec<User>>;
}

#[async_trait]
impl<S> IdentityStore for Arc<S>
where
    S: IdentityStore + ?Sized,
{
    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<User>> {
        (**self).find_by_email(email).await
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        (**self).find_by_id(id).await
    }

    async fn create_credential(&self, user: &NewUser, password: &str) -> StoreResult<()> {
        (**self).create_credential(user, password).await
    }

    async fn verify_password(&self, user: &User, password: &str) -> StoreResult<bool> {
        (**self).verify_password(user, password).await
    }

    async fn sign_in(&self, user: &User, password: &str) -> StoreResult<()> {
        (**self).sign_in(user, password).await
    }

    async fn get_claims(&self, user: &User) -> StoreResult<Vec<Claim>> {
        (**self).get_claims(user).await
    }

    async fn add_claims(&self, user: &User, claims: &[Claim]) -> StoreResult<()> {
        (**self).add_claims(user, claims).await
    }

    async fn remove_claims(&self, user: &User, claims: &[Claim]) -> StoreResult<()> {
        (**self).remove_claims(user, claims).await
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        (**self).list_all().await
    }
}
