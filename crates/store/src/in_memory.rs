//! In-memory identity store.
//!
//! Intended for tests/dev. Credentials are kept verbatim in memory;
//! production backends own real hashing behind the same trait. The strength
//! policy applied by `create_credential` mirrors the usual default rules so
//! rejection aggregation can be exercised end to end.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use claimgate_core::{Email, UserId};
use claimgate_policy::{Capability, Claim, ClaimType};

use crate::error::{StoreError, StoreResult};
use crate::identity::IdentityStore;
use crate::user::{NewUser, User};

#[derive(Debug)]
struct Record {
    user: User,
    password: String,
    claims: Vec<Claim>,
    session: bool,
}

/// In-memory implementation of [`IdentityStore`].
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    records: RwLock<Vec<Record>>,
}

fn is_capability(claim_type: ClaimType) -> bool {
    Capability::ALL.iter().any(|c| c.claim_type() == claim_type)
}

/// Password strength rules, one human-readable reason per violation.
fn password_rule_violations(password: &str) -> Vec<String> {
    let mut reasons = Vec::new();
    if password.len() < 8 {
        reasons.push("Passwords must be at least 8 characters.".to_string());
    }
    if !password.chars().any(|c| !c.is_alphanumeric()) {
        reasons.push("Passwords must have at least one non alphanumeric character.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        reasons.push("Passwords must have at least one digit ('0'-'9').".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        reasons.push("Passwords must have at least one lowercase ('a'-'z').".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        reasons.push("Passwords must have at least one uppercase ('A'-'Z').".to_string());
    }
    reasons
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session has been established for the user. Test helper;
    /// not part of the [`IdentityStore`] trait.
    pub fn session_established(&self, id: UserId) -> bool {
        self.records
            .read()
            .map(|records| {
                records
                    .iter()
                    .any(|r| r.user.id == id && r.session)
            })
            .unwrap_or(false)
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<User>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(records
            .iter()
            .find(|r| r.user.email == *email)
            .map(|r| r.user.clone()))
    }

    async fn find_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(records
            .iter()
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone()))
    }

    async fn create_credential(&self, user: &NewUser, password: &str) -> StoreResult<()> {
        let reasons = password_rule_violations(password);
        if !reasons.is_empty() {
            return Err(StoreError::Rejected(reasons));
        }

        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;

        // Uniqueness is enforced here, under the write lock, so racing
        // creates that both passed the caller's pre-check still collide.
        if records.iter().any(|r| r.user.email == user.email) {
            return Err(StoreError::rejected(format!(
                "Email '{}' is already taken.",
                user.email
            )));
        }

        records.push(Record {
            user: User {
                id: UserId::new(),
                email: user.email.clone(),
                name: user.name.clone(),
                created_at: Utc::now(),
            },
            password: password.to_string(),
            claims: Vec::new(),
            session: false,
        });
        Ok(())
    }

    async fn verify_password(&self, user: &User, password: &str) -> StoreResult<bool> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        let record = records
            .iter()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| StoreError::rejected("unknown user"))?;
        Ok(record.password == password)
    }

    async fn sign_in(&self, user: &User, password: &str) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        let record = records
            .iter_mut()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| StoreError::rejected("unknown user"))?;
        if record.password != password {
            return Err(StoreError::rejected("Invalid login attempt."));
        }
        record.session = true;
        Ok(())
    }

    async fn get_claims(&self, user: &User) -> StoreResult<Vec<Claim>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        let record = records
            .iter()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| StoreError::rejected("unknown user"))?;
        Ok(record.claims.clone())
    }

    async fn add_claims(&self, user: &User, claims: &[Claim]) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        let record = records
            .iter_mut()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| StoreError::rejected("unknown user"))?;

        // Validate the whole batch before mutating anything: a user may
        // hold at most one claim of each boolean-capability type.
        let mut reasons = Vec::new();
        let mut pending: Vec<ClaimType> = Vec::new();
        for claim in claims {
            if is_capability(claim.claim_type)
                && (record.claims.iter().any(|c| c.claim_type == claim.claim_type)
                    || pending.contains(&claim.claim_type))
            {
                reasons.push(format!(
                    "A claim of type '{}' is already attached to the user.",
                    claim.claim_type
                ));
            }
            pending.push(claim.claim_type);
        }
        if !reasons.is_empty() {
            return Err(StoreError::Rejected(reasons));
        }

        record.claims.extend_from_slice(claims);
        Ok(())
    }

    async fn remove_claims(&self, user: &User, claims: &[Claim]) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        let record = records
            .iter_mut()
            .find(|r| r.user.id == user.id)
            .ok_or_else(|| StoreError::rejected("unknown user"))?;

        // Validate the whole batch before mutating anything.
        let mut remaining = record.claims.clone();
        let mut reasons = Vec::new();
        for claim in claims {
            match remaining.iter().position(|c| c == claim) {
                Some(idx) => {
                    remaining.remove(idx);
                }
                None => reasons.push(format!(
                    "Claim '{}'='{}' is not attached to the user.",
                    claim.claim_type, claim.value
                )),
            }
        }
        if !reasons.is_empty() {
            return Err(StoreError::Rejected(reasons));
        }

        record.claims = remaining;
        Ok(())
    }

    async fn list_all(&self) -> StoreResult<Vec<User>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::unavailable("lock poisoned"))?;
        Ok(records.iter().map(|r| r.user.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, name: &str) -> NewUser {
        NewUser::new(Email::new(email), name)
    }

    async fn created(store: &InMemoryIdentityStore, email: &str, name: &str) -> User {
        store
            .create_credential(&new_user(email, name), "Abc12345!")
            .await
            .unwrap();
        store
            .find_by_email(&Email::new(email))
            .await
            .unwrap()
            .expect("user was just created")
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let store = InMemoryIdentityStore::new();
        created(&store, "Ann@Example.com", "Ann").await;

        let found = store
            .find_by_email(&Email::new("ann@example.COM"))
            .await
            .unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = InMemoryIdentityStore::new();
        created(&store, "ann@example.com", "Ann").await;

        let err = store
            .create_credential(&new_user("ANN@example.com", "Other"), "Abc12345!")
            .await
            .unwrap_err();
        assert!(err.joined().contains("already taken"));
        assert_eq!(store.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn weak_password_collects_every_violated_rule() {
        let store = InMemoryIdentityStore::new();
        let err = store
            .create_credential(&new_user("ann@example.com", "Ann"), "abc")
            .await
            .unwrap_err();

        let StoreError::Rejected(reasons) = err else {
            panic!("expected rejection");
        };
        assert_eq!(reasons.len(), 4);
        assert!(reasons.iter().any(|r| r.contains("at least 8 characters")));
        assert!(reasons.iter().any(|r| r.contains("non alphanumeric")));
        assert!(reasons.iter().any(|r| r.contains("digit")));
        assert!(reasons.iter().any(|r| r.contains("uppercase")));
    }

    #[tokio::test]
    async fn verify_password_has_no_session_side_effect() {
        let store = InMemoryIdentityStore::new();
        let user = created(&store, "ann@example.com", "Ann").await;

        assert!(store.verify_password(&user, "Abc12345!").await.unwrap());
        assert!(!store.verify_password(&user, "wrong").await.unwrap());
        assert!(!store.session_established(user.id));

        store.sign_in(&user, "Abc12345!").await.unwrap();
        assert!(store.session_established(user.id));
    }

    #[tokio::test]
    async fn add_claims_rejects_duplicate_capability_types_atomically() {
        let store = InMemoryIdentityStore::new();
        let user = created(&store, "ann@example.com", "Ann").await;

        store
            .add_claims(&user, &[Claim::flag(Capability::Create, true)])
            .await
            .unwrap();

        let err = store
            .add_claims(
                &user,
                &[
                    Claim::flag(Capability::Read, true),
                    Claim::flag(Capability::Create, false),
                ],
            )
            .await
            .unwrap_err();
        assert!(err.joined().contains("'Create'"));

        // The valid half of the batch must not have been applied.
        let claims = store.get_claims(&user).await.unwrap();
        assert_eq!(claims, vec![Claim::flag(Capability::Create, true)]);
    }

    #[tokio::test]
    async fn remove_claims_is_atomic() {
        let store = InMemoryIdentityStore::new();
        let user = created(&store, "ann@example.com", "Ann").await;

        let attached = vec![
            Claim::new(ClaimType::Role, "Admin"),
            Claim::flag(Capability::Read, true),
        ];
        store.add_claims(&user, &attached).await.unwrap();

        let err = store
            .remove_claims(
                &user,
                &[
                    Claim::flag(Capability::Read, true),
                    Claim::flag(Capability::Delete, true),
                ],
            )
            .await
            .unwrap_err();
        assert!(err.joined().contains("'Delete'"));
        assert_eq!(store.get_claims(&user).await.unwrap(), attached);

        store.remove_claims(&user, &attached).await.unwrap();
        assert!(store.get_claims(&user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_preserves_insertion_order() {
        let store = InMemoryIdentityStore::new();
        created(&store, "a@example.com", "A").await;
        created(&store, "b@example.com", "B").await;
        created(&store, "c@example.com", "C").await;

        let emails: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email.to_string())
            .collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com", "c@example.com"]);
    }
}
