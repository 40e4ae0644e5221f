//! Account orchestrator.
//!
//! Each operation is a sequence of awaited identity store calls with no
//! in-process shared mutable state; the store's own transactional
//! discipline is the only serialization between concurrent callers.

use tracing::{error, instrument, warn};

use claimgate_core::{Email, ServiceResult};
use claimgate_policy::{claims_for, replacement_claims, Policy};
use claimgate_store::{IdentityStore, NewUser};

use crate::error::{AccountError, AccountResult};
use crate::projection::UserWithClaims;
use crate::request::{CreateUserRequest, LoginRequest, UpdateUserClaimsRequest};

/// Well-known bootstrap administrator account.
pub const ADMIN_EMAIL: &str = "admin@claimgate.dev";
const ADMIN_NAME: &str = "Administrator";
const ADMIN_PASSWORD: &str = "Admin@123";

/// Coordinates registration, login, and claim-update workflows against the
/// identity store.
#[derive(Debug, Clone)]
pub struct AccountService<S> {
    store: S,
}

impl<S: IdentityStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a user and attach the claim set derived from the requested
    /// policy.
    ///
    /// The policy name is validated before any store mutation, so a failed
    /// registration never leaves a user with credentials but no claims.
    #[instrument(skip(self, request), fields(email = %request.email, policy = %request.policy))]
    pub async fn create_user(&self, request: &CreateUserRequest) -> AccountResult<ServiceResult> {
        let Ok(policy) = request.policy.parse::<Policy>() else {
            return Ok(ServiceResult::fail("No policy was specified"));
        };

        let email = Email::new(&request.email);
        match self.store.find_by_email(&email).await {
            Ok(Some(_)) => return Ok(ServiceResult::fail("User already exist")),
            Ok(None) => {}
            Err(e) => return Ok(ServiceResult::fail(e.joined())),
        }

        let new_user = NewUser::new(email.clone(), &request.name);
        if let Err(e) = self.store.create_credential(&new_user, &request.password).await {
            return Ok(ServiceResult::fail(e.joined()));
        }

        // Re-fetch before attaching claims: the record must be visible to
        // reads once create_credential returned.
        let user = match self.store.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) | Err(_) => {
                error!(email = %email, "user not visible immediately after credential creation");
                return Err(AccountError::invariant(format!(
                    "user '{email}' vanished between credential creation and claim attachment"
                )));
            }
        };

        let claims = claims_for(policy, &user.email, &user.name);
        match self.store.add_claims(&user, &claims).await {
            Ok(()) => Ok(ServiceResult::ok_with("User created")),
            Err(e) => Ok(ServiceResult::fail(e.joined())),
        }
    }

    /// Authenticate a user and establish a session.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> AccountResult<ServiceResult> {
        let email = Email::new(&request.email);
        let user = match self.store.find_by_email(&email).await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(ServiceResult::fail("User not found")),
            Err(e) => return Ok(ServiceResult::fail(e.joined())),
        };

        match self.store.verify_password(&user, &request.password).await {
            Ok(true) => {}
            Ok(false) => return Ok(ServiceResult::fail("Incorrect password credentials")),
            Err(e) => return Ok(ServiceResult::fail(e.joined())),
        }

        // Verification passed but the session commit can still fail; that
        // store-level inconsistency is surfaced distinctly from a bad
        // password.
        match self.store.sign_in(&user, &request.password).await {
            Ok(()) => Ok(ServiceResult::ok()),
            Err(e) => {
                warn!(user_id = %user.id, error = %e, "sign-in failed after successful verification");
                Ok(ServiceResult::fail("Unknown error occurred at login"))
            }
        }
    }

    /// Wholly replace a user's claim set.
    ///
    /// The replace is two-phase (remove, then add). A remove failure leaves
    /// the old set intact; an add failure triggers a compensating re-add of
    /// the old set, and only a failed compensation escalates to an
    /// invariant violation.
    #[instrument(skip(self, request), fields(user_id = %request.user_id, role = %request.role_name))]
    pub async fn update_user_claims(
        &self,
        request: &UpdateUserClaimsRequest,
    ) -> AccountResult<ServiceResult> {
        let user = match self.store.find_by_id(request.user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Ok(ServiceResult::fail("User not found")),
            Err(e) => return Ok(ServiceResult::fail(e.joined())),
        };

        let current = match self.store.get_claims(&user).await {
            Ok(claims) => claims,
            Err(e) => return Ok(ServiceResult::fail(e.joined())),
        };

        let replacement = replacement_claims(&user.email, &request.role_name, request.grants());

        if let Err(e) = self.store.remove_claims(&user, &current).await {
            return Ok(ServiceResult::fail(e.joined()));
        }

        match self.store.add_claims(&user, &replacement).await {
            Ok(()) => Ok(ServiceResult::ok_with("User has been updated successfully")),
            Err(add_err) => {
                warn!(user_id = %user.id, error = %add_err, "claim add failed; restoring previous claim set");
                match self.store.add_claims(&user, &current).await {
                    Ok(()) => Ok(ServiceResult::fail(add_err.joined())),
                    Err(restore_err) => {
                        error!(
                            user_id = %user.id,
                            error = %restore_err,
                            "claim restore failed; user left without claims"
                        );
                        Err(AccountError::invariant(format!(
                            "failed to restore claims for user '{}': {}",
                            user.id,
                            restore_err.joined()
                        )))
                    }
                }
            }
        }
    }

    /// Capability view of every user holding at least one claim.
    ///
    /// Users with an empty claim set are silently excluded; an error on one
    /// record skips that record without aborting the listing.
    #[instrument(skip(self))]
    pub async fn list_users_with_claims(&self) -> AccountResult<Vec<UserWithClaims>> {
        let users = self.store.list_all().await?;

        let mut projections = Vec::with_capacity(users.len());
        for user in users {
            match self.store.get_claims(&user).await {
                Ok(claims) => {
                    if let Some(projection) = UserWithClaims::project(user.id, &claims) {
                        projections.push(projection);
                    }
                }
                Err(e) => {
                    warn!(user_id = %user.id, error = %e, "skipping user in listing: claim fetch failed");
                }
            }
        }
        Ok(projections)
    }

    /// Idempotent bootstrap of the well-known administrator account.
    ///
    /// Relies entirely on `create_user`'s already-exists short-circuit; no
    /// separate existence check.
    #[instrument(skip(self))]
    pub async fn set_up(&self) -> AccountResult<ServiceResult> {
        self.create_user(&CreateUserRequest {
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_PASSWORD.to_string(),
            name: ADMIN_NAME.to_string(),
            policy: Policy::Admin.as_str().to_string(),
        })
        .await
    }
}
