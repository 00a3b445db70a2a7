//! Register, login and owner-scoped account operations.
//!
//! Password hashing and verification are CPU-bound and run on the blocking
//! pool. Every store call is bounded by the configured deadline; a call that
//! runs past it surfaces as `Internal`.

use crate::{Registration, Result as ServiceResult, ServiceError};

use ua_auth::{CredentialHasher, IssuedToken, TokenService, validate_password};
use ua_core::{Account, AccountChanges, NewAccount, PasswordDigest, validate_email, validate_name};
use ua_db::{Result as DbResult, UserStore};

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use uuid::Uuid;

/// Verified against when the email is unknown, so both login failure paths
/// pay for one digest comparison.
const DUMMY_PASSWORD: &str = "Dummy-Password-1!";

pub struct AccountWorkflow {
    store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
    tokens: Arc<TokenService>,
    store_timeout: Duration,
    dummy_digest: PasswordDigest,
}

impl AccountWorkflow {
    /// Fails only if the dummy digest cannot be produced with `hasher`.
    pub fn new(
        store: Arc<dyn UserStore>,
        hasher: CredentialHasher,
        tokens: Arc<TokenService>,
        store_timeout: Duration,
    ) -> ServiceResult<Self> {
        let dummy_digest = hasher.hash(DUMMY_PASSWORD)?;

        Ok(Self {
            store,
            hasher,
            tokens,
            store_timeout,
            dummy_digest,
        })
    }

    pub async fn register(&self, registration: Registration) -> ServiceResult<Account> {
        let Registration {
            name,
            email,
            password,
            birth_date,
        } = registration;

        validate_name(&name)?;
        validate_email(&email)?;
        validate_password(&password)?;

        let password_digest = self.hash_password(password).await?;

        let new_account = NewAccount {
            name,
            email,
            password_digest,
            birth_date,
        };

        let account = self
            .with_deadline("create", self.store.create(&new_account))
            .await
            .inspect_err(|e| {
                if matches!(e, ServiceError::Conflict { .. }) {
                    debug!("Registration rejected: email already in use");
                }
            })?;

        info!("Registered account {}", account.id);

        Ok(account)
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<IssuedToken> {
        if email.trim().is_empty() {
            return Err(ServiceError::validation("email is required", Some("email")));
        }

        if password.is_empty() {
            return Err(ServiceError::validation(
                "password is required",
                Some("password"),
            ));
        }

        let account = self
            .with_deadline("find_by_email", self.store.find_by_email(email))
            .await?;

        let Some(account) = account else {
            self.verify_password(self.dummy_digest.clone(), password)
                .await?;
            warn!("Login failed: unknown email");
            return Err(ServiceError::authentication_failed());
        };

        if !self
            .verify_password(account.password_digest.clone(), password)
            .await?
        {
            warn!("Login failed for account {}: wrong password", account.id);
            return Err(ServiceError::authentication_failed());
        }

        let issued = self.tokens.issue(&account.id.to_string()).map_err(|e| {
            error!("Token signing failed for account {}: {}", account.id, e);
            ServiceError::internal("token signing failed")
        })?;

        info!("Account {} logged in", account.id);

        Ok(issued)
    }

    pub async fn get(&self, id: Uuid) -> ServiceResult<Account> {
        self.with_deadline("find_by_id", self.store.find_by_id(id))
            .await?
            .ok_or_else(ServiceError::not_found)
    }

    /// Only the name and birth date can change; at least one must be given.
    pub async fn update(&self, id: Uuid, changes: AccountChanges) -> ServiceResult<Account> {
        if changes.is_empty() {
            return Err(ServiceError::validation(
                "at least one of name or birth_date must be provided",
                None,
            ));
        }

        if let Some(name) = &changes.name {
            validate_name(name)?;
        }

        let account = self
            .with_deadline("update", self.store.update(id, &changes))
            .await?
            .ok_or_else(ServiceError::not_found)?;

        info!("Updated account {}", account.id);

        Ok(account)
    }

    /// Soft delete. Deleting an absent or already deleted account is `NotFound`.
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        if !self
            .with_deadline("soft_delete", self.store.soft_delete(id))
            .await?
        {
            return Err(ServiceError::not_found());
        }

        info!("Deleted account {}", id);

        Ok(())
    }

    async fn hash_password(&self, password: String) -> ServiceResult<PasswordDigest> {
        let hasher = self.hasher;

        let digest = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ServiceError::internal(format!("hashing task failed: {}", e)))?
            .inspect_err(|e| error!("Password hashing failed: {}", e))?;

        Ok(digest)
    }

    async fn verify_password(
        &self,
        digest: PasswordDigest,
        candidate: &str,
    ) -> ServiceResult<bool> {
        let hasher = self.hasher;
        let candidate = candidate.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&digest, &candidate))
            .await
            .map_err(|e| ServiceError::internal(format!("verification task failed: {}", e)))
    }

    async fn with_deadline<T, F>(&self, operation: &'static str, call: F) -> ServiceResult<T>
    where
        F: Future<Output = DbResult<T>>,
    {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                let err = ServiceError::from(e);
                if let ServiceError::Internal { message, .. } = &err {
                    error!("Store {} failed: {}", operation, message);
                }
                Err(err)
            }
            Err(_elapsed) => {
                error!(
                    "Store {} timed out after {}ms",
                    operation,
                    self.store_timeout.as_millis()
                );
                Err(ServiceError::internal(format!(
                    "store {} timed out",
                    operation
                )))
            }
        }
    }
}
