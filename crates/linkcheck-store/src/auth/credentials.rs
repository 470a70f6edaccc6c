//! Admin credential record
//!
//! Stored as `{ "password_hash": "<argon2 PHC string>", "created": ..., "rotated": ... }`
//! and always rewritten through `atomic_write`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Utc};
use linkcheck_core::errors::{ExError, ExErrorKind, LinkCheckError};
use linkcheck_core_types::{RequestContext, Sensitive};
use serde::{Deserialize, Serialize};

use crate::atomic::atomic_write;
use crate::auth::policy::check_password;
use crate::auth::session::AdminSession;
use crate::errors::{io_error, serialization, Result};
use crate::layout::StoreLayout;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub password_hash: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub rotated: Option<DateTime<Utc>>,
}

/// File-backed admin credential
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_layout(layout: &StoreLayout) -> Self {
        Self::new(layout.credentials_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_initialized(&self) -> bool {
        self.path.exists()
    }

    /// First-run setup
    ///
    /// # Errors
    ///
    /// `AlreadyExists` when a credential is already stored, `WeakCredential`
    /// when the password fails the policy.
    pub fn initialize(&self, password: &Sensitive<String>) -> Result<()> {
        if self.is_initialized() {
            return Err(ExError::from(LinkCheckError::CredentialsAlreadyInitialized)
                .with_op("initialize_credentials")
                .with_entity_id(self.path.display().to_string()));
        }
        check_password(password.expose())?;

        let record = CredentialRecord {
            password_hash: hash_password(password.expose())?,
            created: Utc::now(),
            rotated: None,
        };
        self.write(&record)?;

        tracing::info!(path = %self.path.display(), "admin credential initialized");
        Ok(())
    }

    /// Verify the admin password and open a session for this request
    ///
    /// # Errors
    ///
    /// `CredentialsMissing` before first-run setup, `Unauthorised` on a
    /// wrong password.
    pub fn authenticate(
        &self,
        password: &Sensitive<String>,
        context: RequestContext,
    ) -> Result<AdminSession> {
        let record = self
            .read()
            .map_err(|e| e.with_request_id(context.request_id))?;

        if !verify_password(password.expose(), &record.password_hash)? {
            tracing::warn!(request_id = %context.request_id, "admin authentication failed");
            return Err(ExError::from(LinkCheckError::InvalidCredentials)
                .with_request_id(context.request_id));
        }

        tracing::info!(request_id = %context.request_id, "admin authenticated");
        Ok(AdminSession::new(context))
    }

    /// Replace the password after verifying the current one
    ///
    /// # Errors
    ///
    /// `Unauthorised` when `current` is wrong, `WeakCredential` when `new`
    /// fails the policy or equals `current`.
    pub fn rotate(&self, current: &Sensitive<String>, new: &Sensitive<String>) -> Result<()> {
        let record = self.read()?;
        if !verify_password(current.expose(), &record.password_hash)? {
            return Err(ExError::from(LinkCheckError::InvalidCredentials).with_op("rotate"));
        }
        check_password(new.expose())?;
        if new.expose() == current.expose() {
            return Err(LinkCheckError::WeakPassword {
                reason: "new password must differ from the current one".to_string(),
            }
            .into());
        }

        let rotated = CredentialRecord {
            password_hash: hash_password(new.expose())?,
            created: record.created,
            rotated: Some(Utc::now()),
        };
        self.write(&rotated)?;

        tracing::info!(path = %self.path.display(), "admin credential rotated");
        Ok(())
    }

    /// Load the stored record
    ///
    /// # Errors
    ///
    /// `CredentialsMissing` when no record exists.
    pub fn read(&self) -> Result<CredentialRecord> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ExError::from(LinkCheckError::CredentialsMissing)
                    .with_entity_id(self.path.display().to_string()))
            }
            Err(e) => return Err(io_error("read_credentials", e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| serialization("decode_credentials", e))
    }

    fn write(&self, record: &CredentialRecord) -> Result<()> {
        let json =
            serde_json::to_vec_pretty(record).map_err(|e| serialization("encode_credentials", e))?;
        atomic_write(&self.path, &json)
    }
}

fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            ExError::new(ExErrorKind::Internal)
                .with_op("hash_password")
                .with_message(e.to_string())
        })
}

fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("parse_password_hash")
            .with_message(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
