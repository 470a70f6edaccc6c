//! Admin access control
//!
//! One shared admin credential gates workbook replacement. The credential is
//! an Argon2id hash stored next to the snapshot; there is no built-in
//! default, so the first run must set a password before any upload.

pub mod credentials;
pub mod policy;
pub mod session;

pub use credentials::{CredentialRecord, CredentialStore};
pub use policy::{check_password, MIN_PASSWORD_CHARS};
pub use session::AdminSession;
