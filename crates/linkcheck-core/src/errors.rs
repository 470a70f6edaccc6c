use linkcheck_core_types::RequestId;
use thiserror::Error;

/// Result type alias using LinkCheckError
pub type Result<T> = std::result::Result<T, LinkCheckError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure in the system is classified into one of these kinds. Each
/// kind has a stable code that callers and tests match on instead of on
/// message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    AlreadyExists,

    /// The uploaded workbook could not be turned into a snapshot
    Ingestion,

    // Snapshot slot
    /// The persisted snapshot is missing or corrupt
    StorageRead,
    /// The new snapshot could not be made durable
    StorageWrite,

    // Access control
    Unauthorised,
    /// No admin credential has been set up yet
    CredentialsMissing,
    WeakCredential,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Ingestion => "ERR_INGESTION",
            ExErrorKind::StorageRead => "ERR_STORAGE_READ",
            ExErrorKind::StorageWrite => "ERR_STORAGE_WRITE",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::CredentialsMissing => "ERR_CREDENTIALS_MISSING",
            ExErrorKind::WeakCredential => "ERR_WEAK_CREDENTIAL",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling and optional
/// context for operators reading logs.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (a filename, a sheet name, a store path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the lower-level error that caused this one
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " ({})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised by ingestion, the snapshot slot and access control
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkCheckError {
    // ===== Ingestion =====
    /// The upload is not a spreadsheet container we can decode
    #[error("Workbook could not be read: {reason}")]
    WorkbookUnreadable { reason: String },

    #[error("Workbook contains no sheets")]
    NoSheets,

    #[error("Duplicate sheet name: {sheet}")]
    DuplicateSheet { sheet: String },

    /// Row index is 0-based over data rows
    #[error("Sheet {sheet} row {row_index} has {cells} cells but the sheet has {columns} columns")]
    RowWidthMismatch {
        sheet: String,
        row_index: usize,
        cells: usize,
        columns: usize,
    },

    // ===== Snapshot slot =====
    #[error("Snapshot could not be saved: {reason}")]
    SnapshotWriteFailed { reason: String },

    #[error("Stored snapshot is unreadable: {reason}")]
    SnapshotUnreadable { reason: String },

    #[error("Stored snapshot records {recorded} rows but holds {actual}")]
    TotalRowsMismatch { recorded: usize, actual: usize },

    // ===== Access control =====
    #[error("Invalid admin password")]
    InvalidCredentials,

    #[error("Admin credentials have not been set up")]
    CredentialsMissing,

    #[error("Admin credentials are already set up")]
    CredentialsAlreadyInitialized,

    #[error("Password rejected: {reason}")]
    WeakPassword { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl LinkCheckError {
    /// True for every failure that aborts an upload before anything is saved
    pub fn is_ingestion(&self) -> bool {
        ExError::from(self.clone()).kind() == ExErrorKind::Ingestion
    }
}

impl From<LinkCheckError> for ExError {
    fn from(err: LinkCheckError) -> Self {
        let message = err.to_string();
        match err {
            LinkCheckError::WorkbookUnreadable { .. } | LinkCheckError::NoSheets => {
                ExError::new(ExErrorKind::Ingestion).with_message(message)
            }

            LinkCheckError::DuplicateSheet { sheet } => ExError::new(ExErrorKind::Ingestion)
                .with_entity_id(sheet)
                .with_message(message),

            LinkCheckError::RowWidthMismatch { sheet, .. } => {
                ExError::new(ExErrorKind::Ingestion)
                    .with_entity_id(sheet)
                    .with_message(message)
            }

            LinkCheckError::SnapshotWriteFailed { .. } => {
                ExError::new(ExErrorKind::StorageWrite).with_message(message)
            }

            LinkCheckError::SnapshotUnreadable { .. } | LinkCheckError::TotalRowsMismatch { .. } => {
                ExError::new(ExErrorKind::StorageRead).with_message(message)
            }

            LinkCheckError::InvalidCredentials => ExError::new(ExErrorKind::Unauthorised)
                .with_op("authenticate")
                .with_message(message),

            LinkCheckError::CredentialsMissing => {
                ExError::new(ExErrorKind::CredentialsMissing).with_message(message)
            }

            LinkCheckError::CredentialsAlreadyInitialized => {
                ExError::new(ExErrorKind::AlreadyExists).with_message(message)
            }

            LinkCheckError::WeakPassword { .. } => {
                ExError::new(ExErrorKind::WeakCredential).with_message(message)
            }

            LinkCheckError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for LinkCheckError {
    fn from(err: serde_json::Error) -> Self {
        LinkCheckError::Serialization {
            message: err.to_string(),
        }
    }
}
