//! Redaction wrapper for secrets
//!
//! Admin passwords pass through CLI parsing, the engine and the credential
//! store. Wrapping them in `Sensitive` keeps them out of `Debug` output and
//! therefore out of every log line that formats a request.

use std::fmt;

/// Value that prints as `***REDACTED***`
///
/// ```
/// use linkcheck_core_types::Sensitive;
///
/// let password = Sensitive::new("hunter2-hunter2");
/// assert_eq!(format!("{:?}", password), "***REDACTED***");
/// assert_eq!(password.expose(), &"hunter2-hunter2");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the secret. Only the credential store should need this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl From<String> for Sensitive<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redact() {
        let secret = Sensitive::new("s3cret-admin-pass");
        assert_eq!(format!("{:?}", secret), "***REDACTED***");
        assert_eq!(format!("{}", secret), "***REDACTED***");
    }

    #[test]
    fn test_redaction_inside_derived_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct UploadRequest {
            filename: String,
            password: Sensitive<String>,
        }

        let req = UploadRequest {
            filename: "links.xlsx".to_string(),
            password: Sensitive::from("s3cret-admin-pass".to_string()),
        };

        let debug_str = format!("{:?}", req);
        assert!(debug_str.contains("links.xlsx"));
        assert!(!debug_str.contains("s3cret"));
    }

    #[test]
    fn test_into_inner_returns_value() {
        let secret = Sensitive::new(String::from("abc"));
        assert_eq!(secret.into_inner(), "abc");
    }
}
