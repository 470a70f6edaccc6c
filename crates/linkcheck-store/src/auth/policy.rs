use linkcheck_core::errors::LinkCheckError;

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Reject passwords that are too short or blank
///
/// # Errors
///
/// `WeakPassword` naming the failed rule.
pub fn check_password(password: &str) -> Result<(), LinkCheckError> {
    if password.trim().is_empty() {
        return Err(LinkCheckError::WeakPassword {
            reason: "password is blank".to_string(),
        });
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(LinkCheckError::WeakPassword {
            reason: format!("password must be at least {} characters", MIN_PASSWORD_CHARS),
        });
    }
    Ok(())
}
