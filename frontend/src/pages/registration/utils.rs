use thiserror::Error;

pub const AADHAAR_LENGTH: usize = 12;
pub const OTP_LENGTH: usize = 6;

/// Inline validation failure for a single field; rendered under the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("*Required")]
    Required,
    #[error("*Please enter a valid 12-digit Aadhaar number")]
    InvalidAadhaar,
    #[error("*Please enter a valid 6-digit OTP")]
    InvalidOtp,
}

pub fn is_exact_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_aadhaar(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if !is_exact_digits(raw, AADHAAR_LENGTH) {
        return Err(ValidationError::InvalidAadhaar);
    }
    Ok(raw.to_string())
}

pub fn validate_entrepreneur_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn validate_otp(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if !is_exact_digits(raw, OTP_LENGTH) {
        return Err(ValidationError::InvalidOtp);
    }
    Ok(raw.to_string())
}
