use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub aadhaar_number: String,
    pub entrepreneur_name: String,
    pub consent_given: bool,
}

/// Confirmation of an OTP dispatch; the OTP step is bound to `reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    pub reference: Uuid,
    pub masked_mobile: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub reference: Uuid,
    pub otp_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub message: String,
    pub aadhaar_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "code", content = "detail", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemoteError {
    #[error("The verification service is unavailable. Please try again.")]
    Unavailable,
    #[error("No OTP was dispatched for this request. Please generate a new OTP.")]
    UnknownDispatch,
    #[error("Invalid or expired OTP")]
    Expired,
    #[error("{0}")]
    Rejected(String),
}

impl RemoteError {
    pub fn code(&self) -> &'static str {
        match self {
            RemoteError::Unavailable => "UNAVAILABLE",
            RemoteError::UnknownDispatch => "UNKNOWN_DISPATCH",
            RemoteError::Expired => "EXPIRED",
            RemoteError::Rejected(_) => "REJECTED",
        }
    }

    /// Replaying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RemoteError::Unavailable)
    }

    /// The dispatch reference is unusable; only a fresh OTP can recover.
    pub fn requires_new_otp(&self) -> bool {
        matches!(self, RemoteError::Expired | RemoteError::UnknownDispatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_codes_are_stable() {
        assert_eq!(RemoteError::Unavailable.code(), "UNAVAILABLE");
        assert_eq!(RemoteError::UnknownDispatch.code(), "UNKNOWN_DISPATCH");
        assert_eq!(RemoteError::Expired.code(), "EXPIRED");
        assert_eq!(RemoteError::Rejected("no".into()).code(), "REJECTED");
    }

    #[test]
    fn remote_error_display_uses_detail() {
        let error = RemoteError::Rejected("Aadhaar number already registered".into());
        assert_eq!(format!("{}", error), "Aadhaar number already registered");
        assert_eq!(RemoteError::Expired.to_string(), "Invalid or expired OTP");
    }

    #[test]
    fn only_unavailable_is_retryable() {
        assert!(RemoteError::Unavailable.is_retryable());
        assert!(!RemoteError::Expired.is_retryable());
        assert!(!RemoteError::UnknownDispatch.is_retryable());
        assert!(!RemoteError::Rejected("no".into()).is_retryable());
    }

    #[test]
    fn dead_references_require_a_new_otp() {
        assert!(RemoteError::Expired.requires_new_otp());
        assert!(RemoteError::UnknownDispatch.requires_new_otp());
        assert!(!RemoteError::Unavailable.requires_new_otp());
        assert!(!RemoteError::Rejected("no".into()).requires_new_otp());
    }

    #[test]
    fn remote_error_serializes_with_code_tag() {
        let value = serde_json::to_value(RemoteError::Rejected("bad".into())).unwrap();
        assert_eq!(value["code"], serde_json::json!("REJECTED"));
        assert_eq!(value["detail"], serde_json::json!("bad"));
    }

    #[test]
    fn dispatch_request_uses_snake_case_fields() {
        let payload = DispatchRequest {
            aadhaar_number: "123456789012".into(),
            entrepreneur_name: "Test User".into(),
            consent_given: true,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["aadhaar_number"], serde_json::json!("123456789012"));
        assert_eq!(value["consent_given"], serde_json::json!(true));
    }
}
