use super::types::{DispatchRequest, DispatchResult, RemoteError, VerifyRequest, VerifyResult};
use crate::{config::RuntimeConfig, utils::time::sleep};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    rc::Rc,
    time::Duration,
};
use uuid::Uuid;

/// The two remote operations behind the Aadhaar verification step.
#[async_trait(?Send)]
pub trait OtpGateway {
    async fn dispatch_otp(&self, request: DispatchRequest) -> Result<DispatchResult, RemoteError>;
    async fn verify_otp(&self, request: VerifyRequest) -> Result<VerifyResult, RemoteError>;
}

/// Shared handle placed in Leptos context.
#[derive(Clone)]
pub struct GatewayHandle(pub Rc<dyn OtpGateway>);

impl GatewayHandle {
    pub fn new(gateway: impl OtpGateway + 'static) -> Self {
        Self(Rc::new(gateway))
    }

    pub fn simulated(config: &RuntimeConfig) -> Self {
        Self::new(SimulatedOtpGateway::from_config(config))
    }
}

#[derive(Debug, Clone)]
struct IssuedOtp {
    aadhaar_number: String,
    expires_at: DateTime<Utc>,
    used: bool,
}

pub const ALREADY_REGISTERED: &str = "Aadhaar number already registered";
pub const NAME_TOO_SHORT: &str = "Entrepreneur name must be at least 2 characters";
pub const NAME_INVALID_CHARS: &str = "Entrepreneur name can only contain letters, spaces, and dots";

/// Stand-in for the dispatch/verify endpoints. Never leaves the page: each
/// operation waits a fixed delay and then answers from in-memory records.
/// An Aadhaar number that completed verification cannot be dispatched again.
pub struct SimulatedOtpGateway {
    dispatch_delay: Duration,
    verify_delay: Duration,
    masked_mobile: String,
    validity: chrono::Duration,
    issued: RefCell<HashMap<Uuid, IssuedOtp>>,
    registered: RefCell<HashSet<String>>,
}

impl SimulatedOtpGateway {
    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            dispatch_delay: config.dispatch_delay(),
            verify_delay: config.verify_delay(),
            masked_mobile: config.masked_mobile.clone(),
            validity: config.otp_validity(),
            issued: RefCell::new(HashMap::new()),
            registered: RefCell::new(HashSet::new()),
        }
    }

    #[cfg(test)]
    pub fn instant() -> Self {
        Self::from_config(&RuntimeConfig {
            otp_dispatch_delay_ms: 0,
            otp_verify_delay_ms: 0,
            ..RuntimeConfig::default()
        })
    }

    fn admit(&self, request: &DispatchRequest) -> Result<(), RemoteError> {
        let name = request.entrepreneur_name.trim();
        if name.chars().count() < 2 {
            return Err(RemoteError::Rejected(NAME_TOO_SHORT.into()));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '.')
        {
            return Err(RemoteError::Rejected(NAME_INVALID_CHARS.into()));
        }
        if self.registered.borrow().contains(&request.aadhaar_number) {
            return Err(RemoteError::Rejected(ALREADY_REGISTERED.into()));
        }
        Ok(())
    }

    fn issue(&self, aadhaar_number: &str, now: DateTime<Utc>) -> DispatchResult {
        let reference = Uuid::new_v4();
        let expires_at = now + self.validity;
        self.issued.borrow_mut().insert(
            reference,
            IssuedOtp {
                aadhaar_number: aadhaar_number.to_string(),
                expires_at,
                used: false,
            },
        );
        DispatchResult {
            reference,
            masked_mobile: self.masked_mobile.clone(),
            expires_at,
        }
    }

    fn redeem(&self, reference: Uuid, now: DateTime<Utc>) -> Result<(), RemoteError> {
        let mut issued = self.issued.borrow_mut();
        let record = issued
            .get_mut(&reference)
            .ok_or(RemoteError::UnknownDispatch)?;
        if record.used || record.expires_at <= now {
            return Err(RemoteError::Expired);
        }
        record.used = true;
        self.registered
            .borrow_mut()
            .insert(record.aadhaar_number.clone());
        Ok(())
    }
}

#[async_trait(?Send)]
impl OtpGateway for SimulatedOtpGateway {
    async fn dispatch_otp(&self, request: DispatchRequest) -> Result<DispatchResult, RemoteError> {
        sleep(self.dispatch_delay).await;
        self.admit(&request)?;
        let result = self.issue(&request.aadhaar_number, Utc::now());
        log::info!(
            "Simulated OTP dispatch for Aadhaar ending {} (consent: {})",
            last_digits(&request.aadhaar_number),
            request.consent_given
        );
        Ok(result)
    }

    async fn verify_otp(&self, request: VerifyRequest) -> Result<VerifyResult, RemoteError> {
        sleep(self.verify_delay).await;
        self.redeem(request.reference, Utc::now())?;
        Ok(VerifyResult {
            message: "OTP validated successfully. Aadhaar verification completed.".into(),
            aadhaar_verified: true,
        })
    }
}

fn last_digits(value: &str) -> &str {
    let start = value.len().saturating_sub(4);
    value.get(start..).unwrap_or_default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_local_runtime_async;

    fn request() -> DispatchRequest {
        DispatchRequest {
            aadhaar_number: "123456789012".into(),
            entrepreneur_name: "Test User".into(),
            consent_given: true,
        }
    }

    #[test]
    fn dispatch_returns_masked_mobile_and_expiry() {
        with_local_runtime_async(|| async {
            let gateway = SimulatedOtpGateway::instant();
            let before = Utc::now();
            let result = gateway.dispatch_otp(request()).await.unwrap();
            assert_eq!(result.masked_mobile, "******0176");
            assert!(result.expires_at >= before + chrono::Duration::minutes(10));
        });
    }

    #[test]
    fn verify_accepts_live_reference_once() {
        with_local_runtime_async(|| async {
            let gateway = SimulatedOtpGateway::instant();
            let dispatch = gateway.dispatch_otp(request()).await.unwrap();
            let verify = VerifyRequest {
                reference: dispatch.reference,
                otp_code: "000000".into(),
            };
            let ok = gateway.verify_otp(verify.clone()).await.unwrap();
            assert!(ok.aadhaar_verified);
            assert_eq!(gateway.verify_otp(verify).await, Err(RemoteError::Expired));
        });
    }

    #[test]
    fn verify_rejects_unknown_reference() {
        with_local_runtime_async(|| async {
            let gateway = SimulatedOtpGateway::instant();
            let result = gateway
                .verify_otp(VerifyRequest {
                    reference: Uuid::new_v4(),
                    otp_code: "123456".into(),
                })
                .await;
            assert_eq!(result, Err(RemoteError::UnknownDispatch));
        });
    }

    #[test]
    fn redeem_rejects_expired_reference() {
        let gateway = SimulatedOtpGateway::instant();
        let issued_at = Utc::now();
        let dispatch = gateway.issue("123456789012", issued_at);
        let later = issued_at + chrono::Duration::minutes(11);
        assert_eq!(
            gateway.redeem(dispatch.reference, later),
            Err(RemoteError::Expired)
        );
    }

    #[test]
    fn verified_aadhaar_cannot_be_dispatched_again() {
        with_local_runtime_async(|| async {
            let gateway = SimulatedOtpGateway::instant();
            let dispatch = gateway.dispatch_otp(request()).await.unwrap();
            gateway
                .verify_otp(VerifyRequest {
                    reference: dispatch.reference,
                    otp_code: "000000".into(),
                })
                .await
                .unwrap();

            let repeat = gateway.dispatch_otp(request()).await;
            assert_eq!(
                repeat,
                Err(RemoteError::Rejected(ALREADY_REGISTERED.into()))
            );
        });
    }

    #[test]
    fn unverified_aadhaar_can_be_dispatched_again() {
        with_local_runtime_async(|| async {
            let gateway = SimulatedOtpGateway::instant();
            gateway.dispatch_otp(request()).await.unwrap();
            assert!(gateway.dispatch_otp(request()).await.is_ok());
        });
    }

    #[test]
    fn dispatch_rejects_names_the_registry_refuses() {
        with_local_runtime_async(|| async {
            let gateway = SimulatedOtpGateway::instant();
            let short = DispatchRequest {
                entrepreneur_name: "A".into(),
                ..request()
            };
            assert_eq!(
                gateway.dispatch_otp(short).await,
                Err(RemoteError::Rejected(NAME_TOO_SHORT.into()))
            );

            let digits = DispatchRequest {
                entrepreneur_name: "Agent 47".into(),
                ..request()
            };
            assert_eq!(
                gateway.dispatch_otp(digits).await,
                Err(RemoteError::Rejected(NAME_INVALID_CHARS.into()))
            );

            let dotted = DispatchRequest {
                entrepreneur_name: "R. K. Sharma".into(),
                ..request()
            };
            assert!(gateway.dispatch_otp(dotted).await.is_ok());
        });
    }

    #[test]
    fn last_digits_handles_short_values() {
        assert_eq!(last_digits("123456789012"), "9012");
        assert_eq!(last_digits("12"), "12");
        assert_eq!(last_digits(""), "");
    }
}
