#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{
        DispatchRequest, DispatchResult, GatewayHandle, OtpGateway, RemoteError, VerifyRequest,
        VerifyResult,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use leptos::*;
    use std::{cell::RefCell, collections::VecDeque, rc::Rc};
    use uuid::Uuid;

    pub const VALID_AADHAAR: &str = "123456789012";
    pub const VALID_NAME: &str = "Test User";

    pub fn dispatch_result() -> DispatchResult {
        DispatchResult {
            reference: Uuid::new_v4(),
            masked_mobile: "******0176".into(),
            expires_at: Utc::now() + chrono::Duration::minutes(10),
        }
    }

    /// Gateway that answers from queued results and records every request.
    #[derive(Clone, Default)]
    pub struct ScriptedGateway {
        pub dispatches: Rc<RefCell<VecDeque<Result<DispatchResult, RemoteError>>>>,
        pub verifications: Rc<RefCell<VecDeque<Result<VerifyResult, RemoteError>>>>,
        pub dispatch_requests: Rc<RefCell<Vec<DispatchRequest>>>,
        pub verify_requests: Rc<RefCell<Vec<VerifyRequest>>>,
    }

    impl ScriptedGateway {
        pub fn push_dispatch(&self, result: Result<DispatchResult, RemoteError>) {
            self.dispatches.borrow_mut().push_back(result);
        }

        pub fn push_verify(&self, result: Result<VerifyResult, RemoteError>) {
            self.verifications.borrow_mut().push_back(result);
        }
    }

    #[async_trait(?Send)]
    impl OtpGateway for ScriptedGateway {
        async fn dispatch_otp(
            &self,
            request: DispatchRequest,
        ) -> Result<DispatchResult, RemoteError> {
            self.dispatch_requests.borrow_mut().push(request);
            self.dispatches
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(dispatch_result()))
        }

        async fn verify_otp(&self, request: VerifyRequest) -> Result<VerifyResult, RemoteError> {
            self.verify_requests.borrow_mut().push(request);
            self.verifications.borrow_mut().pop_front().unwrap_or_else(|| {
                Ok(VerifyResult {
                    message: "OTP validated successfully.".into(),
                    aadhaar_verified: true,
                })
            })
        }
    }

    pub fn provide_gateway(gateway: impl OtpGateway + 'static) {
        provide_context(GatewayHandle::new(gateway));
    }
}
