use crate::api::{
    DispatchRequest, DispatchResult, GatewayHandle, RemoteError, VerifyRequest, VerifyResult,
};

#[derive(Clone)]
pub struct RegistrationRepository {
    gateway: GatewayHandle,
}

impl RegistrationRepository {
    pub fn new_with_gateway(gateway: GatewayHandle) -> Self {
        Self { gateway }
    }

    pub async fn dispatch_otp(
        &self,
        request: DispatchRequest,
    ) -> Result<DispatchResult, RemoteError> {
        let result = self.gateway.0.dispatch_otp(request).await;
        if let Err(err) = &result {
            log::warn!("OTP dispatch failed [{}]: {}", err.code(), err);
        }
        result
    }

    pub async fn verify_otp(&self, request: VerifyRequest) -> Result<VerifyResult, RemoteError> {
        let result = self.gateway.0.verify_otp(request).await;
        if let Err(err) = &result {
            log::warn!("OTP verification failed [{}]: {}", err.code(), err);
        }
        result
    }
}
