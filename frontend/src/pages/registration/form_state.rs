use super::utils::{self, ValidationError};
use crate::api::{DispatchRequest, DispatchResult, RemoteError, VerifyRequest, VerifyResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Collect,
    AwaitingOtp,
}

/// Errors found by the last validate action, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub aadhaar: Option<ValidationError>,
    pub name: Option<ValidationError>,
    pub otp: Option<ValidationError>,
}

impl FieldErrors {
    pub fn any(&self) -> bool {
        self.aadhaar.is_some() || self.name.is_some() || self.otp.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The remote call that is in flight or last failed, kept for Retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingRequest {
    Dispatch(DispatchRequest),
    Verify(VerifyRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub aadhaar_number: String,
    pub entrepreneur_name: String,
    pub otp_code: String,
    pub consent_given: bool,
    pub stage: Stage,
    pub is_submitting: bool,
    pub errors: FieldErrors,
    pub dispatch: Option<DispatchResult>,
    pub remote_error: Option<RemoteError>,
    pub success: Option<String>,
    pub last_request: Option<PendingRequest>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            aadhaar_number: String::new(),
            entrepreneur_name: String::new(),
            otp_code: String::new(),
            consent_given: true,
            stage: Stage::Collect,
            is_submitting: false,
            errors: FieldErrors::default(),
            dispatch: None,
            remote_error: None,
            success: None,
            last_request: None,
        }
    }
}

impl FormState {
    pub fn show_errors(&self) -> bool {
        self.errors.any()
    }

    // Every edit clears the whole error record: input is never shown as
    // invalid until the next explicit validate action.
    pub fn set_aadhaar(&mut self, value: String) {
        self.aadhaar_number = value;
        self.errors.clear();
    }

    pub fn set_name(&mut self, value: String) {
        self.entrepreneur_name = value;
        self.errors.clear();
    }

    pub fn set_otp(&mut self, value: String) {
        self.otp_code = value;
        self.errors.clear();
    }

    pub fn set_consent(&mut self, value: bool) {
        self.consent_given = value;
        self.errors.clear();
    }

    /// Validates the identity fields. On success the form enters the
    /// submitting state and the dispatch request to send is returned.
    pub fn begin_identity(&mut self) -> Option<DispatchRequest> {
        if self.stage != Stage::Collect {
            return None;
        }
        let aadhaar = utils::validate_aadhaar(&self.aadhaar_number);
        let name = utils::validate_entrepreneur_name(&self.entrepreneur_name);
        match (aadhaar, name) {
            (Ok(aadhaar_number), Ok(entrepreneur_name)) => {
                let request = DispatchRequest {
                    aadhaar_number,
                    entrepreneur_name,
                    consent_given: self.consent_given,
                };
                self.start(PendingRequest::Dispatch(request.clone()));
                Some(request)
            }
            (aadhaar, name) => {
                self.errors = FieldErrors {
                    aadhaar: aadhaar.err(),
                    name: name.err(),
                    otp: None,
                };
                None
            }
        }
    }

    pub fn finish_dispatch(&mut self, result: Result<DispatchResult, RemoteError>) {
        self.is_submitting = false;
        match result {
            Ok(dispatch) => {
                self.stage = Stage::AwaitingOtp;
                self.dispatch = Some(dispatch);
                self.otp_code.clear();
                self.last_request = None;
            }
            Err(err) => self.remote_error = Some(err),
        }
    }

    /// Validates the OTP and returns the verification request bound to the
    /// current dispatch.
    pub fn begin_otp(&mut self) -> Option<VerifyRequest> {
        if self.stage != Stage::AwaitingOtp {
            return None;
        }
        let otp_code = match utils::validate_otp(&self.otp_code) {
            Ok(code) => code,
            Err(err) => {
                self.errors = FieldErrors {
                    otp: Some(err),
                    ..FieldErrors::default()
                };
                return None;
            }
        };
        let Some(dispatch) = self.dispatch.as_ref() else {
            self.remote_error = Some(RemoteError::UnknownDispatch);
            return None;
        };
        let request = VerifyRequest {
            reference: dispatch.reference,
            otp_code,
        };
        self.start(PendingRequest::Verify(request.clone()));
        Some(request)
    }

    pub fn finish_verify(&mut self, result: Result<VerifyResult, RemoteError>) {
        self.is_submitting = false;
        match result {
            Ok(verified) => {
                self.success = Some(verified.message);
                self.stage = Stage::Collect;
                self.otp_code.clear();
                self.dispatch = None;
                self.last_request = None;
            }
            Err(err) => self.remote_error = Some(err),
        }
    }

    /// Requests a fresh OTP for the identity already confirmed.
    pub fn begin_resend(&mut self) -> Option<DispatchRequest> {
        if self.stage != Stage::AwaitingOtp {
            return None;
        }
        let request = DispatchRequest {
            aadhaar_number: self.aadhaar_number.clone(),
            entrepreneur_name: self.entrepreneur_name.trim().to_string(),
            consent_given: self.consent_given,
        };
        self.otp_code.clear();
        self.start(PendingRequest::Dispatch(request.clone()));
        Some(request)
    }

    /// Leaves the OTP stage so the identity fields can be corrected.
    pub fn edit_details(&mut self) {
        self.stage = Stage::Collect;
        self.is_submitting = false;
        self.otp_code.clear();
        self.dispatch = None;
        self.errors.clear();
        self.remote_error = None;
        self.last_request = None;
    }

    /// Re-arms the request that failed remotely, if replaying it can succeed.
    pub fn begin_retry(&mut self) -> Option<PendingRequest> {
        if !self.remote_error.as_ref()?.is_retryable() {
            return None;
        }
        let request = self.last_request.clone()?;
        self.start(request.clone());
        Some(request)
    }

    pub fn dismiss_messages(&mut self) {
        self.success = None;
        self.remote_error = None;
    }

    pub fn otp_sent_message(&self) -> Option<String> {
        self.dispatch
            .as_ref()
            .map(|d| format!("OTP has been sent to {}", d.masked_mobile))
    }

    fn start(&mut self, request: PendingRequest) {
        self.is_submitting = true;
        self.errors.clear();
        self.remote_error = None;
        self.success = None;
        self.last_request = Some(request);
    }
}
