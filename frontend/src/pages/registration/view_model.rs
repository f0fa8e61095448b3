use super::{
    form_state::{FormState, PendingRequest, Stage},
    repository::RegistrationRepository,
};
use crate::{
    api::{DispatchRequest, GatewayHandle, VerifyRequest},
    config,
    utils::task::TaskSlot,
};
use leptos::*;

#[derive(Clone)]
pub struct RegistrationViewModel {
    pub form: RwSignal<FormState>,
    repository: RegistrationRepository,
    tasks: TaskSlot,
}

pub fn use_registration_view_model() -> RegistrationViewModel {
    let gateway = use_context::<GatewayHandle>()
        .unwrap_or_else(|| GatewayHandle::simulated(&config::current()));

    RegistrationViewModel {
        form: create_rw_signal(FormState::default()),
        repository: RegistrationRepository::new_with_gateway(gateway),
        tasks: TaskSlot::new(),
    }
}

impl RegistrationViewModel {
    pub fn set_aadhaar(&self, value: String) {
        self.form.update(|f| f.set_aadhaar(value));
    }

    pub fn set_name(&self, value: String) {
        self.form.update(|f| f.set_name(value));
    }

    pub fn set_otp(&self, value: String) {
        self.form.update(|f| f.set_otp(value));
    }

    pub fn set_consent(&self, value: bool) {
        self.form.update(|f| f.set_consent(value));
    }

    pub fn submit_identity(&self) {
        if let Some(request) = self.form.try_update(FormState::begin_identity).flatten() {
            self.spawn_dispatch(request);
        }
    }

    pub fn submit_otp(&self) {
        if let Some(request) = self.form.try_update(FormState::begin_otp).flatten() {
            self.spawn_verify(request);
        }
    }

    pub fn resend_otp(&self) {
        if let Some(request) = self.form.try_update(FormState::begin_resend).flatten() {
            log::info!("Resending OTP");
            self.spawn_dispatch(request);
        }
    }

    pub fn retry(&self) {
        match self.form.try_update(FormState::begin_retry).flatten() {
            Some(PendingRequest::Dispatch(request)) => self.spawn_dispatch(request),
            Some(PendingRequest::Verify(request)) => self.spawn_verify(request),
            None => {}
        }
    }

    pub fn edit_details(&self) {
        self.tasks.cancel();
        self.form.update(FormState::edit_details);
    }

    pub fn dismiss_messages(&self) {
        self.form.update(FormState::dismiss_messages);
    }

    /// Drops the in-flight call without applying its result.
    #[cfg(test)]
    pub fn cancel_pending(&self) {
        self.tasks.cancel();
        self.form.update(|f| f.is_submitting = false);
    }

    fn spawn_dispatch(&self, request: DispatchRequest) {
        let repository = self.repository.clone();
        let form = self.form;
        self.tasks.spawn(async move {
            let result = repository.dispatch_otp(request).await;
            form.update(|f| f.finish_dispatch(result));
            if form.with_untracked(|f| f.stage == Stage::AwaitingOtp) {
                log::info!("OTP dispatched; awaiting code");
            }
        });
    }

    fn spawn_verify(&self, request: VerifyRequest) {
        let repository = self.repository.clone();
        let form = self.form;
        self.tasks.spawn(async move {
            let result = repository.verify_otp(request).await;
            let verified = result.is_ok();
            form.update(|f| f.finish_verify(result));
            if verified {
                log::info!("Aadhaar verification completed");
            }
        });
    }
}
