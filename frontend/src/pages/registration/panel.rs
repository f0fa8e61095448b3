use super::{
    components::{
        identity_fields::IdentityFields,
        notices::{ConsentCheckbox, ExcludedActivitiesTicker, ImportantInformation},
        otp_section::OtpSection,
    },
    form_state::Stage,
    view_model::use_registration_view_model,
};
use crate::{
    components::{error::RemoteErrorBanner, layout::SuccessMessage},
    utils::time::create_clock,
};
use leptos::{ev::MouseEvent, *};
use std::time::Duration;

const CLOCK_PERIOD: Duration = Duration::from_secs(15);

#[component]
pub fn RegistrationPanel() -> impl IntoView {
    let vm = use_registration_view_model();
    let form = vm.form;
    let form_signal: Signal<_> = form.into();
    let now: Signal<_> = create_clock(CLOCK_PERIOD).into();

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting));
    let stage = Signal::derive(move || form.with(|f| f.stage));
    let consent = Signal::derive(move || form.with(|f| f.consent_given));
    let remote_error = Signal::derive(move || form.with(|f| f.remote_error.clone()));
    let success = move || form.with(|f| f.success.clone());

    let on_aadhaar_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_aadhaar(value))
    };
    let on_name_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_name(value))
    };
    let on_otp_input = {
        let vm = vm.clone();
        Callback::new(move |value: String| vm.set_otp(value))
    };
    let on_consent = {
        let vm = vm.clone();
        Callback::new(move |value: bool| vm.set_consent(value))
    };
    let on_submit_identity = {
        let vm = vm.clone();
        move |_: MouseEvent| vm.submit_identity()
    };
    let on_submit_otp = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.submit_otp())
    };
    let on_resend = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.resend_otp())
    };
    let on_edit_details = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.edit_details())
    };
    let on_retry = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.retry())
    };
    let on_dismiss = {
        let vm = vm.clone();
        Callback::new(move |_: MouseEvent| vm.dismiss_messages())
    };

    view! {
        <div class="form-container">
            <div class="heading">
                <h1 class="form-title">
                    {"UDYAM REGISTRATION FORM - For New Enterprise who are not Registered yet as MSME"}
                </h1>
            </div>

            <div class="aadhaar-section">
                <div class="aadhaar-banner">
                    <h2>{"Aadhaar Verification With OTP"}</h2>
                </div>

                <Show when=move || success().is_some() fallback=|| ()>
                    <SuccessMessage message=success().unwrap_or_default() />
                </Show>
                <RemoteErrorBanner
                    error=remote_error
                    retry_pending=submitting
                    on_retry=on_retry
                    on_resend=on_resend
                    on_dismiss=on_dismiss
                />

                <IdentityFields
                    form=form_signal
                    on_aadhaar_input=on_aadhaar_input
                    on_name_input=on_name_input
                />
                <ImportantInformation/>
                <ConsentCheckbox consent=consent on_toggle=on_consent/>

                <Show
                    when=move || stage.get() == Stage::AwaitingOtp
                    fallback=move || {
                        let on_submit_identity = on_submit_identity.clone();
                        view! {
                            <div class="button-section">
                                <button
                                    class="validate-button"
                                    disabled=move || submitting.get()
                                    on:click=on_submit_identity
                                >
                                    {move || {
                                        if submitting.get() {
                                            "Validating..."
                                        } else {
                                            "Validate & Generate OTP"
                                        }
                                    }}
                                </button>
                            </div>
                        }
                    }
                >
                    <OtpSection
                        form=form_signal
                        now=now
                        on_otp_input=on_otp_input
                        on_submit=on_submit_otp
                        on_resend=on_resend
                        on_edit_details=on_edit_details
                    />
                </Show>

                <ExcludedActivitiesTicker/>
            </div>
        </div>
    }
}
