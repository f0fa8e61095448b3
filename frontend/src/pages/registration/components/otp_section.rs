use crate::pages::registration::form_state::FormState;
use crate::pages::registration::utils::OTP_LENGTH;
use crate::utils::time::validity_hint;
use chrono::{DateTime, Utc};
use leptos::{ev::MouseEvent, *};
use web_sys::HtmlInputElement;

#[component]
pub fn OtpSection(
    form: Signal<FormState>,
    now: Signal<DateTime<Utc>>,
    on_otp_input: Callback<String>,
    on_submit: Callback<MouseEvent>,
    on_resend: Callback<MouseEvent>,
    on_edit_details: Callback<MouseEvent>,
) -> impl IntoView {
    let submitting = move || form.with(|f| f.is_submitting);
    let otp_blank = move || form.with(|f| f.otp_code.trim().is_empty());
    let otp_error = move || form.with(|f| f.errors.otp.map(|e| e.to_string()));
    let sent_message = move || form.with(|f| f.otp_sent_message().unwrap_or_default());
    let validity = move || {
        form.with(|f| {
            f.dispatch
                .as_ref()
                .map(|d| validity_hint(d.expires_at, now.get()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="otp-section">
            <h3 class="otp-title">
                <span class="required">"*"</span>
                {"Enter One Time Password(OTP) Code"}
            </h3>
            <div class="otp-input-group">
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    placeholder="OTP code"
                    class="otp-input"
                    maxlength=OTP_LENGTH
                    prop:value=move || form.with(|f| f.otp_code.clone())
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        on_otp_input.call(target.value());
                    }
                />
                <p class="otp-message">{sent_message}</p>
                <p class="otp-validity">{validity}</p>
                <Show when=move || otp_error().is_some() fallback=|| ()>
                    <span class="error-text">{move || otp_error().unwrap_or_default()}</span>
                </Show>
            </div>
            <div class="otp-button-section">
                <button
                    class="validate-otp-button"
                    disabled=move || otp_blank() || submitting()
                    on:click=move |ev| on_submit.call(ev)
                >
                    {move || if submitting() { "Validating..." } else { "Validate" }}
                </button>
                <button
                    class="resend-otp-button"
                    disabled=submitting
                    on:click=move |ev| on_resend.call(ev)
                >
                    {"Resend OTP"}
                </button>
                <button class="edit-details-button" on:click=move |ev| on_edit_details.call(ev)>
                    {"Change Aadhaar / Name"}
                </button>
            </div>
        </div>
    }
}
