use crate::pages::registration::form_state::{FormState, Stage};
use crate::pages::registration::utils::AADHAAR_LENGTH;
use leptos::*;
use web_sys::HtmlInputElement;

#[component]
pub fn IdentityFields(
    form: Signal<FormState>,
    on_aadhaar_input: Callback<String>,
    on_name_input: Callback<String>,
) -> impl IntoView {
    let locked = move || form.with(|f| f.is_submitting || f.stage == Stage::AwaitingOtp);
    let aadhaar_error = move || form.with(|f| f.errors.aadhaar.map(|e| e.to_string()));
    let name_error = move || form.with(|f| f.errors.name.map(|e| e.to_string()));

    view! {
        <div class="form-fields">
            <div class="field-group">
                <label for="aadhaar">{"1. Aadhaar Number / आधार संख्या"}</label>
                <input
                    type="text"
                    id="aadhaar"
                    inputmode="numeric"
                    placeholder="Your Aadhaar No"
                    class="form-input"
                    maxlength=AADHAAR_LENGTH
                    disabled=locked
                    prop:value=move || form.with(|f| f.aadhaar_number.clone())
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        on_aadhaar_input.call(target.value());
                    }
                />
                <Show when=move || aadhaar_error().is_some() fallback=|| ()>
                    <span class="error-text">{move || aadhaar_error().unwrap_or_default()}</span>
                </Show>
            </div>

            <div class="field-group">
                <label for="entrepreneur">{"2. Name of Entrepreneur / उद्यमी का नाम"}</label>
                <input
                    type="text"
                    id="entrepreneur"
                    placeholder="Name as per Aadhaar"
                    class="form-input"
                    disabled=locked
                    prop:value=move || form.with(|f| f.entrepreneur_name.clone())
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        on_name_input.call(target.value());
                    }
                />
                <Show when=move || name_error().is_some() fallback=|| ()>
                    <span class="error-text">{move || name_error().unwrap_or_default()}</span>
                </Show>
            </div>
        </div>
    }
}
