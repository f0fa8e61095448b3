use crate::api::RemoteError;
use leptos::{ev::MouseEvent, *};

/// Non-fatal banner for a failed remote call. Offers Retry when replaying the
/// request can succeed, Resend when the OTP reference is dead, and Dismiss.
#[component]
pub fn RemoteErrorBanner(
    error: Signal<Option<RemoteError>>,
    retry_pending: Signal<bool>,
    on_retry: Callback<MouseEvent>,
    on_resend: Callback<MouseEvent>,
    on_dismiss: Callback<MouseEvent>,
) -> impl IntoView {
    let recovery = move || {
        let error = error.get()?;
        if error.is_retryable() {
            Some(
                view! {
                    <button
                        class="retry-button"
                        disabled=move || retry_pending.get()
                        on:click=move |ev| on_retry.call(ev)
                    >
                        {move || if retry_pending.get() { "Retrying..." } else { "Retry" }}
                    </button>
                }
                .into_view(),
            )
        } else if error.requires_new_otp() {
            Some(
                view! {
                    <button
                        class="resend-otp-button"
                        disabled=move || retry_pending.get()
                        on:click=move |ev| on_resend.call(ev)
                    >
                        {"Resend OTP"}
                    </button>
                }
                .into_view(),
            )
        } else {
            None
        }
    };

    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="alert alert-error" role="alert">
                <div class="alert-body">
                    <p class="alert-title">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</p>
                    {move || {
                        error
                            .get()
                            .map(|e| view! { <p class="alert-code">{"Code: "}{e.code()}</p> })
                    }}
                </div>
                <div class="alert-actions">
                    {recovery}
                    <button class="dismiss-button" on:click=move |ev| on_dismiss.call(ev)>
                        {"Dismiss"}
                    </button>
                </div>
            </div>
        </Show>
    }
}
