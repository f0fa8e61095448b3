use leptos::*;

pub mod components;
pub mod form_state;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::RegistrationPanel;

#[component]
pub fn RegistrationPage() -> impl IntoView {
    view! { <RegistrationPanel /> }
}
