use crate::components::{footer::PageFooter, navigation::NavigationMenu};
use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="App">
            <NavigationMenu/>
            <div class="content">{children()}</div>
            <PageFooter/>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="alert alert-success" role="status">
            <p>{message}</p>
        </div>
    }
}
