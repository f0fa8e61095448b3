use leptos::*;
use leptos_meta::{provide_meta_context, Title};

use crate::{api::GatewayHandle, components::layout::Layout, config, pages::RegistrationPage};

pub fn mount_app() {
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    if use_context::<GatewayHandle>().is_none() {
        provide_context(GatewayHandle::simulated(&config::current()));
    }

    view! {
        <Title text="Udyam Registration"/>
        <Layout>
            <RegistrationPage/>
        </Layout>
    }
}
