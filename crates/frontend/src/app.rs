use crate::domain::product::store::CatalogContext;
use crate::routes::routes::AppRoutes;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the shared catalog store to the whole app via context.
    provide_context(CatalogContext::new());

    // Provide ToastService for transient notifications
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
