use crate::domain::product::ui::list::ProductListPage;
use crate::shared::toast::ToastHost;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                <Route path=path!("/") view=ProductListPage />
            </Routes>
            <ToastHost />
        </Router>
    }
}
