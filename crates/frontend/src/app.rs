use leptos::prelude::*;

use crate::layout::notify::{NotifyService, ToastHost};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    provide_context(NotifyService::new());

    view! {
        <AuthProvider>
            <ToastHost />
            <AppRoutes />
        </AuthProvider>
    }
}
