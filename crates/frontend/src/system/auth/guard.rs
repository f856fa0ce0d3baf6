use leptos::prelude::*;

use super::context::use_auth;

/// Renders its children only for administrator operators.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let is_admin = move || {
        auth_state
            .get()
            .operator
            .map(|o| o.is_admin)
            .unwrap_or(false)
    };

    view! {
        <Show
            when=is_admin
            fallback=|| {
                view! { <div class="alert alert--warning">"Administrator access required"</div> }
            }
        >
            {children()}
        </Show>
    }
}
