use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notify::AlertData;
use crate::shared::components::alert::Alert;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<AlertData>);

    let submit = move || {
        if busy.get_untracked() {
            return;
        }
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            alert.set(Some(AlertData::warning("Enter username and password")));
            return;
        }
        busy.set(true);
        alert.set(None);
        spawn_local(async move {
            match do_login(set_auth_state, user.trim().to_string(), pass).await {
                Ok(()) => {}
                Err(message) => {
                    alert.set(Some(AlertData::danger(message)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Admin Console"</h1>
                <Alert alert=alert on_dismiss=Callback::new(move |_| alert.set(None)) />
                <label class="login-card__label">"Username"</label>
                <input
                    type="text"
                    class="login-card__input"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label class="login-card__label">"Password"</label>
                <input
                    type="password"
                    class="login-card__input"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || busy.get())
                >
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </Button>
            </div>
        </div>
    }
}
