//! Debounced user picker.
//!
//! Type-to-search over `/api/system/users/search`: a search fires only after
//! the input has been stable for the quiet interval and is at least two
//! characters long; shorter input clears results without a network call.

use contracts::system::users::User;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::notify::use_notify;
use crate::shared::debounce::{GateAction, LookupGate, QUIET_MS};
use crate::system::users::api;

#[component]
pub fn UserLookup(
    on_select: Callback<User>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let notify = use_notify();
    let input_value = RwSignal::new(String::new());
    let results = RwSignal::new(Vec::<User>::new());
    let searching = RwSignal::new(false);
    let gate = StoredValue::new(LookupGate::default());

    let handle_input = move |raw: String| {
        input_value.set(raw.clone());
        let action = gate
            .try_update_value(|g| g.on_input(&raw))
            .unwrap_or(GateAction::Clear);
        match action {
            GateAction::Clear => {
                results.set(Vec::new());
            }
            GateAction::Schedule { token, query } => {
                spawn_local(async move {
                    TimeoutFuture::new(QUIET_MS).await;
                    // A later keystroke has restarted the quiet interval.
                    if !gate.try_with_value(|g| g.may_fire(token)).unwrap_or(false) {
                        return;
                    }
                    let request = gate.try_update_value(|g| g.begin_request()).unwrap_or(0);
                    let _ = searching.try_set(true);
                    match api::search_users(&query).await {
                        Ok(users) => {
                            let accept = gate
                                .try_with_value(|g| g.accept_response(request))
                                .unwrap_or(false);
                            if accept {
                                let _ = results.try_set(users);
                            }
                        }
                        Err(err) => {
                            if err.should_display() {
                                notify.error(err.message());
                            }
                        }
                    }
                    let _ = searching.try_set(false);
                });
            }
        }
    };

    let pick = move |user: User| {
        input_value.set(user.username.clone());
        results.set(Vec::new());
        on_select.run(user);
    };

    view! {
        <div class="user-lookup">
            <input
                type="text"
                class="user-lookup__input"
                placeholder=placeholder.unwrap_or_else(|| "Search user (min. 2 chars)...".to_string())
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || searching.get().then(|| view! { <span class="user-lookup__spinner">"…"</span> })}
            {move || {
                let users = results.get();
                (!users.is_empty())
                    .then(|| {
                        view! {
                            <div class="user-lookup__results">
                                <For
                                    each=move || results.get()
                                    key=|u| u.id
                                    children=move |user| {
                                        let label = match &user.full_name {
                                            Some(name) => format!("{} ({})", user.username, name),
                                            None => user.username.clone(),
                                        };
                                        let picked = user.clone();
                                        view! {
                                            <button
                                                class="user-lookup__result"
                                                class=("user-lookup__result--inactive", !user.is_active)
                                                on:click=move |_| pick(picked.clone())
                                            >
                                                {label}
                                            </button>
                                        }
                                    }
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
