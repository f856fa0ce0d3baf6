use leptos::prelude::*;

use crate::layout::notify::AlertData;

/// Inline alert scoped to a card or modal.
#[component]
pub fn Alert(
    #[prop(into)] alert: Signal<Option<AlertData>>,
    #[prop(optional, into)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || {
            alert
                .get()
                .map(|a| {
                    view! {
                        <div class=format!("alert alert--{}", a.severity.css_suffix())>
                            <span class="alert__message">{a.message.clone()}</span>
                            {on_dismiss
                                .map(|cb| {
                                    view! {
                                        <button
                                            class="alert__dismiss"
                                            on:click=move |_| cb.run(())
                                        >
                                            "×"
                                        </button>
                                    }
                                })}
                        </div>
                    }
                })
        }}
    }
}
