use leptos::prelude::*;

use crate::layout::shell::View;
use crate::shared::query;

#[component]
pub fn Sidebar(active: RwSignal<View>) -> impl IntoView {
    let groups = ["Telephony", "Billing", "System"];

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"Admin Console"</div>
            {groups
                .into_iter()
                .map(|group| {
                    view! {
                        <div class="sidebar__group">
                            <div class="sidebar__group-title">{group}</div>
                            {View::ALL
                                .into_iter()
                                .filter(|v| v.group() == group)
                                .map(|v| {
                                    view! {
                                        <button
                                            class="sidebar__item"
                                            class=("sidebar__item--active", move || active.get() == v)
                                            on:click=move |_| {
                                                active.set(v);
                                                // drop the previous screen's filter keys
                                                query::replace_url(v.key(), "");
                                            }
                                        >
                                            {v.title()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
