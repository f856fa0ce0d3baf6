pub mod state;

use contracts::billing::subscriptions::Subscription;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::subscriptions::api;
use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::list_controller::ListController;
use state::SubscriptionsFilter;

fn status_badge(status: &str) -> &'static str {
    match status {
        "active" => "badge badge--success",
        "past_due" => "badge badge--warning",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn SubscriptionsScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<SubscriptionsFilter, Subscription>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_subscriptions(&filter, page).await },
    );

    let search_input = RwSignal::new(controller.filter().search);

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let cancel = move |subscription: Subscription| {
        if !confirm(&format!(
            "Cancel the \"{}\" subscription of {}? It stops renewing; the record is kept.",
            subscription.package_name, subscription.user_name
        )) {
            return;
        }
        spawn_local(async move {
            match api::cancel_subscription(subscription.id).await {
                Ok(()) => {
                    notify.success("Subscription cancelled");
                    controller.refresh();
                }
                Err(err) => {
                    if err.should_display() {
                        notify.error(err.message());
                    }
                }
            }
        });
    };

    let items = controller.items();
    let total_count = controller.total_count();
    let loading = controller.is_loading();
    let inline_error = controller.error();
    let filter_sig = controller.filter_signal();

    view! {
        <div class="page">
            <div class="page__toolbar">
                <div class="page__toolbar-left">
                    <Badge>{move || total_count.get().to_string()}</Badge>
                </div>
                <div class="page__toolbar-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <Alert alert=Signal::derive(move || {
                inline_error.get().map(crate::layout::notify::AlertData::danger)
            }) />

            <div class="filter-panel">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <select
                        class="filter-panel__select"
                        on:change=move |ev| {
                            controller.update_filter(|f| f.status = event_target_value(&ev));
                        }
                        prop:value=move || filter_sig.get().status
                    >
                        <option value="">"All statuses"</option>
                        <option value="active">"Active"</option>
                        <option value="past_due">"Past due"</option>
                        <option value="cancelled">"Cancelled"</option>
                    </select>
                    <input
                        type="text"
                        class="filter-panel__search"
                        placeholder="User or package..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                apply_search();
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply_search()>
                        "Find"
                    </Button>
                    <PaginationControls
                        current_page=controller.page()
                        total_pages=controller.total_pages()
                        total_count=controller.total_count()
                        on_page_change=Callback::new(move |p| controller.set_page(p))
                    />
                </Flex>
            </div>

            <div class="table-wrapper">
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"User"</TableHeaderCell>
                            <TableHeaderCell>"Package"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Started"</TableHeaderCell>
                            <TableHeaderCell>"Renews"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|s| s.id
                            children=move |subscription| {
                                let started = format_date(&subscription.started_at);
                                let renews = subscription
                                    .renews_at
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_else(|| "-".to_string());
                                let cancellable = subscription.status != "cancelled";
                                let cancel_target = subscription.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {subscription.user_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {subscription.package_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_badge(
                                                    &subscription.status,
                                                )>{subscription.status.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{started}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{renews}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {cancellable
                                                    .then(|| {
                                                        let target = cancel_target.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| cancel(target.clone())
                                                            >
                                                                "Cancel"
                                                            </Button>
                                                        }
                                                    })}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}
