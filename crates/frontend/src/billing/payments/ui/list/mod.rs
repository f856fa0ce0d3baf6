pub mod state;

use contracts::billing::payments::Payment;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::payments::api;
use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::list_controller::ListController;
use state::PaymentsFilter;

fn status_badge(status: &str) -> &'static str {
    match status {
        "completed" => "badge badge--success",
        "failed" => "badge badge--error",
        "refunded" => "badge badge--warning",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn PaymentsScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<PaymentsFilter, Payment>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_payments(&filter, page).await },
    );

    let mark_refunded = move |payment: Payment| {
        if !confirm(&format!(
            "Mark payment of {} by {} as refunded? The payment record is kept.",
            format_money(payment.amount, &payment.currency),
            payment.user_name
        )) {
            return;
        }
        spawn_local(async move {
            match api::mark_refunded(payment.id).await {
                Ok(()) => {
                    notify.success("Payment marked as refunded");
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
                        <option value="pending">"Pending"</option>
                        <option value="completed">"Completed"</option>
                        <option value="failed">"Failed"</option>
                        <option value="refunded">"Refunded"</option>
                    </select>
                    <label class="filter-panel__label">"From:"</label>
                    <input
                        type="date"
                        prop:value=move || filter_sig.get().from
                        on:change=move |ev| {
                            controller.update_filter(|f| f.from = event_target_value(&ev));
                        }
                    />
                    <label class="filter-panel__label">"To:"</label>
                    <input
                        type="date"
                        prop:value=move || filter_sig.get().to
                        on:change=move |ev| {
                            controller.update_filter(|f| f.to = event_target_value(&ev));
                        }
                    />
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
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"User"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>"Method"</TableHeaderCell>
                            <TableHeaderCell>"Invoice"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|p| p.id
                            children=move |payment| {
                                let created = format_datetime(&payment.created_at);
                                let amount = format_money(payment.amount, &payment.currency);
                                let refundable = payment.status == "completed";
                                let refund_target = payment.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{created}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {payment.user_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{amount}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{payment.method.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {payment.invoice_number.clone().unwrap_or_else(|| "-".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_badge(
                                                    &payment.status,
                                                )>{payment.status.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {refundable
                                                    .then(|| {
                                                        let target = refund_target.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| mark_refunded(target.clone())
                                                            >
                                                                "Mark refunded"
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
