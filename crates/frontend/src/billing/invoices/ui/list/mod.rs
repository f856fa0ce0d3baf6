pub mod state;

use contracts::billing::invoices::Invoice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::invoices::api;
use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_datetime, format_money};
use crate::shared::list_controller::ListController;
use state::InvoicesFilter;

fn status_badge(status: &str) -> &'static str {
    match status {
        "paid" => "badge badge--success",
        "sent" => "badge badge--info",
        "cancelled" => "badge badge--neutral",
        _ => "badge badge--warning",
    }
}

#[component]
pub fn InvoicesScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<InvoicesFilter, Invoice>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_invoices(&filter, page).await },
    );

    let search_input = RwSignal::new(controller.filter().search);
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<Invoice>);

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let cancel = move |invoice: Invoice| {
        if !confirm(&format!(
            "Cancel invoice {}? It is kept for the records with status \"cancelled\".",
            invoice.number
        )) {
            return;
        }
        spawn_local(async move {
            match api::cancel_invoice(invoice.id).await {
                Ok(()) => {
                    notify.success(format!("Invoice {} cancelled", invoice.number));
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
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_create.set(true)
                    >
                        "New invoice"
                    </Button>
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
                        <option value="draft">"Draft"</option>
                        <option value="sent">"Sent"</option>
                        <option value="paid">"Paid"</option>
                        <option value="cancelled">"Cancelled"</option>
                    </select>
                    <input
                        type="text"
                        class="filter-panel__search"
                        placeholder="Invoice number or user..."
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
                            <TableHeaderCell>"Number"</TableHeaderCell>
                            <TableHeaderCell>"User"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Due"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|i| i.id
                            children=move |invoice| {
                                let created = format_datetime(&invoice.created_at);
                                let due = invoice
                                    .due_date
                                    .as_deref()
                                    .map(format_date)
                                    .unwrap_or_else(|| "-".to_string());
                                let total = format_money(invoice.total, &invoice.currency);
                                let editable = matches!(
                                    invoice.status.as_str(),
                                    "draft" | "sent"
                                );
                                let cancellable = editable;
                                let edit_target = invoice.clone();
                                let cancel_target = invoice.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">
                                                    {invoice.number.clone()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {invoice.user_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_badge(
                                                    &invoice.status,
                                                )>{invoice.status.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{total}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{due}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{created}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {editable
                                                    .then(|| {
                                                        let target = edit_target.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| editing.set(Some(target.clone()))
                                                            >
                                                                "Edit"
                                                            </Button>
                                                        }
                                                    })}
                                                {cancellable
                                                    .then(|| {
                                                        let target = cancel_target.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| cancel(target.clone())
                                                            >
                                                                "Cancel invoice"
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

            {move || {
                show_create
                    .get()
                    .then(|| {
                        view! {
                            <super::edit::InvoiceEditModal
                                existing=None
                                on_close=Callback::new(move |_| show_create.set(false))
                                on_saved=Callback::new(move |_| {
                                    show_create.set(false);
                                    controller.refresh();
                                })
                            />
                        }
                    })
            }}
            {move || {
                editing
                    .get()
                    .map(|invoice| {
                        view! {
                            <super::edit::InvoiceEditModal
                                existing=Some(invoice)
                                on_close=Callback::new(move |_| editing.set(None))
                                on_saved=Callback::new(move |_| {
                                    editing.set(None);
                                    controller.refresh();
                                })
                            />
                        }
                    })
            }}
        </div>
    }
}
