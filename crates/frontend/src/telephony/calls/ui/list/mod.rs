pub mod state;

use contracts::telephony::calls::CallRecord;
use leptos::prelude::*;
use thaw::*;

use crate::layout::notify::use_notify;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_datetime, format_duration, format_money};
use crate::shared::export::{export_csv, CsvExportable};
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{get_sort_indicator, sort_list, toggle_sort, Sortable};
use crate::telephony::calls::api;
use state::{current_month_range, CallsFilter};

impl Sortable for CallRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> std::cmp::Ordering {
        match field {
            "duration" => self.duration_secs.cmp(&other.duration_secs),
            "from" => self.from_number.cmp(&other.from_number),
            "to" => self.to_number.cmp(&other.to_number),
            "user" => self.user_name.to_lowercase().cmp(&other.user_name.to_lowercase()),
            "status" => self.status.cmp(&other.status),
            "cost" => self
                .cost
                .partial_cmp(&other.cost)
                .unwrap_or(std::cmp::Ordering::Equal),
            _ => self.started_at.cmp(&other.started_at),
        }
    }
}

impl CsvExportable for CallRecord {
    fn headers() -> Vec<&'static str> {
        vec![
            "Started", "Direction", "From", "To", "User", "Duration (s)", "Status", "Cost",
            "Currency",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.started_at.clone(),
            self.direction.clone(),
            self.from_number.clone(),
            self.to_number.clone(),
            self.user_name.clone(),
            self.duration_secs.to_string(),
            self.status.clone(),
            format!("{:.2}", self.cost),
            self.currency.clone(),
        ]
    }
}

#[component]
pub fn CallsScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<CallsFilter, CallRecord>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_calls(&filter, page).await },
    );

    let search_input = RwSignal::new(controller.filter().search);
    let sort_field = RwSignal::new("started_at".to_string());
    let sort_ascending = RwSignal::new(false);

    let items = controller.items();

    // Display-only sort over the loaded page
    let sorted_items = Signal::derive(move || {
        let mut sorted = items.get();
        sort_list(&mut sorted, &sort_field.get(), sort_ascending.get());
        sorted
    });

    let on_sort = move |field: &'static str| {
        move |_| {
            let mut f = sort_field.get_untracked();
            let mut asc = sort_ascending.get_untracked();
            toggle_sort(&mut f, &mut asc, field);
            sort_field.set(f);
            sort_ascending.set(asc);
        }
    };

    let sort_header = move |field: &'static str, label: &'static str| {
        view! {
            <div class="table__sortable-header" style="cursor:pointer;" on:click=on_sort(field)>
                {label}
                <span>
                    {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                </span>
            </div>
        }
    };

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let export = move || {
        let items = sorted_items.get_untracked();
        match export_csv(&items, "call-history.csv") {
            Ok(()) => notify.success(format!("Exported {} calls", items.len())),
            Err(message) => notify.warning(message),
        }
    };

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
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| export()>
                        "Export CSV"
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
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            let (from, to) = current_month_range();
                            controller
                                .update_filter(|f| {
                                    f.from = from;
                                    f.to = to;
                                });
                        }
                    >
                        "This month"
                    </Button>
                    <select
                        class="filter-panel__select"
                        on:change=move |ev| {
                            controller.update_filter(|f| f.direction = event_target_value(&ev));
                        }
                        prop:value=move || filter_sig.get().direction
                    >
                        <option value="">"All directions"</option>
                        <option value="inbound">"Inbound"</option>
                        <option value="outbound">"Outbound"</option>
                    </select>
                    <select
                        class="filter-panel__select"
                        on:change=move |ev| {
                            controller.update_filter(|f| f.status = event_target_value(&ev));
                        }
                        prop:value=move || filter_sig.get().status
                    >
                        <option value="">"All statuses"</option>
                        <option value="completed">"Completed"</option>
                        <option value="busy">"Busy"</option>
                        <option value="no_answer">"No answer"</option>
                        <option value="failed">"Failed"</option>
                    </select>
                    <input
                        type="text"
                        class="filter-panel__search"
                        placeholder="Number or user..."
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
                            <TableHeaderCell>{sort_header("started_at", "Started")}</TableHeaderCell>
                            <TableHeaderCell>"Direction"</TableHeaderCell>
                            <TableHeaderCell>{sort_header("from", "From")}</TableHeaderCell>
                            <TableHeaderCell>{sort_header("to", "To")}</TableHeaderCell>
                            <TableHeaderCell>{sort_header("user", "User")}</TableHeaderCell>
                            <TableHeaderCell>{sort_header("duration", "Duration")}</TableHeaderCell>
                            <TableHeaderCell>{sort_header("status", "Status")}</TableHeaderCell>
                            <TableHeaderCell>{sort_header("cost", "Cost")}</TableHeaderCell>
                            <TableHeaderCell>"Recording"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || sorted_items.get()
                            key=|c| c.id
                            children=move |call| {
                                let started = format_datetime(&call.started_at);
                                let duration = format_duration(call.duration_secs);
                                let cost = format_money(call.cost, &call.currency);
                                let status_class = match call.status.as_str() {
                                    "completed" => "badge badge--success",
                                    "failed" => "badge badge--error",
                                    _ => "badge badge--neutral",
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{started}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{call.direction.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {call.from_number.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {call.to_number.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {call.user_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{duration}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=status_class>{call.status.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{cost}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {match call.recording_url.clone() {
                                                    Some(url) => {
                                                        let download_url = url.clone();
                                                        view! {
                                                            <audio
                                                                class="call-recording"
                                                                controls=true
                                                                preload="none"
                                                                src=url
                                                            ></audio>
                                                            <a
                                                                class="call-recording__download"
                                                                href=download_url
                                                                download=""
                                                            >
                                                                "Download"
                                                            </a>
                                                        }
                                                            .into_any()
                                                    }
                                                    None => view! { <span>"-"</span> }.into_any(),
                                                }}
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
