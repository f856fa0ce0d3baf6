pub mod state;

use contracts::billing::credits::CreditEntry;
use leptos::prelude::*;
use thaw::*;

use crate::billing::credits::api;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_controller::ListController;
use state::CreditsFilter;

#[component]
pub fn CreditsScreen() -> impl IntoView {
    let controller = ListController::<CreditsFilter, CreditEntry>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_credits(&filter, page).await },
    );

    let search_input = RwSignal::new(controller.filter().search);
    let show_adjust = RwSignal::new(false);

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let items = controller.items();
    let total_count = controller.total_count();
    let loading = controller.is_loading();
    let inline_error = controller.error();

    view! {
        <div class="page">
            <div class="page__toolbar">
                <div class="page__toolbar-left">
                    <Badge>{move || total_count.get().to_string()}</Badge>
                </div>
                <div class="page__toolbar-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| show_adjust.set(true)
                    >
                        "Adjust credit"
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
                    <input
                        type="text"
                        class="filter-panel__search"
                        placeholder="User..."
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
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"User"</TableHeaderCell>
                            <TableHeaderCell>"Change"</TableHeaderCell>
                            <TableHeaderCell>"Balance after"</TableHeaderCell>
                            <TableHeaderCell>"Reason"</TableHeaderCell>
                            <TableHeaderCell>"Operator"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|e| e.id
                            children=move |entry| {
                                let created = format_datetime(&entry.created_at);
                                let delta_class = if entry.delta >= 0.0 {
                                    "credit-delta credit-delta--positive"
                                } else {
                                    "credit-delta credit-delta--negative"
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{created}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {entry.user_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class=delta_class>
                                                    {format!("{:+.2}", entry.delta)}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format!("{:.2}", entry.balance_after)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {entry.reason.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {entry.operator_name.clone()}
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
                show_adjust
                    .get()
                    .then(|| {
                        view! {
                            <super::adjust::AdjustCreditModal
                                on_close=Callback::new(move |_| show_adjust.set(false))
                                on_adjusted=Callback::new(move |_| {
                                    show_adjust.set(false);
                                    controller.refresh();
                                })
                            />
                        }
                    })
            }}
        </div>
    }
}
