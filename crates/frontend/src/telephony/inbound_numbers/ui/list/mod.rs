pub mod state;

use contracts::telephony::inbound_numbers::InboundNumber;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_controller::ListController;
use crate::telephony::inbound_numbers::api;
use state::InboundNumbersFilter;

#[component]
pub fn InboundNumbersScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<InboundNumbersFilter, InboundNumber>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_inbound_numbers(&filter, page).await },
    );

    let search_input = RwSignal::new(controller.filter().search);
    let show_wizard = RwSignal::new(false);

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let release = move |number: InboundNumber| {
        if !confirm(&format!(
            "Release {}? The number is returned to the provider pool; the record is kept.",
            number.phone_number
        )) {
            return;
        }
        spawn_local(async move {
            match api::release_inbound_number(number.id).await {
                Ok(()) => {
                    notify.success(format!("Number {} released", number.phone_number));
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
                        on_click=move |_| show_wizard.set(true)
                    >
                        "Provision number"
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
                            controller.update_filter(|f| f.provider = event_target_value(&ev));
                        }
                        prop:value=move || filter_sig.get().provider
                    >
                        <option value="">"All providers"</option>
                        <option value="telnyx">"Telnyx"</option>
                        <option value="twilio">"Twilio"</option>
                        <option value="bandwidth">"Bandwidth"</option>
                    </select>
                    <input
                        type="text"
                        class="filter-panel__search"
                        placeholder="Number or owner..."
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
                            <TableHeaderCell>"Provider"</TableHeaderCell>
                            <TableHeaderCell>"Owner"</TableHeaderCell>
                            <TableHeaderCell>"SIP endpoint"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|n| n.id
                            children=move |number| {
                                let created = format_datetime(&number.created_at);
                                let endpoint = format!(
                                    "{}@{}",
                                    number.sip_username,
                                    number.sip_host,
                                );
                                let release_target = number.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">
                                                    {number.phone_number.clone()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{number.provider.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {number.user_name.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{endpoint}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if number.is_active {
                                                    view! {
                                                        <span class="badge badge--success">"Active"</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span class="badge badge--neutral">"Released"</span>
                                                    }
                                                        .into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{created}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {number
                                                    .is_active
                                                    .then(|| {
                                                        let target = release_target.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| release(target.clone())
                                                            >
                                                                "Release"
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
                show_wizard
                    .get()
                    .then(|| {
                        view! {
                            <super::create::ProvisionNumberModal
                                on_close=Callback::new(move |_| show_wizard.set(false))
                                on_provisioned=Callback::new(move |_| {
                                    show_wizard.set(false);
                                    controller.refresh();
                                })
                            />
                        }
                    })
            }}
        </div>
    }
}
