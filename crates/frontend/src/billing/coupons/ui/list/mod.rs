pub mod state;

use contracts::billing::coupons::Coupon;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::coupons::api;
use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::list_controller::ListController;
use state::CouponsFilter;

#[component]
pub fn CouponsScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<CouponsFilter, Coupon>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_coupons(&filter, page).await },
    );

    let search_input = RwSignal::new(controller.filter().search);
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<Coupon>);

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let deactivate = move |coupon: Coupon| {
        if !confirm(&format!(
            "Deactivate coupon \"{}\"? Past redemptions are kept.",
            coupon.code
        )) {
            return;
        }
        spawn_local(async move {
            match api::deactivate_coupon(coupon.id).await {
                Ok(()) => {
                    notify.success(format!("Coupon \"{}\" deactivated", coupon.code));
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
                        "New coupon"
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
                        <option value="active">"Active"</option>
                        <option value="inactive">"Inactive"</option>
                    </select>
                    <input
                        type="text"
                        class="filter-panel__search"
                        placeholder="Code or description..."
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
                            <TableHeaderCell>"Code"</TableHeaderCell>
                            <TableHeaderCell>"Description"</TableHeaderCell>
                            <TableHeaderCell>"Discount"</TableHeaderCell>
                            <TableHeaderCell>"Redemptions"</TableHeaderCell>
                            <TableHeaderCell>"Validity"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|c| c.id
                            children=move |coupon| {
                                let discount = if coupon.discount_type == "percent" {
                                    format!("{}%", coupon.discount_value)
                                } else {
                                    format!("{:.2}", coupon.discount_value)
                                };
                                let redemptions = match coupon.max_redemptions {
                                    Some(max) => format!("{} / {}", coupon.redemption_count, max),
                                    None => coupon.redemption_count.to_string(),
                                };
                                let validity = match (&coupon.valid_from, &coupon.valid_until) {
                                    (Some(from), Some(until)) => {
                                        format!("{} – {}", format_date(from), format_date(until))
                                    }
                                    (None, Some(until)) => format!("until {}", format_date(until)),
                                    (Some(from), None) => format!("from {}", format_date(from)),
                                    (None, None) => "unlimited".to_string(),
                                };
                                let edit_target = coupon.clone();
                                let deactivate_target = coupon.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">
                                                    {coupon.code.clone()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {coupon.description.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{discount}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{redemptions}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{validity}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if coupon.is_active {
                                                    view! {
                                                        <span class="badge badge--success">"Active"</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span class="badge badge--neutral">"Inactive"</span>
                                                    }
                                                        .into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(edit_target.clone()))
                                                >
                                                    "Edit"
                                                </Button>
                                                {coupon
                                                    .is_active
                                                    .then(|| {
                                                        let target = deactivate_target.clone();
                                                        view! {
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| deactivate(target.clone())
                                                            >
                                                                "Deactivate"
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
                            <super::edit::CouponEditModal
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
                    .map(|coupon| {
                        view! {
                            <super::edit::CouponEditModal
                                existing=Some(coupon)
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
