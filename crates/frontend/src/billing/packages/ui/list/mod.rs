pub mod state;

use contracts::billing::packages::Package;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::packages::api;
use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_money;
use crate::shared::list_controller::ListController;
use state::PackagesFilter;

#[component]
pub fn PackagesScreen() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<PackagesFilter, Package>::mount(
        state::VIEW_KEY,
        |filter, page| async move { api::fetch_packages(&filter, page).await },
    );

    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<Package>);

    let deactivate = move |package: Package| {
        if !confirm(&format!(
            "Deactivate package \"{}\"? Existing subscriptions keep it.",
            package.name
        )) {
            return;
        }
        spawn_local(async move {
            match api::deactivate_package(package.id).await {
                Ok(()) => {
                    notify.success(format!("Package \"{}\" deactivated", package.name));
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
                        "New package"
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
                            controller.update_filter(|f| f.active = event_target_value(&ev));
                        }
                        prop:value=move || filter_sig.get().active
                    >
                        <option value="">"All packages"</option>
                        <option value="true">"Active"</option>
                        <option value="false">"Inactive"</option>
                    </select>
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
                            <TableHeaderCell>"Name"</TableHeaderCell>
                            <TableHeaderCell>"Description"</TableHeaderCell>
                            <TableHeaderCell>"Minutes"</TableHeaderCell>
                            <TableHeaderCell>"Price"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|p| p.id
                            children=move |package| {
                                let price = format_money(package.price, &package.currency);
                                let edit_target = package.clone();
                                let deactivate_target = package.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="font-weight: 500;">
                                                    {package.name.clone()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {package.description.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {package.included_minutes.to_string()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{price}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if package.is_active {
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
                                                {package
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
                            <super::edit::PackageEditModal
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
                    .map(|package| {
                        view! {
                            <super::edit::PackageEditModal
                                existing=Some(package)
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
