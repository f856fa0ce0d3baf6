pub mod state;

use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notify::use_notify;
use crate::shared::browser::confirm;
use crate::shared::components::alert::Alert;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_datetime;
use crate::shared::list_controller::ListController;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::api;
use state::UsersFilter;

#[component]
pub fn UsersScreen() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UsersList />
        </RequireAdmin>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let notify = use_notify();
    let controller = ListController::<UsersFilter, User>::mount(state::VIEW_KEY, |filter, page| async move {
        api::fetch_users(&filter, page).await
    });

    let search_input = RwSignal::new(controller.filter().search);
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<User>);

    let apply_search = move || {
        controller.update_filter(|f| f.search = search_input.get_untracked().trim().to_string());
    };

    let deactivate = move |user: User| {
        if !confirm(&format!(
            "Deactivate user \"{}\"? The account is kept and can be reactivated later.",
            user.username
        )) {
            return;
        }
        spawn_local(async move {
            match api::deactivate_user(user.id).await {
                Ok(()) => {
                    notify.success(format!("User \"{}\" deactivated", user.username));
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
                        "New user"
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
                        placeholder="Username, name or email..."
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
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            search_input.set(String::new());
                            controller.set_filter(UsersFilter::default());
                        }
                    >
                        "Reset"
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
                            <TableHeaderCell>"Username"</TableHeaderCell>
                            <TableHeaderCell>"Full name"</TableHeaderCell>
                            <TableHeaderCell>"Email"</TableHeaderCell>
                            <TableHeaderCell>"Role"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Credit"</TableHeaderCell>
                            <TableHeaderCell>"Created"</TableHeaderCell>
                            <TableHeaderCell>"Last login"</TableHeaderCell>
                            <TableHeaderCell></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || items.get()
                            key=|u| u.id
                            children=move |user| {
                                let created = format_datetime(&user.created_at);
                                let last_login = user
                                    .last_login_at
                                    .as_deref()
                                    .map(format_datetime)
                                    .unwrap_or_else(|| "-".to_string());
                                let edit_user = user.clone();
                                let deactivate_user = user.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">
                                                    {user.username.clone()}
                                                </span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {user.full_name.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {user.email.clone().unwrap_or_default()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if user.is_admin {
                                                    view! {
                                                        <span class="badge badge--warning">"Admin"</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span class="badge badge--neutral">"User"</span>
                                                    }
                                                        .into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if user.is_active {
                                                    view! {
                                                        <span class="badge badge--success">"Active"</span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span class="badge badge--error">"Inactive"</span>
                                                    }
                                                        .into_any()
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format!("{:.2}", user.credit_balance)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{created}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{last_login}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(edit_user.clone()))
                                                >
                                                    "Edit"
                                                </Button>
                                                {user
                                                    .is_active
                                                    .then(|| {
                                                        let target = deactivate_user.clone();
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
                            <super::edit::UserEditModal
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
                    .map(|user| {
                        view! {
                            <super::edit::UserEditModal
                                existing=Some(user)
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
