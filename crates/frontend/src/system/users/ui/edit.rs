use contracts::system::users::{CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::modal::ModalFrame;
use crate::layout::notify::{use_notify, AlertData};
use crate::shared::components::alert::Alert;
use crate::shared::forms::non_empty;
use crate::system::users::api;

/// Form state behind the create/edit modal, all fields enumerated up front.
#[derive(Debug, Clone, Default)]
struct UserForm {
    username: String,
    password: String,
    email: String,
    full_name: String,
    is_admin: bool,
    is_active: bool,
}

impl UserForm {
    fn empty() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            password: String::new(),
            email: user.email.clone().unwrap_or_default(),
            full_name: user.full_name.clone().unwrap_or_default(),
            is_admin: user.is_admin,
            is_active: user.is_active,
        }
    }
}

#[component]
pub fn UserEditModal(
    existing: Option<User>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let existing_id = existing.as_ref().map(|u| u.id);
    let form = RwSignal::new(
        existing
            .as_ref()
            .map(UserForm::from_user)
            .unwrap_or_else(UserForm::empty),
    );
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<AlertData>);

    let is_edit = existing_id.is_some();
    let title = if is_edit { "Edit user" } else { "New user" };

    let save = move || {
        if busy.get_untracked() {
            return;
        }
        let f = form.get_untracked();
        if !is_edit {
            if f.username.trim().is_empty() {
                alert.set(Some(AlertData::warning("Username is required")));
                return;
            }
            if f.password.len() < 8 {
                alert.set(Some(AlertData::warning("Password must be at least 8 characters")));
                return;
            }
        }
        busy.set(true);
        alert.set(None);
        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_user(&UpdateUserDto {
                    id,
                    email: non_empty(&f.email),
                    full_name: non_empty(&f.full_name),
                    is_active: f.is_active,
                    is_admin: f.is_admin,
                })
                .await
                .map(|_| ()),
                None => api::create_user(&CreateUserDto {
                    username: f.username.trim().to_string(),
                    password: f.password.clone(),
                    email: non_empty(&f.email),
                    full_name: non_empty(&f.full_name),
                    is_admin: f.is_admin,
                })
                .await
                .map(|_| ()),
            };
            let _ = busy.try_set(false);
            match result {
                Ok(()) => {
                    notify.success(if is_edit { "User updated" } else { "User created" });
                    on_saved.run(());
                }
                Err(err) => {
                    // keep the modal open with everything entered intact
                    if err.should_display() {
                        let _ = alert.try_set(Some(AlertData::danger(err.message())));
                    }
                }
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close>
            <Alert alert=alert on_dismiss=Callback::new(move |_| alert.set(None)) />
            <div class="form">
                <label class="form__label">"Username"</label>
                <input
                    type="text"
                    class="form__input"
                    disabled=is_edit
                    prop:value=move || form.get().username
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
                {(!is_edit)
                    .then(|| {
                        view! {
                            <label class="form__label">"Password"</label>
                            <input
                                type="password"
                                class="form__input"
                                prop:value=move || form.get().password
                                on:input=move |ev| {
                                    form.update(|f| f.password = event_target_value(&ev))
                                }
                            />
                        }
                    })}
                <label class="form__label">"Full name"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().full_name
                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                />
                <label class="form__label">"Email"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().email
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().is_admin
                        on:change=move |ev| form.update(|f| f.is_admin = event_target_checked(&ev))
                    />
                    "Administrator"
                </label>
                {is_edit
                    .then(|| {
                        view! {
                            <label class="form__checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.get().is_active
                                    on:change=move |ev| {
                                        form.update(|f| f.is_active = event_target_checked(&ev))
                                    }
                                />
                                "Active"
                            </label>
                        }
                    })}
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save()
                    disabled=Signal::derive(move || busy.get())
                >
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
