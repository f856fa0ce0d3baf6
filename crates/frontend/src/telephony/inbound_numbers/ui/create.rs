//! Provisioning wizard modal.
//!
//! The wizard state lives in a signal created on open and dropped on close;
//! a response arriving after the modal closed hits a disposed signal and is
//! ignored. Each async step (owner verification, credential test, submit)
//! has its own busy flag inside the wizard struct.

use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::modal::ModalFrame;
use crate::layout::notify::{use_notify, AlertData};
use crate::shared::components::alert::Alert;
use crate::shared::components::user_lookup::UserLookup;
use crate::shared::date_utils::format_datetime;
use crate::system::users::api as users_api;
use crate::telephony::inbound_numbers::api;
use crate::telephony::inbound_numbers::wizard::{CredField, ProvisionWizard};

#[component]
pub fn ProvisionNumberModal(
    on_close: Callback<()>,
    on_provisioned: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let wizard = RwSignal::new(ProvisionWizard::new());

    let on_user_selected = Callback::new(move |user: User| {
        if !wizard
            .try_update(|w| w.begin_user_verification())
            .unwrap_or(false)
        {
            return;
        }
        spawn_local(async move {
            // The picked row may be stale; re-fetch the user by id before
            // accepting it as the owner.
            let result = match users_api::get_user(user.id).await {
                Ok(current) => Ok(current),
                Err(err) => {
                    if !err.should_display() {
                        return;
                    }
                    Err(err.message())
                }
            };
            let _ = wizard.try_update(|w| w.resolve_user(result));
        });
    });

    let run_test = move || {
        match wizard.try_update(|w| w.begin_credential_test()) {
            Some(Ok(credential)) => {
                spawn_local(async move {
                    let outcome = match api::test_credential(&credential).await {
                        Ok(resp) if resp.ok => Ok(resp.verified_at),
                        Ok(resp) => Err(resp
                            .message
                            .unwrap_or_else(|| "Credential test failed".to_string())),
                        Err(err) => {
                            if !err.should_display() {
                                return;
                            }
                            Err(err.message())
                        }
                    };
                    let _ = wizard.try_update(|w| w.resolve_credential_test(credential, outcome));
                });
            }
            Some(Err(message)) if !message.is_empty() => {
                wizard.update(|w| w.alert = Some(AlertData::warning(message)));
            }
            _ => {}
        }
    };

    let submit = move || {
        let Some(dto) = wizard.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::create_inbound_number(&dto).await {
                Ok(number) => {
                    notify.success(format!("Number {} provisioned", number.phone_number));
                    on_provisioned.run(());
                }
                Err(err) => {
                    if err.should_display() {
                        let _ = wizard.try_update(|w| w.fail_submit(err.message()));
                    }
                }
            }
        });
    };

    let wizard_alert = Signal::derive(move || wizard.with(|w| w.alert.clone()));
    let can_submit = Signal::derive(move || wizard.with(|w| w.can_submit()));
    let testing = Signal::derive(move || wizard.with(|w| w.testing));
    let submitting = Signal::derive(move || wizard.with(|w| w.submitting));

    view! {
        <ModalFrame title="Provision inbound number" on_close=on_close>
            <Alert
                alert=wizard_alert
                on_dismiss=Callback::new(move |_| wizard.update(|w| w.alert = None))
            />

            <section class="wizard__step">
                <h3 class="wizard__step-title">"1. Owner"</h3>
                {move || {
                    match wizard.with(|w| w.verified_user.clone()) {
                        Some(user) => {
                            let label = match &user.full_name {
                                Some(name) => format!("{} ({})", user.username, name),
                                None => user.username.clone(),
                            };
                            view! {
                                <div class="wizard__user-card">
                                    <span class="badge badge--success">"Verified"</span>
                                    <span class="wizard__user-name">{label}</span>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| wizard.update(|w| w.clear_user())
                                    >
                                        "Change"
                                    </Button>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <UserLookup
                                    on_select=on_user_selected
                                    placeholder="Search owner by username or name..."
                                />
                                {move || {
                                    wizard
                                        .with(|w| w.verifying_user)
                                        .then(|| {
                                            view! {
                                                <span class="wizard__spinner">"Verifying..."</span>
                                            }
                                        })
                                }}
                            }
                                .into_any()
                        }
                    }
                }}
            </section>

            <section class="wizard__step">
                <h3 class="wizard__step-title">"2. SIP credentials"</h3>
                <div class="form">
                    <label class="form__label">"Host"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || wizard.with(|w| w.credentials.host.clone())
                        on:input=move |ev| {
                            wizard
                                .update(|w| {
                                    w.edit_credential(CredField::Host, event_target_value(&ev))
                                });
                        }
                    />
                    <label class="form__label">"Port"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || wizard.with(|w| w.credentials.port.clone())
                        on:input=move |ev| {
                            wizard
                                .update(|w| {
                                    w.edit_credential(CredField::Port, event_target_value(&ev))
                                });
                        }
                    />
                    <label class="form__label">"Username"</label>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || wizard.with(|w| w.credentials.username.clone())
                        on:input=move |ev| {
                            wizard
                                .update(|w| {
                                    w.edit_credential(CredField::Username, event_target_value(&ev))
                                });
                        }
                    />
                    <label class="form__label">"Password"</label>
                    <input
                        type="password"
                        class="form__input"
                        prop:value=move || wizard.with(|w| w.credentials.password.clone())
                        on:input=move |ev| {
                            wizard
                                .update(|w| {
                                    w.edit_credential(CredField::Password, event_target_value(&ev))
                                });
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| run_test()
                    disabled=Signal::derive(move || testing.get())
                >
                    {move || if testing.get() { "Testing..." } else { "Test connection" }}
                </Button>

                {move || {
                    let tested: Vec<_> = wizard
                        .with(|w| w.tested.clone())
                        .into_iter()
                        .enumerate()
                        .collect();
                    (!tested.is_empty())
                        .then(|| {
                            view! {
                                <div class="wizard__tested-list">
                                    {tested
                                        .into_iter()
                                        .map(|(index, entry)| {
                                            let label = format!(
                                                "{}@{}:{}",
                                                entry.credential.username,
                                                entry.credential.host,
                                                entry.credential.port,
                                            );
                                            let verified = format_datetime(&entry.verified_at);
                                            view! {
                                                <button
                                                    class="wizard__tested-item"
                                                    class=(
                                                        "wizard__tested-item--selected",
                                                        move || wizard.with(|w| w.selected == Some(index)),
                                                    )
                                                    on:click=move |_| {
                                                        wizard
                                                            .update(|w| {
                                                                w.select_tested(index);
                                                            });
                                                    }
                                                >
                                                    {label}
                                                    <span class="wizard__tested-time">
                                                        {format!("verified {}", verified)}
                                                    </span>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </section>

            <section class="wizard__step">
                <h3 class="wizard__step-title">"3. Number"</h3>
                <div class="form">
                    <label class="form__label">"Phone number"</label>
                    <input
                        type="text"
                        class="form__input"
                        placeholder="+49301112233"
                        prop:value=move || wizard.with(|w| w.phone_number.clone())
                        on:input=move |ev| {
                            wizard.update(|w| w.phone_number = event_target_value(&ev));
                        }
                    />
                    <label class="form__label">"Provider"</label>
                    <select
                        class="form__input"
                        prop:value=move || wizard.with(|w| w.provider.clone())
                        on:change=move |ev| {
                            wizard.update(|w| w.provider = event_target_value(&ev));
                        }
                    >
                        <option value="">"Select provider..."</option>
                        <option value="telnyx">"Telnyx"</option>
                        <option value="twilio">"Twilio"</option>
                        <option value="bandwidth">"Bandwidth"</option>
                    </select>
                </div>
            </section>

            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || !can_submit.get())
                >
                    {move || if submitting.get() { "Provisioning..." } else { "Provision" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
