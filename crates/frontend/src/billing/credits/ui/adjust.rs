use contracts::billing::credits::AdjustCreditDto;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::credits::api;
use crate::layout::modal::ModalFrame;
use crate::layout::notify::{use_notify, AlertData};
use crate::shared::components::alert::Alert;
use crate::shared::components::user_lookup::UserLookup;
use crate::shared::forms::parse_amount;

/// Manual credit adjustment: pick a user, enter a signed amount and a reason.
#[component]
pub fn AdjustCreditModal(on_close: Callback<()>, on_adjusted: Callback<()>) -> impl IntoView {
    let notify = use_notify();
    let selected_user = RwSignal::new(None::<User>);
    let amount = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<AlertData>);

    let save = move || {
        if busy.get_untracked() {
            return;
        }
        let Some(user) = selected_user.get_untracked() else {
            alert.set(Some(AlertData::warning("Pick a user first")));
            return;
        };
        let value = match parse_amount(&amount.get_untracked()) {
            Ok(v) if v != 0.0 => v,
            Ok(_) => {
                alert.set(Some(AlertData::warning("Amount cannot be zero")));
                return;
            }
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };
        let reason_text = reason.get_untracked().trim().to_string();
        if reason_text.is_empty() {
            alert.set(Some(AlertData::warning("A reason is required for the ledger")));
            return;
        }

        busy.set(true);
        alert.set(None);
        spawn_local(async move {
            let dto = AdjustCreditDto {
                user_id: user.id,
                amount: value,
                reason: reason_text,
            };
            let result = api::adjust_credit(&dto).await;
            let _ = busy.try_set(false);
            match result {
                Ok(entry) => {
                    notify.success(format!(
                        "Credit of {} adjusted by {:+.2} (balance {:.2})",
                        entry.user_name, entry.delta, entry.balance_after
                    ));
                    on_adjusted.run(());
                }
                Err(err) => {
                    if err.should_display() {
                        let _ = alert.try_set(Some(AlertData::danger(err.message())));
                    }
                }
            }
        });
    };

    view! {
        <ModalFrame title="Adjust credit" on_close=on_close>
            <Alert alert=alert on_dismiss=Callback::new(move |_| alert.set(None)) />
            <div class="form">
                <label class="form__label">"User"</label>
                {move || match selected_user.get() {
                    Some(user) => {
                        view! {
                            <div class="form__static">
                                {format!("{} (balance {:.2})", user.username, user.credit_balance)}
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| selected_user.set(None)
                                >
                                    "Change"
                                </Button>
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <UserLookup on_select=Callback::new(move |user| {
                                selected_user.set(Some(user));
                            }) />
                        }
                            .into_any()
                    }
                }}
                <label class="form__label">"Amount (negative deducts)"</label>
                <input
                    type="text"
                    class="form__input"
                    placeholder="25.00 or -25.00"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <label class="form__label">"Reason"</label>
                <input
                    type="text"
                    class="form__input"
                    placeholder="Goodwill for outage on 2026-08-02"
                    prop:value=move || reason.get()
                    on:input=move |ev| reason.set(event_target_value(&ev))
                />
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
                    {move || if busy.get() { "Booking..." } else { "Book adjustment" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
