use contracts::billing::coupons::{Coupon, CreateCouponDto, UpdateCouponDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::coupons::api;
use crate::layout::modal::ModalFrame;
use crate::layout::notify::{use_notify, AlertData};
use crate::shared::components::alert::Alert;
use crate::shared::forms::{non_empty, parse_amount, parse_count};

#[derive(Debug, Clone, Default)]
struct CouponForm {
    code: String,
    description: String,
    discount_type: String,
    discount_value: String,
    max_redemptions: String,
    valid_from: String,
    valid_until: String,
}

impl CouponForm {
    fn empty() -> Self {
        Self {
            discount_type: "percent".to_string(),
            ..Default::default()
        }
    }

    fn from_coupon(coupon: &Coupon) -> Self {
        Self {
            code: coupon.code.clone(),
            description: coupon.description.clone().unwrap_or_default(),
            discount_type: coupon.discount_type.clone(),
            discount_value: coupon.discount_value.to_string(),
            max_redemptions: coupon
                .max_redemptions
                .map(|n| n.to_string())
                .unwrap_or_default(),
            valid_from: coupon.valid_from.clone().unwrap_or_default(),
            valid_until: coupon.valid_until.clone().unwrap_or_default(),
        }
    }
}

#[component]
pub fn CouponEditModal(
    existing: Option<Coupon>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let existing_id = existing.as_ref().map(|c| c.id);
    let form = RwSignal::new(
        existing
            .as_ref()
            .map(CouponForm::from_coupon)
            .unwrap_or_else(CouponForm::empty),
    );
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<AlertData>);

    let is_edit = existing_id.is_some();
    let title = if is_edit { "Edit coupon" } else { "New coupon" };

    let save = move || {
        if busy.get_untracked() {
            return;
        }
        let f = form.get_untracked();
        if !is_edit && f.code.trim().is_empty() {
            alert.set(Some(AlertData::warning("Coupon code is required")));
            return;
        }
        let discount_value = match parse_amount(&f.discount_value) {
            Ok(v) if v > 0.0 => v,
            Ok(_) => {
                alert.set(Some(AlertData::warning("Discount must be positive")));
                return;
            }
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };
        let max_redemptions = if f.max_redemptions.trim().is_empty() {
            None
        } else {
            match parse_count(&f.max_redemptions) {
                Ok(n) => Some(n),
                Err(message) => {
                    alert.set(Some(AlertData::warning(message)));
                    return;
                }
            }
        };

        busy.set(true);
        alert.set(None);
        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_coupon(&UpdateCouponDto {
                    id,
                    description: non_empty(&f.description),
                    discount_type: f.discount_type.clone(),
                    discount_value,
                    max_redemptions,
                    valid_from: non_empty(&f.valid_from),
                    valid_until: non_empty(&f.valid_until),
                })
                .await
                .map(|_| ()),
                None => api::create_coupon(&CreateCouponDto {
                    code: f.code.trim().to_uppercase(),
                    description: non_empty(&f.description),
                    discount_type: f.discount_type.clone(),
                    discount_value,
                    max_redemptions,
                    valid_from: non_empty(&f.valid_from),
                    valid_until: non_empty(&f.valid_until),
                })
                .await
                .map(|_| ()),
            };
            let _ = busy.try_set(false);
            match result {
                Ok(()) => {
                    notify.success(if is_edit { "Coupon updated" } else { "Coupon created" });
                    on_saved.run(());
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
        <ModalFrame title=title on_close=on_close>
            <Alert alert=alert on_dismiss=Callback::new(move |_| alert.set(None)) />
            <div class="form">
                <label class="form__label">"Code"</label>
                <input
                    type="text"
                    class="form__input"
                    disabled=is_edit
                    prop:value=move || form.get().code
                    on:input=move |ev| form.update(|f| f.code = event_target_value(&ev))
                />
                <label class="form__label">"Description"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <label class="form__label">"Discount"</label>
                <div class="form__row">
                    <select
                        class="form__input"
                        prop:value=move || form.get().discount_type
                        on:change=move |ev| {
                            form.update(|f| f.discount_type = event_target_value(&ev))
                        }
                    >
                        <option value="percent">"Percent"</option>
                        <option value="fixed">"Fixed amount"</option>
                    </select>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.get().discount_value
                        on:input=move |ev| {
                            form.update(|f| f.discount_value = event_target_value(&ev))
                        }
                    />
                </div>
                <label class="form__label">"Max redemptions (empty = unlimited)"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().max_redemptions
                    on:input=move |ev| form.update(|f| f.max_redemptions = event_target_value(&ev))
                />
                <label class="form__label">"Valid from"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || form.get().valid_from
                    on:change=move |ev| form.update(|f| f.valid_from = event_target_value(&ev))
                />
                <label class="form__label">"Valid until"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || form.get().valid_until
                    on:change=move |ev| form.update(|f| f.valid_until = event_target_value(&ev))
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
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
