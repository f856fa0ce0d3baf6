use contracts::billing::packages::{CreatePackageDto, Package, UpdatePackageDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::packages::api;
use crate::layout::modal::ModalFrame;
use crate::layout::notify::{use_notify, AlertData};
use crate::shared::components::alert::Alert;
use crate::shared::forms::{non_empty, parse_amount, parse_count};

#[derive(Debug, Clone, Default)]
struct PackageForm {
    name: String,
    description: String,
    included_minutes: String,
    price: String,
    currency: String,
}

impl PackageForm {
    fn empty() -> Self {
        Self {
            currency: "EUR".to_string(),
            ..Default::default()
        }
    }

    fn from_package(package: &Package) -> Self {
        Self {
            name: package.name.clone(),
            description: package.description.clone().unwrap_or_default(),
            included_minutes: package.included_minutes.to_string(),
            price: package.price.to_string(),
            currency: package.currency.clone(),
        }
    }
}

#[component]
pub fn PackageEditModal(
    existing: Option<Package>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let existing_id = existing.as_ref().map(|p| p.id);
    let form = RwSignal::new(
        existing
            .as_ref()
            .map(PackageForm::from_package)
            .unwrap_or_else(PackageForm::empty),
    );
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<AlertData>);

    let is_edit = existing_id.is_some();
    let title = if is_edit { "Edit package" } else { "New package" };

    let save = move || {
        if busy.get_untracked() {
            return;
        }
        let f = form.get_untracked();
        if f.name.trim().is_empty() {
            alert.set(Some(AlertData::warning("Package name is required")));
            return;
        }
        let included_minutes = match parse_count(&f.included_minutes) {
            Ok(n) => n,
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };
        let price = match parse_amount(&f.price) {
            Ok(v) if v >= 0.0 => v,
            Ok(_) => {
                alert.set(Some(AlertData::warning("Price cannot be negative")));
                return;
            }
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };

        busy.set(true);
        alert.set(None);
        spawn_local(async move {
            let result = match existing_id {
                Some(id) => api::update_package(&UpdatePackageDto {
                    id,
                    name: f.name.trim().to_string(),
                    description: non_empty(&f.description),
                    included_minutes,
                    price,
                })
                .await
                .map(|_| ()),
                None => api::create_package(&CreatePackageDto {
                    name: f.name.trim().to_string(),
                    description: non_empty(&f.description),
                    included_minutes,
                    price,
                    currency: f.currency.clone(),
                })
                .await
                .map(|_| ()),
            };
            let _ = busy.try_set(false);
            match result {
                Ok(()) => {
                    notify.success(if is_edit { "Package updated" } else { "Package created" });
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
                <label class="form__label">"Name"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <label class="form__label">"Description"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                />
                <label class="form__label">"Included minutes"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().included_minutes
                    on:input=move |ev| {
                        form.update(|f| f.included_minutes = event_target_value(&ev))
                    }
                />
                <label class="form__label">"Price"</label>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || form.get().price
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
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
