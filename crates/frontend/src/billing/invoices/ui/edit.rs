use contracts::billing::invoices::{CreateInvoiceDto, Invoice, InvoiceItem, UpdateInvoiceDto};
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::invoices::api;
use crate::billing::invoices::totals::{compute_totals, line_total, InvoiceTotals};
use crate::layout::modal::ModalFrame;
use crate::layout::notify::{use_notify, AlertData};
use crate::shared::components::alert::Alert;
use crate::shared::components::user_lookup::UserLookup;
use crate::shared::forms::parse_amount;

#[derive(Debug, Clone, PartialEq)]
struct ItemForm {
    description: String,
    quantity: String,
    unit_price: String,
}

impl ItemForm {
    fn empty() -> Self {
        Self {
            description: String::new(),
            quantity: "1".to_string(),
            unit_price: "0".to_string(),
        }
    }

    fn from_item(item: &InvoiceItem) -> Self {
        Self {
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: item.unit_price.to_string(),
        }
    }

    /// Lenient parse for live display; unparseable rows count as zero.
    fn display_total(&self) -> f64 {
        let quantity = parse_amount(&self.quantity).unwrap_or(0.0);
        let unit_price = parse_amount(&self.unit_price).unwrap_or(0.0);
        line_total(quantity, unit_price)
    }

    /// Strict parse used at save time.
    fn to_item(&self) -> Result<InvoiceItem, String> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Every line needs a description".to_string());
        }
        let quantity = parse_amount(&self.quantity)?;
        let unit_price = parse_amount(&self.unit_price)?;
        Ok(InvoiceItem {
            description: description.to_string(),
            quantity,
            unit_price,
            total: line_total(quantity, unit_price),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct InvoiceForm {
    currency: String,
    due_date: String,
    discount_amount: String,
    tax_rate: String,
    items: Vec<ItemForm>,
}

impl InvoiceForm {
    fn empty() -> Self {
        Self {
            currency: "EUR".to_string(),
            due_date: String::new(),
            discount_amount: "0".to_string(),
            tax_rate: "0.19".to_string(),
            items: vec![ItemForm::empty()],
        }
    }

    fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            currency: invoice.currency.clone(),
            due_date: invoice.due_date.clone().unwrap_or_default(),
            discount_amount: invoice.discount_amount.to_string(),
            tax_rate: invoice.tax_rate.to_string(),
            items: invoice.items.iter().map(ItemForm::from_item).collect(),
        }
    }

    /// Live totals while editing; the backend recomputes on write.
    fn display_totals(&self) -> InvoiceTotals {
        let items: Vec<InvoiceItem> = self
            .items
            .iter()
            .map(|row| InvoiceItem {
                description: String::new(),
                quantity: 0.0,
                unit_price: 0.0,
                total: row.display_total(),
            })
            .collect();
        let discount = parse_amount(&self.discount_amount).unwrap_or(0.0);
        let tax_rate = parse_amount(&self.tax_rate).unwrap_or(0.0);
        compute_totals(&items, discount, tax_rate)
    }

    fn to_items(&self) -> Result<Vec<InvoiceItem>, String> {
        if self.items.is_empty() {
            return Err("An invoice needs at least one line".to_string());
        }
        self.items.iter().map(|row| row.to_item()).collect()
    }
}

#[component]
pub fn InvoiceEditModal(
    existing: Option<Invoice>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let existing_id = existing.as_ref().map(|i| i.id);
    let existing_user_name = existing.as_ref().map(|i| i.user_name.clone());
    let form = RwSignal::new(
        existing
            .as_ref()
            .map(InvoiceForm::from_invoice)
            .unwrap_or_else(InvoiceForm::empty),
    );
    let selected_user = RwSignal::new(None::<User>);
    let busy = RwSignal::new(false);
    let alert = RwSignal::new(None::<AlertData>);

    let is_edit = existing_id.is_some();
    let title = if is_edit { "Edit invoice" } else { "New invoice" };

    let save = move || {
        if busy.get_untracked() {
            return;
        }
        let f = form.get_untracked();
        let items = match f.to_items() {
            Ok(items) => items,
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };
        let discount_amount = match parse_amount(&f.discount_amount) {
            Ok(v) => v,
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };
        let tax_rate = match parse_amount(&f.tax_rate) {
            Ok(v) => v,
            Err(message) => {
                alert.set(Some(AlertData::warning(message)));
                return;
            }
        };
        let due_date = {
            let trimmed = f.due_date.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        enum SaveTarget {
            Update(uuid::Uuid),
            Create(uuid::Uuid),
        }
        let target = match existing_id {
            Some(id) => SaveTarget::Update(id),
            None => match selected_user.get_untracked() {
                Some(user) => SaveTarget::Create(user.id),
                None => {
                    alert.set(Some(AlertData::warning("Pick the billed user first")));
                    return;
                }
            },
        };

        busy.set(true);
        alert.set(None);
        spawn_local(async move {
            let result = match target {
                SaveTarget::Update(id) => api::update_invoice(&UpdateInvoiceDto {
                    id,
                    items,
                    discount_amount,
                    tax_rate,
                    due_date,
                })
                .await
                .map(|_| ()),
                SaveTarget::Create(user_id) => api::create_invoice(&CreateInvoiceDto {
                    user_id,
                    currency: f.currency.clone(),
                    items,
                    discount_amount,
                    tax_rate,
                    due_date,
                })
                .await
                .map(|_| ()),
            };
            let _ = busy.try_set(false);
            match result {
                Ok(()) => {
                    notify.success(if is_edit { "Invoice updated" } else { "Invoice created" });
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
                {
                    let existing_user_name = existing_user_name.clone();
                    move || match existing_user_name.clone() {
                    Some(name) => {
                        view! {
                            <label class="form__label">"Billed user"</label>
                            <div class="form__static">{name}</div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <label class="form__label">"Billed user"</label>
                            {move || match selected_user.get() {
                                Some(user) => {
                                    view! {
                                        <div class="form__static">
                                            {user.username.clone()}
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
                        }
                            .into_any()
                    }
                }}

                <label class="form__label">"Due date"</label>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || form.get().due_date
                    on:change=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                />
            </div>

            <table class="invoice-items">
                <thead>
                    <tr>
                        <th>"Description"</th>
                        <th>"Qty"</th>
                        <th>"Unit price"</th>
                        <th>"Total"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = form.get().items;
                        let count = rows.len();
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, row)| {
                                let row_total = format!("{:.2}", row.display_total());
                                view! {
                                    <tr>
                                        <td>
                                            <input
                                                type="text"
                                                class="invoice-items__description"
                                                prop:value=row.description.clone()
                                                on:input=move |ev| {
                                                    form.update(|f| {
                                                        if let Some(item) = f.items.get_mut(index) {
                                                            item.description = event_target_value(&ev);
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                class="invoice-items__number"
                                                prop:value=row.quantity.clone()
                                                on:input=move |ev| {
                                                    form.update(|f| {
                                                        if let Some(item) = f.items.get_mut(index) {
                                                            item.quantity = event_target_value(&ev);
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td>
                                            <input
                                                type="text"
                                                class="invoice-items__number"
                                                prop:value=row.unit_price.clone()
                                                on:input=move |ev| {
                                                    form.update(|f| {
                                                        if let Some(item) = f.items.get_mut(index) {
                                                            item.unit_price = event_target_value(&ev);
                                                        }
                                                    });
                                                }
                                            />
                                        </td>
                                        <td class="invoice-items__total">{row_total}</td>
                                        <td>
                                            {(count > 1)
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="invoice-items__remove"
                                                            on:click=move |_| {
                                                                form.update(|f| {
                                                                    if f.items.len() > 1 {
                                                                        f.items.remove(index);
                                                                    }
                                                                });
                                                            }
                                                        >
                                                            "×"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| form.update(|f| f.items.push(ItemForm::empty()))
            >
                "Add line"
            </Button>

            <div class="form form--inline">
                <label class="form__label">"Discount"</label>
                <input
                    type="text"
                    class="invoice-items__number"
                    prop:value=move || form.get().discount_amount
                    on:input=move |ev| form.update(|f| f.discount_amount = event_target_value(&ev))
                />
                <label class="form__label">"Tax rate"</label>
                <input
                    type="text"
                    class="invoice-items__number"
                    prop:value=move || form.get().tax_rate
                    on:input=move |ev| form.update(|f| f.tax_rate = event_target_value(&ev))
                />
            </div>

            <div class="invoice-totals">
                {move || {
                    let totals = form.get().display_totals();
                    view! {
                        <div class="invoice-totals__row">
                            <span>"Subtotal"</span>
                            <span>{format!("{:.2}", totals.subtotal)}</span>
                        </div>
                        <div class="invoice-totals__row">
                            <span>"Discount"</span>
                            <span>{format!("-{:.2}", totals.discount_amount)}</span>
                        </div>
                        <div class="invoice-totals__row">
                            <span>"Tax"</span>
                            <span>{format!("{:.2}", totals.tax_amount)}</span>
                        </div>
                        <div class="invoice-totals__row invoice-totals__row--grand">
                            <span>"Total"</span>
                            <span>{format!("{:.2}", totals.grand_total)}</span>
                        </div>
                    }
                }}
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
