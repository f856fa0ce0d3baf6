use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::billing::coupons::ui::list::CouponsScreen;
use crate::billing::credits::ui::list::CreditsScreen;
use crate::billing::invoices::ui::list::InvoicesScreen;
use crate::billing::packages::ui::list::PackagesScreen;
use crate::billing::payments::ui::list::PaymentsScreen;
use crate::billing::subscriptions::ui::list::SubscriptionsScreen;
use crate::layout::sidebar::Sidebar;
use crate::shared::query;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::users::ui::list::UsersScreen;
use crate::telephony::calls::ui::list::CallsScreen;
use crate::telephony::inbound_numbers::ui::list::InboundNumbersScreen;

/// The screens of the console. The active one is carried in the `view` URL
/// parameter; the remaining query keys belong to that screen's filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Calls,
    InboundNumbers,
    Coupons,
    Invoices,
    Payments,
    Packages,
    Subscriptions,
    Credits,
    Users,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Calls,
        View::InboundNumbers,
        View::Coupons,
        View::Invoices,
        View::Payments,
        View::Packages,
        View::Subscriptions,
        View::Credits,
        View::Users,
    ];

    pub fn key(self) -> &'static str {
        match self {
            View::Calls => "calls",
            View::InboundNumbers => "inbound-numbers",
            View::Coupons => "coupons",
            View::Invoices => "invoices",
            View::Payments => "payments",
            View::Packages => "packages",
            View::Subscriptions => "subscriptions",
            View::Credits => "credits",
            View::Users => "users",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Calls => "Call history",
            View::InboundNumbers => "Inbound numbers",
            View::Coupons => "Coupons",
            View::Invoices => "Invoices",
            View::Payments => "Payments",
            View::Packages => "Packages",
            View::Subscriptions => "Subscriptions",
            View::Credits => "Credits",
            View::Users => "Users",
        }
    }

    pub fn group(self) -> &'static str {
        match self {
            View::Calls | View::InboundNumbers => "Telephony",
            View::Users => "System",
            _ => "Billing",
        }
    }

    pub fn from_key(key: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.key() == key)
    }
}

fn screen_for(view: View) -> AnyView {
    match view {
        View::Calls => view! { <CallsScreen /> }.into_any(),
        View::InboundNumbers => view! { <InboundNumbersScreen /> }.into_any(),
        View::Coupons => view! { <CouponsScreen /> }.into_any(),
        View::Invoices => view! { <InvoicesScreen /> }.into_any(),
        View::Payments => view! { <PaymentsScreen /> }.into_any(),
        View::Packages => view! { <PackagesScreen /> }.into_any(),
        View::Subscriptions => view! { <SubscriptionsScreen /> }.into_any(),
        View::Credits => view! { <CreditsScreen /> }.into_any(),
        View::Users => view! { <UsersScreen /> }.into_any(),
    }
}

#[component]
pub fn Shell() -> impl IntoView {
    let initial = query::read_view()
        .and_then(|key| View::from_key(&key))
        .unwrap_or(View::Calls);
    let active = RwSignal::new(initial);

    let (auth_state, set_auth_state) = use_auth();
    let operator_name = move || {
        auth_state
            .get()
            .operator
            .map(|o| o.username)
            .unwrap_or_default()
    };

    view! {
        <div class="shell">
            <Sidebar active=active />
            <div class="shell__main">
                <header class="shell__header">
                    <h1 class="shell__title">{move || active.get().title()}</h1>
                    <div class="shell__header-right">
                        <span class="shell__operator">{operator_name}</span>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                spawn_local(async move {
                                    do_logout(set_auth_state).await;
                                });
                            }
                        >
                            "Sign out"
                        </Button>
                    </div>
                </header>
                <main class="shell__content">{move || screen_for(active.get())}</main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keys_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_key(view.key()), Some(view));
        }
        assert_eq!(View::from_key("bogus"), None);
    }
}
