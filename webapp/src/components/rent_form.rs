use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{debug, info};

use common::{
    booking::{BookingContext, LocationSlot},
    config::RentConfig,
    i18n::Locale,
    query::QueryParams,
    rent_form::{RentForm, ValidationRules, format_datetime_local, parse_datetime_local},
};

use crate::{
    Route,
    components::location_select::LocationSelect,
    explore::ExploreQuery,
    shared::now,
};

// location ids of the last committed search, read by the vehicle listing
pub static BOOKING: GlobalSignal<BookingContext> = Signal::global(BookingContext::default);

#[derive(Clone, PartialEq, Props)]
struct RentFormFieldsProps {
    form: Signal<RentForm>,
    locale: Locale,
}

#[component]
fn RentFormFields(props: RentFormFieldsProps) -> Element {
    let mut form = props.form;
    let locale = props.locale;

    let config = use_context::<RentConfig>();
    let rules = ValidationRules::from(&config);
    let route: Route = use_route();
    let navigator = use_navigator();

    let (pickup, drop_off, return_enabled, error) = {
        let state = form.read();
        (
            format_datetime_local(state.criteria.pickup_date),
            format_datetime_local(state.criteria.drop_off_date),
            state.return_location_enabled(),
            state.error().map(|err| err.localized(locale)),
        )
    };

    let pickup_label = locale.pick("Pickup", "Abholung");
    let drop_off_label = locale.pick("Drop-off", "Rückgabe");
    let different_label = locale.pick("Return to a different location", "An einem anderen Ort zurückgeben");
    let submit_label = locale.pick("Show vehicles", "Fahrzeuge anzeigen");

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        // a search from the explore page refines the current listing; anywhere else it
        // starts over without filters
        let (current, clear_filters) = match &route {
            Route::Explore { query, .. } => (query.0.clone(), false),
            _ => (QueryParams::new(), true),
        };

        let result = form
            .write()
            .submit(&current, clear_filters, &rules, &mut BOOKING.write());

        match result {
            Ok(params) => {
                info!({ query = %params }, "committing vehicle search");
                navigator.push(Route::Explore {
                    locale,
                    query: ExploreQuery(params),
                });
            }
            Err(err) => debug!("search rejected: {err}"),
        }
    };

    rsx! {
        form { class: "rent-form", onsubmit,
            LocationSelect {
                form,
                slot: LocationSlot::Rent,
                locale,
                label: locale.pick("Pickup location", "Abholort").to_owned(),
            }
            if return_enabled {
                LocationSelect {
                    form,
                    slot: LocationSlot::Return,
                    locale,
                    label: locale.pick("Return location", "Rückgabeort").to_owned(),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "{pickup_label}" }
                input {
                    class: "form-input",
                    r#type: "datetime-local",
                    value: "{pickup}",
                    oninput: move |event: FormEvent| form.write().set_pickup(parse_datetime_local(&event.value())),
                }
            }
            div { class: "form-group",
                label { class: "form-label", "{drop_off_label}" }
                input {
                    class: "form-input",
                    r#type: "datetime-local",
                    value: "{drop_off}",
                    oninput: move |event: FormEvent| form.write().set_drop_off(parse_datetime_local(&event.value())),
                }
            }
            label { class: "form-check",
                input {
                    r#type: "checkbox",
                    checked: return_enabled,
                    onchange: move |_| form.write().toggle_return_location(),
                }
                "{different_label}"
            }
            button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
            if let Some(message) = error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

// SearchForm
//
// the vehicle search.  inline on the landing page; on the listing it collapses behind a
// button and opens as a modal, closing again once a search is committed
#[component]
pub fn SearchForm(locale: Locale, modal: bool) -> Element {
    let config = use_context::<RentConfig>();
    let mut form = use_signal(|| RentForm::new(now(), &config));

    if !modal {
        return rsx! {
            RentFormFields { form, locale }
        };
    }

    let collapsed = form.read().is_collapsed();
    let toggle_label = if collapsed {
        locale.pick("Change search", "Suche ändern")
    } else {
        locale.pick("Close", "Schließen")
    };

    rsx! {
        button {
            class: "btn btn-secondary",
            onclick: move |_| form.write().toggle_modal(),
            "{toggle_label}"
        }
        if !collapsed {
            div { class: "modal",
                RentFormFields { form, locale }
            }
        }
    }
}
