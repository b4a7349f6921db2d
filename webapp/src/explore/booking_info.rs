use dioxus::prelude::*;

use common::{
    i18n::Locale,
    query::{QueryParams, SearchQuery},
};

use crate::components::rent_form::SearchForm;

// BookingInfo
//
// the committed search, as far as the url holds all four criteria, plus the way to change it
#[derive(Clone, PartialEq, Props)]
pub struct BookingInfoProps {
    locale: Locale,
    query: QueryParams,
}

#[component]
pub fn BookingInfo(props: BookingInfoProps) -> Element {
    let locale = props.locale;
    let search = SearchQuery::from_params(&props.query);

    let rows = if search.has_booking() {
        vec![
            (locale.pick("Pickup location", "Abholort"), search.rent_location.unwrap_or_default()),
            (locale.pick("Pickup", "Abholung"), search.pickup_date.unwrap_or_default()),
            (locale.pick("Return location", "Rückgabeort"), search.return_location.unwrap_or_default()),
            (locale.pick("Drop-off", "Rückgabe"), search.drop_off_date.unwrap_or_default()),
        ]
    } else {
        Vec::new()
    };

    let heading = locale.pick("Your booking", "Ihre Buchung");
    let empty = locale.pick("No search yet.", "Noch keine Suche.");

    rsx! {
        div { class: "card booking-info",
            h3 { "{heading}" }
            if rows.is_empty() {
                p { class: "muted", "{empty}" }
            } else {
                dl {
                    for (label, value) in rows {
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            SearchForm { locale, modal: true }
        }
    }
}
