use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::debug;

use api::car::SortKey;
use common::{
    i18n::Locale,
    query::{FilterKind, QueryParams, SearchQuery},
};

use crate::{Route, explore::ExploreQuery};

// the values the api filters on, with their english and german labels
fn filter_options(kind: FilterKind) -> &'static [(&'static str, &'static str, &'static str)] {
    match kind {
        FilterKind::CarType => &[
            ("sedan", "Sedan", "Limousine"),
            ("suv", "SUV", "SUV"),
            ("coupe", "Coupe", "Coupé"),
            ("convertible", "Convertible", "Cabrio"),
            ("station_wagon", "Station wagon", "Kombi"),
            ("van", "Van", "Transporter"),
        ],
        FilterKind::CarClass => &[
            ("economy", "Economy", "Kleinwagen"),
            ("compact", "Compact", "Kompaktklasse"),
            ("midsize", "Midsize", "Mittelklasse"),
            ("luxury", "Luxury", "Oberklasse"),
        ],
        FilterKind::GearType => &[
            ("manual", "Manual", "Schaltgetriebe"),
            ("automatic", "Automatic", "Automatik"),
        ],
        FilterKind::FuelType => &[
            ("petrol", "Petrol", "Benzin"),
            ("diesel", "Diesel", "Diesel"),
            ("hybrid", "Hybrid", "Hybrid"),
            ("electric", "Electric", "Elektro"),
        ],
    }
}

fn filter_label(kind: FilterKind, locale: Locale) -> &'static str {
    match kind {
        FilterKind::CarType => locale.pick("Vehicle type", "Fahrzeugtyp"),
        FilterKind::CarClass => locale.pick("Vehicle class", "Fahrzeugklasse"),
        FilterKind::GearType => locale.pick("Transmission", "Getriebe"),
        FilterKind::FuelType => locale.pick("Fuel", "Kraftstoff"),
    }
}

fn sort_label(sort: SortKey, locale: Locale) -> &'static str {
    match sort {
        SortKey::YearDesc => locale.pick("Newest first", "Neueste zuerst"),
        SortKey::YearAsc => locale.pick("Oldest first", "Älteste zuerst"),
        SortKey::PriceDesc => locale.pick("Price: high to low", "Preis absteigend"),
        SortKey::PriceAsc => locale.pick("Price: low to high", "Preis aufsteigend"),
    }
}

// VehicleFilters
//
// every change is committed straight to the url; the listing follows from there
#[derive(Clone, PartialEq, Props)]
pub struct VehicleFiltersProps {
    locale: Locale,
    query: QueryParams,
}

#[component]
pub fn VehicleFilters(props: VehicleFiltersProps) -> Element {
    let locale = props.locale;
    let query = props.query;
    let filters = SearchQuery::from_params(&query).filters;

    let navigator = use_navigator();
    let commit = move |params: QueryParams| {
        debug!({ query = %params }, "committing vehicle filters");
        navigator.push(Route::Explore {
            locale,
            query: ExploreQuery(params),
        });
    };

    let heading = locale.pick("Filter vehicles", "Fahrzeuge filtern");
    let any = locale.pick("Any", "Alle");
    let sort_heading = locale.pick("Sort by", "Sortieren nach");
    let clear_label = locale.pick("Clear filters", "Filter zurücksetzen");

    let groups = FilterKind::ALL.map(|kind| {
        let options = filter_options(kind)
            .iter()
            .map(|&(value, en, de)| (value, locale.pick(en, de), filters.get(kind) == Some(value)))
            .collect::<Vec<_>>();
        (kind, filter_label(kind, locale), options)
    });
    let sorts = SortKey::ALL.map(|sort| (sort, sort_label(sort, locale), filters.sort == Some(sort)));

    let sort_query = query.clone();
    let cleared = query.without_filters();

    rsx! {
        div { class: "card booking-info filters",
            h3 { "{heading}" }
            for (kind, label, options) in groups {
                div { class: "form-group",
                    label { class: "form-label", "{label}" }
                    select {
                        class: "form-select",
                        onchange: {
                            let query = query.clone();
                            move |event: FormEvent| commit(query.with_filter(kind, Some(&event.value())))
                        },
                        option { value: "", "{any}" }
                        for (value, text, selected) in options {
                            option { value, selected, "{text}" }
                        }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "{sort_heading}" }
                select {
                    class: "form-select",
                    onchange: move |event: FormEvent| commit(sort_query.with_sort(SortKey::from_param(&event.value()))),
                    option { value: "", "-" }
                    for (sort, text, selected) in sorts {
                        option { value: sort.as_param(), selected, "{text}" }
                    }
                }
            }
            button {
                class: "btn btn-secondary",
                disabled: filters.is_empty(),
                onclick: move |_| commit(cleared.clone()),
                "{clear_label}"
            }
        }
    }
}
