use std::fmt::Display;

use dioxus::prelude::*;

use common::{i18n::Locale, query::QueryParams};

mod booking_info;
mod card;
mod filters;
mod list;
mod pagination;

use booking_info::BookingInfo;
use filters::VehicleFilters;
use list::VehicleListing;

// the explore page's query string, as the router hands it over
//
// the parameters in the url are the single source of truth for the listing: every filter,
// sort, or search commit is a navigation to a new ExploreQuery
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExploreQuery(pub QueryParams);

impl From<&str> for ExploreQuery {
    fn from(query: &str) -> Self {
        ExploreQuery(QueryParams::parse(query))
    }
}

impl Display for ExploreQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn Explore(locale: Locale, query: ExploreQuery) -> Element {
    let params = query.0;

    // keying the listing on the query remounts it for every new parameter set, which
    // starts it again from the first page
    rsx! {
        div { class: "container explore-layout",
            aside {
                BookingInfo { locale, query: params.clone() }
                VehicleFilters { locale, query: params.clone() }
            }
            VehicleListing { key: "{params}", locale, query: params }
        }
    }
}
