use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use api::car::list_cars;
use common::{
    config::RentConfig,
    explore::{FeedState, VehicleFeed, derive_request},
    i18n::Locale,
    pagination::Pager,
    query::{QueryParams, SearchQuery},
};

use crate::{
    components::rent_form::BOOKING,
    explore::{card::VehicleCard, pagination::ListingPagination},
    shared::{api_context, storage::*},
};

const VIEW_MODE_KEY: &str = "view_mode";

const SKELETON_CARDS: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    fn class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "vehicle-grid",
            ViewMode::List => "vehicle-list",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ViewToggleProps {
    view_mode_signal: Signal<ViewMode>,
    locale: Locale,
}

#[component]
fn ViewToggle(props: ViewToggleProps) -> Element {
    let mut view_mode_signal = props.view_mode_signal;
    let locale = props.locale;
    let current = view_mode_signal();

    let options = [
        (ViewMode::Grid, locale.pick("Grid", "Raster")),
        (ViewMode::List, locale.pick("List", "Liste")),
    ];

    rsx! {
        div { class: "view-toggle",
            for (mode, label) in options {
                button {
                    class: if mode == current { "btn btn-sm btn-primary" } else { "btn btn-sm btn-secondary" },
                    onclick: move |_| {
                        view_mode_signal.set(mode);
                        set_local_storage(VIEW_MODE_KEY, mode);
                    },
                    "{label}"
                }
            }
        }
    }
}

// VehicleListing
//
// one page of vehicles for the current query.  the page index lives here rather than in
// the url, so a new query (which remounts this component) always starts at page one
#[derive(Clone, PartialEq, Props)]
pub struct VehicleListingProps {
    locale: Locale,
    query: QueryParams,
}

#[component]
pub fn VehicleListing(props: VehicleListingProps) -> Element {
    let locale = props.locale;
    let search = SearchQuery::from_params(&props.query);

    let config = use_context::<RentConfig>();
    let mut page_signal = use_signal(|| 1u32);
    let mut feed_signal = use_signal(VehicleFeed::default);
    let view_mode_signal = use_signal::<ViewMode>(|| try_local_storage(VIEW_MODE_KEY));

    // use_resource() re-runs whenever the page changes; the feed is only written here,
    // never read, so updating it cannot re-trigger the fetch
    //
    // the location ids are peeked: they only change on a search commit, which also
    // remounts the listing
    let _fetch = use_resource(move || {
        let search = search.clone();
        let ctx = api_context(&config, locale);

        async move {
            let req = derive_request(&search, &BOOKING.peek(), page_signal());
            let ticket = feed_signal.write().begin(req.clone());

            let result = list_cars(&ctx, &req).await;
            feed_signal.write().resolve(ticket, result);
        }
    });

    let state = feed_signal.read().state().clone();
    let pager = Pager::new(page_signal(), feed_signal.read().total_pages());
    let view_mode = view_mode_signal();

    let body = match state {
        FeedState::Idle | FeedState::Loading => rsx! {
            div { class: view_mode.class(),
                for index in 0..SKELETON_CARDS {
                    div { key: "{index}", class: "skeleton" }
                }
            }
        },
        FeedState::Empty => {
            let message = locale.pick(
                "No vehicles match your search. Try other dates or fewer filters.",
                "Keine Fahrzeuge gefunden. Versuchen Sie andere Daten oder weniger Filter.",
            );
            rsx! {
                p { class: "notice", "{message}" }
            }
        }
        FeedState::Failed(err) => {
            let message = locale.pick(
                "Vehicles could not be loaded.",
                "Fahrzeuge konnten nicht geladen werden.",
            );
            rsx! {
                p { class: "notice error", "{message}" }
                p { class: "notice muted", "{err}" }
            }
        }
        FeedState::Populated(vehicles) => rsx! {
            div { class: view_mode.class(),
                for vehicle in vehicles.items {
                    VehicleCard { key: "{vehicle.id}", locale, vehicle: vehicle.clone() }
                }
            }
        },
    };

    let heading = locale.pick("Available vehicles", "Verfügbare Fahrzeuge");

    rsx! {
        section {
            div { class: "listing-toolbar",
                h2 { class: "section-title", "{heading}" }
                ViewToggle { view_mode_signal, locale }
            }
            {body}
            if pager.total() > 1 {
                ListingPagination {
                    pager,
                    locale,
                    onchange: move |page| page_signal.set(page),
                }
            }
        }
    }
}
