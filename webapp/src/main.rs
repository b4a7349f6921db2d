#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, warn};

use common::{
    config::{RentConfig, parse_config},
    i18n::Locale,
    session::Session,
};

mod shared;
use shared::{storage::LocalTokenStore, style};

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod explore;
use explore::{Explore, ExploreQuery};

mod booking;
use booking::Booking;

mod account;
use account::Account;

mod contact;
use contact::Contact;

mod about;
use about::About;

const CONFIG_DOC: &str = include_str!("../rent.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// every page is published per language, so the locale is the first path segment and
// is threaded down to each page (and its api calls) as a route parameter
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[nest("/:locale")]
        #[layout(NavBar)]
            #[route("/")]
            Home { locale: Locale },
            #[route("/explore?:..query")]
            Explore { locale: Locale, query: ExploreQuery },
            #[route("/booking")]
            Booking { locale: Locale },
            #[route("/account")]
            Account { locale: Locale },
            #[route("/contact")]
            Contact { locale: Locale },
            #[route("/about")]
            About { locale: Locale },
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    // the same page in another language
    fn with_locale(&self, locale: Locale) -> Route {
        match self.clone() {
            Route::Home { .. } => Route::Home { locale },
            Route::Explore { query, .. } => Route::Explore { locale, query },
            Route::Booking { .. } => Route::Booking { locale },
            Route::Account { .. } => Route::Account { locale },
            Route::Contact { .. } => Route::Contact { locale },
            Route::About { .. } => Route::About { locale },
            Route::Landing {} | Route::PageNotFound { .. } => Route::Home { locale },
        }
    }
}

fn load_config() -> RentConfig {
    match parse_config(CONFIG_DOC) {
        Ok(config) => config,
        Err(err) => {
            warn!("failed to parse embedded config, using defaults: {err}");
            RentConfig::default()
        }
    }
}

#[component]
pub fn App() -> Element {
    // app-wide dependencies, provided once and read through use_context()
    use_context_provider(load_config);
    use_context_provider(|| Signal::new(Session::init(&LocalTokenStore)));

    rsx! {
        style { "{style::RENTAL_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

// the bare root sends visitors to the configured default language
#[component]
fn Landing() -> Element {
    let config = use_context::<RentConfig>();
    let navigator = use_navigator();

    use_effect(move || {
        navigator.replace(Route::Home {
            locale: config.default_locale,
        });
    });

    rsx! {}
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let config = use_context::<RentConfig>();
    let locale = config.default_locale;
    let path = segments.join("/");
    let title = locale.pick("Page not found", "Seite nicht gefunden");
    let back = locale.pick("Back to the start page", "Zurück zur Startseite");

    rsx! {
        div { class: "container page-not-found",
            h1 { "{title}" }
            p { class: "muted", "/{path}" }
            Link { class: "btn btn-primary", to: Route::Home { locale }, "{back}" }
        }
    }
}
