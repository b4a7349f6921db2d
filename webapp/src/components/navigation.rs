use std::mem::discriminant;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::{i18n::Locale, session::Session};

use crate::{Route, shared::storage::LocalTokenStore};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    // the explore page stays highlighted whatever its query
    let current_path: Route = use_route();
    let active = discriminant(&current_path) == discriminant(&target);

    rsx! {
        Link {
            class: if active { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn LocaleSwitch(locale: Locale) -> Element {
    let current_path: Route = use_route();

    rsx! {
        div { class: "locale-switch",
            for other in Locale::ALL {
                Link {
                    key: "{other}",
                    class: if other == locale { "active" } else { "" },
                    to: current_path.with_locale(other),
                    "{other}"
                }
            }
        }
    }
}

#[component]
fn NavBarInner(locale: Locale) -> Element {
    let mut session = use_context::<Signal<Session>>();
    let authenticated = session.read().is_authenticated();
    let logout = locale.pick("Log out", "Abmelden");

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Home { locale }, "Rent" }
                }

                nav { class: "nav-links",
                    NavBarButton {
                        name: locale.pick("Vehicles", "Fahrzeuge").to_owned(),
                        target: Route::Explore { locale, query: Default::default() },
                    }
                    NavBarButton {
                        name: locale.pick("Booking", "Buchung").to_owned(),
                        target: Route::Booking { locale },
                    }
                    NavBarButton {
                        name: locale.pick("About", "Über uns").to_owned(),
                        target: Route::About { locale },
                    }
                    NavBarButton {
                        name: locale.pick("Contact", "Kontakt").to_owned(),
                        target: Route::Contact { locale },
                    }
                    if authenticated {
                        button {
                            class: "btn btn-sm btn-secondary",
                            onclick: move |_| session.write().logout(&LocalTokenStore),
                            "{logout}"
                        }
                    } else {
                        NavBarButton {
                            name: locale.pick("Log in", "Anmelden").to_owned(),
                            target: Route::Account { locale },
                        }
                    }
                    LocaleSwitch { locale }
                }
            }
        }
    }
}

#[component]
pub fn NavBar(locale: Locale) -> Element {
    rsx! {
        NavBarInner { locale }
        Outlet::<Route> {}
    }
}
