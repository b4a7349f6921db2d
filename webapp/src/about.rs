use dioxus::prelude::*;

use common::i18n::Locale;

//
// ROUTE TARGET
//
#[component]
pub fn About(locale: Locale) -> Element {
    let heading = locale.pick("About us", "Über uns");
    let paragraphs = [
        locale.pick(
            "We rent cars, vans and convertibles at airports, stations and city branches.",
            "Wir vermieten Autos, Transporter und Cabrios an Flughäfen, Bahnhöfen und in der Stadt.",
        ),
        locale.pick(
            "Pick up in one place and return in another: choose a different return location when you search.",
            "Abholen an einem Ort, zurückgeben an einem anderen: wählen Sie bei der Suche einen anderen Rückgabeort.",
        ),
        locale.pick(
            "Every price is per day and includes the basic insurance.",
            "Alle Preise gelten pro Tag und enthalten die Basisversicherung.",
        ),
    ];

    rsx! {
        div { class: "container narrow",
            h1 { class: "section-title", "{heading}" }
            for paragraph in paragraphs {
                p { "{paragraph}" }
            }
        }
    }
}
