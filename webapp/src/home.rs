use dioxus::prelude::*;

use common::i18n::Locale;

use crate::components::rent_form::SearchForm;

//
// ROUTE TARGET
//
#[component]
pub fn Home(locale: Locale) -> Element {
    let title = locale.pick("Find your rental car", "Finden Sie Ihren Mietwagen");
    let subtitle = locale.pick(
        "Pick a location and your dates, we show you what is available.",
        "Wählen Sie Ort und Zeitraum, wir zeigen Ihnen, was verfügbar ist.",
    );

    rsx! {
        section { class: "hero",
            h1 { "{title}" }
            div { class: "container",
                SearchForm { locale, modal: false }
            }
        }
        div { class: "container",
            p { class: "muted", "{subtitle}" }
        }
    }
}
