use dioxus::prelude::*;

use common::{i18n::Locale, session::Session};

use crate::account::personal_info::PersonalInfo;

//
// ROUTE TARGET
//
#[component]
pub fn Booking(locale: Locale) -> Element {
    let session = use_context::<Signal<Session>>();
    let token = session.read().token().map(str::to_owned);
    let authenticated = token.is_some();

    let heading = locale.pick("Complete your booking", "Buchung abschließen");
    let intro = if authenticated {
        locale.pick(
            "We filled in the details from your profile.",
            "Wir haben die Angaben aus Ihrem Profil übernommen.",
        )
    } else {
        locale.pick(
            "Tell us who is picking up the vehicle.",
            "Sagen Sie uns, wer das Fahrzeug abholt.",
        )
    };

    rsx! {
        div { class: "container narrow",
            h1 { class: "section-title", "{heading}" }
            p { class: "muted", "{intro}" }
            PersonalInfo { key: "{authenticated}", locale, token }
        }
    }
}
