use dioxus::prelude::*;

use common::{i18n::Locale, session::Session};

mod details;
mod login;
pub mod personal_info;

use details::AccountDetails;
use login::LoginForm;
use personal_info::PersonalInfo;

//
// ROUTE TARGET
//
#[component]
pub fn Account(locale: Locale) -> Element {
    let session = use_context::<Signal<Session>>();
    let token = session.read().token().map(str::to_owned);

    let heading = locale.pick("Your account", "Ihr Konto");

    rsx! {
        div { class: "container narrow",
            h1 { class: "section-title", "{heading}" }
            if token.is_some() {
                PersonalInfo { locale, token }
                AccountDetails { locale }
            } else {
                LoginForm { locale }
            }
        }
    }
}
