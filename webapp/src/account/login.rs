use dioxus::prelude::*;
use tracing::info;

use common::{
    i18n::Locale,
    validation::{LoginErrors, LoginValues, validate_login},
};

// LoginForm
//
// client-side checks only: a valid submission is recorded, issuing the token is up to
// the sign-in service.  editing a field clears its error
#[component]
pub fn LoginForm(locale: Locale) -> Element {
    let mut values_signal = use_signal(LoginValues::default);
    let mut errors_signal = use_signal(LoginErrors::default);

    let values = values_signal();
    let errors = errors_signal();
    let email_error = errors.email.map(|err| err.localized(locale));
    let password_error = errors.password.map(|err| err.localized(locale));

    let heading = locale.pick("Log in", "Anmelden");
    let email_label = locale.pick("Email", "E-Mail");
    let password_label = locale.pick("Password", "Passwort");

    rsx! {
        form {
            class: "card booking-info narrow",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let errors = validate_login(&values_signal.read());
                if errors.is_empty() {
                    info!("login form submitted");
                }
                errors_signal.set(errors);
            },
            h2 { class: "section-title", "{heading}" }
            div { class: "form-group",
                label { class: "form-label", "{email_label}" }
                input {
                    class: "form-input",
                    r#type: "email",
                    value: "{values.email}",
                    oninput: move |event: FormEvent| {
                        values_signal.write().email = event.value();
                        errors_signal.write().email = None;
                    },
                }
                if let Some(message) = email_error {
                    p { class: "form-error", "{message}" }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "{password_label}" }
                input {
                    class: "form-input",
                    r#type: "password",
                    value: "{values.password}",
                    oninput: move |event: FormEvent| {
                        values_signal.write().password = event.value();
                        errors_signal.write().password = None;
                    },
                }
                if let Some(message) = password_error {
                    p { class: "form-error", "{message}" }
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "{heading}" }
        }
    }
}
