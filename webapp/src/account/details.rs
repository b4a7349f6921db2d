use dioxus::prelude::*;
use tracing::info;

use common::{
    i18n::Locale,
    validation::{AccountErrors, AccountValues, FieldError, Salutation, validate_account},
};

#[derive(Clone, Copy, PartialEq)]
enum DetailsField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    DateOfBirth,
}

impl DetailsField {
    const ALL: [DetailsField; 5] = [
        DetailsField::FirstName,
        DetailsField::LastName,
        DetailsField::Email,
        DetailsField::PhoneNumber,
        DetailsField::DateOfBirth,
    ];

    fn label(&self, locale: Locale) -> &'static str {
        match self {
            DetailsField::FirstName => locale.pick("First name", "Vorname"),
            DetailsField::LastName => locale.pick("Last name", "Nachname"),
            DetailsField::Email => locale.pick("Email", "E-Mail"),
            DetailsField::PhoneNumber => locale.pick("Phone", "Telefon"),
            DetailsField::DateOfBirth => locale.pick("Date of birth", "Geburtsdatum"),
        }
    }

    fn input_type(&self) -> &'static str {
        match self {
            DetailsField::Email => "email",
            DetailsField::PhoneNumber => "tel",
            DetailsField::DateOfBirth => "date",
            _ => "text",
        }
    }

    fn value<'a>(&self, values: &'a AccountValues) -> &'a str {
        match self {
            DetailsField::FirstName => &values.first_name,
            DetailsField::LastName => &values.last_name,
            DetailsField::Email => &values.email,
            DetailsField::PhoneNumber => &values.phone_number,
            DetailsField::DateOfBirth => &values.date_of_birth,
        }
    }

    fn error(&self, errors: &AccountErrors) -> Option<FieldError> {
        match self {
            DetailsField::FirstName => errors.first_name,
            DetailsField::LastName => errors.last_name,
            DetailsField::Email => errors.email,
            DetailsField::PhoneNumber => errors.phone_number,
            DetailsField::DateOfBirth => None,
        }
    }

    fn update(&self, values: &mut AccountValues, errors: &mut AccountErrors, value: String) {
        match self {
            DetailsField::FirstName => {
                values.first_name = value;
                errors.first_name = None;
            }
            DetailsField::LastName => {
                values.last_name = value;
                errors.last_name = None;
            }
            DetailsField::Email => {
                values.email = value;
                errors.email = None;
            }
            DetailsField::PhoneNumber => {
                values.phone_number = value;
                errors.phone_number = None;
            }
            DetailsField::DateOfBirth => values.date_of_birth = value,
        }
    }
}

// AccountDetails
//
// the update-details form of a signed-in account.  like the login form it only checks
// the input locally and records a valid submission; the password field offers a
// visibility toggle once something has been typed
#[component]
pub fn AccountDetails(locale: Locale) -> Element {
    let mut values_signal = use_signal(AccountValues::default);
    let mut errors_signal = use_signal(AccountErrors::default);
    let mut reveal_signal = use_signal(|| false);

    let values = values_signal();
    let errors = errors_signal();

    let fields = DetailsField::ALL.map(|field| {
        (
            field,
            field.label(locale),
            field.value(&values).to_owned(),
            field.error(&errors).map(|err| err.localized(locale)),
        )
    });
    let salutations = Salutation::ALL.map(|salutation| (salutation, salutation.localized(locale)));
    let password_error = errors.password.map(|err| err.localized(locale));
    let has_password = !values.password.is_empty();
    let reveal = reveal_signal() && has_password;

    let heading = locale.pick("Update your details", "Daten aktualisieren");
    let title_label = locale.pick("Title", "Anrede");
    let password_label = locale.pick("Password", "Passwort");
    let reveal_label = if reveal {
        locale.pick("Hide password", "Passwort verbergen")
    } else {
        locale.pick("Show password", "Passwort anzeigen")
    };
    let submit_label = locale.pick("Update", "Aktualisieren");

    rsx! {
        form {
            class: "card booking-info",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let errors = validate_account(&values_signal.read());
                if errors.is_empty() {
                    info!("account details submitted");
                }
                errors_signal.set(errors);
            },
            h2 { class: "section-title", "{heading}" }
            div { class: "form-group",
                label { class: "form-label", "{title_label}" }
                div { class: "radio-group",
                    for (salutation, salutation_label) in salutations {
                        label {
                            input {
                                r#type: "radio",
                                name: "salutation",
                                checked: values.salutation == salutation,
                                onchange: move |_| values_signal.write().salutation = salutation,
                            }
                            "{salutation_label}"
                        }
                    }
                }
            }
            for (field, label, value, error) in fields {
                div { class: "form-group",
                    label { class: "form-label", "{label}" }
                    input {
                        class: "form-input",
                        r#type: field.input_type(),
                        value: "{value}",
                        oninput: move |event: FormEvent| {
                            field.update(&mut values_signal.write(), &mut errors_signal.write(), event.value());
                        },
                    }
                    if let Some(message) = error {
                        p { class: "form-error", "{message}" }
                    }
                }
            }
            div { class: "form-group",
                label { class: "form-label", "{password_label}" }
                input {
                    class: "form-input",
                    r#type: if reveal { "text" } else { "password" },
                    value: "{values.password}",
                    oninput: move |event: FormEvent| {
                        values_signal.write().password = event.value();
                        errors_signal.write().password = None;
                    },
                }
                if has_password {
                    button {
                        class: "btn btn-sm btn-secondary",
                        r#type: "button",
                        onclick: move |_| reveal_signal.toggle(),
                        "{reveal_label}"
                    }
                }
                if let Some(message) = password_error {
                    p { class: "form-error", "{message}" }
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
        }
    }
}
