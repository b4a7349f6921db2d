use dioxus::prelude::*;
use tracing::info;

use common::{
    i18n::Locale,
    validation::{ContactErrors, ContactValues, FieldError, validate_contact},
};

#[derive(Clone, Copy, PartialEq)]
enum ContactField {
    FullName,
    Email,
    PhoneNumber,
    Message,
}

impl ContactField {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            ContactField::FullName => locale.pick("Full name", "Vollständiger Name"),
            ContactField::Email => locale.pick("Email", "E-Mail"),
            ContactField::PhoneNumber => locale.pick("Phone (optional)", "Telefon (optional)"),
            ContactField::Message => locale.pick("Message", "Nachricht"),
        }
    }

    fn value<'a>(&self, values: &'a ContactValues) -> &'a str {
        match self {
            ContactField::FullName => &values.full_name,
            ContactField::Email => &values.email,
            ContactField::PhoneNumber => &values.phone_number,
            ContactField::Message => &values.message,
        }
    }

    fn error(&self, errors: &ContactErrors) -> Option<FieldError> {
        match self {
            ContactField::FullName => errors.full_name,
            ContactField::Email => errors.email,
            ContactField::PhoneNumber => None,
            ContactField::Message => errors.message,
        }
    }

    // store the edit and drop the field's stale error
    fn update(&self, values: &mut ContactValues, errors: &mut ContactErrors, value: String) {
        match self {
            ContactField::FullName => {
                values.full_name = value;
                errors.full_name = None;
            }
            ContactField::Email => {
                values.email = value;
                errors.email = None;
            }
            ContactField::PhoneNumber => values.phone_number = value,
            ContactField::Message => {
                values.message = value;
                errors.message = None;
            }
        }
    }
}

//
// ROUTE TARGET
//
#[component]
pub fn Contact(locale: Locale) -> Element {
    let mut values_signal = use_signal(ContactValues::default);
    let mut errors_signal = use_signal(ContactErrors::default);
    let mut sent_signal = use_signal(|| false);

    let values = values_signal();
    let errors = errors_signal();

    let fields = [
        ContactField::FullName,
        ContactField::Email,
        ContactField::PhoneNumber,
    ]
    .map(|field| {
        (
            field,
            field.label(locale),
            field.value(&values).to_owned(),
            field.error(&errors).map(|err| err.localized(locale)),
        )
    });
    let message_label = ContactField::Message.label(locale);
    let message_error = errors.message.map(|err| err.localized(locale));

    let heading = locale.pick("Contact us", "Kontakt");
    let submit_label = locale.pick("Send", "Senden");
    let thanks = locale.pick(
        "Thank you, we will get back to you shortly.",
        "Vielen Dank, wir melden uns in Kürze.",
    );

    rsx! {
        div { class: "container narrow",
            h1 { class: "section-title", "{heading}" }
            form {
                class: "card booking-info",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();

                    let errors = validate_contact(&values_signal.read());
                    let valid = errors.is_empty();
                    if valid {
                        info!("contact form submitted");
                        values_signal.set(ContactValues::default());
                    }
                    errors_signal.set(errors);
                    sent_signal.set(valid);
                },
                for (field, label, value, error) in fields {
                    div { class: "form-group",
                        label { class: "form-label", "{label}" }
                        input {
                            class: "form-input",
                            r#type: if field == ContactField::Email { "email" } else { "text" },
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
                    label { class: "form-label", "{message_label}" }
                    textarea {
                        class: "form-textarea",
                        value: "{values.message}",
                        oninput: move |event: FormEvent| {
                            ContactField::Message.update(
                                &mut values_signal.write(),
                                &mut errors_signal.write(),
                                event.value(),
                            );
                        },
                    }
                    if let Some(message) = message_error {
                        p { class: "form-error", "{message}" }
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", "{submit_label}" }
                if sent_signal() {
                    p { class: "muted", "{thanks}" }
                }
            }
        }
    }
}
