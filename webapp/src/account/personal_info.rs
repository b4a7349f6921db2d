use dioxus::prelude::*;

use api::profile::{GetMyProfileReq, get_my_profile};
use common::{
    config::RentConfig,
    i18n::Locale,
    profile::{PhoneNumber, ProfileField, ProfileForm},
};

use crate::shared::api_context;

#[derive(Clone, PartialEq, Props)]
struct ProfileInputProps {
    form_signal: Signal<ProfileForm>,
    field: ProfileField,
    label: String,
    value: String,
    input_type: &'static str,
}

#[component]
fn ProfileInput(props: ProfileInputProps) -> Element {
    let mut form_signal = props.form_signal;
    let field = props.field;
    let editable = form_signal.read().is_editable();

    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{props.label}" }
            input {
                class: "form-input",
                r#type: props.input_type,
                readonly: !editable,
                value: "{props.value}",
                oninput: move |event: FormEvent| {
                    form_signal.write().set_field(field, event.value());
                },
            }
        }
    }
}

// PersonalInfo
//
// contact details for a booking.  with a session the stored profile is fetched once on
// mount and shown read-only until the user chooses to edit; without one the fields start
// blank and editable
//
// callers key this component on the session state so that logging out starts over
#[derive(Clone, PartialEq, Props)]
pub struct PersonalInfoProps {
    locale: Locale,
    #[props(!optional)]
    token: Option<String>,
}

#[component]
pub fn PersonalInfo(props: PersonalInfoProps) -> Element {
    let locale = props.locale;
    let token = props.token;

    let config = use_context::<RentConfig>();
    let mut form_signal = use_signal(|| ProfileForm::for_session(token.is_some()));

    // the form is written here but never read, so the fetch runs exactly once
    let profile_future = use_resource(move || {
        let token = token.clone();
        let ctx = api_context(&config, locale);

        async move {
            let Some(token) = token else {
                return Ok(());
            };

            let resp = get_my_profile(&ctx.with_token(token), &GetMyProfileReq {}).await?;
            form_signal
                .write()
                .apply_profile(resp.attributes().unwrap_or_default());

            anyhow::Ok(())
        }
    });

    let status = match &*profile_future.read_unchecked() {
        None => Some(String::from(locale.pick("Loading your profile...", "Profil wird geladen..."))),
        Some(Err(err)) => Some(format!(
            "{} ({err})",
            locale.pick("Your profile could not be loaded.", "Ihr Profil konnte nicht geladen werden.")
        )),
        Some(Ok(())) => None,
    };

    let form = form_signal.read().clone();
    let info = form.info();
    let editable = form.is_editable();
    let phone = info.phone.clone();

    let heading = locale.pick("Personal information", "Persönliche Daten");
    let phone_label = locale.pick("Phone", "Telefon");
    let toggle_label = if editable {
        locale.pick("Done", "Fertig")
    } else {
        locale.pick("Edit", "Bearbeiten")
    };

    let fields = [
        (ProfileField::FirstName, locale.pick("First name", "Vorname"), info.first_name.clone(), "text"),
        (ProfileField::LastName, locale.pick("Last name", "Nachname"), info.last_name.clone(), "text"),
        (ProfileField::Email, locale.pick("Email", "E-Mail"), info.email.clone(), "email"),
        (
            ProfileField::DateOfBirth,
            locale.pick("Date of birth", "Geburtsdatum"),
            info.date_of_birth.clone(),
            "date",
        ),
    ];

    rsx! {
        section { class: "card booking-info",
            div { class: "listing-toolbar",
                h2 { class: "section-title", "{heading}" }
                if form.is_authenticated() {
                    button {
                        class: "btn btn-sm btn-secondary",
                        onclick: move |_| form_signal.write().toggle_edit(),
                        "{toggle_label}"
                    }
                }
            }
            if let Some(status) = status {
                p { class: "muted", "{status}" }
            }
            for (field, label, value, input_type) in fields {
                ProfileInput {
                    form_signal,
                    field,
                    label: label.to_owned(),
                    value,
                    input_type,
                }
            }
            div { class: "form-group",
                label { class: "form-label", "{phone_label}" }
                div { class: "phone-inputs",
                    input {
                        class: "form-input",
                        r#type: "tel",
                        readonly: !editable,
                        placeholder: "+49",
                        value: "{phone.country_code}",
                        oninput: {
                            let number = phone.national_number.clone();
                            move |event: FormEvent| {
                                form_signal.write().set_phone(PhoneNumber::new(&event.value(), &number));
                            }
                        },
                    }
                    input {
                        class: "form-input",
                        r#type: "tel",
                        readonly: !editable,
                        value: "{phone.national_number}",
                        oninput: {
                            let code = phone.country_code.clone();
                            move |event: FormEvent| {
                                form_signal.write().set_phone(PhoneNumber::new(&code, &event.value()));
                            }
                        },
                    }
                }
            }
        }
    }
}
