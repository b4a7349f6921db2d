use dioxus::prelude::*;
use tracing::debug;

use api::location::{SearchLocationsReq, search_locations};
use common::{
    autocomplete::LookupAction,
    booking::LocationSlot,
    config::RentConfig,
    i18n::Locale,
    rent_form::RentForm,
};

use crate::shared::api_context;

// LocationSelect
//
// a location text field with its candidate dropdown.  typing past the minimum length
// looks up candidates; picking one fills the field and stages its location id
#[derive(Clone, PartialEq, Props)]
pub struct LocationSelectProps {
    form: Signal<RentForm>,
    slot: LocationSlot,
    locale: Locale,
    label: String,
}

#[component]
pub fn LocationSelect(props: LocationSelectProps) -> Element {
    let mut form = props.form;
    let slot = props.slot;
    let locale = props.locale;
    let label = props.label;

    let config = use_context::<RentConfig>();
    let min_len = config.search.min_query_len;

    let oninput = move |event: FormEvent| {
        let LookupAction::Lookup { query, ticket } = form.write().input(slot, event.value(), min_len)
        else {
            return;
        };

        let ctx = api_context(&config, locale);
        spawn(async move {
            match search_locations(&ctx, &SearchLocationsReq { search: query }).await {
                Ok(resp) => {
                    if !form.write().apply_lookup(slot, ticket, resp.candidates()) {
                        debug!("dropping superseded location candidates");
                    }
                }
                Err(_) => form.write().fail_lookup(slot, ticket),
            }
        });
    };

    let (name, open, candidates) = {
        let state = form.read();
        let autocomplete = state.autocomplete(slot);
        let candidates = autocomplete
            .candidates()
            .iter()
            .map(|c| c.display_name.clone())
            .collect::<Vec<_>>();

        (state.location_name(slot).to_owned(), autocomplete.is_open(), candidates)
    };
    let placeholder = locale.pick("City, airport or station", "Stadt, Flughafen oder Bahnhof");

    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: "text",
                autocomplete: "off",
                placeholder,
                value: "{name}",
                oninput,
                onfocus: move |_| {
                    if !form.read().autocomplete(slot).is_open() {
                        form.write().toggle_dropdown(slot);
                    }
                },
            }
            if open && !candidates.is_empty() {
                ul { class: "dropdown",
                    for (index, display_name) in candidates.into_iter().enumerate() {
                        li {
                            key: "{index}",
                            class: "dropdown-item",
                            onclick: move |_| {
                                form.write().select(slot, index);
                            },
                            "{display_name}"
                        }
                    }
                }
            }
        }
    }
}
