use dioxus::prelude::*;

use api::car::Vehicle;
use common::i18n::Locale;

#[derive(Clone, PartialEq, Props)]
pub struct VehicleCardProps {
    locale: Locale,
    vehicle: Vehicle,
}

#[component]
pub fn VehicleCard(props: VehicleCardProps) -> Element {
    let locale = props.locale;
    let vehicle = props.vehicle;
    let attrs = &vehicle.attributes;

    let title = vehicle.title();
    let image = attrs.image.clone().unwrap_or_default();

    let specs = [
        attrs.year.map(|year| year.to_string()),
        Some(attrs.car_type.clone()),
        Some(attrs.car_class.clone()),
        Some(attrs.gear_type.clone()),
        Some(attrs.fuel_type.clone()),
        attrs
            .seats
            .map(|seats| format!("{seats} {}", locale.pick("seats", "Sitze"))),
        attrs
            .doors
            .map(|doors| format!("{doors} {}", locale.pick("doors", "Türen"))),
    ]
    .into_iter()
    .flatten()
    .filter(|spec| !spec.is_empty())
    .collect::<Vec<_>>();

    let price = vehicle.price().map(|price| {
        format!("{price} € {}", locale.pick("per day", "pro Tag"))
    });

    rsx! {
        article { class: "card vehicle-card",
            img { class: "vehicle-image", src: "{image}", alt: "{title}" }
            div { class: "vehicle-body",
                h3 { "{title}" }
                ul { class: "vehicle-specs",
                    for spec in specs {
                        li { "{spec}" }
                    }
                }
                if let Some(price) = price {
                    span { class: "vehicle-price", "{price}" }
                }
            }
        }
    }
}
