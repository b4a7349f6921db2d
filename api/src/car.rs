use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{QueryString, de_resource_id, endpoint};

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(deserialize_with = "de_resource_id")]
    pub id: String,
    #[serde(default)]
    pub attributes: VehicleAttributes,
}

// the listing only relies on a handful of attributes, and the api is free to omit any of
// them, so every field falls back to its default rather than failing the whole page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleAttributes {
    pub name: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub car_type: String,
    pub car_class: String,
    pub gear_type: String,
    pub fuel_type: String,
    pub seats: Option<u32>,
    pub doors: Option<u32>,
    pub base_price_in_cents: Option<i64>,
    pub image: Option<String>,
}

impl Vehicle {
    pub fn title(&self) -> String {
        let attrs = &self.attributes;

        if !attrs.name.is_empty() {
            return attrs.name.clone();
        }

        format!("{} {}", attrs.brand, attrs.model).trim().to_owned()
    }

    // prices are stored in cents; the ui shows whole units with two decimals
    pub fn price(&self) -> Option<String> {
        self.attributes
            .base_price_in_cents
            .map(|cents| format!("{}.{:02}", cents / 100, (cents % 100).abs()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum SortKey {
    YearDesc,
    YearAsc,
    PriceDesc,
    PriceAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::PriceDesc,
        SortKey::PriceAsc,
    ];

    // the value stored in the page url
    pub fn from_param(param: &str) -> Option<SortKey> {
        match param {
            "yearDesc" => Some(SortKey::YearDesc),
            "yearAsc" => Some(SortKey::YearAsc),
            "priceDesc" => Some(SortKey::PriceDesc),
            "priceAsc" => Some(SortKey::PriceAsc),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::YearDesc => "yearDesc",
            SortKey::YearAsc => "yearAsc",
            SortKey::PriceDesc => "priceDesc",
            SortKey::PriceAsc => "priceAsc",
        }
    }

    // the value the api expects in its own sort parameter
    pub fn api_field(&self) -> &'static str {
        match self {
            SortKey::YearDesc => "-year",
            SortKey::YearAsc => "year",
            SortKey::PriceDesc => "-base_price_in_cents",
            SortKey::PriceAsc => "base_price_in_cents",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_param())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
}

impl Default for PageMeta {
    fn default() -> Self {
        PageMeta {
            current_page: 1,
            last_page: 1,
        }
    }
}

fn first_page() -> u32 {
    1
}

// messages

// list a page of vehicles
//
// every filter key is always sent, with an empty value meaning "no filter", which is what
// the api expects; only the sort key is omitted when unset
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListCarsReq {
    pub page: u32,
    pub car_type: Option<String>,
    pub car_class: Option<String>,
    pub gear_type: Option<String>,
    pub fuel_type: Option<String>,
    pub pick_up_location: Option<String>,
    pub drop_off_location: Option<String>,
    pub is_available: Option<String>,
    pub sort: Option<SortKey>,
}

impl QueryString for ListCarsReq {
    fn query(&self) -> Vec<(String, String)> {
        let filter = |key: &str, value: &Option<String>| {
            (format!("filter[{key}]"), value.clone().unwrap_or_default())
        };

        let mut query = vec![
            (String::from("page"), self.page.max(1).to_string()),
            filter("carType", &self.car_type),
            filter("carClass", &self.car_class),
            filter("gearType", &self.gear_type),
            filter("fuelType", &self.fuel_type),
            filter("pickUpLocation", &self.pick_up_location),
            filter("dropOffLocation", &self.drop_off_location),
            filter("isAvailable", &self.is_available),
        ];

        if let Some(sort) = self.sort {
            query.push((String::from("sort"), String::from(sort.api_field())));
        }

        query
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCarsResp {
    #[serde(default)]
    pub data: Vec<Vehicle>,
    #[serde(default)]
    pub links: PageLinks,
    #[serde(default)]
    pub meta: PageMeta,
}

endpoint!(ListCars, "/api/cars");

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sort_keys_map_to_api_fields() {
        let fields: Vec<_> = SortKey::ALL.iter().map(|k| k.api_field()).collect();

        assert_eq!(
            fields,
            vec!["-year", "year", "-base_price_in_cents", "base_price_in_cents"]
        );
    }

    #[test]
    fn sort_params_round_trip_through_the_url_value() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_param(key.as_param()), Some(key));
        }
        assert_eq!(SortKey::from_param("cheapest"), None);
    }

    #[test]
    fn empty_request_sends_every_filter_blank() {
        let query = ListCarsReq::default().query();

        assert_eq!(query[0], (String::from("page"), String::from("1")));
        assert_eq!(query.len(), 8);
        assert!(query[1..].iter().all(|(k, v)| k.starts_with("filter[") && v.is_empty()));
    }

    #[test]
    fn populated_request_renders_filters_and_sort() {
        let req = ListCarsReq {
            page: 3,
            car_type: Some(String::from("suv")),
            pick_up_location: Some(String::from("7")),
            drop_off_location: Some(String::from("7")),
            is_available: Some(String::from("10/01/2025 10:00,11/01/2025 10:00")),
            sort: Some(SortKey::PriceAsc),
            ..Default::default()
        };

        let query = req.query();

        assert_eq!(query[0].1, "3");
        assert!(query.contains(&(String::from("filter[carType]"), String::from("suv"))));
        assert!(query.contains(&(String::from("filter[pickUpLocation]"), String::from("7"))));
        assert!(query.contains(&(
            String::from("filter[isAvailable]"),
            String::from("10/01/2025 10:00,11/01/2025 10:00")
        )));
        assert_eq!(
            query.last(),
            Some(&(String::from("sort"), String::from("base_price_in_cents")))
        );
    }

    #[test]
    fn response_tolerates_missing_meta_and_attributes() {
        let resp: ListCarsResp = serde_json::from_value(json!({
            "data": [{ "id": 12 }],
        }))
        .unwrap();

        assert_eq!(resp.meta.last_page, 1);
        assert_eq!(resp.data[0].id, "12");
        assert_eq!(resp.data[0].attributes, VehicleAttributes::default());
    }

    #[test]
    fn vehicle_title_falls_back_to_brand_and_model() {
        let vehicle: Vehicle = serde_json::from_value(json!({
            "id": "a1",
            "attributes": { "brand": "Skoda", "model": "Octavia", "base_price_in_cents": 4599 }
        }))
        .unwrap();

        assert_eq!(vehicle.title(), "Skoda Octavia");
        assert_eq!(vehicle.price().as_deref(), Some("45.99"));
    }
}
