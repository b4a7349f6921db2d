use std::fmt::Display;

use api::car::SortKey;
use url::form_urlencoded;

// keys owned by the query-parameter store
pub const RENT_LOCATION: &str = "rentLocation";
pub const RETURN_LOCATION: &str = "returnLocation";
pub const PICKUP_DATE: &str = "pickupDate";
pub const DROP_OFF_DATE: &str = "dropOffDate";
pub const SORT: &str = "sort";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterKind {
    CarType,
    CarClass,
    GearType,
    FuelType,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::CarType,
        FilterKind::CarClass,
        FilterKind::GearType,
        FilterKind::FuelType,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FilterKind::CarType => "filter[carType]",
            FilterKind::CarClass => "filter[carClass]",
            FilterKind::GearType => "filter[gearType]",
            FilterKind::FuelType => "filter[fuelType]",
        }
    }
}

// QueryParams
//
// the url query string as an ordered list of pairs.  this is the single source of truth
// for the search criteria: a value that is not in here is absent, no matter what some
// component last held in memory.
//
// there is deliberately no way to patch the browser url one key at a time; callers build a
// complete QueryParams and commit it in a single navigation
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(query: &str) -> Self {
        let query = query.trim_start_matches('?');

        QueryParams {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    // empty values are treated the same as missing ones
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    // overwrite the first occurrence in place and drop any duplicates, or append
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();

        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_owned(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // a copy with one filter set or cleared
    pub fn with_filter(&self, kind: FilterKind, value: Option<&str>) -> QueryParams {
        let mut next = self.clone();
        match value.filter(|v| !v.is_empty()) {
            Some(value) => next.set(kind.key(), value),
            None => next.remove(kind.key()),
        }
        next
    }

    pub fn with_sort(&self, sort: Option<SortKey>) -> QueryParams {
        let mut next = self.clone();
        match sort {
            Some(sort) => next.set(SORT, sort.as_param()),
            None => next.remove(SORT),
        }
        next
    }

    // a copy with every filter and the sort removed, keeping the booking criteria
    pub fn without_filters(&self) -> QueryParams {
        let mut next = self.clone();
        for kind in FilterKind::ALL {
            next.remove(kind.key());
        }
        next.remove(SORT);
        next
    }
}

impl Display for QueryParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct VehicleFilterState {
    pub car_type: Option<String>,
    pub car_class: Option<String>,
    pub gear_type: Option<String>,
    pub fuel_type: Option<String>,
    pub sort: Option<SortKey>,
}

impl VehicleFilterState {
    pub fn get(&self, kind: FilterKind) -> Option<&str> {
        match kind {
            FilterKind::CarType => self.car_type.as_deref(),
            FilterKind::CarClass => self.car_class.as_deref(),
            FilterKind::GearType => self.gear_type.as_deref(),
            FilterKind::FuelType => self.fuel_type.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == VehicleFilterState::default()
    }
}

// typed, read-only view of the store
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct SearchQuery {
    pub rent_location: Option<String>,
    pub return_location: Option<String>,
    pub pickup_date: Option<String>,
    pub drop_off_date: Option<String>,
    pub filters: VehicleFilterState,
}

impl SearchQuery {
    pub fn from_params(params: &QueryParams) -> Self {
        let owned = |key: &str| params.get(key).map(str::to_owned);

        SearchQuery {
            rent_location: owned(RENT_LOCATION),
            return_location: owned(RETURN_LOCATION),
            pickup_date: owned(PICKUP_DATE),
            drop_off_date: owned(DROP_OFF_DATE),
            filters: VehicleFilterState {
                car_type: owned(FilterKind::CarType.key()),
                car_class: owned(FilterKind::CarClass.key()),
                gear_type: owned(FilterKind::GearType.key()),
                fuel_type: owned(FilterKind::FuelType.key()),
                sort: params.get(SORT).and_then(SortKey::from_param),
            },
        }
    }

    // true when all four booking criteria are present
    pub fn has_booking(&self) -> bool {
        self.rent_location.is_some()
            && self.return_location.is_some()
            && self.pickup_date.is_some()
            && self.drop_off_date.is_some()
    }

    // the availability window as the api wants it, if either end is known
    pub fn availability(&self) -> Option<String> {
        if self.pickup_date.is_none() && self.drop_off_date.is_none() {
            return None;
        }

        Some(format!(
            "{},{}",
            self.pickup_date.as_deref().unwrap_or_default(),
            self.drop_off_date.as_deref().unwrap_or_default()
        ))
    }
}

impl From<&QueryParams> for SearchQuery {
    fn from(params: &QueryParams) -> Self {
        SearchQuery::from_params(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_brackets_and_plus_signs() {
        let params = QueryParams::parse("?rentLocation=Berlin+Airport&filter%5BcarType%5D=suv");

        assert_eq!(params.get(RENT_LOCATION), Some("Berlin Airport"));
        assert_eq!(params.get("filter[carType]"), Some("suv"));
    }

    #[test]
    fn empty_values_read_as_absent() {
        let params = QueryParams::parse("sort=&rentLocation=Munich");

        assert_eq!(params.get(SORT), None);
        assert_eq!(params.get(RENT_LOCATION), Some("Munich"));
    }

    #[test]
    fn set_replaces_in_place_and_drops_duplicates() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");

        assert_eq!(params.encode(), "a=9&b=2");
    }

    #[test]
    fn set_appends_unknown_keys() {
        let mut params = QueryParams::parse("a=1");
        params.set("b", "2");

        assert_eq!(params.encode(), "a=1&b=2");
    }

    #[test]
    fn encode_then_parse_preserves_pairs() {
        let mut params = QueryParams::new();
        params.set(PICKUP_DATE, "10/01/2025 10:00");
        params.set(RENT_LOCATION, "Köln Hbf");

        assert_eq!(QueryParams::parse(&params.encode()), params);
    }

    #[test]
    fn with_filter_clears_on_empty_value() {
        let params = QueryParams::parse("filter%5BgearType%5D=manual&rentLocation=Rome");

        let cleared = params.with_filter(FilterKind::GearType, Some(""));
        let set = params.with_filter(FilterKind::FuelType, Some("diesel"));

        assert_eq!(cleared.get("filter[gearType]"), None);
        assert_eq!(cleared.get(RENT_LOCATION), Some("Rome"));
        assert_eq!(set.get("filter[fuelType]"), Some("diesel"));
        assert_eq!(set.get("filter[gearType]"), Some("manual"));
    }

    #[test]
    fn without_filters_keeps_booking_criteria() {
        let params = QueryParams::parse(
            "rentLocation=Rome&sort=priceAsc&filter%5BcarType%5D=suv&filter%5BfuelType%5D=petrol",
        );

        let cleared = params.without_filters();

        assert_eq!(cleared.encode(), "rentLocation=Rome");
    }

    #[test]
    fn search_query_reads_known_sort_only() {
        let known = SearchQuery::from_params(&QueryParams::parse("sort=yearDesc"));
        let unknown = SearchQuery::from_params(&QueryParams::parse("sort=random"));

        assert_eq!(known.filters.sort, Some(SortKey::YearDesc));
        assert_eq!(unknown.filters.sort, None);
        assert!(unknown.filters.is_empty());
    }

    #[test]
    fn availability_joins_dates_when_any_is_present() {
        let both = SearchQuery::from_params(&QueryParams::parse(
            "pickupDate=10%2F01%2F2025+10%3A00&dropOffDate=11%2F01%2F2025+10%3A00",
        ));
        let pickup_only = SearchQuery {
            pickup_date: Some(String::from("10/01/2025 10:00")),
            ..Default::default()
        };

        assert_eq!(both.availability().as_deref(), Some("10/01/2025 10:00,11/01/2025 10:00"));
        assert_eq!(pickup_only.availability().as_deref(), Some("10/01/2025 10:00,"));
        assert_eq!(SearchQuery::default().availability(), None);
    }

    #[test]
    fn booking_requires_all_four_criteria() {
        let mut params = QueryParams::parse("rentLocation=A&returnLocation=A&pickupDate=x");
        assert!(!SearchQuery::from(&params).has_booking());

        params.set(DROP_OFF_DATE, "y");
        assert!(SearchQuery::from(&params).has_booking());
    }
}
