use api::location::LocationCandidate;
use chrono::{Days, NaiveDateTime, NaiveTime, TimeDelta};
use thiserror::Error;

use crate::{
    URL_DATE_FORMAT,
    autocomplete::{Autocomplete, LookupAction, LookupTicket},
    booking::{BookingContext, LocationSlot},
    config::RentConfig,
    i18n::Locale,
    query::{DROP_OFF_DATE, PICKUP_DATE, QueryParams, RENT_LOCATION, RETURN_LOCATION},
};

// what html datetime-local inputs produce and accept
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

// the search form reports exactly one of these at a time, in this order of precedence
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum RentFormError {
    #[error("rent location too short")]
    RentLocationTooShort,
    #[error("return location too short")]
    ReturnLocationTooShort,
    #[error("invalid location")]
    InvalidLocation,
    #[error("date required")]
    DateRequired,
    #[error("invalid date range")]
    InvalidDateRange,
}

impl RentFormError {
    pub fn localized(&self, locale: Locale) -> &'static str {
        match self {
            RentFormError::RentLocationTooShort => locale.pick(
                "Please enter at least 3 characters for the pickup location.",
                "Bitte geben Sie mindestens 3 Zeichen für den Abholort ein.",
            ),
            RentFormError::ReturnLocationTooShort => locale.pick(
                "Please enter at least 3 characters for the return location.",
                "Bitte geben Sie mindestens 3 Zeichen für den Rückgabeort ein.",
            ),
            RentFormError::InvalidLocation => locale.pick(
                "Please choose a location from the list.",
                "Bitte wählen Sie einen Ort aus der Liste.",
            ),
            RentFormError::DateRequired => locale.pick(
                "Please choose pickup and drop-off dates.",
                "Bitte wählen Sie Abhol- und Rückgabedatum.",
            ),
            RentFormError::InvalidDateRange => locale.pick(
                "The drop-off must be at least one hour after the pickup.",
                "Die Rückgabe muss mindestens eine Stunde nach der Abholung liegen.",
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchCriteria {
    pub rent_location_name: String,
    pub return_location_name: String,
    pub pickup_date: Option<NaiveDateTime>,
    pub drop_off_date: Option<NaiveDateTime>,
    pub use_different_return_location: bool,
}

impl SearchCriteria {
    // tomorrow morning to the evening after, unless configured otherwise
    pub fn with_defaults(now: NaiveDateTime, config: &RentConfig) -> Self {
        let search = &config.search;
        let at = |days: i64, hour: u32| {
            let day = now.date().checked_add_days(Days::new(u64::try_from(days).ok()?))?;
            Some(day.and_time(NaiveTime::from_hms_opt(hour, 0, 0)?))
        };

        SearchCriteria {
            pickup_date: at(search.pickup_offset_days, search.pickup_hour),
            drop_off_date: at(search.dropoff_offset_days, search.dropoff_hour),
            ..Default::default()
        }
    }
}

// criteria that passed validation, with the return location already defaulted
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedCriteria {
    pub rent_location: String,
    pub return_location: String,
    pub pickup_date: NaiveDateTime,
    pub drop_off_date: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationRules {
    pub min_name_len: usize,
    pub min_duration: TimeDelta,
}

impl From<&RentConfig> for ValidationRules {
    fn from(config: &RentConfig) -> Self {
        ValidationRules {
            min_name_len: config.search.min_query_len,
            min_duration: config.min_booking_duration(),
        }
    }
}

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules::from(&RentConfig::default())
    }
}

pub fn validate(
    criteria: &SearchCriteria,
    rent: &Autocomplete,
    ret: &Autocomplete,
    rules: &ValidationRules,
) -> Result<ResolvedCriteria, RentFormError> {
    let different = criteria.use_different_return_location;
    let long_enough = |name: &str| name.chars().count() >= rules.min_name_len;

    if !long_enough(&criteria.rent_location_name) {
        return Err(RentFormError::RentLocationTooShort);
    }

    if different && !long_enough(&criteria.return_location_name) {
        return Err(RentFormError::ReturnLocationTooShort);
    }

    if !rent.contains(&criteria.rent_location_name)
        || (different && !ret.contains(&criteria.return_location_name))
    {
        return Err(RentFormError::InvalidLocation);
    }

    let (Some(pickup_date), Some(drop_off_date)) = (criteria.pickup_date, criteria.drop_off_date)
    else {
        return Err(RentFormError::DateRequired);
    };

    if drop_off_date - pickup_date < rules.min_duration {
        return Err(RentFormError::InvalidDateRange);
    }

    let return_location = if different {
        criteria.return_location_name.clone()
    } else {
        criteria.rent_location_name.clone()
    };

    Ok(ResolvedCriteria {
        rent_location: criteria.rent_location_name.clone(),
        return_location,
        pickup_date,
        drop_off_date,
    })
}

// the complete parameter set to navigate to
//
// unrelated keys already in the url survive, except that a fresh search from the landing
// page starts without any of the previous filters
pub fn commit_params(
    current: &QueryParams,
    resolved: &ResolvedCriteria,
    clear_filters: bool,
) -> QueryParams {
    let mut next = if clear_filters {
        current.without_filters()
    } else {
        current.clone()
    };

    next.set(RENT_LOCATION, resolved.rent_location.as_str());
    next.set(RETURN_LOCATION, resolved.return_location.as_str());
    next.set(PICKUP_DATE, resolved.pickup_date.format(URL_DATE_FORMAT).to_string());
    next.set(DROP_OFF_DATE, resolved.drop_off_date.format(URL_DATE_FORMAT).to_string());

    next
}

pub fn parse_datetime_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_LOCAL_FORMAT).ok()
}

pub fn format_datetime_local(value: Option<NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(DATETIME_LOCAL_FORMAT).to_string())
        .unwrap_or_default()
}

// RentForm
//
// the vehicle search form: criteria being edited, one autocomplete per location field,
// the locations picked so far, the modal flag and the single error currently shown
//
// picks stay staged here until a submit succeeds; only then do they replace the shared
// booking context
#[derive(Clone, Debug, PartialEq)]
pub struct RentForm {
    pub criteria: SearchCriteria,
    rent: Autocomplete,
    ret: Autocomplete,
    staged: BookingContext,
    modal_open: bool,
    error: Option<RentFormError>,
}

impl RentForm {
    pub fn new(now: NaiveDateTime, config: &RentConfig) -> Self {
        RentForm {
            criteria: SearchCriteria::with_defaults(now, config),
            rent: Autocomplete::default(),
            ret: Autocomplete::default(),
            staged: BookingContext::default(),
            modal_open: false,
            error: None,
        }
    }

    pub fn autocomplete(&self, slot: LocationSlot) -> &Autocomplete {
        match slot {
            LocationSlot::Rent => &self.rent,
            LocationSlot::Return => &self.ret,
        }
    }

    fn autocomplete_mut(&mut self, slot: LocationSlot) -> &mut Autocomplete {
        match slot {
            LocationSlot::Rent => &mut self.rent,
            LocationSlot::Return => &mut self.ret,
        }
    }

    pub fn location_name(&self, slot: LocationSlot) -> &str {
        match slot {
            LocationSlot::Rent => &self.criteria.rent_location_name,
            LocationSlot::Return => &self.criteria.return_location_name,
        }
    }

    fn set_location_name(&mut self, slot: LocationSlot, name: String) {
        match slot {
            LocationSlot::Rent => self.criteria.rent_location_name = name,
            LocationSlot::Return => self.criteria.return_location_name = name,
        }
    }

    // a keystroke in one of the location fields
    pub fn input(&mut self, slot: LocationSlot, text: String, min_len: usize) -> LookupAction {
        let action = self.autocomplete_mut(slot).input(&text, min_len);
        self.set_location_name(slot, text);
        action
    }

    pub fn apply_lookup(
        &mut self,
        slot: LocationSlot,
        ticket: LookupTicket,
        candidates: Vec<LocationCandidate>,
    ) -> bool {
        self.autocomplete_mut(slot).apply(ticket, candidates)
    }

    pub fn fail_lookup(&mut self, slot: LocationSlot, ticket: LookupTicket) {
        self.autocomplete_mut(slot).fail(ticket);
    }

    // picking a candidate fills the field and stages its id
    pub fn select(&mut self, slot: LocationSlot, index: usize) -> bool {
        let Some(candidate) = self.autocomplete_mut(slot).select(index) else {
            return false;
        };

        self.staged.resolve(slot, &candidate);
        self.set_location_name(slot, candidate.display_name);
        true
    }

    fn stage_typed(&mut self, slot: LocationSlot, name: &str) {
        if self.staged.id_for(slot, Some(name)).is_some() {
            return;
        }
        if let Some(candidate) = self.autocomplete(slot).find(name).cloned() {
            self.staged.resolve(slot, &candidate);
        }
    }

    pub fn toggle_dropdown(&mut self, slot: LocationSlot) {
        self.autocomplete_mut(slot).toggle();
    }

    pub fn set_pickup(&mut self, date: Option<NaiveDateTime>) {
        self.criteria.pickup_date = date;
    }

    pub fn set_drop_off(&mut self, date: Option<NaiveDateTime>) {
        self.criteria.drop_off_date = date;
    }

    pub fn toggle_return_location(&mut self) {
        self.criteria.use_different_return_location = !self.criteria.use_different_return_location;
    }

    pub fn return_location_enabled(&self) -> bool {
        self.criteria.use_different_return_location
    }

    pub fn toggle_modal(&mut self) {
        self.modal_open = !self.modal_open;
    }

    pub fn is_collapsed(&self) -> bool {
        !self.modal_open
    }

    pub fn error(&self) -> Option<RentFormError> {
        self.error
    }

    // validate and, on success, publish the staged ids and produce the parameter set to
    // commit
    //
    // the form sends nothing itself: navigating to the returned parameters is what makes
    // the vehicle listing fetch
    pub fn submit(
        &mut self,
        current: &QueryParams,
        clear_filters: bool,
        rules: &ValidationRules,
        booking: &mut BookingContext,
    ) -> Result<QueryParams, RentFormError> {
        let resolved = match validate(&self.criteria, &self.rent, &self.ret, rules) {
            Ok(resolved) => resolved,
            Err(err) => {
                self.error = Some(err);
                return Err(err);
            }
        };

        // a name typed to an exact match counts as picked
        self.stage_typed(LocationSlot::Rent, &resolved.rent_location);
        if self.criteria.use_different_return_location {
            self.stage_typed(LocationSlot::Return, &resolved.return_location);
        } else {
            self.staged.return_to_rent_location();
        }
        *booking = self.staged.clone();

        self.error = None;
        self.modal_open = false;
        self.rent.close();
        self.ret.close();

        Ok(commit_params(current, &resolved, clear_filters))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::query::FilterKind;

    fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    fn candidate(id: &str, name: &str) -> LocationCandidate {
        LocationCandidate {
            id: id.to_owned(),
            display_name: name.to_owned(),
        }
    }

    // type a name, receive the given candidates, and pick the first one
    fn choose(form: &mut RentForm, slot: LocationSlot, c: LocationCandidate) {
        let LookupAction::Lookup { ticket, .. } = form.input(slot, c.display_name.clone(), 3) else {
            panic!("expected a lookup");
        };
        form.apply_lookup(slot, ticket, vec![c]);
        assert!(form.select(slot, 0));
    }

    fn berlin_form() -> RentForm {
        let mut form = RentForm::new(at(1, 8, 0), &RentConfig::default());
        choose(&mut form, LocationSlot::Rent, candidate("7", "Berlin Airport"));
        form.set_pickup(Some(at(10, 10, 0)));
        form.set_drop_off(Some(at(11, 10, 0)));
        form
    }

    #[test]
    fn defaults_are_tomorrow_morning_to_the_next_evening() {
        let criteria = SearchCriteria::with_defaults(at(5, 15, 42), &RentConfig::default());

        assert_eq!(criteria.pickup_date, Some(at(6, 10, 0)));
        assert_eq!(criteria.drop_off_date, Some(at(7, 18, 0)));
        assert!(!criteria.use_different_return_location);
    }

    #[test]
    fn berlin_airport_commits_the_expected_params() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();

        let params = form
            .submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking)
            .unwrap();

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("rentLocation", "Berlin Airport"),
                ("returnLocation", "Berlin Airport"),
                ("pickupDate", "10/01/2025 10:00"),
                ("dropOffDate", "11/01/2025 10:00"),
            ]
        );
        assert_eq!(booking.location_id(LocationSlot::Rent), Some("7"));
        assert_eq!(booking.location_id(LocationSlot::Return), Some("7"));
    }

    #[test]
    fn resubmitting_identical_values_is_idempotent() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        let rules = ValidationRules::default();

        let first = form.submit(&QueryParams::new(), false, &rules, &mut booking).unwrap();
        let second = form.submit(&first, false, &rules, &mut booking).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn explore_submit_keeps_filters_and_home_submit_clears_them() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        let rules = ValidationRules::default();
        let current = QueryParams::new()
            .with_filter(FilterKind::CarType, Some("suv"))
            .with_sort(Some(api::car::SortKey::PriceAsc));

        let kept = form.submit(&current, false, &rules, &mut booking).unwrap();
        let cleared = form.submit(&current, true, &rules, &mut booking).unwrap();

        assert_eq!(kept.get("filter[carType]"), Some("suv"));
        assert_eq!(kept.get("sort"), Some("priceAsc"));
        assert_eq!(cleared.get("filter[carType]"), None);
        assert_eq!(cleared.get("sort"), None);
    }

    #[test]
    fn short_rent_location_wins_over_everything_else() {
        let mut booking = BookingContext::default();
        let mut form = RentForm::new(at(1, 8, 0), &RentConfig::default());
        form.input(LocationSlot::Rent, String::from("Be"), 3);
        form.set_pickup(None);

        let err = form.submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking);

        assert_eq!(err, Err(RentFormError::RentLocationTooShort));
        assert_eq!(form.error(), Some(RentFormError::RentLocationTooShort));
    }

    #[test]
    fn return_location_is_only_checked_when_enabled() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        let rules = ValidationRules::default();

        form.criteria.return_location_name = String::from("x");
        assert!(form.submit(&QueryParams::new(), true, &rules, &mut booking).is_ok());

        form.toggle_return_location();
        assert_eq!(
            form.submit(&QueryParams::new(), true, &rules, &mut booking),
            Err(RentFormError::ReturnLocationTooShort)
        );

        form.criteria.return_location_name = String::from("Hamburg Hbf");
        assert_eq!(
            form.submit(&QueryParams::new(), true, &rules, &mut booking),
            Err(RentFormError::InvalidLocation)
        );
    }

    #[test]
    fn different_return_location_is_committed_and_resolved() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        form.toggle_return_location();
        choose(&mut form, LocationSlot::Return, candidate("12", "Hamburg Hbf"));

        let params = form
            .submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking)
            .unwrap();

        assert_eq!(params.get(RETURN_LOCATION), Some("Hamburg Hbf"));
        assert_eq!(booking.location_id(LocationSlot::Return), Some("12"));
    }

    #[test]
    fn picks_are_published_only_by_a_successful_submit() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        assert_eq!(booking, BookingContext::default());

        form.set_pickup(None);
        let _ = form.submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking);
        assert_eq!(booking, BookingContext::default());

        form.set_pickup(Some(at(10, 10, 0)));
        form.submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking)
            .unwrap();
        assert_eq!(booking.location_id(LocationSlot::Rent), Some("7"));
    }

    #[test]
    fn an_exactly_typed_candidate_counts_as_picked() {
        let mut booking = BookingContext::default();
        let mut form = RentForm::new(at(1, 8, 0), &RentConfig::default());
        let LookupAction::Lookup { ticket, .. } =
            form.input(LocationSlot::Rent, String::from("Berlin Airport"), 3)
        else {
            panic!("expected a lookup");
        };
        form.apply_lookup(LocationSlot::Rent, ticket, vec![candidate("7", "Berlin Airport")]);

        form.submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking)
            .unwrap();

        assert_eq!(booking.location_id(LocationSlot::Rent), Some("7"));
        assert_eq!(booking.location_id(LocationSlot::Return), Some("7"));
    }

    #[test]
    fn typed_names_must_match_a_fetched_candidate() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        form.criteria.rent_location_name = String::from("Berlin Airport Terminal 5");

        assert_eq!(
            form.submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking),
            Err(RentFormError::InvalidLocation)
        );
    }

    #[test]
    fn missing_dates_are_reported_after_locations() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        form.set_drop_off(None);

        assert_eq!(
            form.submit(&QueryParams::new(), true, &ValidationRules::default(), &mut booking),
            Err(RentFormError::DateRequired)
        );
    }

    #[test]
    fn rentals_shorter_than_the_minimum_are_rejected() {
        let rules = ValidationRules::default();
        let mut booking = BookingContext::default();
        let mut form = berlin_form();

        for minutes in [-120, -1, 0, 1, 30, 59] {
            form.set_drop_off(Some(at(10, 10, 0) + TimeDelta::minutes(minutes)));
            assert_eq!(
                form.submit(&QueryParams::new(), true, &rules, &mut booking),
                Err(RentFormError::InvalidDateRange),
                "{minutes} minutes should be rejected"
            );
        }

        form.set_drop_off(Some(at(10, 11, 0)));
        assert!(form.submit(&QueryParams::new(), true, &rules, &mut booking).is_ok());
    }

    #[test]
    fn successful_submit_collapses_the_modal_and_clears_the_error() {
        let mut booking = BookingContext::default();
        let mut form = berlin_form();
        let rules = ValidationRules::default();
        form.toggle_modal();
        form.set_pickup(None);
        let _ = form.submit(&QueryParams::new(), true, &rules, &mut booking);
        assert!(!form.is_collapsed());

        form.set_pickup(Some(at(10, 10, 0)));
        form.submit(&QueryParams::new(), true, &rules, &mut booking).unwrap();

        assert!(form.is_collapsed());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn datetime_local_values_parse_and_format() {
        let value = parse_datetime_local("2025-01-10T10:00");

        assert_eq!(value, Some(at(10, 10, 0)));
        assert_eq!(format_datetime_local(value), "2025-01-10T10:00");
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(format_datetime_local(None), "");
    }

    #[test]
    fn errors_render_in_both_languages() {
        let err = RentFormError::InvalidDateRange;

        assert_ne!(err.localized(Locale::En), err.localized(Locale::De));
        assert_eq!(err.to_string(), "invalid date range");
    }
}
