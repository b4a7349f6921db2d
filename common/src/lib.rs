// client-side state for the rental front-end
//
// nothing in this crate touches the dom or the network directly: the webapp owns the
// signals and the futures, and drives these types from its event handlers

pub mod autocomplete;
pub mod booking;
pub mod config;
pub mod explore;
pub mod i18n;
pub mod pagination;
pub mod profile;
pub mod query;
pub mod rent_form;
pub mod session;
pub mod validation;

// the format used for dates in the page url and in the availability filter
pub const URL_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";
