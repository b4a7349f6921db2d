pub mod location_select;
pub mod navigation;
pub mod rent_form;
