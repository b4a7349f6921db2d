pub mod storage;
pub mod style;

use chrono::{Local, NaiveDateTime};

use api::ApiContext;
use common::{config::RentConfig, i18n::Locale};

// wall clock in the visitor's timezone, which is what datetime-local inputs show
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// every request carries the page language and the configured base url and timeout
pub fn api_context(config: &RentConfig, locale: Locale) -> ApiContext {
    ApiContext::new(
        config.api.base_url.clone(),
        locale.tag(),
        config.request_timeout(),
    )
}
