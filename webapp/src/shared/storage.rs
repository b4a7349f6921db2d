use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

use common::session::{TOKEN_STORAGE_KEY, TokenStore};

const PREFIX: &str = "rentals_";

fn prefixed(key: &str) -> String {
    format!("{PREFIX}{key}")
}

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = prefixed(key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// missing keys are the normal case on a first visit, so they fall back quietly
pub fn try_local_storage<T>(key: &str) -> T
where
    T: for<'a> Deserialize<'a> + Default,
{
    LocalStorage::get(prefixed(key)).unwrap_or_default()
}

// the bearer token persisted by the sign-in flow
//
// the sign-in flow stores it as a plain string under an unprefixed key, so it bypasses the
// json helpers above
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .unwrap_or_else(|err| {
                console_error!(format!("Failed to read {TOKEN_STORAGE_KEY} from local storage: {err:?}"));
                None
            })
    }

    fn clear(&self) {
        LocalStorage::raw()
            .remove_item(TOKEN_STORAGE_KEY)
            .unwrap_or_else(|err| {
                console_error!(format!("Failed to remove {TOKEN_STORAGE_KEY} from local storage: {err:?}"))
            })
    }
}
