use tracing::info;

// where the sign-in flow leaves the raw bearer token in browser storage
pub const TOKEN_STORAGE_KEY: &str = "token";

// where the bearer token outlives a page load
//
// issuing and saving tokens belongs to the sign-in flow; the session only reads and forgets
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn clear(&self);
}

// Session
//
// authentication state with an explicit lifecycle: created once when the app starts by
// reading the persisted token, handed to components through context, and torn down on
// logout.  components never read the token store themselves
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn init(store: &impl TokenStore) -> Self {
        let token = store.load().filter(|t| !t.trim().is_empty());
        info!({ authenticated = token.is_some() }, "session initialized");
        Session { token }
    }

    pub fn logout(&mut self, store: &impl TokenStore) {
        store.clear();
        self.token = None;
        info!("session ended");
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        token: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn save(&self, token: &str) {
            *self.token.borrow_mut() = Some(token.to_owned());
        }
    }

    impl TokenStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.token.borrow().clone()
        }

        fn clear(&self) {
            *self.token.borrow_mut() = None;
        }
    }

    #[test]
    fn init_reads_the_persisted_token() {
        let store = MemoryStore::default();
        assert!(!Session::init(&store).is_authenticated());

        store.save("abc");
        let session = Session::init(&store);
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("abc"));
    }

    #[test]
    fn raw_tokens_are_used_as_stored() {
        let store = MemoryStore::default();
        store.save("eyJhbGciOiJIUzI1NiJ9.e30.sig");

        assert_eq!(TOKEN_STORAGE_KEY, "token");
        assert_eq!(Session::init(&store).token(), Some("eyJhbGciOiJIUzI1NiJ9.e30.sig"));
    }

    #[test]
    fn blank_tokens_do_not_authenticate() {
        let store = MemoryStore::default();
        store.save("  ");

        assert!(!Session::init(&store).is_authenticated());
    }

    #[test]
    fn logout_tears_down_memory_and_storage() {
        let store = MemoryStore::default();
        store.save("abc");
        let mut session = Session::init(&store);
        assert!(session.is_authenticated());

        session.logout(&store);

        assert!(!session.is_authenticated());
        assert_eq!(store.load(), None);
        assert!(!Session::init(&store).is_authenticated());
    }
}
