use api::location::LocationCandidate;
use tracing::debug;

// identifies one lookup so that a slow answer to an old query cannot replace the list
// produced by a newer one
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LookupTicket(u64);

// what the caller has to do after the text changed
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LookupAction {
    Lookup { query: String, ticket: LookupTicket },
    Cleared,
}

// Autocomplete
//
// candidate list and dropdown state for one location field.  the only throttle is the
// minimum length: shorter input clears the list and never reaches the network
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Autocomplete {
    candidates: Vec<LocationCandidate>,
    open: bool,
    generation: u64,
}

impl Autocomplete {
    pub fn input(&mut self, text: &str, min_len: usize) -> LookupAction {
        // anything in flight is now irrelevant, whichever branch we take
        self.generation += 1;

        if text.chars().count() < min_len {
            self.candidates.clear();
            self.open = false;
            return LookupAction::Cleared;
        }

        LookupAction::Lookup {
            query: text.to_owned(),
            ticket: LookupTicket(self.generation),
        }
    }

    // returns false when the answer was for an outdated query
    pub fn apply(&mut self, ticket: LookupTicket, candidates: Vec<LocationCandidate>) -> bool {
        if ticket.0 != self.generation {
            debug!({ ticket = ticket.0, current = self.generation }, "dropping stale location lookup");
            return false;
        }

        self.candidates = candidates;
        self.open = true;
        true
    }

    // a failed lookup leaves nothing to choose from
    pub fn fail(&mut self, ticket: LookupTicket) {
        if ticket.0 == self.generation {
            self.candidates.clear();
            self.open = false;
        }
    }

    pub fn select(&mut self, index: usize) -> Option<LocationCandidate> {
        let candidate = self.candidates.get(index).cloned()?;
        self.open = false;
        Some(candidate)
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn candidates(&self) -> &[LocationCandidate] {
        &self.candidates
    }

    // exact match against a fetched display name
    pub fn find(&self, display_name: &str) -> Option<&LocationCandidate> {
        self.candidates.iter().find(|c| c.display_name == display_name)
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.find(display_name).is_some()
    }
}
