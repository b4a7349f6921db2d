use api::location::LocationCandidate;
use tracing::debug;

// which of the two location fields a value belongs to
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LocationSlot {
    Rent,
    Return,
}

// a location id together with the name it was picked under
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ResolvedLocation {
    pub id: String,
    pub name: String,
}

// BookingContext
//
// the resolved location ids behind the names in the url.  the names are what the user sees
// and shares; the ids are what the vehicle listing filters on.  an id only counts while the
// url still shows the name it was resolved for.  this lives only as long as the browsing
// session and is rebuilt from scratch on reload
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct BookingContext {
    pub rent: Option<ResolvedLocation>,
    pub ret: Option<ResolvedLocation>,
}

impl BookingContext {
    pub fn resolve(&mut self, slot: LocationSlot, candidate: &LocationCandidate) {
        debug!({ slot = ?slot, id = %candidate.id }, "resolved booking location");

        let resolved = Some(ResolvedLocation {
            id: candidate.id.clone(),
            name: candidate.display_name.clone(),
        });
        match slot {
            LocationSlot::Rent => self.rent = resolved,
            LocationSlot::Return => self.ret = resolved,
        }
    }

    // returning the car where it was picked up
    pub fn return_to_rent_location(&mut self) {
        self.ret = self.rent.clone();
    }

    pub fn location_id(&self, slot: LocationSlot) -> Option<&str> {
        self.resolved(slot).map(|loc| loc.id.as_str())
    }

    // the id for a name shown in the url, if that is the name it was resolved for
    pub fn id_for(&self, slot: LocationSlot, name: Option<&str>) -> Option<&str> {
        self.resolved(slot)
            .filter(|loc| Some(loc.name.as_str()) == name)
            .map(|loc| loc.id.as_str())
    }

    fn resolved(&self, slot: LocationSlot) -> Option<&ResolvedLocation> {
        match slot {
            LocationSlot::Rent => self.rent.as_ref(),
            LocationSlot::Return => self.ret.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str) -> LocationCandidate {
        LocationCandidate {
            id: id.to_owned(),
            display_name: format!("Location {id}"),
        }
    }

    #[test]
    fn slots_are_written_independently() {
        let mut ctx = BookingContext::default();

        ctx.resolve(LocationSlot::Rent, &candidate("7"));
        assert_eq!(ctx.location_id(LocationSlot::Rent), Some("7"));
        assert_eq!(ctx.location_id(LocationSlot::Return), None);

        ctx.resolve(LocationSlot::Return, &candidate("9"));
        ctx.resolve(LocationSlot::Rent, &candidate("8"));
        assert_eq!(ctx.location_id(LocationSlot::Rent), Some("8"));
        assert_eq!(ctx.location_id(LocationSlot::Return), Some("9"));
    }

    #[test]
    fn ids_only_count_for_the_name_they_were_resolved_for() {
        let mut ctx = BookingContext::default();
        ctx.resolve(LocationSlot::Rent, &candidate("7"));

        assert_eq!(ctx.id_for(LocationSlot::Rent, Some("Location 7")), Some("7"));
        assert_eq!(ctx.id_for(LocationSlot::Rent, Some("Location 9")), None);
        assert_eq!(ctx.id_for(LocationSlot::Rent, None), None);
        assert_eq!(ctx.id_for(LocationSlot::Return, Some("Location 7")), None);
    }

    #[test]
    fn same_return_location_copies_the_rent_id() {
        let mut ctx = BookingContext::default();
        ctx.resolve(LocationSlot::Return, &candidate("9"));
        ctx.resolve(LocationSlot::Rent, &candidate("7"));

        ctx.return_to_rent_location();

        assert_eq!(ctx.location_id(LocationSlot::Return), Some("7"));
    }
}
