use api::car::{ListCarsReq, ListCarsResp, Vehicle};
use tracing::{debug, error};

use crate::{
    booking::{BookingContext, LocationSlot},
    query::SearchQuery,
};

// the request for one page of the vehicle listing
//
// a pure function of the url, the booking context and the page.  location ids are only
// sent for the names the url currently shows
pub fn derive_request(search: &SearchQuery, booking: &BookingContext, page: u32) -> ListCarsReq {
    let filters = &search.filters;

    ListCarsReq {
        page: page.max(1),
        car_type: filters.car_type.clone(),
        car_class: filters.car_class.clone(),
        gear_type: filters.gear_type.clone(),
        fuel_type: filters.fuel_type.clone(),
        pick_up_location: booking
            .id_for(LocationSlot::Rent, search.rent_location.as_deref())
            .map(str::to_owned),
        drop_off_location: booking
            .id_for(LocationSlot::Return, search.return_location.as_deref())
            .map(str::to_owned),
        is_available: search.availability(),
        sort: filters.sort,
    }
}

// one page of results; always replaced as a whole, never appended to
#[derive(Clone, Debug, PartialEq)]
pub struct VehiclePage {
    pub items: Vec<Vehicle>,
    pub current_page: u32,
    pub total_pages: u32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FeedState {
    #[default]
    Idle,
    Loading,
    Populated(VehiclePage),
    Empty,
    Failed(String),
}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Idle | FeedState::Loading)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchTicket(u64);

// VehicleFeed
//
// the listing's state machine.  every begin() supersedes whatever was in flight, and a
// response only lands if it carries the ticket of the latest request
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VehicleFeed {
    generation: u64,
    request: Option<ListCarsReq>,
    state: FeedState,
    total_pages: Option<u32>,
}

impl VehicleFeed {
    pub fn begin(&mut self, req: ListCarsReq) -> FetchTicket {
        self.generation += 1;
        debug!({ generation = self.generation, page = req.page }, "fetching vehicles");

        self.request = Some(req);
        self.state = FeedState::Loading;
        FetchTicket(self.generation)
    }

    // returns false when the response was superseded and has been dropped
    pub fn resolve(&mut self, ticket: FetchTicket, result: anyhow::Result<ListCarsResp>) -> bool {
        if ticket.0 != self.generation {
            debug!({ ticket = ticket.0, current = self.generation }, "dropping stale vehicle page");
            return false;
        }

        self.state = match result {
            Ok(resp) => {
                let total_pages = resp.meta.last_page.max(1);
                self.total_pages = Some(total_pages);

                if resp.data.is_empty() {
                    FeedState::Empty
                } else {
                    FeedState::Populated(VehiclePage {
                        items: resp.data,
                        current_page: self.request.as_ref().map_or(1, |req| req.page),
                        total_pages,
                    })
                }
            }
            Err(err) => {
                error!("failed to fetch vehicles: {err}");
                FeedState::Failed(err.to_string())
            }
        };

        true
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn request(&self) -> Option<&ListCarsReq> {
        self.request.as_ref()
    }

    // last known page count; stays put while a new page loads or after a failure
    pub fn total_pages(&self) -> u32 {
        self.total_pages.unwrap_or(1)
    }
}
