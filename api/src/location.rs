use serde::{Deserialize, Serialize};

use crate::{QueryString, de_resource_id, endpoint};

// structs and types

// a selectable autocomplete result
//
// this is never persisted: it is consumed as soon as the user picks it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationCandidate {
    pub id: String,
    pub display_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationResource {
    #[serde(deserialize_with = "de_resource_id")]
    pub id: String,
    pub attributes: LocationAttributes,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationAttributes {
    #[serde(default)]
    pub name: String,
}

impl From<LocationResource> for LocationCandidate {
    fn from(resource: LocationResource) -> Self {
        LocationCandidate {
            id: resource.id,
            display_name: resource.attributes.name,
        }
    }
}

// messages

// free-text location lookup
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchLocationsReq {
    pub search: String,
}

impl QueryString for SearchLocationsReq {
    fn query(&self) -> Vec<(String, String)> {
        vec![(String::from("filter[search]"), self.search.clone())]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchLocationsResp {
    #[serde(default)]
    pub data: Vec<LocationResource>,
}

impl SearchLocationsResp {
    pub fn candidates(self) -> Vec<LocationCandidate> {
        self.data.into_iter().map(LocationCandidate::from).collect()
    }
}

endpoint!(SearchLocations, "/api/locations");
