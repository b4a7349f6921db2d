use serde::{Deserialize, Serialize};

use crate::{QueryString, endpoint};

// structs and types

// the profile as the api names it; any field may be missing or null
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileAttributes {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_code: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileResource {
    #[serde(default)]
    pub attributes: Option<ProfileAttributes>,
}

// messages

// fetch the profile belonging to the bearer token
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMyProfileReq {}

impl QueryString for GetMyProfileReq {
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMyProfileResp {
    #[serde(default)]
    pub data: Option<ProfileResource>,
}

impl GetMyProfileResp {
    pub fn attributes(self) -> Option<ProfileAttributes> {
        self.data.and_then(|resource| resource.attributes)
    }
}

endpoint!(GetMyProfile, "/api/my-profiles");

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn attributes_survive_nulls_and_gaps() {
        let resp: GetMyProfileResp = serde_json::from_value(json!({
            "data": { "attributes": { "first_name": "Ada", "phone": null } }
        }))
        .unwrap();

        let attrs = resp.attributes().unwrap();
        assert_eq!(attrs.first_name.as_deref(), Some("Ada"));
        assert_eq!(attrs.phone, None);
        assert_eq!(attrs.email, None);
    }

    #[test]
    fn missing_resource_yields_no_attributes() {
        let resp: GetMyProfileResp = serde_json::from_value(json!({ "message": "Unauthenticated." })).unwrap();

        assert!(resp.attributes().is_none());
    }
}
