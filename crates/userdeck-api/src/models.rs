// Wire types for the `/users` collection.
//
// Field names mirror the JSON exactly (camelCase). Nothing is validated:
// every text field is an opaque string, geo coordinates included.

use serde::{Deserialize, Serialize};

/// One element of the `/users` response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiUser {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: ApiAddress,
    pub phone: String,
    pub website: String,
    pub company: ApiCompany,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAddress {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: ApiGeo,
}

/// Latitude / longitude as the decimal strings the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiGeo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompany {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_catch_phrase_and_keeps_geo_verbatim() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: ApiUser = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
        assert_eq!(user.address.geo.lat, "-37.3159");
        assert_eq!(user.address.geo.lng, "81.1496");
    }

    #[test]
    fn numeric_geo_is_rejected() {
        let raw = r#"{"lat": 40.7128, "lng": -74.006}"#;
        assert!(serde_json::from_str::<ApiGeo>(raw).is_err());
    }
}
