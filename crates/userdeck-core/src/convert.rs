// ── API-to-domain type conversions ──
//
// Straight field moves from `userdeck_api::models` wire types into the
// domain model. No field is validated or reformatted.

use userdeck_api::{ApiAddress, ApiCompany, ApiGeo, ApiUser};

use crate::model::{Address, Company, Geo, UserId, UserRecord};

impl From<ApiUser> for UserRecord {
    fn from(u: ApiUser) -> Self {
        Self {
            id: UserId(u.id),
            name: u.name,
            username: u.username,
            email: u.email,
            address: u.address.into(),
            phone: u.phone,
            website: u.website,
            company: u.company.into(),
        }
    }
}

impl From<ApiAddress> for Address {
    fn from(a: ApiAddress) -> Self {
        Self {
            street: a.street,
            suite: a.suite,
            city: a.city,
            zipcode: a.zipcode,
            geo: a.geo.into(),
        }
    }
}

impl From<ApiGeo> for Geo {
    fn from(g: ApiGeo) -> Self {
        Self {
            lat: g.lat,
            lng: g.lng,
        }
    }
}

impl From<ApiCompany> for Company {
    fn from(c: ApiCompany) -> Self {
        Self {
            name: c.name,
            catch_phrase: c.catch_phrase,
            bs: c.bs,
        }
    }
}
