// Test records shared by the unit tests.

use crate::model::{Address, Company, Geo, UserId, UserRecord};

pub(crate) fn user(id: i64, name: &str) -> UserRecord {
    let handle = name.to_lowercase().replace(' ', "");
    UserRecord {
        id: UserId(id),
        name: name.into(),
        username: handle.clone(),
        email: format!("{handle}@example.com"),
        address: Address {
            street: "Main St".into(),
            suite: "Apt 1".into(),
            city: "New York".into(),
            zipcode: "10001".into(),
            geo: Geo {
                lat: "40.7128".into(),
                lng: "-74.0060".into(),
            },
        },
        phone: "123-456-7890".into(),
        website: "example.com".into(),
        company: Company {
            name: "Example Inc".into(),
            catch_phrase: "Making examples since 2023".into(),
            bs: "innovative examples".into(),
        },
    }
}
