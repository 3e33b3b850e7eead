// ── Domain model ──
//
// Canonical user record as the UI sees it. Values are fetched, never
// constructed by the application itself, and never validated.

use std::fmt;

/// Identifier of a user record, unique within one fetch result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A user record from the remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

impl UserRecord {
    /// External link for the website field: `https://<website>`.
    pub fn website_url(&self) -> String {
        format!("https://{}", self.website)
    }

    /// Username with the `@` handle prefix.
    pub fn handle(&self) -> String {
        format!("@{}", self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

impl Address {
    /// `"<street>, <suite>"`
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.suite)
    }

    /// `"<city>, <zipcode>"`
    pub fn city_line(&self) -> String {
        format!("{}, {}", self.city, self.zipcode)
    }
}

/// Coordinates kept as the server's decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

impl Geo {
    /// Map link built from the raw coordinate strings, no rounding.
    pub fn map_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo(lat: &str, lng: &str) -> Geo {
        Geo {
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    #[test]
    fn map_url_uses_raw_strings() {
        assert_eq!(
            geo("40.7128", "-74.0060").map_url(),
            "https://www.google.com/maps?q=40.7128,-74.0060"
        );
        assert_eq!(
            geo("-37.3159", "81.1496").map_url(),
            "https://www.google.com/maps?q=-37.3159,81.1496"
        );
    }

    #[test]
    fn address_lines() {
        let address = Address {
            street: "Main St".into(),
            suite: "Apt 1".into(),
            city: "New York".into(),
            zipcode: "10001".into(),
            geo: geo("0", "0"),
        };
        assert_eq!(address.street_line(), "Main St, Apt 1");
        assert_eq!(address.city_line(), "New York, 10001");
    }

    #[test]
    fn user_id_display() {
        assert_eq!(UserId(42).to_string(), "42");
        assert_eq!(UserId::from(7), UserId(7));
    }
}
