use serde::{Deserialize, Serialize};

/// One directory entry, exactly as the remote user API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Decimal-degree coordinates, kept as the strings the API sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl Address {
    /// "street, suite"
    pub fn street_line(&self) -> String {
        format!("{}, {}", self.street, self.suite)
    }

    /// "city, zipcode"
    pub fn city_line(&self) -> String {
        format!("{}, {}", self.city, self.zipcode)
    }
}
