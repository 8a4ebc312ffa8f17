//! Wire types for the static user collection.
//!
//! DESIGN
//! ======
//! The document uses Spanish field names on the wire
//! (`usuarios`, `documento`, `nombre`, `apellido`); Rust-side names are
//! mapped with `serde(rename)`. The server reuses these types to check the
//! data file at startup.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single registered user. Read-only on this side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Identity document number; the lookup key.
    #[serde(rename = "documento")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
}

impl UserRecord {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The whole `db.json` document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    #[serde(rename = "usuarios")]
    pub users: Vec<UserRecord>,
}

impl UserDirectory {
    /// First record whose id equals `id` exactly. Linear scan.
    pub fn find(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Ids that appear on more than one record, in first-seen order.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut dupes = Vec::new();
        for user in &self.users {
            if !seen.insert(user.id.as_str()) && !dupes.contains(&user.id.as_str()) {
                dupes.push(user.id.as_str());
            }
        }
        dupes
    }
}
