//! Customer model
//!
//! Plain contact details collected by the create-account flow.

use serde::{Deserialize, Serialize};

use super::ids::CustomerId;

/// A bank customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
