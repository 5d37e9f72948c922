//! Mobile record as stored, and the body accepted for create/update.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `mobiles` table. Optional columns serialize as `null`, never omitted.
#[derive(Clone, Debug, PartialEq, Serialize, FromRow)]
pub struct Mobile {
    pub id: i64,
    pub name: String,
    pub price: Option<f64>,
    pub ram: Option<String>,
    pub storage: Option<String>,
}

/// Request body for create and update. Every field is written on update; absent optionals become NULL.
/// An `id` in the body is ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MobileInput {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Price")]
    pub price: Option<f64>,
    #[serde(default, alias = "RAM", alias = "Ram")]
    pub ram: Option<String>,
    #[serde(default, alias = "Storage")]
    pub storage: Option<String>,
}

#[cfg(test)]
impl Mobile {
    pub(crate) fn from_input(id: i64, input: MobileInput) -> Self {
        Mobile {
            id,
            name: input.name,
            price: input.price,
            ram: input.ram,
            storage: input.storage,
        }
    }
}
