//! Cart line items as delivered by the checkout API.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Availability status of a line item.
///
/// Only [`Availability::Available`] counts as in stock. Values the list does
/// not know about are kept verbatim in [`Availability::Other`] and treated as
/// unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Availability {
    Available,
    CannotBeDelivered,
    WithoutStock,
    WithoutPrice,
    NullPrice,
    WithoutPriceFulfillment,
    Other(String),
}

impl Availability {
    pub fn as_str(&self) -> &str {
        match self {
            Availability::Available => "available",
            Availability::CannotBeDelivered => "cannotBeDelivered",
            Availability::WithoutStock => "withoutStock",
            Availability::WithoutPrice => "withoutPrice",
            Availability::NullPrice => "nullPrice",
            Availability::WithoutPriceFulfillment => "withoutPriceFulfillment",
            Availability::Other(value) => value,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl Default for Availability {
    fn default() -> Self {
        Availability::Other(String::new())
    }
}

impl FromStr for Availability {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value {
            "available" => Availability::Available,
            "cannotBeDelivered" => Availability::CannotBeDelivered,
            "withoutStock" => Availability::WithoutStock,
            "withoutPrice" => Availability::WithoutPrice,
            "nullPrice" => Availability::NullPrice,
            "withoutPriceFulfillment" => Availability::WithoutPriceFulfillment,
            other => Availability::Other(other.to_string()),
        })
    }
}

impl From<String> for Availability {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(availability) => availability,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_quantity() -> u32 {
    1
}

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub unique_id: String,
    pub id: String,
    /// Price in minor currency units.
    #[serde(default)]
    pub selling_price: i64,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Item {
    pub fn new(
        unique_id: impl Into<String>,
        id: impl Into<String>,
        selling_price: i64,
        availability: Availability,
    ) -> Self {
        Self {
            unique_id: unique_id.into(),
            id: id.into(),
            selling_price,
            availability,
            name: None,
            quantity: default_quantity(),
            seller: None,
            image_url: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Identity of the line for rendering: unique id followed by the price,
    /// so a repriced line is treated as a new one.
    pub fn render_key(&self) -> String {
        format!("{}{}", self.unique_id, self.selling_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_and_unknown_availability() {
        assert_eq!(
            "available".parse::<Availability>(),
            Ok(Availability::Available)
        );
        assert_eq!(
            "withoutStock".parse::<Availability>(),
            Ok(Availability::WithoutStock)
        );
        let other: Availability = "discontinued".parse().unwrap();
        assert_eq!(other, Availability::Other("discontinued".into()));
        assert!(!other.is_available());
        assert_eq!(other.to_string(), "discontinued");
    }

    #[test]
    fn missing_quantity_matches_constructor_default() {
        let parsed: Item =
            serde_json::from_str(r#"{"uniqueId": "u1", "id": "sku-1", "availability": "available"}"#)
                .expect("minimal line");
        let built = Item::new("u1", "sku-1", 0, Availability::Available);
        assert_eq!(parsed.quantity, 1);
        assert_eq!(parsed, built);
    }

    #[test]
    fn render_key_concatenates_unique_id_and_price() {
        let item = Item::new("u1", "sku-1", 1990, Availability::Available);
        assert_eq!(item.render_key(), "u11990");

        let repriced = Item {
            selling_price: 1890,
            ..item.clone()
        };
        assert_ne!(item.render_key(), repriced.render_key());
    }
}
