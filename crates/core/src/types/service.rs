//! Catalog service record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ServiceId;

/// A row of the `services` table.
///
/// Field names match the column names so the JSON shape is exactly what the
/// database returns. `price` is emitted as a JSON number, not a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub active: bool,
    pub sort_order: i32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use uuid::Uuid;

    fn consultation() -> Service {
        Service {
            id: ServiceId::new(Uuid::nil()),
            name: "Consultation".to_string(),
            description: None,
            price: Decimal::new(4950, 2),
            active: true,
            sort_order: 1,
        }
    }

    #[test]
    fn test_serializes_with_column_names() {
        let value = serde_json::to_value(consultation()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "00000000-0000-0000-0000-000000000000",
                "name": "Consultation",
                "description": null,
                "price": 49.5,
                "active": true,
                "sort_order": 1
            })
        );
    }

    #[test]
    fn test_deserializes_numeric_price() {
        let service: Service = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Consultation",
            "description": "One hour",
            "price": 120,
            "active": false,
            "sort_order": 3
        }))
        .unwrap();

        assert_eq!(service.price, Decimal::new(120, 0));
        assert_eq!(service.description.as_deref(), Some("One hour"));
        assert!(!service.active);
    }
}
