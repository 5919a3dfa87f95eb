use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub const STATUS_PENDING: &str = "PENDING";

/// A purchase request. Nothing enforces a relation between `status`, `valid`
/// and `amount`; every field stays writable for the order's lifetime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub amount: f64,
    pub status: Option<String>,
    pub valid: bool,
}

impl Order {
    /// Creates a `PENDING`, not-yet-valid order.
    pub fn new(id: impl Into<String>, customer_id: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            amount,
            status: Some(STATUS_PENDING.to_string()),
            valid: false,
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Any string is accepted; there is no transition table.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order{{id='{}', customerId='{}', amount={}, status='{}'}}",
            self.id,
            self.customer_id,
            self.amount,
            self.status.as_deref().unwrap_or("null")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Placeholder for an id the directory does not know.
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, "Unknown User", "unknown@example.com")
    }

    /// Placeholder returned when the lookup itself failed.
    pub fn fallback(id: impl Into<String>) -> Self {
        Self::new(id, "Fallback User", "fallback@example.com")
    }
}

/// Customer APIs commonly send numeric ids; both `"1"` and `1` decode to `"1"`.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_pending_and_invalid() {
        let order = Order::new("o-1", "123", 99.5);
        assert_eq!(order.id, "o-1");
        assert_eq!(order.customer_id, "123");
        assert_eq!(order.amount, 99.5);
        assert_eq!(order.status(), Some("PENDING"));
        assert!(!order.is_valid());
    }

    #[test]
    fn test_default_order_has_no_status() {
        let order = Order::default();
        assert_eq!(order.status(), None);
        assert!(!order.valid);
        assert_eq!(order.amount, 0.0);
        assert!(order.id.is_empty());
    }

    #[test]
    fn test_setters_accept_any_value() {
        let mut order = Order::new("o-2", "456", 10.0);
        order.set_status("SHIPPED");
        assert_eq!(order.status(), Some("SHIPPED"));
        order.set_status("");
        assert_eq!(order.status(), Some(""));

        order.set_valid(true);
        assert!(order.is_valid());
        order.set_valid(false);
        assert!(!order.is_valid());

        order.amount = -3.25;
        order.customer_id = "not-a-customer".to_string();
        assert_eq!(order.amount, -3.25);
        assert_eq!(order.customer_id, "not-a-customer");
    }

    #[test]
    fn test_order_display() {
        let order = Order::new("o-3", "123", 12.5);
        assert_eq!(
            order.to_string(),
            "Order{id='o-3', customerId='123', amount=12.5, status='PENDING'}"
        );
        assert_eq!(
            Order::default().to_string(),
            "Order{id='', customerId='', amount=0, status='null'}"
        );
    }

    #[test]
    fn test_order_json_uses_camel_case() {
        let order = Order::new("o-4", "456", 1.0);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["customerId"], "456");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["valid"], false);
    }

    #[test]
    fn test_customer_id_accepts_number_or_string() {
        let numeric: Customer = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "email": "Sincere@april.biz"
        }))
        .unwrap();
        assert_eq!(numeric.id, "1");

        let text: Customer = serde_json::from_str(
            r#"{"id": "abc", "name": "A", "email": "a@example.com"}"#,
        )
        .unwrap();
        assert_eq!(text.id, "abc");

        assert!(serde_json::from_str::<Customer>(
            r#"{"id": true, "name": "A", "email": "a@example.com"}"#
        )
        .is_err());
    }

    #[test]
    fn test_customer_placeholders_keep_id() {
        assert_eq!(
            Customer::unknown("789"),
            Customer::new("789", "Unknown User", "unknown@example.com")
        );
        assert_eq!(
            Customer::fallback(""),
            Customer::new("", "Fallback User", "fallback@example.com")
        );
    }
}
