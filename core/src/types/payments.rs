use serde::{Deserialize, Serialize};

use super::User;

/// A portion of the price for goods or services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPrice {
    pub label: String,
    /// Price in the smallest units of the currency (e.g. cents).
    pub amount: i64,
}

impl LabeledPrice {
    pub fn new(label: impl Into<String>, amount: i64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Basic information about an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub title: String,
    pub description: String,
    pub start_parameter: String,
    /// Three-letter ISO 4217 currency code.
    pub currency: String,
    pub total_amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    pub state: String,
    pub city: String,
    pub street_line1: String,
    pub street_line2: String,
    pub post_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub id: String,
    pub title: String,
    pub prices: Vec<LabeledPrice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulPayment {
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,
    pub telegram_payment_charge_id: String,
    pub provider_payment_charge_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuery {
    pub id: String,
    pub from: User,
    pub invoice_payload: String,
    pub shipping_address: ShippingAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreCheckoutQuery {
    pub id: String,
    pub from: User,
    pub currency: String,
    pub total_amount: i64,
    pub invoice_payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_option_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_info: Option<OrderInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address() -> serde_json::Value {
        json!({
            "country_code": "DE",
            "state": "",
            "city": "Berlin",
            "street_line1": "Unter den Linden 1",
            "street_line2": "",
            "post_code": "10117"
        })
    }

    #[test]
    fn pre_checkout_query_round_trips_with_order_info() {
        let wire = json!({
            "id": "pcq-1",
            "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
            "currency": "EUR",
            "total_amount": 1450,
            "invoice_payload": "order-42",
            "shipping_option_id": "dhl",
            "order_info": {"name": "Ann", "email": "ann@example.com", "shipping_address": address()}
        });
        let query: PreCheckoutQuery = serde_json::from_value(wire.clone()).unwrap();
        let order = query.order_info.as_ref().unwrap();
        assert!(order.phone_number.is_none());
        assert_eq!(order.shipping_address.as_ref().map(|a| a.city.as_str()), Some("Berlin"));
        assert_eq!(serde_json::to_value(&query).unwrap(), wire);
    }

    #[test]
    fn shipping_query_round_trips() {
        let wire = json!({
            "id": "sq-1",
            "from": {"id": 7, "is_bot": false, "first_name": "Ann"},
            "invoice_payload": "order-42",
            "shipping_address": address()
        });
        let query: ShippingQuery = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(query.shipping_address.country_code, "DE");
        assert_eq!(serde_json::to_value(&query).unwrap(), wire);
    }

    #[test]
    fn successful_payment_round_trips() {
        let payment = SuccessfulPayment {
            currency: "USD".to_string(),
            total_amount: 999,
            invoice_payload: "sub-1".to_string(),
            shipping_option_id: None,
            order_info: Some(OrderInfo { phone_number: Some("+100".to_string()), ..Default::default() }),
            telegram_payment_charge_id: "tg-1".to_string(),
            provider_payment_charge_id: "pr-1".to_string(),
        };
        let encoded = serde_json::to_value(&payment).unwrap();
        assert!(encoded.get("shipping_option_id").is_none());
        assert_eq!(encoded["order_info"], json!({"phone_number": "+100"}));
        assert_eq!(serde_json::from_value::<SuccessfulPayment>(encoded).unwrap(), payment);
    }
}
