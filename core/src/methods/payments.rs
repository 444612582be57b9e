//! Invoices, shipping and checkout.
//!
//! Prices are in the smallest units of the currency (cents for USD).

use serde::Serialize;

use crate::request::Request;
use crate::types::{ChatId, InlineKeyboardMarkup, LabeledPrice, ShippingOption};

/// Optional invoice fields shared by `send_invoice` and `create_invoice_link`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tip_amount: Option<i64>,
    /// At most 4 positive amounts in increasing order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_tip_amounts: Option<Vec<i64>>,
    /// JSON-serialized data for the payment provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_phone_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_shipping_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_phone_number_to_provider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_email_to_provider: Option<bool>,
    /// The final price depends on the shipping method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_flexible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SendInvoiceOptions {
    /// Deep-linking parameter; absent makes forwarded copies payable too.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_parameter: Option<String>,
    #[serde(flatten)]
    pub invoice: InvoiceOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protect_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_sending_without_reply: Option<bool>,
    /// The first button must be a pay button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

#[allow(clippy::too_many_arguments)]
pub fn send_invoice(
    chat_id: impl Into<ChatId>,
    title: impl Into<String>,
    description: impl Into<String>,
    payload: impl Into<String>,
    provider_token: impl Into<String>,
    currency: impl Into<String>,
    prices: Vec<LabeledPrice>,
    options: SendInvoiceOptions,
) -> Request {
    Request::new("sendInvoice")
        .with("chat_id", chat_id.into())
        .with("title", title.into())
        .with("description", description.into())
        .with("payload", payload.into())
        .with("provider_token", provider_token.into())
        .with("currency", currency.into())
        .with("prices", prices)
        .with_options(options)
}

/// Returns the invoice link as a string.
pub fn create_invoice_link(
    title: impl Into<String>,
    description: impl Into<String>,
    payload: impl Into<String>,
    provider_token: impl Into<String>,
    currency: impl Into<String>,
    prices: Vec<LabeledPrice>,
    options: InvoiceOptions,
) -> Request {
    Request::new("createInvoiceLink")
        .with("title", title.into())
        .with("description", description.into())
        .with("payload", payload.into())
        .with("provider_token", provider_token.into())
        .with("currency", currency.into())
        .with("prices", prices)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerShippingQueryOptions {
    /// Required when `ok` is true.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<ShippingOption>>,
    /// Required when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

pub fn answer_shipping_query(
    shipping_query_id: impl Into<String>,
    ok: bool,
    options: AnswerShippingQueryOptions,
) -> Request {
    Request::new("answerShippingQuery")
        .with("shipping_query_id", shipping_query_id.into())
        .with("ok", ok)
        .with_options(options)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnswerPreCheckoutQueryOptions {
    /// Required when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// Must be called within 10 seconds of receiving the pre-checkout query.
pub fn answer_pre_checkout_query(
    pre_checkout_query_id: impl Into<String>,
    ok: bool,
    options: AnswerPreCheckoutQueryOptions,
) -> Request {
    Request::new("answerPreCheckoutQuery")
        .with("pre_checkout_query_id", pre_checkout_query_id.into())
        .with("ok", ok)
        .with_options(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const REQUIRED: [&str; 6] = ["currency", "description", "payload", "prices", "provider_token", "title"];

    fn prices() -> Vec<LabeledPrice> {
        vec![LabeledPrice::new("Item", 1000), LabeledPrice::new("Tax", 150)]
    }

    fn full_invoice() -> InvoiceOptions {
        InvoiceOptions {
            max_tip_amount: Some(500),
            suggested_tip_amounts: Some(vec![100, 200]),
            provider_data: Some("{}".to_string()),
            photo_url: Some("https://example.com/item.jpg".to_string()),
            photo_size: Some(1024),
            photo_width: Some(100),
            photo_height: Some(100),
            need_name: Some(true),
            need_phone_number: Some(true),
            need_email: Some(true),
            need_shipping_address: Some(true),
            send_phone_number_to_provider: Some(true),
            send_email_to_provider: Some(true),
            is_flexible: Some(true),
        }
    }

    #[test]
    fn send_invoice_required_keys() {
        let req = send_invoice(1, "Item", "An item", "order-1", "prov", "USD", prices(), Default::default());
        let mut expected = REQUIRED.to_vec();
        expected.push("chat_id");
        expected.sort_unstable();
        assert_eq!(req.keys(), expected);
        assert_eq!(
            req.get("prices"),
            Some(&json!([{"label": "Item", "amount": 1000}, {"label": "Tax", "amount": 150}]))
        );
    }

    #[test]
    fn send_invoice_every_option() {
        let req = send_invoice(
            1,
            "Item",
            "An item",
            "order-1",
            "prov",
            "USD",
            prices(),
            SendInvoiceOptions {
                start_parameter: Some("buy".to_string()),
                invoice: full_invoice(),
                disable_notification: Some(true),
                protect_content: Some(true),
                reply_to_message_id: Some(3),
                allow_sending_without_reply: Some(true),
                reply_markup: Some(InlineKeyboardMarkup::default()),
            },
        );
        // 7 required, 1 start parameter, 14 invoice fields, 5 delivery fields.
        assert_eq!(req.body.len(), 27);
    }

    #[test]
    fn create_invoice_link_keys() {
        let req = create_invoice_link("Item", "An item", "order-1", "prov", "USD", prices(), Default::default());
        assert_eq!(req.keys(), REQUIRED.to_vec());
        let req = create_invoice_link("Item", "An item", "order-1", "prov", "USD", prices(), full_invoice());
        assert_eq!(req.body.len(), 20);
        assert!(req.get("start_parameter").is_none());
    }

    #[test]
    fn answering_queries() {
        let req = answer_shipping_query(
            "sq-1",
            true,
            AnswerShippingQueryOptions {
                shipping_options: Some(vec![ShippingOption {
                    id: "post".to_string(),
                    title: "Post".to_string(),
                    prices: vec![LabeledPrice::new("Post", 300)],
                }]),
                error_message: None,
            },
        );
        assert_eq!(req.keys(), vec!["ok", "shipping_options", "shipping_query_id"]);

        let req = answer_pre_checkout_query(
            "pc-1",
            false,
            AnswerPreCheckoutQueryOptions { error_message: Some("Sold out".to_string()) },
        );
        assert_eq!(req.keys(), vec!["error_message", "ok", "pre_checkout_query_id"]);
        assert_eq!(req.get("ok"), Some(&json!(false)));
    }
}
