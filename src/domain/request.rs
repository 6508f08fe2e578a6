use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Sender name the form starts with before anyone edits it.
pub const DEFAULT_SENDER_NAME: &str = "Joking Shopping Proxy";

/// Stores a confirmation can be forwarded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    Amazon,
    Temu,
    Ebay,
    Custom,
}

impl Store {
    pub const ALL: [Store; 4] = [Store::Amazon, Store::Temu, Store::Ebay, Store::Custom];

    pub fn value(&self) -> &'static str {
        match self {
            Store::Amazon => "amazon",
            Store::Temu => "temu",
            Store::Ebay => "ebay",
            Store::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Store::Amazon => "Amazon",
            Store::Temu => "Temu",
            Store::Ebay => "eBay",
            Store::Custom => "Custom",
        }
    }
}

impl FromStr for Store {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Store::ALL.into_iter().find(|store| store.value() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Ordered,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [OrderStatus::Ordered, OrderStatus::Shipped, OrderStatus::Delivered];

    pub fn value(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "ordered",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "Ordered",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL.into_iter().find(|status| status.value() == s).ok_or(())
    }
}

/// Names of the editable fields, in the order the form lays them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SenderName,
    SenderEmail,
    RecipientEmail,
    StoreName,
    CustomStore,
    OrderNumber,
    ProductName,
    Price,
    TrackingNumber,
    EstimatedDelivery,
    OrderStatus,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::SenderName,
        Field::SenderEmail,
        Field::RecipientEmail,
        Field::StoreName,
        Field::CustomStore,
        Field::OrderNumber,
        Field::ProductName,
        Field::Price,
        Field::TrackingNumber,
        Field::EstimatedDelivery,
        Field::OrderStatus,
    ];

    /// Fields that must be non-empty before a submission reaches the forwarder.
    pub const REQUIRED: [Field; 4] = [
        Field::SenderEmail,
        Field::RecipientEmail,
        Field::OrderNumber,
        Field::ProductName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::SenderName => "senderName",
            Field::SenderEmail => "senderEmail",
            Field::RecipientEmail => "recipientEmail",
            Field::StoreName => "storeName",
            Field::CustomStore => "customStore",
            Field::OrderNumber => "orderNumber",
            Field::ProductName => "productName",
            Field::Price => "price",
            Field::TrackingNumber => "trackingNumber",
            Field::EstimatedDelivery => "estimatedDelivery",
            Field::OrderStatus => "orderStatus",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::SenderName => "Sender Name",
            Field::SenderEmail => "Sender Email",
            Field::RecipientEmail => "Your Email Address",
            Field::StoreName => "Store",
            Field::CustomStore => "Custom Store Name",
            Field::OrderNumber => "Order Number",
            Field::ProductName => "Product Name",
            Field::Price => "Price",
            Field::TrackingNumber => "Tracking Number",
            Field::EstimatedDelivery => "Estimated Delivery",
            Field::OrderStatus => "Order Status",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::SenderName => DEFAULT_SENDER_NAME,
            Field::SenderEmail => "proxy@joking.wtf",
            Field::RecipientEmail => "your.real.email@gmail.com",
            Field::StoreName => "Select store",
            Field::CustomStore => "Enter custom store name",
            Field::OrderNumber => "#ORD-123456789",
            Field::ProductName => "Wireless Bluetooth Headphones - Black",
            Field::Price => "$29.99",
            Field::TrackingNumber => "1Z999AA1234567890",
            Field::EstimatedDelivery => "YYYY-MM-DD",
            Field::OrderStatus => "",
        }
    }

    /// Whether the form marks the field with `*`. Store selection is marked but
    /// not enforced on submit.
    pub fn is_marked_required(&self) -> bool {
        matches!(self, Field::SenderName | Field::StoreName) || Field::REQUIRED.contains(self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// The order-forwarding record collected by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForwardingRequest {
    pub sender_name: String,
    pub sender_email: String,
    pub recipient_email: String,
    #[serde(rename = "storeName")]
    pub store: Option<Store>,
    pub custom_store: String,
    pub order_number: String,
    pub product_name: String,
    pub price: String,
    pub tracking_number: String,
    pub estimated_delivery: String,
    pub order_status: OrderStatus,
}

impl Default for OrderForwardingRequest {
    fn default() -> Self {
        Self::new(DEFAULT_SENDER_NAME)
    }
}

impl OrderForwardingRequest {
    /// Fresh record with the given sender identity and everything else blank.
    pub fn new(sender_name: impl Into<String>) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_email: String::new(),
            recipient_email: String::new(),
            store: None,
            custom_store: String::new(),
            order_number: String::new(),
            product_name: String::new(),
            price: String::new(),
            tracking_number: String::new(),
            estimated_delivery: String::new(),
            order_status: OrderStatus::default(),
        }
    }

    /// Current text of a field as the form would display it.
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::SenderName => &self.sender_name,
            Field::SenderEmail => &self.sender_email,
            Field::RecipientEmail => &self.recipient_email,
            Field::StoreName => self.store.map(|store| store.value()).unwrap_or(""),
            Field::CustomStore => &self.custom_store,
            Field::OrderNumber => &self.order_number,
            Field::ProductName => &self.product_name,
            Field::Price => &self.price,
            Field::TrackingNumber => &self.tracking_number,
            Field::EstimatedDelivery => &self.estimated_delivery,
            Field::OrderStatus => self.order_status.value(),
        }
    }

    /// Returns a copy of the record with one field replaced.
    ///
    /// Free-text fields take the value verbatim. `storeName` accepts a store
    /// value or the empty string (no selection); `orderStatus` accepts a status
    /// value. Anything else is rejected and the record is left as it was.
    pub fn with_field(&self, field: Field, value: &str) -> Result<Self, FormError> {
        let invalid = || FormError::InvalidFieldValue {
            field,
            value: value.to_string(),
        };

        let mut next = self.clone();
        match field {
            Field::SenderName => next.sender_name = value.to_string(),
            Field::SenderEmail => next.sender_email = value.to_string(),
            Field::RecipientEmail => next.recipient_email = value.to_string(),
            Field::StoreName => {
                next.store = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|_| invalid())?)
                };
            }
            Field::CustomStore => next.custom_store = value.to_string(),
            Field::OrderNumber => next.order_number = value.to_string(),
            Field::ProductName => next.product_name = value.to_string(),
            Field::Price => next.price = value.to_string(),
            Field::TrackingNumber => next.tracking_number = value.to_string(),
            Field::EstimatedDelivery => next.estimated_delivery = value.to_string(),
            Field::OrderStatus => next.order_status = value.parse().map_err(|_| invalid())?,
        }
        Ok(next)
    }

    /// Clears the order-specific fields after a successful forward. Sender
    /// identity, recipient and store selection carry over to the next order.
    pub fn reset_order_details(&self) -> Self {
        Self {
            order_number: String::new(),
            product_name: String::new(),
            price: String::new(),
            tracking_number: String::new(),
            estimated_delivery: String::new(),
            order_status: OrderStatus::default(),
            ..self.clone()
        }
    }

    /// Store name as it should appear to the recipient. A custom store falls
    /// back to its label when no name was typed.
    pub fn store_display_name(&self) -> Option<&str> {
        match self.store {
            Some(Store::Custom) if !self.custom_store.is_empty() => Some(&self.custom_store),
            Some(store) => Some(store.label()),
            None => None,
        }
    }
}

/// The custom store input is only shown while "custom" is selected.
pub fn custom_store_visible(store: Option<Store>) -> bool {
    matches!(store, Some(Store::Custom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_defaults() {
        let record = OrderForwardingRequest::default();
        assert_eq!(record.sender_name, DEFAULT_SENDER_NAME);
        assert_eq!(record.order_status, OrderStatus::Ordered);
        assert_eq!(record.store, None);
        assert!(record.order_number.is_empty());
    }

    #[test]
    fn test_with_field_leaves_original_untouched() {
        let record = OrderForwardingRequest::default();
        let edited = record.with_field(Field::OrderNumber, "#1").unwrap();

        assert_eq!(edited.order_number, "#1");
        assert!(record.order_number.is_empty());
    }

    #[test]
    fn test_with_field_parses_enums() {
        let record = OrderForwardingRequest::default()
            .with_field(Field::StoreName, "ebay")
            .unwrap()
            .with_field(Field::OrderStatus, "shipped")
            .unwrap();
        assert_eq!(record.store, Some(Store::Ebay));
        assert_eq!(record.order_status, OrderStatus::Shipped);

        let cleared = record.with_field(Field::StoreName, "").unwrap();
        assert_eq!(cleared.store, None);
    }

    #[test]
    fn test_with_field_rejects_unknown_enum_values() {
        let record = OrderForwardingRequest::default();

        let err = record.with_field(Field::StoreName, "walmart").unwrap_err();
        assert!(matches!(err, FormError::InvalidFieldValue { field: Field::StoreName, .. }));

        let err = record.with_field(Field::OrderStatus, "").unwrap_err();
        assert!(matches!(err, FormError::InvalidFieldValue { field: Field::OrderStatus, .. }));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
        assert!(matches!("sender_email".parse::<Field>(), Err(FormError::UnknownField(_))));
    }

    #[test]
    fn test_reset_order_details_keeps_identity() {
        let record = OrderForwardingRequest {
            sender_email: "a@b.com".into(),
            recipient_email: "c@d.com".into(),
            store: Some(Store::Custom),
            custom_store: "Corner Shop".into(),
            order_number: "#1".into(),
            product_name: "Widget".into(),
            price: "$5".into(),
            tracking_number: "1Z".into(),
            estimated_delivery: "2025-03-05".into(),
            order_status: OrderStatus::Delivered,
            ..OrderForwardingRequest::new("Proxy")
        };

        let reset = record.reset_order_details();

        assert_eq!(reset.sender_name, "Proxy");
        assert_eq!(reset.sender_email, "a@b.com");
        assert_eq!(reset.recipient_email, "c@d.com");
        assert_eq!(reset.store, Some(Store::Custom));
        assert_eq!(reset.custom_store, "Corner Shop");
        assert_eq!(reset.order_number, "");
        assert_eq!(reset.product_name, "");
        assert_eq!(reset.price, "");
        assert_eq!(reset.tracking_number, "");
        assert_eq!(reset.estimated_delivery, "");
        assert_eq!(reset.order_status, OrderStatus::Ordered);
    }

    #[test]
    fn test_custom_store_visibility() {
        assert!(custom_store_visible(Some(Store::Custom)));
        assert!(!custom_store_visible(Some(Store::Amazon)));
        assert!(!custom_store_visible(Some(Store::Temu)));
        assert!(!custom_store_visible(None));
    }

    #[test]
    fn test_store_display_name() {
        let mut record = OrderForwardingRequest::default();
        assert_eq!(record.store_display_name(), None);

        record.store = Some(Store::Ebay);
        assert_eq!(record.store_display_name(), Some("eBay"));

        record.store = Some(Store::Custom);
        assert_eq!(record.store_display_name(), Some("Custom"));

        record.custom_store = "Corner Shop".into();
        assert_eq!(record.store_display_name(), Some("Corner Shop"));
    }

    #[test]
    fn test_serializes_with_form_field_names() {
        let record = OrderForwardingRequest::default()
            .with_field(Field::StoreName, "amazon")
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["senderName"], DEFAULT_SENDER_NAME);
        assert_eq!(json["storeName"], "amazon");
        assert_eq!(json["orderStatus"], "ordered");
        assert!(json.get("recipientEmail").is_some());
    }
}
