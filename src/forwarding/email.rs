use chrono::NaiveDate;
use std::fmt::Write;

use crate::domain::OrderForwardingRequest;

/// The message a forwarding service would deliver for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ForwardedEmail {
    pub fn compose(request: &OrderForwardingRequest) -> Self {
        let from = if request.sender_name.is_empty() {
            request.sender_email.clone()
        } else {
            format!("{} <{}>", request.sender_name, request.sender_email)
        };

        let subject = format!(
            "{}: {} (Order {})",
            request.order_status.label(),
            first_line(&request.product_name),
            request.order_number
        );

        let mut body = String::new();
        let _ = writeln!(body, "Your order has been {}.", request.order_status.value());
        let _ = writeln!(body);
        if let Some(store) = request.store_display_name() {
            let _ = writeln!(body, "Store: {}", store);
        }
        let _ = writeln!(body, "Order number: {}", request.order_number);
        let _ = writeln!(body, "Product: {}", request.product_name);
        if !request.price.is_empty() {
            let _ = writeln!(body, "Price: {}", request.price);
        }
        if !request.tracking_number.is_empty() {
            let _ = writeln!(body, "Tracking number: {}", request.tracking_number);
        }
        if !request.estimated_delivery.is_empty() {
            let _ = writeln!(
                body,
                "Estimated delivery: {}",
                format_delivery_date(&request.estimated_delivery)
            );
        }

        Self {
            from,
            to: request.recipient_email.clone(),
            subject,
            body,
        }
    }
}

/// `2025-03-05` becomes `March 5, 2025`; anything else is shown as typed.
pub fn format_delivery_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("").trim()
}
