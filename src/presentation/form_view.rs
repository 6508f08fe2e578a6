use std::fmt::Write;

use crate::domain::{Field, OrderForwardingRequest, OrderStatus, Store};
use crate::form_actor::FormSnapshot;

const SENDER_SECTION: [Field; 3] = [Field::SenderName, Field::SenderEmail, Field::RecipientEmail];
const ORDER_SECTION: [Field; 8] = [
    Field::StoreName,
    Field::CustomStore,
    Field::OrderStatus,
    Field::OrderNumber,
    Field::Price,
    Field::ProductName,
    Field::TrackingNumber,
    Field::EstimatedDelivery,
];

/// Renders the form card for one snapshot of the form state.
pub fn render_form(snapshot: &FormSnapshot) -> String {
    let mut out = String::new();

    if let Some(notice) = &snapshot.notice {
        let _ = writeln!(out, "{}", notice);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Proxy Order Forwarding");
    let _ = writeln!(out, "Forward order confirmations through your proxy shopping service");
    let _ = writeln!(out);

    let _ = writeln!(out, "-- Sender Information --");
    for field in SENDER_SECTION {
        render_field(&mut out, &snapshot.record, field);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "-- Order Information --");
    for field in ORDER_SECTION {
        if field == Field::CustomStore && !snapshot.custom_store_visible {
            continue;
        }
        render_field(&mut out, &snapshot.record, field);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", submit_label(snapshot.is_submitting));
    out
}

/// Text of the submit affordance; it is disabled while a submission is out.
pub fn submit_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "[ Forwarding Email... ] (disabled)"
    } else {
        "[ Send Forwarded Email ]"
    }
}

fn render_field(out: &mut String, record: &OrderForwardingRequest, field: Field) {
    let marker = if field.is_marked_required() { " *" } else { "" };
    let value = record.field_value(field);

    let shown = match field {
        Field::StoreName => record
            .store
            .map(|store| store.label().to_string())
            .unwrap_or_else(|| format!("<{}>", field.placeholder())),
        Field::OrderStatus => record.order_status.label().to_string(),
        _ if value.is_empty() => format!("<{}>", field.placeholder()),
        // Product names may span lines; keep continuation lines aligned.
        Field::ProductName => value.lines().collect::<Vec<_>>().join("\n                          "),
        _ => value.to_string(),
    };

    let label = format!("{}{}", field.label(), marker);
    let _ = writeln!(out, "  {:<22}: {}", label, shown);

    match field {
        Field::StoreName => {
            let options: Vec<&str> = Store::ALL.iter().map(Store::label).collect();
            let _ = writeln!(out, "  {:<22}  options: {}", "", options.join(" | "));
        }
        Field::OrderStatus => {
            let options: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::label).collect();
            let _ = writeln!(out, "  {:<22}  options: {}", "", options.join(" | "));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Notice;

    fn snapshot(record: OrderForwardingRequest) -> FormSnapshot {
        FormSnapshot {
            custom_store_visible: crate::domain::custom_store_visible(record.store),
            record,
            is_submitting: false,
            notice: None,
        }
    }

    #[test]
    fn test_custom_store_field_follows_selection() {
        let amazon = OrderForwardingRequest {
            store: Some(Store::Amazon),
            ..OrderForwardingRequest::default()
        };
        assert!(!render_form(&snapshot(amazon)).contains("Custom Store Name"));

        let custom = OrderForwardingRequest {
            store: Some(Store::Custom),
            custom_store: "Corner Shop".into(),
            ..OrderForwardingRequest::default()
        };
        let rendered = render_form(&snapshot(custom));
        assert!(rendered.contains("Custom Store Name"));
        assert!(rendered.contains("Corner Shop"));
    }

    #[test]
    fn test_placeholders_and_required_markers() {
        let rendered = render_form(&snapshot(OrderForwardingRequest::default()));

        assert!(rendered.contains("Sender Email *"));
        assert!(rendered.contains("<proxy@joking.wtf>"));
        assert!(rendered.contains("<Select store>"));
        assert!(rendered.contains("Joking Shopping Proxy"));
        assert!(rendered.contains("Ordered"));
        assert!(rendered.contains("[ Send Forwarded Email ]"));
    }

    #[test]
    fn test_submitting_state_and_notice() {
        let mut state = snapshot(OrderForwardingRequest::default());
        state.is_submitting = true;
        state.notice = Some(Notice::missing_fields());

        let rendered = render_form(&state);
        assert!(rendered.starts_with("[!!] Missing required fields"));
        assert!(rendered.contains("Forwarding Email..."));
        assert!(!rendered.contains("Send Forwarded Email"));
    }
}
