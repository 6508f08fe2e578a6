use std::fmt::Write;

use super::{render_form, render_header, DASHBOARD_TITLE};
use crate::form_actor::FormSnapshot;

/// Header, intro, form and footer, top to bottom.
pub fn render_page(snapshot: &FormSnapshot) -> String {
    let mut out = render_header();
    let _ = writeln!(out);
    let _ = writeln!(out, "Professional Order Forwarding");
    let _ = writeln!(
        out,
        "Seamlessly forward order confirmations through your proxy shopping service.\n\
         Create professional-looking emails that maintain your privacy while keeping you informed."
    );
    let _ = writeln!(out);
    out.push_str(&render_form(snapshot));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "-".repeat(72));
    let _ = writeln!(out, "© 2025 {} • Private Use Only", DASHBOARD_TITLE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderForwardingRequest;

    #[test]
    fn test_page_composes_header_form_and_footer() {
        let snapshot = FormSnapshot {
            record: OrderForwardingRequest::default(),
            is_submitting: false,
            custom_store_visible: false,
            notice: None,
        };

        let page = render_page(&snapshot);
        let header = page.find("Private order forwarding service").unwrap();
        let form = page.find("Proxy Order Forwarding").unwrap();
        let footer = page.find("Private Use Only").unwrap();

        assert!(header < form && form < footer);
        assert!(page.contains("Professional Order Forwarding"));
    }
}
