use std::fmt::Write;

pub const DASHBOARD_TITLE: &str = "Proxy Shopping Dashboard";

/// Branding bar shown above everything else.
pub fn render_header() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(72));
    let _ = writeln!(out, "  {}", DASHBOARD_TITLE);
    let _ = writeln!(out, "  Private order forwarding service");
    let _ = writeln!(out, "  [Email Forwarding]  [Order Management]");
    let _ = writeln!(out, "{}", "=".repeat(72));
    out
}
