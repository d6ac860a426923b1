//! Terminal output with colors.

use crate::dispatch::Outcome;
use crate::models::{CidrResult, ConversionResult};
use colored::Colorize;

/// Format a label as a left-aligned field followed by its value.
///
/// # Arguments
/// * `label` - The label to format
/// * `value` - The value shown after the label
/// * `width` - The minimum width of the label column
pub fn format_field<T: ToString>(label: &str, value: T, width: usize) -> String {
    let label = format!("{label}:");
    format!("{label:<width$} {}", value.to_string())
}

/// Render a decimal/binary conversion for the terminal.
pub fn render_conversion(title: &str, res: &ConversionResult) -> String {
    let mut lines = vec![format!("{} {}", title.bold(), res.raw().dimmed())];
    match (res.output(), res.error()) {
        (Some(output), _) => {
            lines.push(format_field("Result", output.green(), 8));
            for line in res.detail().unwrap_or_default() {
                lines.push(format!("  {line}"));
            }
        }
        (None, Some(e)) => lines.push(format_field("Error", e.message().red(), 8)),
        (None, None) => {}
    }
    lines.join("\n")
}

/// Render a CIDR host range for the terminal.
pub fn render_cidr(res: &CidrResult) -> String {
    let mut lines = vec![format!("{} {}", "CIDR".bold(), res.raw().dimmed())];
    match res.range() {
        Some(range) => {
            lines.push(format_field("Network", range.cidr.to_string().green(), 12));
            lines.push(format_field("Address", range.network, 12));
            lines.push(format_field("Broadcast", range.broadcast, 12));
            lines.push(format_field("Total", range.total, 12));
            lines.push(format_field("Usable", range.usable, 12));
            lines.push(format_field("First host", range.first_host, 12));
            lines.push(format_field("Last host", range.last_host, 12));
        }
        None => {
            if let Some(e) = res.error() {
                lines.push(format_field("Error", e.message().red(), 12));
            }
        }
    }
    lines.join("\n")
}

/// Render any dispatched outcome.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Decimal(res) => render_conversion("Decimal → Binary", res),
        Outcome::Binary(res) => render_conversion("Binary → Decimal", res),
        Outcome::Cidr(res) => render_cidr(res),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::{binary_to_decimal, cidr_to_hosts, decimal_to_binary};

    #[test]
    fn test_format_field() {
        assert_eq!(format_field("Total", 256, 10), "Total:     256");
        assert_eq!(format_field("Long label", 1, 4), "Long label: 1");
    }

    #[test]
    fn test_render_conversion_success() {
        let text = render_conversion("Decimal", &decimal_to_binary("192.168.1.1"));
        assert!(text.contains("11000000.10101000.00000001.00000001"));
        assert!(text.contains("  Octet 4: 1 → 00000001"));
        assert!(!text.contains("Error"));
    }

    #[test]
    fn test_render_conversion_error() {
        let text = render_conversion("Binary", &binary_to_decimal("1.1.1.1"));
        assert!(text.contains("Each binary octet must be exactly 8 bits."));
        assert!(text.contains("Error:"));
        assert!(!text.contains("Octet"));
    }

    #[test]
    fn test_render_cidr() {
        let text = render_cidr(&cidr_to_hosts("10.0.0.0/30"));
        assert!(text.contains("10.0.0.0/30"));
        assert!(text.contains("Broadcast:   10.0.0.3"));
        assert!(text.contains("First host:  10.0.0.1"));
        assert!(text.contains("Last host:   10.0.0.2"));

        let text = render_cidr(&cidr_to_hosts("10.0.0.0/99"));
        assert!(text.contains("Enter a valid IPv4 CIDR, e.g., 192.168.1.0/24."));
        assert!(!text.contains("Usable"));
    }
}
