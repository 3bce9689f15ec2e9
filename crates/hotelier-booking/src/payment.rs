//! Payment metadata normalization for prepaid bookings.

use uuid::Uuid;

/// Trimmed, upper-cased method, or `default` when absent or blank.
pub fn normalize_payment_method(method: Option<&str>, default: &str) -> String {
    match method.map(str::trim) {
        Some(m) if !m.is_empty() => m.to_uppercase(),
        _ => default.to_string(),
    }
}

/// Trimmed caller reference, or a generated `PMT-XXXXXXXX` one.
pub fn resolve_payment_reference(reference: Option<&str>) -> String {
    match reference.map(str::trim) {
        Some(r) if !r.is_empty() => r.to_string(),
        _ => generate_payment_reference(),
    }
}

fn generate_payment_reference() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("PMT-{}", id[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_defaults_when_blank() {
        assert_eq!(normalize_payment_method(None, "CARD"), "CARD");
        assert_eq!(normalize_payment_method(Some("   "), "CARD"), "CARD");
        assert_eq!(normalize_payment_method(Some(" paypal "), "CARD"), "PAYPAL");
    }

    #[test]
    fn reference_is_kept_or_generated() {
        assert_eq!(resolve_payment_reference(Some(" TX-42 ")), "TX-42");

        let generated = resolve_payment_reference(Some(""));
        assert_eq!(generated.len(), 12);
        assert!(generated.starts_with("PMT-"));
        assert!(
            generated[4..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
        );
    }

    #[test]
    fn generated_references_differ() {
        assert_ne!(resolve_payment_reference(None), resolve_payment_reference(None));
    }
}
