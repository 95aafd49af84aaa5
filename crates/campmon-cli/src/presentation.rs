//! Formatting helpers for terminal output.

/// Format an optional value for display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), |v| v.to_string())
}

/// Show whether a secret is present without revealing it.
pub fn redact(secret: Option<&str>) -> &'static str {
    match secret {
        Some(s) if !s.trim().is_empty() => "<redacted>",
        _ => "(not set)",
    }
}

/// `Name (id)`, `id`, or the default.
pub fn name_and_id(name: Option<&str>, id: Option<&str>, default: &str) -> String {
    match (name, id) {
        (Some(name), Some(id)) => format!("{name} ({id})"),
        (None, Some(id)) => id.to_string(),
        (Some(name), None) => name.to_string(),
        (None, None) => default.to_string(),
    }
}

pub const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        assert_eq!(redact(Some("secret")), "<redacted>");
        assert_eq!(redact(Some("  ")), "(not set)");
        assert_eq!(redact(None), "(not set)");
    }

    #[test]
    fn test_name_and_id() {
        assert_eq!(name_and_id(Some("Acme"), Some("c1"), "-"), "Acme (c1)");
        assert_eq!(name_and_id(None, Some("c1"), "-"), "c1");
        assert_eq!(name_and_id(None, None, "-"), "-");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(3), "-"), "3");
        assert_eq!(format_optional(None::<i32>, "-"), "-");
    }
}
