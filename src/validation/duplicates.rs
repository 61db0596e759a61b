//! Collision checks against the content-build application registry.

use serde_json::Value;

/// Unique registry keys with the label used in error messages.
const UNIQUE_KEYS: &[(&str, &str)] = &[
    ("App Name", "appName"),
    ("Entry Name", "entryName"),
    ("Root URL", "rootUrl"),
    ("Product ID", "productId"),
];

/// Returns one reason per unique key of `candidate` already used in `registry`.
///
/// Every key is checked; a candidate colliding on two keys yields two reasons.
pub fn check_for_duplicates(registry: &[Value], candidate: &Value) -> Vec<String> {
    UNIQUE_KEYS
        .iter()
        .filter_map(|(label, key)| {
            let wanted = candidate.get(*key).and_then(Value::as_str)?;
            registry
                .iter()
                .any(|entry| entry.get(*key).and_then(Value::as_str) == Some(wanted))
                .then(|| format!(r#"{label}: "{wanted}" already exists in registry"#))
        })
        .collect()
}
