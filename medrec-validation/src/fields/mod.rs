//! Per-field checks. Each module exposes free functions that parse and
//! bound-check one family of fields.

pub mod choice;
pub mod flags;
pub mod numeric;

/// Treats empty and whitespace-only values as absent.
pub fn presence(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
