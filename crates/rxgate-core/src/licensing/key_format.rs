//! License key shapes.
//!
//! Professional keys look like `RXPRO-XXXXX-XXXXX-XXXXX-XXXXX`. Only the shape
//! is checked: no charset restriction, no checksum, no signature. A key that
//! passes is not proof of purchase.

/// Literal that selects the demo tier, compared case-insensitively.
pub const DEMO_KEY: &str = "DEMO";

/// Required prefix of a professional key, compared case-sensitively.
pub const PRO_KEY_PREFIX: &str = "RXPRO-";

/// Field 0 of a professional key.
pub const PRO_KEY_HEAD: &str = "RXPRO";

/// Number of dash-separated fields in a professional key, prefix included.
pub const PRO_KEY_FIELDS: usize = 5;

/// Length in characters of every field after the prefix field.
pub const PRO_KEY_FIELD_LEN: usize = 5;

/// True if `key` selects the demo tier.
pub fn is_demo_key(key: &str) -> bool {
    key.eq_ignore_ascii_case(DEMO_KEY)
}

/// True if `key` has the professional shape.
///
/// Field 0 is covered by the prefix test and never length-checked on its own.
pub fn is_well_formed(key: &str) -> bool {
    if !key.starts_with(PRO_KEY_PREFIX) {
        return false;
    }
    let parts: Vec<&str> = key.split('-').collect();
    parts.len() == PRO_KEY_FIELDS
        && parts[1..]
            .iter()
            .all(|part| part.chars().count() == PRO_KEY_FIELD_LEN)
}
