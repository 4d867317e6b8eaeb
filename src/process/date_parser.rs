use once_cell::sync::Lazy;
use regex::Regex;

use crate::process::trimming::clean_text;

/// `1S 2026`, `2 s 2027`, `1S2025 (estimado)`; anchored at the start only.
static HALF_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([12])\s*S\s*(20\d{2})").expect("valid regex"));

/// Normalize an `Entrega` cell into `"Inmediata"`, a half-year code such as
/// `"2S2026"`, or the cleaned free text when neither applies.
pub fn normalize_entrega(raw: Option<&str>) -> Option<String> {
    let text = clean_text(raw)?;
    if text.to_lowercase().starts_with("inmedi") {
        return Some("Inmediata".to_string());
    }
    if let Some(caps) = HALF_YEAR.captures(&text) {
        return Some(format!("{}S{}", &caps[1], &caps[2]));
    }
    Some(text)
}
