use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Tokens the export uses for "no value". Compared upper-cased.
const PLACEHOLDERS: &[&str] = &["N/A", "NA", "ND", "S/D", "SD", "NO APLICA"];

/// Trim, collapse inner whitespace runs to a single space, and map empty
/// cells or placeholder tokens to `None`.
pub fn clean_text(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let text = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    if text.is_empty() || PLACEHOLDERS.contains(&text.to_uppercase().as_str()) {
        return None;
    }
    Some(text.into_owned())
}

/// Join the non-blank lines of a multi-line cell with single spaces, then
/// apply [`clean_text`].
pub fn clean_multiline(raw: Option<&str>) -> Option<String> {
    let raw = raw.filter(|s| !s.is_empty())?;
    let joined = raw
        .replace('\r', "")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    clean_text(Some(&joined))
}

/// Comunas arrive in any casing ("LAS CONDES", "ñuñoa"); render them title-cased.
pub fn capitalize_comuna(raw: Option<&str>) -> Option<String> {
    clean_text(raw).map(|text| title_case(&text.to_lowercase()))
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
