use tracing::trace;

/// Parse a money / unit / count cell in Chilean notation into `f64`.
///
/// - `UF`, `uf` and `$` markers are dropped
/// - `.` is a thousands separator and is removed, `,` is the decimal mark
/// - anything left that is not a digit, `.` or `-` is discarded
///
/// Empty or unparseable cells become `None`.
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }

    let digits: String = text
        .replace("UF", "")
        .replace("uf", "")
        .replace(['$', '.', ' '], "")
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if digits.is_empty() {
        return None;
    }

    match digits.parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            trace!(raw = %text, cleaned = %digits, "unparseable number");
            None
        }
    }
}

/// [`parse_number`] rounded to the nearest integer, ties to even. Values past
/// the `i64` range saturate at `i64::MIN` / `i64::MAX`.
pub fn parse_int(raw: Option<&str>) -> Option<i64> {
    parse_number(raw).map(|v| v.round_ties_even() as i64)
}

/// [`parse_number`] rounded to two decimals.
pub fn parse_percent(raw: Option<&str>) -> Option<f64> {
    parse_number(raw).map(round2)
}

/// Render a percent cell as a label: `"3%"` for whole values, `"2.5%"` otherwise.
pub fn format_percent_label(raw: Option<&str>) -> Option<String> {
    let pct = parse_percent(raw)?;
    if pct.fract() == 0.0 {
        // `+ 0.0` folds -0.0 into 0.0
        Some(format!("{:.0}%", pct + 0.0))
    } else {
        Some(format!("{}%", pct))
    }
}

/// Round the exact binary value, not `v * 100`, so `2.675` (stored just
/// below) stays `2.67`.
fn round2(v: f64) -> f64 {
    format!("{:.2}", v).parse().unwrap_or(v)
}
