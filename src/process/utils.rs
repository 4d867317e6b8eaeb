use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// 1) URL/ID-safe slug: accents decomposed and dropped, lower-case ASCII
/// alphanumerics joined by single hyphens. Falls back to `"item"`.
pub fn slugify(raw: &str) -> String {
    let ascii: String = raw.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_lowercase();
    let slug = NON_SLUG.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "item".to_string()
    } else {
        slug.to_string()
    }
}

/// 2) Spanish yes/no cells. Unknown tokens are `None`, not `false`.
pub fn parse_bool(raw: Option<&str>) -> Option<bool> {
    match raw?.trim().to_lowercase().as_str() {
        "si" | "sí" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_strips_accents_and_symbols() {
        assert_eq!(slugify("Edificio Ñuñoa Vive"), "edificio-nunoa-vive");
        assert_eq!(slugify("  Parque  Central (Etapa II) "), "parque-central-etapa-ii");
        assert_eq!(slugify("Plaza Egaña #2"), "plaza-egana-2");
        assert_eq!(slugify("--Ñ--"), "n");
    }

    #[test]
    fn slug_falls_back_to_item() {
        assert_eq!(slugify(""), "item");
        assert_eq!(slugify("!!!"), "item");
        assert_eq!(slugify("日本"), "item");
    }

    #[test]
    fn bool_tokens() {
        for t in ["si", "SI", "Sí", "SÍ", " true ", "TRUE", "1"] {
            assert_eq!(parse_bool(Some(t)), Some(true), "token {t:?}");
        }
        for f in ["no", "NO", "False", "0", " no "] {
            assert_eq!(parse_bool(Some(f)), Some(false), "token {f:?}");
        }
        for other in ["", "  ", "quizás", "yes", "2", "s", "no aplica"] {
            assert_eq!(parse_bool(Some(other)), None, "token {other:?}");
        }
        assert_eq!(parse_bool(None), None);
    }
}
