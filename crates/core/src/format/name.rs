//! Client-name sanitization for file names.

/// Fallback token when sanitization strips everything away.
const FALLBACK: &str = "client";

/// Reduces a free-text client name to a filesystem-safe fragment.
///
/// Lowercases, trims, collapses whitespace runs into single underscores,
/// and strips anything outside `[a-z0-9_-]`. An empty result becomes
/// `"client"`. The output is only ever used to build file names, never
/// for display.
#[must_use]
pub fn sanitize_name(raw: &str) -> String {
    let joined = raw
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");

    let cleaned: String = joined
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        FALLBACK.to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(sanitize_name("  Ana Souza  "), "ana_souza");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(sanitize_name("ana \t  maria\nsouza"), "ana_maria_souza");
    }

    #[test]
    fn test_strips_disallowed_characters() {
        assert_eq!(sanitize_name("João d'Ávila Jr."), "joo_dvila_jr");
        assert_eq!(sanitize_name("client #42 (vip)"), "client_42_vip");
    }

    #[test]
    fn test_keeps_dashes_and_underscores() {
        assert_eq!(sanitize_name("maria-clara_2"), "maria-clara_2");
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(sanitize_name(""), "client");
        assert_eq!(sanitize_name("   "), "client");
        assert_eq!(sanitize_name("!!!"), "client");
    }
}
