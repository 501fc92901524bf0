use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Anything that is not a lowercase ASCII letter or digit.
    /// Whitespace falls in this class, so a single pass strips both.
    static ref NON_ALPHANUMERIC_REGEX: Regex = Regex::new(r"[^a-z0-9]").unwrap();
}

/// Canonical form used when comparing region names across data sources.
///
/// Lowercases, then drops whitespace and every character outside `[a-z0-9]`:
/// - "Kebon Jeruk", "KEBON-JERUK" and "kebonjeruk" all become "kebonjeruk"
/// - "DKI Jakarta" becomes "dkijakarta"
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    NON_ALPHANUMERIC_REGEX.replace_all(&lowered, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_ignores_case_space_and_punctuation() {
        assert_eq!(normalize("Kebon Jeruk"), "kebonjeruk");
        assert_eq!(normalize("KEBON-JERUK"), "kebonjeruk");
        assert_eq!(normalize("kebonjeruk"), "kebonjeruk");
        assert_eq!(normalize("  Kebon\tJeruk\n"), "kebonjeruk");
    }

    #[test]
    fn test_normalize_strips_non_ascii() {
        assert_eq!(normalize("Kota Adm. Jakarta Selatan"), "kotaadmjakartaselatan");
        assert_eq!(normalize("Pasar Minggu (Ps. Minggu)"), "pasarminggupsminggu");
        assert_eq!(normalize("Café 21"), "caf21");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Gandaria Utara",
            "KEBAYORAN  BARU",
            "D.I. Yogyakarta",
            "Ñ-İ-ß 12",
            "",
            "   ",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
