use crate::error::CommandError;

/// Returns `true` when every character of `raw` is an ASCII letter or a dash.
///
/// An empty string is valid.
pub fn is_valid(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// Error-returning form of [`is_valid`].
///
/// On success hands back the same slice so calls can be chained with `?`.
pub fn validate(raw: &str) -> Result<&str, CommandError> {
    if is_valid(raw) {
        Ok(raw)
    } else {
        Err(CommandError::InvalidCharacter {
            input: raw.to_string(),
        })
    }
}

/// Lowercase every ASCII letter, leaving any other character untouched.
pub fn normalize(raw: &str) -> String {
    raw.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_dashes_are_valid() {
        for s in ["play", "PLAY", "Fast-Forward", "-", "--a--", "q", ""] {
            assert!(is_valid(s), "{s:?} should be valid");
            assert_eq!(validate(s), Ok(s));
        }
    }

    #[test]
    fn test_other_characters_are_invalid() {
        for s in ["xyz123", "play ", " play", "fast_forward", "stop!", "pl\tay", "café", "p\n"] {
            assert!(!is_valid(s), "{s:?} should be invalid");
            assert_eq!(
                validate(s),
                Err(CommandError::InvalidCharacter {
                    input: s.to_string()
                })
            );
        }
    }

    #[test]
    fn test_normalize_lowercases_letters_only() {
        assert_eq!(normalize("PLAY"), "play");
        assert_eq!(normalize("Fast-FORWARD"), "fast-forward");
        assert_eq!(normalize("a-B-c"), "a-b-c");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent_and_keeps_shape() {
        for s in ["Play", "fAsT-fOrWaRd", "--Q--", "xyz123", "ÉTÉ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
            assert_eq!(once.len(), s.len());
            let dashes = |t: &str| -> Vec<usize> {
                t.char_indices().filter(|(_, c)| *c == '-').map(|(i, _)| i).collect()
            };
            assert_eq!(dashes(&once), dashes(s));
        }
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let raw = String::from("STOP");
        let normalized = normalize(&raw);
        assert_eq!(raw, "STOP");
        assert_eq!(normalized, "stop");
    }
}
