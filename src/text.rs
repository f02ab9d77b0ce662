//! Transcript normalization.

/// Normalizes a raw transcript: control characters become spaces, whitespace
/// runs collapse to a single space and the ends are trimmed.
#[must_use]
pub fn clean_transcript(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for c in raw.chars() {
        if c.is_whitespace() || c.is_control() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }
    out
}

/// Lowercases and whitespace-normalizes a matched phrase for display.
pub(crate) fn normalize_phrase(phrase: &str) -> String {
    clean_transcript(phrase).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_and_trims() {
        assert_eq!(clean_transcript("  I have\n\n6   years\t"), "I have 6 years");
    }

    #[test]
    fn strips_control_characters() {
        assert_eq!(clean_transcript("led\u{0}a\u{7}team"), "led a team");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_transcript(""), "");
        assert_eq!(clean_transcript(" \n\t "), "");
    }

    #[test]
    fn phrase_normalization_lowercases() {
        assert_eq!(normalize_phrase("LED  A\nTEAM"), "led a team");
    }
}
