//! Canonical vocabulary tables.
//!
//! One table per concern: surface form → canonical term. Extractors compile
//! these tables into case-insensitive alternation regexes, longest surface
//! first so that multi-word terms win over their prefixes.

use regex::Regex;

/// Spelled-out numbers recognized in durations and team sizes.
pub(crate) const NUMBER_WORDS: [(&str, u32); 10] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Regex fragment matching a count: digits or a spelled-out number.
pub(crate) const COUNT_PATTERN: &str = r"\d+|one|two|three|four|five|six|seven|eight|nine|ten";

/// Like [`COUNT_PATTERN`], also accepting a decimal part (`1.5`, `2,5`).
pub(crate) const AMOUNT_PATTERN: &str = r"\d+(?:[.,]\d+)?|one|two|three|four|five|six|seven|eight|nine|ten";

/// Programming languages. `go` is handled separately, see [`GO_PATTERN`].
pub(crate) const LANGUAGES: &[(&str, &str)] = &[
    ("python", "python"),
    ("java", "java"),
    ("javascript", "javascript"),
    ("js", "javascript"),
    ("typescript", "typescript"),
    ("c++", "c++"),
    ("cpp", "c++"),
    ("c#", "c#"),
    ("csharp", "c#"),
    ("golang", "go"),
    ("rust", "rust"),
    ("php", "php"),
    ("ruby", "ruby"),
    ("swift", "swift"),
    ("kotlin", "kotlin"),
    ("scala", "scala"),
    ("perl", "perl"),
    ("haskell", "haskell"),
    ("elixir", "elixir"),
    ("dart", "dart"),
    ("julia", "julia"),
    ("matlab", "matlab"),
    ("lua", "lua"),
];

/// Bare `go` only counts next to a programming context word.
pub(crate) const GO_PATTERN: &str = r"(?i)\b(?:go\s+(?:programming|language|lang|developer|developers|code|coding|backend|services?)|(?:in|with|using|learned|learning|wrote|write|writing)\s+go)\b";

/// Technical skill terms.
pub(crate) const SKILLS: &[(&str, &str)] = &[
    // ML / AI
    ("machine learning", "machine learning"),
    ("ml", "machine learning"),
    ("deep learning", "deep learning"),
    ("artificial intelligence", "artificial intelligence"),
    ("ai", "artificial intelligence"),
    ("neural network", "neural networks"),
    ("neural networks", "neural networks"),
    ("natural language processing", "nlp"),
    ("nlp", "nlp"),
    ("computer vision", "computer vision"),
    ("data science", "data science"),
    ("data analysis", "data analysis"),
    ("tensorflow", "tensorflow"),
    ("pytorch", "pytorch"),
    ("pandas", "pandas"),
    ("numpy", "numpy"),
    ("scikit-learn", "scikit-learn"),
    // Data stores
    ("sql", "sql"),
    ("nosql", "nosql"),
    ("mysql", "mysql"),
    ("postgresql", "postgresql"),
    ("postgres", "postgresql"),
    ("mongodb", "mongodb"),
    ("redis", "redis"),
    ("sqlite", "sqlite"),
    ("elasticsearch", "elasticsearch"),
    // Web / mobile
    ("react", "react"),
    ("react native", "react native"),
    ("angular", "angular"),
    ("vue", "vue"),
    ("node.js", "node.js"),
    ("nodejs", "node.js"),
    ("html", "html"),
    ("css", "css"),
    ("rest api", "rest api"),
    ("rest apis", "rest api"),
    ("restful", "rest api"),
    ("graphql", "graphql"),
    ("django", "django"),
    ("flask", "flask"),
    ("spring boot", "spring"),
    ("spring framework", "spring"),
    ("android", "android"),
    ("ios", "ios"),
    ("flutter", "flutter"),
    // Cloud / ops
    ("aws", "aws"),
    ("azure", "azure"),
    ("gcp", "gcp"),
    ("google cloud", "gcp"),
    ("docker", "docker"),
    ("kubernetes", "kubernetes"),
    ("k8s", "kubernetes"),
    ("terraform", "terraform"),
    ("linux", "linux"),
    ("git", "git"),
    ("ci/cd", "ci/cd"),
    ("devops", "devops"),
    ("microservices", "microservices"),
    // Process
    ("agile", "agile"),
    ("scrum", "scrum"),
    ("kanban", "kanban"),
    ("unit testing", "unit testing"),
    ("tdd", "tdd"),
    ("test-driven development", "tdd"),
    ("code review", "code review"),
    ("code reviews", "code review"),
];

/// Mastery tier of an indicator term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Tier {
    Advanced,
    Intermediate,
    Beginner,
}

/// Mastery indicator terms. Tiers are disjoint.
pub(crate) const MASTERY_TERMS: &[(&str, Tier)] = &[
    ("algorithm", Tier::Advanced),
    ("algorithms", Tier::Advanced),
    ("data structures", Tier::Advanced),
    ("architecture", Tier::Advanced),
    ("system design", Tier::Advanced),
    ("distributed systems", Tier::Advanced),
    ("scalability", Tier::Advanced),
    ("optimization", Tier::Advanced),
    ("machine learning", Tier::Advanced),
    ("deep learning", Tier::Advanced),
    ("neural network", Tier::Advanced),
    ("neural networks", Tier::Advanced),
    ("compiler", Tier::Advanced),
    ("compilers", Tier::Advanced),
    ("concurrency", Tier::Advanced),
    ("expert", Tier::Advanced),
    ("mastered", Tier::Advanced),
    ("framework", Tier::Intermediate),
    ("frameworks", Tier::Intermediate),
    ("library", Tier::Intermediate),
    ("libraries", Tier::Intermediate),
    ("api", Tier::Intermediate),
    ("apis", Tier::Intermediate),
    ("docker", Tier::Intermediate),
    ("git", Tier::Intermediate),
    ("react", Tier::Intermediate),
    ("django", Tier::Intermediate),
    ("flask", Tier::Intermediate),
    ("testing", Tier::Intermediate),
    ("debugging", Tier::Intermediate),
    ("deployment", Tier::Intermediate),
    ("database", Tier::Intermediate),
    ("databases", Tier::Intermediate),
    ("sql", Tier::Intermediate),
    ("learning", Tier::Beginner),
    ("beginner", Tier::Beginner),
    ("just started", Tier::Beginner),
    ("tutorial", Tier::Beginner),
    ("tutorials", Tier::Beginner),
    ("basics", Tier::Beginner),
    ("newbie", Tier::Beginner),
    ("bootcamp", Tier::Beginner),
];

/// Words that bind a duration to programming experience.
pub(crate) const EXPERIENCE_CONTEXT: &[&str] = &[
    "programming",
    "coding",
    "code",
    "development",
    "developer",
    "software",
    "engineering",
    "experience",
];

/// Builds an alternation of `terms`, longest first, with whitespace inside a
/// term matching any whitespace run.
pub(crate) fn alternation<'a, I>(terms: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut terms: Vec<&str> = terms.into_iter().collect();
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();
    terms
        .iter()
        .map(|t| {
            t.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|")
}

/// Compiles a case-insensitive whole-term matcher over `terms`.
///
/// The term is captured in group 1. Trailing `+` and `#` are treated as part
/// of a word so `c` never matches inside `c++`.
pub(crate) fn term_matcher<'a, I>(terms: I) -> Result<Regex, regex::Error>
where
    I: IntoIterator<Item = &'a str>,
{
    Regex::new(&format!(r"(?i)\b({})(?:[^\w+#]|$)", alternation(terms)))
}

/// Looks up the canonical term for a matched surface form.
pub(crate) fn canonical(table: &[(&'static str, &'static str)], surface: &str) -> Option<&'static str> {
    let key = surface.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    table.iter().find(|(s, _)| *s == key).map(|(_, c)| *c)
}

/// Parses a count token (digits or spelled-out word).
///
/// Returns `None` for anything unparsable, including digit runs that
/// overflow `u32`.
pub(crate) fn parse_count(token: &str) -> Option<u32> {
    let token = token.trim().to_lowercase();
    if token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    NUMBER_WORDS
        .iter()
        .find(|(w, _)| *w == token)
        .map(|(_, n)| *n)
}

/// Parses an amount that may carry a decimal part into whole units plus the
/// fractional remainder in `per_unit` subunits, rounded down.
///
/// `parse_amount("1.5", 12)` is `Some((1, 6))`: one year and six months.
pub(crate) fn parse_amount(token: &str, per_unit: u32) -> Option<(u32, u32)> {
    let token = token.trim();
    let Some(sep) = token.find(|c| c == '.' || c == ',') else {
        return parse_count(token).map(|whole| (whole, 0));
    };
    let whole = parse_count(&token[..sep])?;
    let frac = &token[sep + 1..];
    if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let digits = &frac[..frac.len().min(9)];
    let numerator: u64 = digits.parse().ok()?;
    let denominator = 10u64.pow(u32::try_from(digits.len()).ok()?);
    let rest = u32::try_from(numerator * u64::from(per_unit) / denominator).ok()?;
    Some((whole, rest))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn alternation_orders_longest_first() {
        let alt = alternation(["react", "react native", "ml"]);
        assert!(alt.starts_with(r"react\s+native|"));
        assert!(alt.ends_with("|ml"));
    }

    #[test]
    fn term_matcher_respects_symbol_boundaries() {
        let re = term_matcher(["c++", "c#", "java"]).unwrap();
        let found: Vec<&str> = re.captures_iter("c++, c# and javascript").map(|c| c.get(1).unwrap().as_str()).collect();
        assert_eq!(found, vec!["c++", "c#"]);
    }

    #[test]
    fn canonical_maps_aliases() {
        assert_eq!(canonical(LANGUAGES, "JS"), Some("javascript"));
        assert_eq!(canonical(SKILLS, "Machine\n  Learning"), Some("machine learning"));
        assert_eq!(canonical(SKILLS, "cobol"), None);
    }

    #[test]
    fn parse_count_handles_words_digits_and_overflow() {
        assert_eq!(parse_count("FIVE"), Some(5));
        assert_eq!(parse_count("12"), Some(12));
        assert_eq!(parse_count("99999999999999"), None);
        assert_eq!(parse_count("dozen"), None);
    }

    #[test]
    fn parse_amount_floors_fractions() {
        assert_eq!(parse_amount("1.5", 12), Some((1, 6)));
        assert_eq!(parse_amount("2,25", 12), Some((2, 3)));
        assert_eq!(parse_amount("0.9", 12), Some((0, 10)));
        assert_eq!(parse_amount("3.75", 1), Some((3, 0)));
        assert_eq!(parse_amount("four", 12), Some((4, 0)));
        assert_eq!(parse_amount("7", 12), Some((7, 0)));
        assert_eq!(parse_amount("1.", 12), None);
        assert_eq!(parse_amount("99999999999999.5", 12), None);
    }

    #[test]
    fn mastery_tiers_are_disjoint() {
        let mut seen = HashSet::new();
        for (term, _) in MASTERY_TERMS {
            assert!(seen.insert(*term), "duplicate mastery term {term}");
        }
    }

    #[test]
    fn all_tables_compile() {
        assert!(term_matcher(LANGUAGES.iter().map(|(s, _)| *s)).is_ok());
        assert!(term_matcher(SKILLS.iter().map(|(s, _)| *s)).is_ok());
        assert!(term_matcher(MASTERY_TERMS.iter().map(|(s, _)| *s)).is_ok());
        assert!(Regex::new(GO_PATTERN).is_ok());
    }
}
