// Field-specific extraction heuristics for the boat-license layout.
//
// Each function scans the normalized line sequence (or the raw text) on its
// own and returns at most one value. Field-not-found is the expected failure
// mode and is always an Option::None, never an error.
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Candidate value tokens: maximal runs of 4+ uppercase letters. Shorter
    // runs are ordinal prefixes or OCR debris on this layout.
    static ref UPPERCASE_RUN: Regex = Regex::new(r"\b[A-Z]{4,}\b").unwrap();
    // Birth date as printed on the document: DD.MM.YYYY.
    static ref DOTTED_DATE: Regex = Regex::new(r"\d{2}\.\d{2}\.\d{4}").unwrap();
    // Place names: uppercase words, hyphens and apostrophes allowed,
    // multi-word separated by spaces (e.g. SAINT-JEAN DE LUZ).
    static ref PLACE_RUN: Regex = Regex::new(r"[A-Z][A-Z'-]+(?:\s*[A-Z'-]+)*").unwrap();
    // Issuance block: exactly eight digits (DDMMYYYY) then the one-or-two
    // digit medical fitness code.
    static ref ISSUE_LINE: Regex = Regex::new(r"\b(\d{8})\s+(\d{1,2})\b").unwrap();
    // Terminal line: ten-digit license number then the alphanumeric title
    // number.
    static ref TERMINAL_LINE: Regex = Regex::new(r"\b(\d{10})\s+([A-Z0-9]+)\b").unwrap();
}

pub struct FieldExtractor;

impl FieldExtractor {
    /// Surname, captioned "1. Nom" on the document.
    pub fn extract_surname(lines: &[&str]) -> Option<String> {
        Self::extract_labeled_value(lines, "1. Nom", |word| word == "NOM")
    }

    /// Given names, captioned "2. Prénoms".
    pub fn extract_given_names(lines: &[&str]) -> Option<String> {
        Self::extract_labeled_value(lines, "2. Prénoms", |word| word.contains("PRÉNOM"))
    }

    /// Shared strategy for fields whose value follows a printed label.
    ///
    /// OCR frequently splits a label and its value across two lines, so the
    /// marker line is concatenated with the line after it before matching.
    /// Among the qualifying uppercase runs the *last* one wins: on this
    /// layout the value token sits after any interstitial noise. The
    /// exclusion predicate keeps the label's own keyword from being picked
    /// up as the value.
    fn extract_labeled_value(
        lines: &[&str],
        marker: &str,
        is_label_word: impl Fn(&str) -> bool,
    ) -> Option<String> {
        let index = lines.iter().position(|line| line.contains(marker))?;
        let mut combined = lines[index].to_string();
        if let Some(next) = lines.get(index + 1) {
            combined.push(' ');
            combined.push_str(next);
        }
        UPPERCASE_RUN
            .find_iter(&combined)
            .map(|m| m.as_str())
            .filter(|word| !is_label_word(word))
            .last()
            .map(str::to_string)
    }

    /// First DD.MM.YYYY token anywhere in the raw text.
    ///
    /// No calendar validation: OCR noise makes out-of-range digits more
    /// useful kept than rejected.
    pub fn extract_birth_date(text: &str) -> Option<String> {
        DOTTED_DATE.find(text).map(|m| m.as_str().to_string())
    }

    /// Birth place, printed on the same line as the birth date.
    ///
    /// Only meaningful once a birth date has been extracted; the assembler
    /// sequences this after [`FieldExtractor::extract_birth_date`].
    pub fn extract_birth_place(lines: &[&str], birth_date: &str) -> Option<String> {
        let line = lines.iter().find(|line| line.contains(birth_date))?;
        let (_, after_date) = line.split_once(birth_date)?;
        PLACE_RUN
            .find(after_date)
            .map(|m| m.as_str().trim().to_string())
    }

    /// Issuance date and medical fitness code, printed as one numeric block.
    ///
    /// The eight-digit run is DDMMYYYY; it is reformatted to DD.MM.YYYY by
    /// pure digit slicing. Both values come from the same line, so they are
    /// set together or not at all.
    pub fn extract_issuance_and_medical(lines: &[&str]) -> Option<(String, String)> {
        for line in lines {
            if let Some(caps) = ISSUE_LINE.captures(line) {
                let digits = &caps[1];
                let date = format!("{}.{}.{}", &digits[0..2], &digits[2..4], &digits[4..8]);
                return Some((date, caps[2].to_string()));
            }
        }
        None
    }

    /// License and title numbers from the last line of the document.
    pub fn extract_license_numbers(lines: &[&str]) -> Option<(String, String)> {
        let last = lines.last()?;
        let caps = TERMINAL_LINE.captures(last)?;
        Some((caps[1].to_string(), caps[2].to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalize::normalize_lines;

    #[test]
    fn surname_takes_last_qualifying_run() {
        let lines = normalize_lines("1. Nom ABC DUPONT\nquelque chose");
        assert_eq!(
            FieldExtractor::extract_surname(&lines).as_deref(),
            Some("DUPONT")
        );
    }

    #[test]
    fn surname_spans_label_and_following_line() {
        let lines = normalize_lines("1. Nom\nDURAND");
        assert_eq!(
            FieldExtractor::extract_surname(&lines).as_deref(),
            Some("DURAND")
        );
    }

    #[test]
    fn surname_excludes_label_keyword() {
        let lines = normalize_lines("1. Nom NOM MARTIN");
        assert_eq!(
            FieldExtractor::extract_surname(&lines).as_deref(),
            Some("MARTIN")
        );
    }

    #[test]
    fn surname_absent_without_marker() {
        let lines = normalize_lines("Prénoms JEAN\n12.05.1998 PARIS");
        assert_eq!(FieldExtractor::extract_surname(&lines), None);
    }

    #[test]
    fn surname_absent_without_qualifying_run() {
        // Marker present but nothing after it reaches four uppercase letters.
        let lines = normalize_lines("1. Nom abc\ndef 123");
        assert_eq!(FieldExtractor::extract_surname(&lines), None);
    }

    #[test]
    fn given_names_from_label_line() {
        let lines = normalize_lines("2. Prénoms JEAN\nn° 123");
        assert_eq!(
            FieldExtractor::extract_given_names(&lines).as_deref(),
            Some("JEAN")
        );
    }

    #[test]
    fn birth_date_is_first_dotted_date() {
        let text = "bruit 12.05.1998 PARIS\nensuite 01.01.2000";
        assert_eq!(
            FieldExtractor::extract_birth_date(text).as_deref(),
            Some("12.05.1998")
        );
    }

    #[test]
    fn birth_date_ignores_calendar_validity() {
        // Leniency is deliberate: a noisy month beats a rejected match.
        assert_eq!(
            FieldExtractor::extract_birth_date("99.99.9999").as_deref(),
            Some("99.99.9999")
        );
    }

    #[test]
    fn birth_place_follows_date_on_same_line() {
        let lines = normalize_lines("1. Nom DUPONT\n12.05.1998 PARIS");
        assert_eq!(
            FieldExtractor::extract_birth_place(&lines, "12.05.1998").as_deref(),
            Some("PARIS")
        );
    }

    #[test]
    fn birth_place_captures_multi_word_names() {
        let lines = normalize_lines("12.05.1998 SAINT-JEAN DE LUZ");
        assert_eq!(
            FieldExtractor::extract_birth_place(&lines, "12.05.1998").as_deref(),
            Some("SAINT-JEAN DE LUZ")
        );
    }

    #[test]
    fn birth_place_absent_when_nothing_follows_date() {
        let lines = normalize_lines("3. 12.05.1998");
        assert_eq!(
            FieldExtractor::extract_birth_place(&lines, "12.05.1998"),
            None
        );
    }

    #[test]
    fn issuance_block_is_split_into_date_and_code() {
        let lines = normalize_lines("en-tête\n20031995 12\nsuite");
        assert_eq!(
            FieldExtractor::extract_issuance_and_medical(&lines),
            Some(("20.03.1995".to_string(), "12".to_string()))
        );
    }

    #[test]
    fn issuance_block_requires_exactly_eight_digits() {
        let lines = normalize_lines("123456789 12");
        assert_eq!(FieldExtractor::extract_issuance_and_medical(&lines), None);
    }

    #[test]
    fn issuance_block_stops_at_first_match() {
        let lines = normalize_lines("20031995 12\n01012000 7");
        assert_eq!(
            FieldExtractor::extract_issuance_and_medical(&lines),
            Some(("20.03.1995".to_string(), "12".to_string()))
        );
    }

    #[test]
    fn license_numbers_from_terminal_line() {
        let lines = normalize_lines("1. Nom DUPONT\n1234567890 AB12CD");
        assert_eq!(
            FieldExtractor::extract_license_numbers(&lines),
            Some(("1234567890".to_string(), "AB12CD".to_string()))
        );
    }

    #[test]
    fn license_numbers_only_match_the_last_line() {
        let lines = normalize_lines("1234567890 AB12CD\nmention finale");
        assert_eq!(FieldExtractor::extract_license_numbers(&lines), None);
    }

    #[test]
    fn license_numbers_absent_on_empty_sequence() {
        assert_eq!(FieldExtractor::extract_license_numbers(&[]), None);
    }
}
