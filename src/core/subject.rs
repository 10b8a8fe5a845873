//! Subject extraction: the cleaned name from the first line of a response.

use std::sync::OnceLock;

use regex::Regex;

fn label_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\*{0,2}\s*animal\s*\*{0,2}\s*:+\s*\*{0,2}")
            .expect("label prefix regex is valid")
    })
}

/// Clean a subject line: strip the `animal:` label (optionally bold-wrapped), drop any
/// remaining `**`, trim. Shared by the extractor and the renderer so both agree on the name.
/// A BOM counts as leading whitespace.
pub fn clean_subject_line(line: &str) -> String {
    let line = line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let without_label = label_prefix().replace(line, "");
    without_label.replace("**", "").trim().to_string()
}

/// Extract the subject name from the first line of `response`.
///
/// Only the very first line is considered; if it is blank the result is empty.
pub fn extract_name<'a>(response: impl Into<Option<&'a str>>) -> String {
    let Some(response) = response.into() else {
        return String::new();
    };
    match response.split('\n').next() {
        Some(first) if !first.trim_start_matches('\u{feff}').trim().is_empty() => {
            clean_subject_line(first)
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_or_empty_input() {
        assert_eq!(extract_name(None), "");
        assert_eq!(extract_name(""), "");
    }

    #[test]
    fn plain_label() {
        assert_eq!(extract_name("Animal: Leopard"), "Leopard");
        assert_eq!(extract_name("animal:Leopard"), "Leopard");
        assert_eq!(extract_name("ANIMAL :  Red Panda  "), "Red Panda");
    }

    #[test]
    fn bold_label() {
        assert_eq!(extract_name("**animal:** Tiger"), "Tiger");
        assert_eq!(extract_name("*Animal:* Owl"), "Owl");
        assert_eq!(extract_name("**Animal**: Owl"), "Owl");
    }

    #[test]
    fn bold_name_without_label() {
        assert_eq!(extract_name("**Dolphin**\nrest"), "Dolphin");
    }

    #[test]
    fn double_colon_label() {
        assert_eq!(extract_name("animal:: Lion"), "Lion");
    }

    #[test]
    fn only_first_line_is_considered() {
        assert_eq!(extract_name("\nAnimal: Lion"), "");
        assert_eq!(extract_name("   \nAnimal: Lion"), "");
        assert_eq!(extract_name("Animal: Lion\nAnimal: Tiger"), "Lion");
    }

    #[test]
    fn crlf_line_endings() {
        assert_eq!(extract_name("Animal: Lion\r\nMore"), "Lion");
    }

    #[test]
    fn leading_bom_is_ignored() {
        assert_eq!(extract_name("\u{feff}Animal: Leopard\n- Fast"), "Leopard");
        assert_eq!(extract_name("\u{feff}"), "");
    }

    #[test]
    fn label_only_in_middle_is_kept() {
        assert_eq!(extract_name("My animal: Lion"), "My animal: Lion");
    }
}
