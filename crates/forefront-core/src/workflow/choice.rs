//! User choices and how raw answers map onto them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Empty, `y` and `yes` (any case) mean yes; everything else means no
pub fn affirmative(answer: &str) -> bool {
    answer.is_empty() || answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// CSS preprocessing flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CssChoice {
    Sass,
    Skip,
}

impl CssChoice {
    /// Script name for the flavor, `None` when skipped
    pub fn key(self) -> Option<&'static str> {
        match self {
            CssChoice::Sass => Some("sass"),
            CssChoice::Skip => None,
        }
    }

    pub fn from_affirmative(yes: bool) -> Self {
        if yes {
            CssChoice::Sass
        } else {
            CssChoice::Skip
        }
    }
}

impl fmt::Display for CssChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key().unwrap_or("skip"))
    }
}

/// JavaScript authoring flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JsChoice {
    #[value(name = "coffeescript")]
    CoffeeScript,
    Es6,
    Js,
    Skip,
}

impl JsChoice {
    /// Every choice, in the order they are offered
    pub const ALL: [JsChoice; 4] = [
        JsChoice::CoffeeScript,
        JsChoice::Es6,
        JsChoice::Js,
        JsChoice::Skip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            JsChoice::CoffeeScript => "coffeescript",
            JsChoice::Es6 => "es6",
            JsChoice::Js => "js",
            JsChoice::Skip => "skip",
        }
    }

    /// Script name and source directory for the flavor, `None` when skipped
    pub fn key(self) -> Option<&'static str> {
        match self {
            JsChoice::Skip => None,
            other => Some(other.name()),
        }
    }

    /// Map a raw answer to a choice; only the empty answer selects `default`
    pub fn parse(answer: &str, default: JsChoice) -> Option<Self> {
        if answer.is_empty() {
            return Some(default);
        }
        Self::ALL
            .into_iter()
            .find(|choice| answer.eq_ignore_ascii_case(choice.name()))
    }

    /// `"coffeescript", "es6", "js", or "skip"`
    pub fn options_list() -> String {
        let quoted: Vec<String> = Self::ALL
            .iter()
            .map(|choice| format!("\"{}\"", choice.name()))
            .collect();
        let (last, rest) = quoted.split_last().expect("JsChoice::ALL is not empty");
        format!("{}, or {}", rest.join(", "), last)
    }
}

impl fmt::Display for JsChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        for answer in ["", "y", "Y", "yes", "YES", "Yes"] {
            assert!(affirmative(answer), "{:?} should be yes", answer);
        }
    }

    #[test]
    fn test_negative_answers() {
        for answer in ["n", "no", "nope", "yess", "ye", "true", " ", "  ", " y "] {
            assert!(!affirmative(answer), "{:?} should be no", answer);
        }
    }

    #[test]
    fn test_js_parse_each_branch() {
        let default = JsChoice::CoffeeScript;
        assert_eq!(JsChoice::parse("coffeescript", default), Some(JsChoice::CoffeeScript));
        assert_eq!(JsChoice::parse("", default), Some(JsChoice::CoffeeScript));
        assert_eq!(JsChoice::parse("es6", default), Some(JsChoice::Es6));
        assert_eq!(JsChoice::parse("JS", default), Some(JsChoice::Js));
        assert_eq!(JsChoice::parse("skip", default), Some(JsChoice::Skip));
    }

    #[test]
    fn test_js_parse_rejects_unknown() {
        for answer in ["ruby", "typescript", "coffee", "es"] {
            assert_eq!(JsChoice::parse(answer, JsChoice::Es6), None);
        }
    }

    #[test]
    fn test_js_parse_uses_configured_default() {
        assert_eq!(JsChoice::parse("", JsChoice::Es6), Some(JsChoice::Es6));
    }

    #[test]
    fn test_js_parse_whitespace_is_not_empty() {
        assert_eq!(JsChoice::parse("  ", JsChoice::Es6), None);
        assert_eq!(JsChoice::parse(" es6", JsChoice::CoffeeScript), None);
    }

    #[test]
    fn test_keys() {
        assert_eq!(CssChoice::Sass.key(), Some("sass"));
        assert_eq!(CssChoice::Skip.key(), None);
        assert_eq!(JsChoice::CoffeeScript.key(), Some("coffeescript"));
        assert_eq!(JsChoice::Skip.key(), None);
    }

    #[test]
    fn test_options_list() {
        assert_eq!(
            JsChoice::options_list(),
            r#""coffeescript", "es6", "js", or "skip""#
        );
    }
}
