// src/domain/code/patterns.rs
//
// Product code patterns.
//
// The table is static configuration: ordered by priority, never mutated at
// runtime. Priority 1 is the strongest rule.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifies a rule in the pattern table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Full code ending in a decimal size, e.g. `A3422300021Y00R14.5`
    FullCodeWithSize,
    LongAlphanumeric,
    /// Letter, 8+ digits, alphanumeric tail and a decimal size
    CompoundCodeWithSize,
    DecimalNumber,
    SeparatedCode,
    DigitsOnly,
    MixedAlphanumeric,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::FullCodeWithSize => "full_code_with_size",
            PatternKind::LongAlphanumeric => "long_alphanumeric",
            PatternKind::CompoundCodeWithSize => "compound_code_with_size",
            PatternKind::DecimalNumber => "decimal_number",
            PatternKind::SeparatedCode => "separated_code",
            PatternKind::DigitsOnly => "digits_only",
            PatternKind::MixedAlphanumeric => "mixed_alphanumeric",
        }
    }
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One rule of the pattern table.
#[derive(Debug, Clone)]
pub struct CodePattern {
    pub kind: PatternKind,
    pub matcher: Regex,
    pub priority: u8,
    pub min_length: usize,
    pub description: &'static str,

    /// Text must hold at least one ASCII letter and one ASCII digit.
    /// Stands in for look-ahead assertions the regex engine does not support.
    pub requires_letter_and_digit: bool,
}

impl CodePattern {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// True when the (already trimmed) text satisfies the rule
    pub fn matches(&self, text: &str) -> bool {
        if text.chars().count() < self.min_length || !self.matcher.is_match(text) {
            return false;
        }

        if self.requires_letter_and_digit {
            let has_letter = text.chars().any(|c| c.is_ascii_alphabetic());
            let has_digit = text.chars().any(|c| c.is_ascii_digit());
            return has_letter && has_digit;
        }

        true
    }

    /// Whether a match earns the full-format bonus
    pub fn is_full_code(&self) -> bool {
        self.kind == PatternKind::FullCodeWithSize
    }
}

/// The built-in table, ordered by priority
pub fn default_patterns() -> Vec<CodePattern> {
    vec![
        CodePattern {
            kind: PatternKind::FullCodeWithSize,
            matcher: Regex::new(r"^[A-Za-z0-9]{10,}\d+\.\d+$").unwrap(),
            priority: 1,
            min_length: 12,
            description: "full code ending with a decimal size, e.g. A3422300021Y00R14.5",
            requires_letter_and_digit: false,
        },
        CodePattern {
            kind: PatternKind::LongAlphanumeric,
            matcher: Regex::new(r"^[A-Za-z0-9]{8,}$").unwrap(),
            priority: 2,
            min_length: 8,
            description: "long alphanumeric code",
            requires_letter_and_digit: false,
        },
        CodePattern {
            kind: PatternKind::CompoundCodeWithSize,
            matcher: Regex::new(r"^[A-Za-z]\d{8,}[A-Za-z0-9]+\d+\.\d+$").unwrap(),
            priority: 3,
            min_length: 10,
            description: "letter, digits, alphanumeric tail and size",
            requires_letter_and_digit: false,
        },
        CodePattern {
            kind: PatternKind::DecimalNumber,
            matcher: Regex::new(r"^\d+\.\d+$").unwrap(),
            priority: 4,
            min_length: 3,
            description: "number with a decimal point",
            requires_letter_and_digit: false,
        },
        CodePattern {
            kind: PatternKind::SeparatedCode,
            matcher: Regex::new(r"^[A-Za-z0-9]+[-_][A-Za-z0-9]+$").unwrap(),
            priority: 5,
            min_length: 3,
            description: "code joined by a separator",
            requires_letter_and_digit: false,
        },
        CodePattern {
            kind: PatternKind::DigitsOnly,
            matcher: Regex::new(r"^\d{2,}$").unwrap(),
            priority: 6,
            min_length: 2,
            description: "digits only",
            requires_letter_and_digit: false,
        },
        CodePattern {
            kind: PatternKind::MixedAlphanumeric,
            matcher: Regex::new(r"^[A-Za-z0-9]{3,}$").unwrap(),
            priority: 7,
            min_length: 3,
            description: "mixed letters and digits",
            requires_letter_and_digit: true,
        },
    ]
}
