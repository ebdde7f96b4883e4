// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Length classes and their fixed token budgets.

use std::str::FromStr;

use strum::{Display, EnumString};

/// Budget used for any label outside the declared set.
pub const DEFAULT_TOKEN_BUDGET: u32 = 700;

/// The length choices offered by the form.
///
/// Parses from either the English key or the Chinese form label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum LengthClass {
    #[strum(to_string = "short", serialize = "短（150字内）")]
    Short,
    #[strum(to_string = "medium", serialize = "中（300字内）")]
    Medium,
    #[strum(to_string = "long", serialize = "长（600字内）")]
    Long,
    #[strum(to_string = "extra-long", serialize = "超长（1000字内）")]
    ExtraLong,
}

impl LengthClass {
    pub const ALL: [LengthClass; 4] = [
        LengthClass::Short,
        LengthClass::Medium,
        LengthClass::Long,
        LengthClass::ExtraLong,
    ];

    /// `max_tokens` sent for this class.
    pub fn token_budget(self) -> u32 {
        match self {
            LengthClass::Short => 400,
            LengthClass::Medium => 700,
            LengthClass::Long => 1200,
            LengthClass::ExtraLong => 2000,
        }
    }

    /// The label shown in the form.
    pub fn label(self) -> &'static str {
        match self {
            LengthClass::Short => "短（150字内）",
            LengthClass::Medium => "中（300字内）",
            LengthClass::Long => "长（600字内）",
            LengthClass::ExtraLong => "超长（1000字内）",
        }
    }

    /// Target length phrase written into the user prompt.
    pub fn word_hint(self) -> &'static str {
        match self {
            LengthClass::Short => "150字以内",
            LengthClass::Medium => "300字以内",
            LengthClass::Long => "600字以内",
            LengthClass::ExtraLong => "1000字以内",
        }
    }
}

/// Resolve a length label to its token budget, falling back to
/// [`DEFAULT_TOKEN_BUDGET`] for unknown labels.
pub fn token_budget(label: &str) -> u32 {
    LengthClass::from_str(label.trim())
        .map(LengthClass::token_budget)
        .unwrap_or(DEFAULT_TOKEN_BUDGET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_resolve_to_table() {
        assert_eq!(token_budget("short"), 400);
        assert_eq!(token_budget("medium"), 700);
        assert_eq!(token_budget("long"), 1200);
        assert_eq!(token_budget("extra-long"), 2000);
    }

    #[test]
    fn form_labels_resolve_to_table() {
        for class in LengthClass::ALL {
            assert_eq!(token_budget(class.label()), class.token_budget());
        }
        assert_eq!(token_budget("短（150字内）"), 400);
    }

    #[test]
    fn unknown_labels_fall_back_to_default() {
        assert_eq!(token_budget(""), DEFAULT_TOKEN_BUDGET);
        assert_eq!(token_budget("huge"), DEFAULT_TOKEN_BUDGET);
        assert_eq!(token_budget("Short"), DEFAULT_TOKEN_BUDGET);
    }

    #[test]
    fn display_uses_english_key() {
        assert_eq!(LengthClass::ExtraLong.to_string(), "extra-long");
    }
}
