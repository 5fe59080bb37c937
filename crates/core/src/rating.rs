//! Fact-check rating taxonomy.
//!
//! Fact-check publishers use free-form verdicts ("Mostly True", "Pants on
//! Fire", "Missing context"...). [`Rating::parse`] maps the common ones onto a
//! fixed scale and sends everything else to [`Rating::Unrated`].

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    True,
    MostlyTrue,
    HalfTrue,
    MostlyFalse,
    False,
    Unverified,
    Misleading,
    LacksContext,
    /// Any verdict outside the taxonomy.
    Unrated,
}

impl Rating {
    /// The ratings produced by the simulated fact checker.
    pub const SIMULATED: [Rating; 8] = [
        Rating::True,
        Rating::MostlyTrue,
        Rating::HalfTrue,
        Rating::MostlyFalse,
        Rating::False,
        Rating::Unverified,
        Rating::Misleading,
        Rating::LacksContext,
    ];

    /// Case-insensitive lookup of a free-form verdict.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "true" | "correct" | "accurate" | "confirmed" => Rating::True,
            "mostly true" | "mostly correct" | "mostly accurate" => Rating::MostlyTrue,
            "half true" | "partly true" | "mixed" => Rating::HalfTrue,
            "mostly false" | "mostly incorrect" => Rating::MostlyFalse,
            "false" | "incorrect" | "inaccurate" => Rating::False,
            "unverified" | "unclear" => Rating::Unverified,
            "misleading" => Rating::Misleading,
            "lacks context" => Rating::LacksContext,
            _ => Rating::Unrated,
        }
    }

    /// Accuracy score on a 0-100 scale.
    pub fn score(&self) -> f64 {
        match self {
            Rating::True => 100.0,
            Rating::MostlyTrue => 80.0,
            Rating::HalfTrue => 50.0,
            Rating::MostlyFalse => 20.0,
            Rating::False => 0.0,
            Rating::Unverified => 50.0,
            Rating::Misleading => 30.0,
            Rating::LacksContext => 40.0,
            Rating::Unrated => 50.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::True => "True",
            Rating::MostlyTrue => "Mostly True",
            Rating::HalfTrue => "Half True",
            Rating::MostlyFalse => "Mostly False",
            Rating::False => "False",
            Rating::Unverified => "Unverified",
            Rating::Misleading => "Misleading",
            Rating::LacksContext => "Lacks Context",
            Rating::Unrated => "Unrated",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
