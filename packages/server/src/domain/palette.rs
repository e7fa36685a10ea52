//! Allowed colors.
//!
//! A [`Color`] can only be obtained by resolving a string against a
//! [`Palette`], which keeps every canvas cell inside the allowed set.

use std::fmt;

use super::error::ValueObjectError;

/// Colors a client may paint with, unless configured otherwise
pub const DEFAULT_COLORS: [&str; 7] = [
    "#ff4500", "#00cc78", "#2450a5", "#821f9f", "#fed734", "#f9fafc", "#000000",
];

/// A color that belongs to a palette
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed set of allowed colors, immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette; duplicates are collapsed and order is kept.
    pub fn new<I, S>(colors: I) -> Result<Self, ValueObjectError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<Color> = Vec::new();
        for raw in colors {
            let raw = raw.into();
            if raw.is_empty() {
                return Err(ValueObjectError::EmptyColor);
            }
            if !unique.iter().any(|c| c.0 == raw) {
                unique.push(Color(raw));
            }
        }

        if unique.is_empty() {
            return Err(ValueObjectError::EmptyPalette);
        }

        Ok(Self { colors: unique })
    }

    /// Exact (case-sensitive) lookup
    pub fn resolve(&self, raw: &str) -> Option<Color> {
        self.colors.iter().find(|c| c.0 == raw).cloned()
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.colors.contains(color)
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| Color(c.to_string())).collect(),
        }
    }
}
