//! Homepage statistic: a labelled number such as `190+` countries or
//! `$4.2M` in cargo value.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BayanchorError, ValidationError};

/// Fraction digits are taken from the configured value, up to this many.
const MAX_DECIMALS: usize = 3;

/// A labelled numeric value with optional prefix and suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: f64,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
    /// Icon name understood by the dashboard; no icon block when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Position in the entrance stagger.
    #[serde(default)]
    pub delay: u32,
}

impl Stat {
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            prefix: String::new(),
            suffix: String::new(),
            label: label.into(),
            icon: None,
            delay: 0,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    /// Check that the stat can be displayed.
    ///
    /// # Errors
    ///
    /// Returns [`BayanchorError::Validation`] when the label is blank or the
    /// value is not finite.
    pub fn validate(&self) -> Result<(), BayanchorError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::EmptyField("stat.label").into());
        }
        if !self.value.is_finite() {
            return Err(ValidationError::InvalidAmount("stat.value").into());
        }
        Ok(())
    }

    /// Number of fraction digits shown while counting.
    #[must_use]
    pub fn decimals(&self) -> usize {
        let text = self.value.abs().to_string();
        text.split_once('.')
            .map_or(0, |(_, frac)| frac.len().min(MAX_DECIMALS))
    }

    /// `prefix + current + suffix`, with `current` rounded to
    /// [`decimals`](Self::decimals).
    #[must_use]
    pub fn display(&self, current: f64) -> String {
        format!(
            "{}{:.*}{}",
            self.prefix,
            self.decimals(),
            current,
            self.suffix
        )
    }

    /// What the counter settles on.
    #[must_use]
    pub fn final_display(&self) -> String {
        self.display(self.value)
    }

    #[must_use]
    pub fn label_text(&self) -> String {
        self.label.to_uppercase()
    }

    /// Entrance delay for this stat when each step is `step` long.
    #[must_use]
    pub fn stagger(&self, step: Duration) -> Duration {
        step * self.delay
    }
}
