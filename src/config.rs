//! When the form validates
//!
//! By default fields are only checked on submit. After the first submit
//! attempt a field is re-checked on every change, so a fixed field loses its
//! message as the user types.
//!
//! ```
//! use trial_signup::config::{FormConfig, RevalidateMode, ValidationMode};
//!
//! let config = FormConfig::default()
//!     .mode(ValidationMode::OnBlur)
//!     .revalidate_mode(RevalidateMode::OnBlur);
//! assert_eq!(config.mode, ValidationMode::OnBlur);
//! ```

/// When fields are first validated, before any submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValidationMode {
    /// Only on submit.
    #[default]
    OnSubmit,
    /// When a field loses focus.
    OnBlur,
    /// On every change.
    OnChange,
    /// On the first blur, then on every change.
    OnTouched,
    /// On blur and on every change.
    All,
}

impl ValidationMode {
    /// Whether a change to a field with the given touched state triggers validation.
    pub fn on_change(self, touched: bool) -> bool {
        match self {
            ValidationMode::OnChange | ValidationMode::All => true,
            ValidationMode::OnTouched => touched,
            ValidationMode::OnSubmit | ValidationMode::OnBlur => false,
        }
    }

    /// Whether losing focus triggers validation.
    pub fn on_blur(self) -> bool {
        matches!(
            self,
            ValidationMode::OnBlur | ValidationMode::OnTouched | ValidationMode::All
        )
    }
}

/// How fields are re-validated once a submit has been attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RevalidateMode {
    /// On every change.
    #[default]
    OnChange,
    /// When a field loses focus.
    OnBlur,
    /// Only on the next submit.
    OnSubmit,
}

/// Form behavior settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// Validation before the first submit attempt
    pub mode: ValidationMode,
    /// Validation after a submit attempt
    pub revalidate_mode: RevalidateMode,
    /// Hand the submit handler trimmed names and email
    pub trim_before_submit: bool,
}

impl FormConfig {
    /// Set the initial validation mode.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the post-submit validation mode.
    pub fn revalidate_mode(mut self, mode: RevalidateMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    /// Toggle trimming of the submitted snapshot.
    pub fn trim_before_submit(mut self, trim: bool) -> Self {
        self.trim_before_submit = trim;
        self
    }

    /// Whether a change should validate the field right away.
    ///
    /// [`ValidationMode::All`] validates every change, before and after a
    /// submit attempt.
    pub fn validates_on_change(&self, submitted: bool, touched: bool) -> bool {
        if self.mode == ValidationMode::All {
            true
        } else if submitted {
            self.revalidate_mode == RevalidateMode::OnChange
        } else {
            self.mode.on_change(touched)
        }
    }

    /// Whether a blur should validate the field right away.
    pub fn validates_on_blur(&self, submitted: bool) -> bool {
        if self.mode == ValidationMode::All {
            true
        } else if submitted {
            self.revalidate_mode == RevalidateMode::OnBlur
        } else {
            self.mode.on_blur()
        }
    }
}
