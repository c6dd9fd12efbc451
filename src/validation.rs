//! Blur/focus feedback for form fields. Advisory only: nothing here stops a
//! form from being submitted.

use once_cell::sync::Lazy;
use regex::Regex;

pub const INVALID_EMAIL_TEXT: &str = "Please enter a valid email address";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// `local@domain.tld`-shaped check.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub email: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Focused,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            FieldStatus::Neutral => None,
            FieldStatus::Focused => Some("#2563eb"),
            FieldStatus::Valid => Some("#10b981"),
            FieldStatus::Invalid => Some("#ef4444"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldFeedback {
    pub status: FieldStatus,
    pub message: Option<&'static str>,
}

impl FieldFeedback {
    /// Fields without a rule never change colour, even on focus.
    pub fn focus(&mut self, rules: FieldRules) {
        if rules.required {
            self.status = FieldStatus::Focused;
        }
    }

    pub fn blur(&mut self, rules: FieldRules, value: &str) {
        if rules.required {
            self.status = if value.trim().is_empty() {
                FieldStatus::Invalid
            } else {
                FieldStatus::Valid
            };
        }

        // An empty email leaves the inline message alone.
        if rules.email && !value.is_empty() {
            if is_valid_email(value) {
                self.status = FieldStatus::Valid;
                self.message = None;
            } else {
                self.status = FieldStatus::Invalid;
                self.message = Some(INVALID_EMAIL_TEXT);
            }
        }
    }

    pub fn style(&self) -> String {
        self.status
            .border_color()
            .map(|color| format!("border-color: {};", color))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: FieldRules = FieldRules { required: true, email: false };
    const REQUIRED_EMAIL: FieldRules = FieldRules { required: true, email: true };
    const OPTIONAL_EMAIL: FieldRules = FieldRules { required: false, email: true };

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe+news@mail.example.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn required_field_blur() {
        let mut field = FieldFeedback::default();
        field.blur(REQUIRED, "   ");
        assert_eq!(field.status, FieldStatus::Invalid);
        assert_eq!(field.style(), "border-color: #ef4444;");

        field.blur(REQUIRED, "Jane");
        assert_eq!(field.status, FieldStatus::Valid);
        assert_eq!(field.style(), "border-color: #10b981;");
    }

    #[test]
    fn focus_uses_focus_color() {
        let mut field = FieldFeedback::default();
        field.blur(REQUIRED, "");
        field.focus(REQUIRED);
        assert_eq!(field.status.border_color(), Some("#2563eb"));
    }

    #[test]
    fn invalid_email_shows_message() {
        let mut field = FieldFeedback::default();
        field.blur(REQUIRED_EMAIL, "not-an-email");
        assert_eq!(field.status, FieldStatus::Invalid);
        assert_eq!(field.message, Some(INVALID_EMAIL_TEXT));
    }

    #[test]
    fn valid_email_shows_no_message() {
        let mut field = FieldFeedback::default();
        field.blur(REQUIRED_EMAIL, "a@b.co");
        assert_eq!(field.status, FieldStatus::Valid);
        assert_eq!(field.message, None);
    }

    #[test]
    fn fixing_email_removes_message() {
        let mut field = FieldFeedback::default();
        field.blur(REQUIRED_EMAIL, "not-an-email");
        field.blur(REQUIRED_EMAIL, "a@b.co");
        assert_eq!(field.message, None);
        assert_eq!(field.status, FieldStatus::Valid);
    }

    #[test]
    fn emptied_email_keeps_previous_message() {
        let mut field = FieldFeedback::default();
        field.blur(REQUIRED_EMAIL, "not-an-email");
        field.blur(REQUIRED_EMAIL, "");
        assert_eq!(field.status, FieldStatus::Invalid);
        assert_eq!(field.message, Some(INVALID_EMAIL_TEXT));
    }

    #[test]
    fn optional_empty_email_is_untouched() {
        let mut field = FieldFeedback::default();
        field.blur(OPTIONAL_EMAIL, "");
        assert_eq!(field, FieldFeedback::default());

        field.focus(OPTIONAL_EMAIL);
        assert_eq!(field.status, FieldStatus::Neutral);
    }

    #[test]
    fn neutral_field_has_no_inline_style() {
        assert_eq!(FieldFeedback::default().style(), "");
    }
}
