//! Agenda form sanitizing and validation
//!
//! Free-text fields are restricted to ASCII letters, digits and whitespace.
//! Every keystroke goes through [`clean_field`], which also enforces the
//! control's length limit. Validation sanitizes once more without cutting,
//! so surrounding whitespace never eats into the limit.

use chrono::{NaiveDateTime, Timelike};
use thiserror::Error;

use super::aggregate::{ImageUpload, NewAgenda};

pub const TITLE_MAX_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 200;
pub const LOCATION_MAX_LEN: usize = 20;

/// Format of a `datetime-local` control value
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

const ACCEPTED_DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Media type prefix an uploaded image must declare
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter title (no special characters).")]
    MissingTitle,
    #[error("Please enter description (no special characters).")]
    MissingDescription,
    #[error("Please select date & time.")]
    MissingDateTime,
    #[error("Please enter location (no special characters).")]
    MissingLocation,
    #[error("Invalid date & time.")]
    InvalidDateTime,
    #[error("Date & time cannot be in the past.")]
    PastDateTime,
    #[error("Please select a valid image file (jpg, png, etc.).")]
    InvalidImage,
}

/// Whitespace accepted in free-text fields: the `\s` class of browser
/// regular expressions. Differs from [`char::is_whitespace`] on U+0085
/// (rejected here) and U+FEFF (accepted here).
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Remove every character that is not an ASCII letter, digit or whitespace
pub fn sanitize_text(value: &str) -> String {
    value
        .chars()
        .filter(|&c| c.is_ascii_alphanumeric() || is_form_whitespace(c))
        .collect()
}

fn trim_form(value: &str) -> &str {
    value.trim_matches(is_form_whitespace)
}

/// Sanitize and cut to the control's maximum length (in characters)
pub fn clean_field(value: &str, max_len: usize) -> String {
    sanitize_text(value).chars().take(max_len).collect()
}

/// Parse a `datetime-local` value (seconds optional)
pub fn parse_datetime_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Earliest value the date control should offer: `now` without seconds
pub fn min_datetime_input(now: NaiveDateTime) -> String {
    now.with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(now)
        .format(DATETIME_INPUT_FORMAT)
        .to_string()
}

/// Accept an image only if its declared media type is `image/*`
pub fn check_image(image: &ImageUpload) -> Result<(), ValidationError> {
    if image.content_type.starts_with(IMAGE_MEDIA_PREFIX) {
        Ok(())
    } else {
        Err(ValidationError::InvalidImage)
    }
}

/// Raw values of the add-agenda form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaDto {
    pub title: String,
    pub description: String,
    /// `datetime-local` value, empty when nothing is selected
    pub datetime: String,
    pub location: String,
    pub image: Option<ImageUpload>,
}

impl AgendaDto {
    /// Check the form against `now` and build the submission payload.
    ///
    /// Rules run in a fixed order and the first failure is returned:
    /// title, description, date selected, location, date parses, date not
    /// before `now`. An image with a non-image media type is dropped from
    /// the payload rather than failing the form.
    pub fn validate(&self, now: NaiveDateTime) -> Result<NewAgenda, ValidationError> {
        let title = sanitize_text(&self.title);
        let description = sanitize_text(&self.description);
        let location = sanitize_text(&self.location);
        let (title, description, location) =
            (trim_form(&title), trim_form(&description), trim_form(&location));

        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        if self.datetime.is_empty() {
            return Err(ValidationError::MissingDateTime);
        }
        if location.is_empty() {
            return Err(ValidationError::MissingLocation);
        }

        let selected =
            parse_datetime_input(&self.datetime).ok_or(ValidationError::InvalidDateTime)?;
        if selected < now {
            return Err(ValidationError::PastDateTime);
        }

        Ok(NewAgenda {
            title: title.to_string(),
            description: description.to_string(),
            datetime: self.datetime.clone(),
            location: location.to_string(),
            image: self
                .image
                .clone()
                .filter(|image| check_image(image).is_ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 5, 1)
            .unwrap()
            .and_hms_opt(10, 15, 42)
            .unwrap()
    }

    fn valid_dto() -> AgendaDto {
        AgendaDto {
            title: "  Opening  ".into(),
            description: " Keynote talk ".into(),
            datetime: (now() + Duration::hours(1))
                .format(DATETIME_INPUT_FORMAT)
                .to_string(),
            location: " Hall A ".into(),
            image: None,
        }
    }

    #[test]
    fn test_sanitize_strips_punctuation_keeps_spaces() {
        assert_eq!(sanitize_text("Hello World!!"), "Hello World");
        assert_eq!(sanitize_text("a-b_c.d@e"), "abcde");
        assert_eq!(sanitize_text("Zoë café"), "Zo caf");
        assert_eq!(sanitize_text("line\nbreak\ttab"), "line\nbreak\ttab");
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let samples = [
            "Hello World!!",
            "  <script>alert(1)</script> ",
            "ÅÄÖ 123 ~!@#$%^&*()",
            "plain text",
            "\u{00a0}nbsp\u{2003}em",
        ];
        for sample in samples {
            let once = sanitize_text(sample);
            assert_eq!(sanitize_text(&once), once);
            assert_eq!(clean_field(&once, TITLE_MAX_LEN), clean_field(sample, TITLE_MAX_LEN));
        }
    }

    #[test]
    fn test_sanitize_uses_browser_whitespace_class() {
        assert_eq!(sanitize_text("next\u{0085}line"), "nextline");
        assert_eq!(sanitize_text("\u{FEFF}bom"), "\u{FEFF}bom");
        assert_eq!(sanitize_text("a\u{200B}b"), "ab");
        assert!(is_form_whitespace('\u{3000}'));
        assert!(!is_form_whitespace('\u{0085}'));
    }

    #[test]
    fn test_validate_trims_before_length_counts() {
        let title = "Twenty chars exactly";
        assert_eq!(title.len(), TITLE_MAX_LEN);
        let dto = AgendaDto {
            title: format!("   {}", title),
            location: format!("\u{FEFF}{}  ", "Main hall"),
            ..valid_dto()
        };
        let new_agenda = dto.validate(now()).unwrap();
        assert_eq!(new_agenda.title, title);
        assert_eq!(new_agenda.location, "Main hall");
    }

    #[test]
    fn test_clean_field_truncates() {
        let long = "a".repeat(50);
        assert_eq!(clean_field(&long, TITLE_MAX_LEN).len(), TITLE_MAX_LEN);
        assert_eq!(clean_field("Hi!", TITLE_MAX_LEN), "Hi");
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let new_agenda = valid_dto().validate(now()).unwrap();
        assert_eq!(new_agenda.title, "Opening");
        assert_eq!(new_agenda.description, "Keynote talk");
        assert_eq!(new_agenda.location, "Hall A");
        assert_eq!(new_agenda.datetime, "2030-05-01T11:15");
    }

    #[test]
    fn test_rules_report_first_failure() {
        let mut dto = AgendaDto::default();
        assert_eq!(dto.validate(now()), Err(ValidationError::MissingTitle));

        dto.title = "!!!".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::MissingTitle));

        dto.title = "Opening".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::MissingDescription));

        dto.description = "Keynote".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::MissingDateTime));

        dto.datetime = "not a date".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::MissingLocation));

        dto.location = "Hall".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::InvalidDateTime));

        dto.datetime = "2030-05-01T10:14".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::PastDateTime));
    }

    #[test]
    fn test_current_minute_is_already_past() {
        let mut dto = valid_dto();
        dto.datetime = "2030-05-01T10:15".into();
        assert_eq!(dto.validate(now()), Err(ValidationError::PastDateTime));

        dto.datetime = "2030-05-01T10:15:42".into();
        assert!(dto.validate(now()).is_ok());
    }

    #[test]
    fn test_image_media_type() {
        let image = ImageUpload {
            file_name: "cover.png".into(),
            content_type: "image/png".into(),
            bytes: vec![],
        };
        assert!(check_image(&image).is_ok());

        let pdf = ImageUpload {
            content_type: "application/pdf".into(),
            ..image
        };
        assert_eq!(check_image(&pdf), Err(ValidationError::InvalidImage));

        let mut dto = valid_dto();
        dto.image = Some(pdf);
        assert_eq!(dto.validate(now()).unwrap().image, None);
    }

    #[test]
    fn test_min_datetime_input_drops_seconds() {
        assert_eq!(min_datetime_input(now()), "2030-05-01T10:15");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::PastDateTime.to_string(),
            "Date & time cannot be in the past."
        );
        assert_eq!(
            ValidationError::MissingTitle.to_string(),
            "Please enter title (no special characters)."
        );
    }
}
