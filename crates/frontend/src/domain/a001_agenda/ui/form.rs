//! Add-agenda form state
//!
//! Text inputs are cleaned on every keystroke with the same rule the
//! validator applies, so what the operator sees is what gets submitted.

use contracts::domain::a001_agenda::validation::{
    check_image, clean_field, DESCRIPTION_MAX_LEN, LOCATION_MAX_LEN, TITLE_MAX_LEN,
};
use contracts::domain::a001_agenda::{AgendaDto, ImageUpload, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaFormState {
    pub title: String,
    pub description: String,
    pub datetime: String,
    pub location: String,
    pub image: Option<ImageUpload>,
}

impl AgendaFormState {
    pub fn set_title(&mut self, raw: &str) {
        self.title = clean_field(raw, TITLE_MAX_LEN);
    }

    pub fn set_description(&mut self, raw: &str) {
        self.description = clean_field(raw, DESCRIPTION_MAX_LEN);
    }

    pub fn set_location(&mut self, raw: &str) {
        self.location = clean_field(raw, LOCATION_MAX_LEN);
    }

    pub fn set_datetime(&mut self, raw: &str) {
        self.datetime = raw.to_string();
    }

    /// Pick (or clear) the image. A file whose media type is not `image/*`
    /// is refused and the selection cleared.
    pub fn select_image(&mut self, file: Option<ImageUpload>) -> Result<(), ValidationError> {
        match file {
            Some(image) => {
                if let Err(e) = check_image(&image) {
                    self.image = None;
                    return Err(e);
                }
                self.image = Some(image);
                Ok(())
            }
            None => {
                self.image = None;
                Ok(())
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_dto(&self) -> AgendaDto {
        AgendaDto {
            title: self.title.clone(),
            description: self.description.clone(),
            datetime: self.datetime.clone(),
            location: self.location.clone(),
            image: self.image.clone(),
        }
    }
}
