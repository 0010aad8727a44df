//! Show record, editable draft, and validation types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names one of the six show fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowField {
    /// Event title.
    Title,
    /// Event date, `DD/MM/YYYY`.
    Date,
    /// Event time, `HH:MM`.
    Time,
    /// City name.
    City,
    /// Venue street address.
    VenueAddress,
    /// Banner image reference.
    BannerImageRef,
}

impl ShowField {
    /// All fields in declaration order.
    pub const ALL: [ShowField; 6] = [
        ShowField::Title,
        ShowField::Date,
        ShowField::Time,
        ShowField::City,
        ShowField::VenueAddress,
        ShowField::BannerImageRef,
    ];

    /// Field name as used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Date => "date",
            Self::Time => "time",
            Self::City => "city",
            Self::VenueAddress => "venueAddress",
            Self::BannerImageRef => "bannerImageRef",
        }
    }
}

impl fmt::Display for ShowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Draft rejected because one or more fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("show is missing required fields: {}", join_fields(.missing))]
pub struct ValidationError {
    /// Empty fields, in declaration order.
    pub missing: Vec<ShowField>,
}

fn join_fields(fields: &[ShowField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Form state for a show; any field may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowDraft {
    /// Event title.
    pub title: String,
    /// Event date, `DD/MM/YYYY`.
    pub date: String,
    /// Event time, `HH:MM`.
    pub time: String,
    /// City name.
    pub city: String,
    /// Venue street address.
    pub venue_address: String,
    /// Banner image reference (local path or URI).
    pub banner_image_ref: String,
}

impl ShowDraft {
    /// Returns the value currently held for `field`.
    pub fn field(&self, field: ShowField) -> &str {
        match field {
            ShowField::Title => &self.title,
            ShowField::Date => &self.date,
            ShowField::Time => &self.time,
            ShowField::City => &self.city,
            ShowField::VenueAddress => &self.venue_address,
            ShowField::BannerImageRef => &self.banner_image_ref,
        }
    }

    /// Overwrites `field` with `value`.
    pub fn set(&mut self, field: ShowField, value: impl Into<String>) {
        let slot = match field {
            ShowField::Title => &mut self.title,
            ShowField::Date => &mut self.date,
            ShowField::Time => &mut self.time,
            ShowField::City => &mut self.city,
            ShowField::VenueAddress => &mut self.venue_address,
            ShowField::BannerImageRef => &mut self.banner_image_ref,
        };
        *slot = value.into();
    }

    /// Lists empty fields in declaration order.
    pub fn missing_fields(&self) -> Vec<ShowField> {
        ShowField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Returns true when every field is non-empty.
    pub fn is_complete(&self) -> bool {
        ShowField::ALL.iter().all(|f| !self.field(*f).is_empty())
    }

    /// Converts into a [`ShowRecord`] when every field is non-empty.
    pub fn validate(self) -> Result<ShowRecord, ValidationError> {
        ShowRecord::try_from(self)
    }
}

/// A complete show; every field is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ShowDraft")]
pub struct ShowRecord {
    title: String,
    date: String,
    time: String,
    city: String,
    venue_address: String,
    banner_image_ref: String,
}

impl TryFrom<ShowDraft> for ShowRecord {
    type Error = ValidationError;

    fn try_from(draft: ShowDraft) -> Result<Self, Self::Error> {
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        Ok(Self {
            title: draft.title,
            date: draft.date,
            time: draft.time,
            city: draft.city,
            venue_address: draft.venue_address,
            banner_image_ref: draft.banner_image_ref,
        })
    }
}

impl From<ShowRecord> for ShowDraft {
    fn from(rec: ShowRecord) -> Self {
        Self {
            title: rec.title,
            date: rec.date,
            time: rec.time,
            city: rec.city,
            venue_address: rec.venue_address,
            banner_image_ref: rec.banner_image_ref,
        }
    }
}

impl ShowRecord {
    /// Event title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Event date, `DD/MM/YYYY`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Event time, `HH:MM`.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// City name.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Venue street address.
    pub fn venue_address(&self) -> &str {
        &self.venue_address
    }

    /// Banner image reference.
    pub fn banner_image_ref(&self) -> &str {
        &self.banner_image_ref
    }

    /// Editable copy of this record.
    pub fn to_draft(&self) -> ShowDraft {
        ShowDraft::from(self.clone())
    }
}
