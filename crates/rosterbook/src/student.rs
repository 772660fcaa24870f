//! Core record types for rosterbook.
//!
//! This module defines the student record held by the roster store and the
//! patch type used for shallow-merge edits.

use serde::{Deserialize, Serialize};

/// A single student record.
///
/// Serialized field names and order mirror the on-disk snapshot layout, so a
/// stored record reads as `{image, id, firstName, lastName, gradYear, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Opaque reference to a display asset.
    pub image: String,

    /// Unique identifier, generated once at creation and immutable after.
    /// The sole equality key for edits and deletes.
    pub id: String,

    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Graduation year.
    pub grad_year: i32,

    /// Contact email. The store enforces no format on this.
    pub email: String,
}

impl StudentRecord {
    /// Create a new record with a freshly generated unique id.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        grad_year: i32,
        image: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            id: uuid::Uuid::new_v4().to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            grad_year,
            email: email.into(),
        }
    }

    /// Full display name, given name first.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A shallow-merge edit addressed to one record by id.
///
/// `None` fields are retained from the original record. The image reference
/// is not part of a patch; it is always carried over unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    /// Id of the record to edit.
    pub id: String,

    /// Replacement given name, if any.
    pub first_name: Option<String>,

    /// Replacement family name, if any.
    pub last_name: Option<String>,

    /// Replacement email, if any.
    pub email: Option<String>,

    /// Replacement graduation year, if any.
    pub grad_year: Option<i32>,
}

impl StudentPatch {
    /// Create an empty patch addressed to the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Check whether the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.grad_year.is_none()
    }

    /// Apply this patch to a record, overriding only the fields present.
    pub fn apply(&self, record: &mut StudentRecord) {
        if let Some(first_name) = &self.first_name {
            record.first_name.clone_from(first_name);
        }
        if let Some(last_name) = &self.last_name {
            record.last_name.clone_from(last_name);
        }
        if let Some(email) = &self.email {
            record.email.clone_from(email);
        }
        if let Some(grad_year) = self.grad_year {
            record.grad_year = grad_year;
        }
    }
}
