// src/services/access.rs
// DOCUMENTATION: Ownership-scoped resolution of photos and albums
// PURPOSE: Every edit, delete and detail lookup goes through `resolve`, so a
// record owned by someone else is indistinguishable from a missing one

use crate::errors::GalleryError;
use crate::models::{Album, Photo};

/// A record with a single owning user
pub trait Owned {
    /// Label used in not-found messages
    const KIND: &'static str;

    fn id(&self) -> i64;
    fn owner_id(&self) -> i64;
}

impl Owned for Photo {
    const KIND: &'static str = "Photo";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

impl Owned for Album {
    const KIND: &'static str = "Album";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> i64 {
        self.user_id
    }
}

/// Resolve a looked-up record against the requesting user
///
/// `requested_id` is the identifier from the request, used for the error
/// message so both failure paths produce the same text.
pub fn resolve<T: Owned>(
    found: Option<T>,
    requested_id: i64,
    user_id: i64,
) -> Result<T, GalleryError> {
    match found {
        Some(record) if record.owner_id() == user_id => Ok(record),
        Some(record) => {
            log::warn!(
                "User {} requested {} {} owned by user {}",
                user_id,
                T::KIND,
                record.id(),
                record.owner_id()
            );
            Err(not_found::<T>(requested_id))
        }
        None => Err(not_found::<T>(requested_id)),
    }
}

fn not_found<T: Owned>(id: i64) -> GalleryError {
    GalleryError::NotFound(format!("{} {}", T::KIND, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Publication;
    use chrono::Utc;

    fn photo(id: i64, user_id: i64) -> Photo {
        let now = Utc::now();
        Photo {
            id,
            user_id,
            title: format!("image{}", id),
            description: String::new(),
            published: Publication::Public,
            image: None,
            date_uploaded: now,
            date_modified: now,
            date_published: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_owner_gets_record() {
        let resolved = resolve(Some(photo(5, 1)), 5, 1).unwrap();
        assert_eq!(resolved.id, 5);
    }

    #[test]
    fn test_foreign_record_looks_missing() {
        let foreign = resolve(Some(photo(5, 2)), 5, 1).unwrap_err();
        let missing = resolve::<Photo>(None, 5, 1).unwrap_err();

        assert!(matches!(foreign, GalleryError::NotFound(_)));
        assert_eq!(foreign.to_string(), missing.to_string());
    }

    #[test]
    fn test_album_kind_in_message() {
        let err = resolve::<Album>(None, 42, 1).unwrap_err();
        assert_eq!(err.to_string(), "Album 42 not found");
    }
}
