// src/models/publication.rs

use serde::{Deserialize, Serialize};

/// Visibility of a photo or album
/// Stored as the `publication_state` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "publication_state")]
pub enum Publication {
    #[default]
    Public,
    Private,
    Shared,
}

impl Publication {
    pub const ALL: [Publication; 3] = [Publication::Public, Publication::Private, Publication::Shared];

    pub fn as_str(&self) -> &'static str {
        match self {
            Publication::Public => "Public",
            Publication::Private => "Private",
            Publication::Shared => "Shared",
        }
    }

    /// Whether saving in this state stamps `date_published`
    pub fn stamps_publish_date(&self) -> bool {
        matches!(self, Publication::Public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_public() {
        assert_eq!(Publication::default(), Publication::Public);
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Publication::Shared).unwrap();
        assert_eq!(json, "\"Shared\"");

        let parsed: Publication = serde_json::from_str("\"Private\"").unwrap();
        assert_eq!(parsed, Publication::Private);
        assert!(serde_json::from_str::<Publication>("\"Hidden\"").is_err());
    }

    #[test]
    fn test_only_public_stamps_publish_date() {
        let stamping: Vec<_> = Publication::ALL
            .iter()
            .filter(|p| p.stamps_publish_date())
            .collect();
        assert_eq!(stamping, vec![&Publication::Public]);
    }
}
