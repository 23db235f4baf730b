//! Venue configuration and runtime settings.
//!
//! A venue document (JSON) describes one screen: its show times, seat groups
//! and pricing constants. Runtime settings come from environment variables
//! with sensible defaults and may point at a different venue document or
//! override individual pricing values.

use crate::catalog::Catalog;
use crate::error::{ConfigError, LoadError};
use crate::pricing::{FeeRate, PricingPolicy};
use crate::types::{SeatGroupSpec, TicketCount};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Venue document shipped with the crate
const BUNDLED_VENUE: &str = include_str!("../venues/orion-mall.json");

/// How full a show is, as advertised on the show-time strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShowAvailability {
    /// Plenty of seats
    Available,
    /// Selling quickly
    FastFilling,
    /// Nearly sold out
    AlmostFull,
}

/// One screening of the title
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowTime {
    /// Stable identifier (e.g. `"19:00"`)
    pub id: String,
    /// Local start time
    pub starts_at: NaiveTime,
    /// Language and format (e.g. `Kannada • 2D`)
    #[serde(default)]
    pub format_tag: String,
    /// Advertised availability
    pub availability: ShowAvailability,
}

/// A screen, its show times and its seat layout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueConfig {
    /// Cinema and screen name
    pub venue: String,
    /// Title being shown
    pub title: String,
    /// Date of the listed shows
    pub show_date: NaiveDate,
    /// Show times in display order
    #[serde(default)]
    pub shows: Vec<ShowTime>,
    /// Seat groups in display order
    pub groups: Vec<SeatGroupSpec>,
    /// Pricing constants
    #[serde(default)]
    pub pricing: PricingPolicy,
    /// Ticket cap a fresh session starts with
    #[serde(default)]
    pub default_ticket_count: TicketCount,
}

impl VenueConfig {
    /// Parse and validate a venue document
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if the document is malformed and
    /// [`LoadError::Config`] if it fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a venue document from disk
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read, otherwise the
    /// errors of [`VenueConfig::from_json_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Venue document read");
        Self::from_json_str(&json)
    }

    /// The venue document shipped with the crate
    ///
    /// # Errors
    ///
    /// Same as [`VenueConfig::from_json_str`].
    pub fn bundled() -> Result<Self, LoadError> {
        Self::from_json_str(BUNDLED_VENUE)
    }

    /// Check the parts of the document the catalog builder does not cover
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyShowId`] or [`ConfigError::DuplicateShowId`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for show in &self.shows {
            if show.id.trim().is_empty() {
                return Err(ConfigError::EmptyShowId);
            }
            if !seen.insert(show.id.as_str()) {
                return Err(ConfigError::DuplicateShowId(show.id.clone()));
            }
        }
        Ok(())
    }

    /// Build the seat catalog described by this venue
    ///
    /// # Errors
    ///
    /// Propagates [`Catalog::build`] errors.
    pub fn build_catalog(&self) -> Result<Catalog, ConfigError> {
        Catalog::build(&self.groups)
    }

    /// Look up a show time by identifier
    #[must_use]
    pub fn show(&self, id: &str) -> Option<&ShowTime> {
        self.shows.iter().find(|show| show.id == id)
    }
}

/// Runtime settings loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatingSettings {
    /// Venue document to load instead of the bundled one (`SEATING_LAYOUT_PATH`)
    pub layout_path: Option<PathBuf>,
    /// Convenience fee override in basis points (`SEATING_FEE_RATE_BPS`)
    pub fee_rate_bps: Option<u32>,
    /// Starting ticket cap override (`SEATING_DEFAULT_TICKETS`)
    pub default_ticket_count: Option<u32>,
}

impl SeatingSettings {
    /// Load settings from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup
    ///
    /// Values that are present but do not parse are ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            layout_path: lookup("SEATING_LAYOUT_PATH")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            fee_rate_bps: lookup("SEATING_FEE_RATE_BPS").and_then(|s| s.trim().parse().ok()),
            default_ticket_count: lookup("SEATING_DEFAULT_TICKETS")
                .and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Load the configured venue and apply the overrides
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the venue cannot be loaded or an override
    /// ticket count is zero.
    pub fn load_venue(&self) -> Result<VenueConfig, LoadError> {
        let mut venue = match &self.layout_path {
            Some(path) => VenueConfig::from_file(path)?,
            None => VenueConfig::bundled()?,
        };

        if let Some(bps) = self.fee_rate_bps {
            venue.pricing.fee_rate = FeeRate::from_basis_points(bps);
        }
        if let Some(count) = self.default_ticket_count {
            venue.default_ticket_count = TicketCount::new(count)?;
        }

        tracing::info!(
            venue = %venue.venue,
            shows = venue.shows.len(),
            groups = venue.groups.len(),
            fee_rate = %venue.pricing.fee_rate,
            default_tickets = %venue.default_ticket_count,
            "Venue configuration loaded"
        );
        Ok(venue)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests can unwrap
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SMALL_VENUE: &str = r#"{
        "venue": "Test Screen",
        "title": "Test Title",
        "showDate": "2025-11-21",
        "shows": [
            {"id": "a", "startsAt": "10:00:00", "availability": "available"},
            {"id": "b", "startsAt": "13:00:00", "availability": "fast-filling"}
        ],
        "groups": [
            {"key": "prime", "label": "Prime", "price": 210,
             "rows": [{"row": "M", "seats": 4, "sold": [1]}]}
        ]
    }"#;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn bundled_venue_loads() {
        let venue = VenueConfig::bundled().unwrap();

        assert_eq!(venue.shows.len(), 4);
        assert_eq!(venue.groups.len(), 4);
        assert_eq!(venue.default_ticket_count.get(), 2);
        assert_eq!(venue.pricing, PricingPolicy::default());
        assert_eq!(
            venue.show("19:00").unwrap().availability,
            ShowAvailability::FastFilling
        );
        assert!(venue.build_catalog().is_ok());
    }

    #[test]
    fn defaults_apply_to_missing_fields() {
        let venue = VenueConfig::from_json_str(SMALL_VENUE).unwrap();

        assert_eq!(venue.default_ticket_count, TicketCount::DEFAULT);
        assert_eq!(venue.pricing, PricingPolicy::default());
        assert_eq!(venue.shows[0].format_tag, "");
        assert_eq!(
            venue.shows[1].starts_at,
            NaiveTime::from_hms_opt(13, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_duplicate_show_ids() {
        let json = SMALL_VENUE.replace(r#""id": "b""#, r#""id": "a""#);

        let error = VenueConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(
            error,
            LoadError::Config(ConfigError::DuplicateShowId(ref id)) if id == "a"
        ));
    }

    #[test]
    fn rejects_blank_show_id() {
        let json = SMALL_VENUE.replace(r#""id": "b""#, r#""id": "  ""#);

        assert!(matches!(
            VenueConfig::from_json_str(&json),
            Err(LoadError::Config(ConfigError::EmptyShowId))
        ));
    }

    #[test]
    fn rejects_zero_default_ticket_count() {
        let json = SMALL_VENUE.replace(
            r#""venue": "Test Screen","#,
            r#""venue": "Test Screen", "defaultTicketCount": 0,"#,
        );

        assert!(matches!(
            VenueConfig::from_json_str(&json),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let error = VenueConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(error, LoadError::Io { .. }));
    }

    #[test]
    fn settings_parse_and_ignore_garbage() {
        let settings = SeatingSettings::from_lookup(lookup(&[
            ("SEATING_FEE_RATE_BPS", " 1000 "),
            ("SEATING_DEFAULT_TICKETS", "lots"),
            ("SEATING_LAYOUT_PATH", ""),
        ]));

        assert_eq!(
            settings,
            SeatingSettings {
                layout_path: None,
                fee_rate_bps: Some(1000),
                default_ticket_count: None,
            }
        );
    }

    #[test]
    fn settings_override_bundled_venue() {
        let settings = SeatingSettings::from_lookup(lookup(&[
            ("SEATING_FEE_RATE_BPS", "1000"),
            ("SEATING_DEFAULT_TICKETS", "4"),
        ]));

        let venue = settings.load_venue().unwrap();
        assert_eq!(venue.pricing.fee_rate.basis_points(), 1000);
        assert_eq!(venue.default_ticket_count.get(), 4);
    }

    #[test]
    fn zero_ticket_override_is_rejected() {
        let settings = SeatingSettings {
            default_ticket_count: Some(0),
            ..SeatingSettings::default()
        };

        assert!(matches!(
            settings.load_venue(),
            Err(LoadError::Config(ConfigError::InvalidTicketCount(0)))
        ));
    }
}
