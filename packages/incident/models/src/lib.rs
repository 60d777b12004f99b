#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Normalized incident wire types shared between the server and the
//! heat-map client.
//!
//! An [`Incident`] is the minimal projection of an NYPD complaint record:
//! finite WGS84 coordinates plus a [`Severity`] label. The severity label
//! is carried verbatim from the upstream `law_cat_cd` field, so values
//! outside the enumerated legal categories survive the round trip
//! unchanged.

use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// NYPD legal category of an incident.
///
/// The three enumerated categories come from the upstream `law_cat_cd`
/// column. Records without a category normalize to [`Self::Unknown`];
/// any other upstream string (e.g. `"SUMMONS"`) is preserved verbatim in
/// [`Self::Other`] and treated like `Unknown` for rendering purposes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Severity {
    /// Most serious offenses.
    #[strum(serialize = "FELONY")]
    Felony,
    /// Mid-tier offenses.
    #[strum(serialize = "MISDEMEANOR")]
    Misdemeanor,
    /// Minor offenses.
    #[strum(serialize = "VIOLATION")]
    Violation,
    /// Upstream record carried no legal category.
    #[strum(serialize = "UNKNOWN")]
    Unknown,
    /// Non-enumerated upstream value, preserved verbatim.
    #[strum(default)]
    Other(String),
}

impl Severity {
    /// Builds a severity from the raw `law_cat_cd` field. Missing or
    /// empty values map to [`Self::Unknown`].
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some(c) if !c.is_empty() => c.parse().unwrap_or(Self::Unknown),
            _ => Self::Unknown,
        }
    }

    /// Returns the wire representation of this severity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Felony => "FELONY",
            Self::Misdemeanor => "MISDEMEANOR",
            Self::Violation => "VIOLATION",
            Self::Unknown => "UNKNOWN",
            Self::Other(s) => s,
        }
    }

    /// Heat-map weight for this severity, in `[0, 1]`.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        match self {
            Self::Felony => 1.0,
            Self::Misdemeanor => 0.7,
            Self::Violation => 0.4,
            Self::Unknown | Self::Other(_) => 0.5,
        }
    }

    /// Circle marker colour for this severity.
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Self::Felony => "#ff0000",
            Self::Misdemeanor => "#ffa500",
            Self::Violation => "#ffff00",
            Self::Unknown | Self::Other(_) => "#808080",
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// A single normalized crime incident.
///
/// Coordinates are guaranteed finite by the normalizer; the server never
/// emits an incident without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Legal category, verbatim from upstream.
    pub severity: Severity,
}

/// The two response shapes the crime endpoint may deliver.
///
/// Older deployments returned a bare JSON array; the current server
/// wraps the array in a `{"data": [...]}` object. The client accepts
/// both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CrimeDataEnvelope {
    /// `{"data": [...]}` object shape.
    Wrapped {
        /// The incident list.
        data: Vec<Incident>,
    },
    /// Bare `[...]` array shape.
    Bare(Vec<Incident>),
}

impl CrimeDataEnvelope {
    /// Unwraps either shape into the incident list, preserving order.
    #[must_use]
    pub fn into_incidents(self) -> Vec<Incident> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}
