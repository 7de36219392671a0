use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The media kind of a parked request. Immutable once the row is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    TvShow,
    Movie,
    Album,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::TvShow => write!(f, "tv"),
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::Album => write!(f, "album"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tv" => Ok(MediaKind::TvShow),
            "movie" => Ok(MediaKind::Movie),
            "album" => Ok(MediaKind::Album),
            other => Err(ModelError::InvalidKind(other.to_string())),
        }
    }
}

/// Why a request is parked in the fault queue.
///
/// `MissingInformation` rows may be reclassified to `TransientFailure` once
/// their metadata gap is filled but dispatch still fails; the reverse
/// transition never happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaultKind {
    /// The payload lacks a provider id the downstream backend requires.
    MissingInformation,
    /// Dispatch was attempted and the downstream call failed or was refused.
    TransientFailure,
}

impl Display for FaultKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::MissingInformation => write!(f, "missing-information"),
            FaultKind::TransientFailure => write!(f, "transient-failure"),
        }
    }
}

impl FromStr for FaultKind {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "missing-information" => Ok(FaultKind::MissingInformation),
            "transient-failure" => Ok(FaultKind::TransientFailure),
            other => Err(ModelError::InvalidKind(other.to_string())),
        }
    }
}
