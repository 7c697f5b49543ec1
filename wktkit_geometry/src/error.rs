//! Defines [`WktError`], the reason a geometry could not be read or written.

use thiserror::Error;

/// Every way a WKT parse or write can fail.
///
/// Parsers never panic on bad text; they return one of these. Callers that only care
/// whether a geometry is present can use `.ok()`, while [`WktError::is_absent`] tells
/// "no geometry at all" apart from "a geometry that is broken".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WktError {
	/// The input was empty or missing.
	#[error("no geometry given")]
	Absent,

	/// The text does not follow the grammar of the requested geometry kind.
	#[error("malformed {kind}: {reason}")]
	Malformed { kind: &'static str, reason: String },

	/// A coordinate token is not a finite decimal number.
	#[error("coordinate value '{0}' is not a finite decimal number")]
	NonNumericCoordinate(String),

	/// A parsed coordinate lies outside of `[-180, 180]` x `[-90, 90]`.
	#[error("coordinate (lng {lng}, lat {lat}) is out of range")]
	OutOfRange { lng: f64, lat: f64 },

	/// A geometry violates a structural precondition, e.g. a polygon with too few points.
	#[error("invalid geometry: {0}")]
	InvalidGeometry(String),
}

impl WktError {
	pub(crate) fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
		WktError::Malformed {
			kind,
			reason: reason.into(),
		}
	}

	pub(crate) fn invalid(reason: impl Into<String>) -> Self {
		WktError::InvalidGeometry(reason.into())
	}

	/// Returns `true` if there was no geometry to read, as opposed to a broken one.
	pub fn is_absent(&self) -> bool {
		matches!(self, WktError::Absent)
	}
}

/// Crate-specific result type.
pub type WktResult<T> = Result<T, WktError>;
