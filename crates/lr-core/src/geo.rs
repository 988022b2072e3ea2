//! Geographic coordinate type and the distance/bearing/projection primitives
//! everything else is built on.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Route assembly sums thousands
//! of short hops into one cumulative distance and stop bracketing works at
//! sub-metre resolution, so single precision would leak visible error.

use crate::error::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Range-checked constructor for coordinates crossing the input boundary.
    ///
    /// # Errors
    ///
    /// `CoreError::CoordinateRange` when either component is non-finite or
    /// outside ±90° latitude / ±180° longitude.
    pub fn validated(lat: f64, lon: f64) -> CoreResult<Self> {
        if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
            return Err(CoreError::CoordinateRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, zero for identical points, spherical model (mean Earth
    /// radius) — the convention OSM tooling uses.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Initial great-circle bearing from `self` towards `other`, in degrees
    /// clockwise from north, normalised to `[0, 360)`.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Signed change between two bearings, in degrees within `[-180, 180)`.
/// Positive means a turn to the right, negative to the left.
#[inline]
pub fn bearing_change_deg(from_deg: f64, to_deg: f64) -> f64 {
    (to_deg - from_deg + 180.0).rem_euclid(360.0) - 180.0
}

// ── Cardinal directions ───────────────────────────────────────────────────────

/// Eight-wind compass direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardinalDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CardinalDirection {
    /// Nearest eight-wind direction for a bearing in degrees.  Accepts any
    /// finite value; the bearing is normalised to `[0, 360)` first.
    pub fn from_bearing_deg(bearing: f64) -> Self {
        use CardinalDirection::*;
        const WINDS: [CardinalDirection; 8] =
            [North, Northeast, East, Southeast, South, Southwest, West, Northwest];
        let idx = (bearing.rem_euclid(360.0) / 45.0).round() as usize % 8;
        WINDS[idx]
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            CardinalDirection::North => "N",
            CardinalDirection::Northeast => "NE",
            CardinalDirection::East => "E",
            CardinalDirection::Southeast => "SE",
            CardinalDirection::South => "S",
            CardinalDirection::Southwest => "SW",
            CardinalDirection::West => "W",
            CardinalDirection::Northwest => "NW",
        }
    }
}

impl std::fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

// ── Point-to-segment projection ───────────────────────────────────────────────

/// Result of projecting a query point onto one polyline segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentProjection {
    /// Closest point on the segment to the query.
    pub point: GeoPoint,
    /// Position of `point` between the endpoints, clamped to `[0, 1]`.
    pub fraction: f64,
    /// Great-circle distance from the query to `point`, metres.
    pub offset_m: f64,
}

/// Project `query` onto the segment `start`..`end`.
///
/// Uses the equirectangular approximation (longitude scaled by the cosine of
/// the mean latitude) to find the perpendicular foot, which is accurate at
/// the short spans between adjacent OSM nodes.  Not suitable for long chords;
/// those would need spherical cross-track formulas.
///
/// The fraction is clamped to `[0, 1]`, so the closest point may be an
/// endpoint.  A zero-length segment yields fraction `0` and the plain
/// distance from `query` to `start`.
pub fn project_onto_segment(query: GeoPoint, start: GeoPoint, end: GeoPoint) -> SegmentProjection {
    let k = ((start.lat + end.lat) * 0.5).to_radians().cos();

    let dx = (end.lon - start.lon) * k;
    let dy = end.lat - start.lat;
    let len2 = dx * dx + dy * dy;

    if len2 == 0.0 {
        return SegmentProjection {
            point: start,
            fraction: 0.0,
            offset_m: query.distance_m(start),
        };
    }

    let qx = (query.lon - start.lon) * k;
    let qy = query.lat - start.lat;

    let fraction = ((qx * dx + qy * dy) / len2).clamp(0.0, 1.0);

    // Interpolating in raw degrees matches interpolating in the scaled plane:
    // the scaling is per-axis linear, so the parameter carries over.
    let point = GeoPoint {
        lat: start.lat + fraction * (end.lat - start.lat),
        lon: start.lon + fraction * (end.lon - start.lon),
    };

    SegmentProjection {
        point,
        fraction,
        offset_m: query.distance_m(point),
    }
}
