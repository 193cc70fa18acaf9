use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{COORDINATE_PRECISE_PRECISION, COORDINATE_SHORT_PRECISION};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// "lat, lng" with 4 decimals, as shown on an alert card.
    pub fn display_short(&self) -> String {
        format!(
            "{:.p$}, {:.p$}",
            self.lat,
            self.lng,
            p = COORDINATE_SHORT_PRECISION
        )
    }

    /// "lat, lng" with 6 decimals, as shown in the location details.
    pub fn display_precise(&self) -> String {
        format!(
            "{:.p$}, {:.p$}",
            self.lat,
            self.lng,
            p = COORDINATE_PRECISE_PRECISION
        )
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_short())
    }
}
