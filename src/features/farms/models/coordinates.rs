use serde::{Deserialize, Serialize};

use crate::features::farms::errors::FarmError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A validated latitude/longitude pair.
///
/// The two values only ever exist together, so a farm either has a full
/// position or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates", rename_all = "camelCase")]
pub struct GpsCoordinates {
    latitude: f64,
    longitude: f64,
}

impl GpsCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, FarmError> {
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(FarmError::invalid_argument(format!(
                "Latitude must be between {} and {}, got {}",
                MIN_LATITUDE, MAX_LATITUDE, latitude
            )));
        }

        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(FarmError::invalid_argument(format!(
                "Longitude must be between {} and {}, got {}",
                MIN_LONGITUDE, MAX_LONGITUDE, longitude
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Pair up two nullable columns. Exactly one being set is rejected.
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>, FarmError> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::new(lat, lon).map(Some),
            (None, None) => Ok(None),
            _ => Err(FarmError::invalid_argument(
                "Latitude and longitude must be set together",
            )),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for GpsCoordinates {
    type Error = FarmError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        GpsCoordinates::new(raw.latitude, raw.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_boundaries() {
        assert!(GpsCoordinates::new(90.0, 180.0).is_ok());
        assert!(GpsCoordinates::new(-90.0, -180.0).is_ok());
        assert!(GpsCoordinates::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            GpsCoordinates::new(91.0, 0.0),
            Err(FarmError::InvalidArgument(_))
        ));
        assert!(matches!(
            GpsCoordinates::new(0.0, 181.0),
            Err(FarmError::InvalidArgument(_))
        ));
        assert!(matches!(
            GpsCoordinates::new(-90.0001, 0.0),
            Err(FarmError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_nan() {
        assert!(GpsCoordinates::new(f64::NAN, 10.0).is_err());
        assert!(GpsCoordinates::new(10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_from_parts_requires_both_or_neither() {
        assert_eq!(GpsCoordinates::from_parts(None, None), Ok(None));
        assert!(GpsCoordinates::from_parts(Some(18.52), None).is_err());
        assert!(GpsCoordinates::from_parts(None, Some(73.85)).is_err());

        let coords = GpsCoordinates::from_parts(Some(18.5204), Some(73.8567))
            .unwrap()
            .unwrap();
        assert_eq!(coords.latitude(), 18.5204);
        assert_eq!(coords.longitude(), 73.8567);
    }

    #[test]
    fn test_deserialize_validates_range() {
        let ok: GpsCoordinates =
            serde_json::from_str(r#"{"latitude": 18.5204, "longitude": 73.8567}"#).unwrap();
        assert_eq!(ok.latitude(), 18.5204);

        let bad = serde_json::from_str::<GpsCoordinates>(r#"{"latitude": 95.0, "longitude": 0.0}"#);
        assert!(bad.is_err());
    }
}
