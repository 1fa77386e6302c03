use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Pune city center, used to anchor the map.
pub const CITY_CENTER: Coordinate = Coordinate::new(18.5204, 73.8567);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_field_names() {
        let json = serde_json::to_string(&CITY_CENTER).unwrap();
        assert_eq!(json, r#"{"lat":18.5204,"lng":73.8567}"#);
    }
}
