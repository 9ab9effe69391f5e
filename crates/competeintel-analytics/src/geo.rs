//! Great-circle distance on a spherical Earth.

use competeintel_core::Coordinates;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two WGS-84 points, in kilometres.
///
/// Inputs must already be inside the latitude/longitude domain; that is
/// checked when a request is validated, not here.
#[must_use]
pub fn distance_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points.
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAO_PAULO: Coordinates = Coordinates {
        latitude: -23.550_5,
        longitude: -46.633_3,
    };
    const RIO: Coordinates = Coordinates {
        latitude: -22.906_8,
        longitude: -43.172_9,
    };

    #[test]
    fn same_point_is_zero() {
        assert!(distance_km(SAO_PAULO, SAO_PAULO).abs() < 1e-9);
    }

    #[test]
    fn sao_paulo_to_rio() {
        let d = distance_km(SAO_PAULO, RIO);
        assert!((355.0..=362.0).contains(&d), "got {d}");
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let a = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };
        let b = Coordinates {
            latitude: 1.0,
            longitude: 0.0,
        };
        assert!((distance_km(a, b) - 111.19).abs() < 0.01);
    }

    #[test]
    fn antipodes_are_half_the_circumference() {
        let a = Coordinates {
            latitude: 0.0,
            longitude: 0.0,
        };
        let b = Coordinates {
            latitude: 0.0,
            longitude: 180.0,
        };
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance_km(a, b) - half).abs() < 1e-6);
    }
}
