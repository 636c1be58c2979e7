//! Great-circle distance between two fixes.

use micromath::F32Ext;

use crate::state::LocationFix;

/// Mean Earth radius used by the receiver-side geodesy, meters.
const EARTH_RADIUS_M: f32 = 6_372_795.0;

/// Haversine distance in meters over a spherical Earth. Pure function, no
/// shared-state interaction. Accuracy is bounded by `micromath`'s trig
/// approximations (a few percent), which is plenty for geofencing and
/// travelled-distance sums.
pub fn distance(from: LocationFix, to: LocationFix) -> f32 {
    // micromath's sine is a few ulps off at the nodes, so identical fixes
    // would otherwise come out meters apart instead of exactly zero.
    if from == to {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();
    let a = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: LocationFix = LocationFix { lat: 37.7749, lon: -122.4194 };
    const LA: LocationFix = LocationFix { lat: 34.0522, lon: -118.2437 };

    #[test]
    fn zero_for_identical_points() {
        assert_eq!(distance(SF, SF), 0.0);
        let origin = LocationFix::default();
        assert_eq!(distance(origin, origin), 0.0);
    }

    #[test]
    fn symmetric() {
        let ab = distance(SF, LA);
        let ba = distance(LA, SF);
        assert!((ab - ba).abs() < 1.0, "{} vs {}", ab, ba);
    }

    #[test]
    fn known_distance_sanity() {
        // SF to LA is ~559 km; allow for micromath trig error.
        let d = distance(SF, LA);
        assert!((500_000.0..620_000.0).contains(&d), "got {} m", d);
    }
}
