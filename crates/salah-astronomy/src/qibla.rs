//! Great-circle bearing toward the Kaaba.

use salah_types::Coordinates;

/// The Kaaba, Makkah.
pub const KAABA: (f64, f64) = (21.4225241, 39.8261818);

/// Initial bearing from `observer` to the Kaaba, degrees clockwise from
/// true north, normalized to [0, 360).
///
/// Standard spherical initial-bearing formula:
/// `atan2(sin Δλ, cos φ1 · tan φ2 − sin φ1 · cos Δλ)`.
pub fn qibla_bearing(observer: Coordinates) -> f64 {
    let phi1 = observer.latitude().to_radians();
    let phi2 = KAABA.0.to_radians();
    let delta_lambda = (KAABA.1 - observer.longitude()).to_radians();

    let bearing = delta_lambda
        .sin()
        .atan2(phi1.cos() * phi2.tan() - phi1.sin() * delta_lambda.cos())
        .to_degrees();
    bearing - 360.0 * (bearing / 360.0).floor()
}
