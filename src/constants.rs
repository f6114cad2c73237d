//! Physical constants and unit conversions shared by all pipeline stages.
//!
//! Every kernel reads these as plain module constants so the stages stay
//! pure functions with no ambient mutable configuration.

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth mean radius in meters
pub const EARTH_RADIUS_M: f64 = 6.371e6;

/// Surface gravitational acceleration (m/s²) used by the crater scaling law
pub const SURFACE_GRAVITY: f64 = 9.8;

/// Mean Earth-Moon distance in kilometers (one lunar distance)
pub const LUNAR_DISTANCE_KM: f64 = 384_400.0;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// J2000.0 epoch as Unix timestamp (January 1, 2000, 12:00 TT)
/// Note: This is approximate; TT differs from UTC by leap seconds
pub const J2000_UNIX: i64 = 946_728_000;

/// Default impactor bulk density (kg/m³), a stony asteroid
pub const DEFAULT_IMPACTOR_DENSITY: f64 = 3000.0;

/// Energy released by one megaton of TNT (J)
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Energy released by one kiloton of TNT (J)
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Kilometers per degree of latitude (spherical approximation)
pub const KM_PER_DEGREE: f64 = 111.32;

/// GMST polynomial: rotation angle at J2000 (degrees)
pub const GMST_AT_J2000_DEG: f64 = 280.461_618_37;

/// GMST polynomial: degrees of rotation per day since J2000
pub const GMST_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Sidereal rotation rate in degrees per hour of day
pub const ROTATION_DEG_PER_HOUR: f64 = 15.04107;

/// Pascals-to-PSI and PSI-to-kPa conversions for blast overpressure
pub const KPA_PER_PSI: f64 = 6.894_757;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Convert Unix timestamp to days since the J2000 epoch
pub fn unix_to_j2000_days(unix_timestamp: i64) -> f64 {
    (unix_timestamp - J2000_UNIX) as f64 / SECONDS_PER_DAY
}
