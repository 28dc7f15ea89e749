//! Length unit conversions.

/// Twips per centimeter: 1440 twips per inch over 2.54 cm per inch.
pub const TWIPS_PER_CM: f64 = 566.9291338582677;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

/// Convert centimeters to twips.
///
/// Halves round toward positive infinity, so `-3.25` cm becomes `-1843`.
pub fn cm_to_twips(cm: f64) -> i32 {
    (cm * TWIPS_PER_CM + 0.5).floor() as i32
}

/// Convert inches to twips through [`cm_to_twips`].
pub fn inches_to_twips(inches: f64) -> i32 {
    cm_to_twips(inches * CM_PER_INCH)
}

/// Convert a point size to half-points.
pub fn points_to_half_points(points: u32) -> u32 {
    points * 2
}
