//! Bulk properties of dry air as functions of temperature.
//!
//! All three formulas share one domain policy: a temperature that is not
//! strictly positive (including NaN) yields `f64::NAN` rather than a panic
//! or a misleading finite value.

use crate::constants::{
    GAS_CONSTANT, SEA_LEVEL_PRESSURE, SPECIFIC_HEAT_RATIO, SUTHERLAND_COEFFICIENT,
    SUTHERLAND_TEMPERATURE,
};

fn is_valid_temperature(temperature: f64) -> bool {
    temperature > 0.0
}

/// Speed of sound in air, m/s, for a temperature in kelvins.
pub fn speed_of_sound(temperature: f64) -> f64 {
    if !is_valid_temperature(temperature) {
        return f64::NAN;
    }
    (SPECIFIC_HEAT_RATIO * temperature * GAS_CONSTANT).sqrt()
}

/// Dynamic viscosity of air, Pa·s, using the Sutherland approximation.
pub fn viscosity(temperature: f64) -> f64 {
    if !is_valid_temperature(temperature) {
        return f64::NAN;
    }
    SUTHERLAND_COEFFICIENT * temperature.sqrt() / (1.0 + SUTHERLAND_TEMPERATURE / temperature)
}

/// Density of air, kg/m³, from the ideal gas law.
pub fn density(temperature: f64, pressure: f64) -> f64 {
    if !is_valid_temperature(temperature) {
        return f64::NAN;
    }
    pressure / (GAS_CONSTANT * temperature)
}

/// Density at one standard atmosphere of pressure.
pub fn density_at_standard_pressure(temperature: f64) -> f64 {
    density(temperature, SEA_LEVEL_PRESSURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_speed_of_sound_at_sea_level() {
        let a = speed_of_sound(288.15);

        assert_relative_eq!(a, (1.4_f64 * 287.0 * 288.15).sqrt(), max_relative = EPSILON);
        assert_abs_diff_eq!(a, 340.26, epsilon = 0.01);
    }

    #[test]
    fn test_speed_of_sound_scales_with_root_temperature() {
        let ratio = speed_of_sound(4.0 * 216.65) / speed_of_sound(216.65);

        assert_relative_eq!(ratio, 2.0, max_relative = EPSILON);
    }

    #[test]
    fn test_viscosity_at_sea_level() {
        let mu = viscosity(288.15);

        let expected = 1.495e-6 * 288.15_f64.sqrt() / (1.0 + 120.0 / 288.15);
        assert_relative_eq!(mu, expected, max_relative = EPSILON);
        assert_abs_diff_eq!(mu, 1.79e-5, epsilon = 0.01e-5);
    }

    #[test]
    fn test_viscosity_decreases_with_temperature() {
        assert!(viscosity(216.65) < viscosity(288.15));
    }

    #[test]
    fn test_density_round_trip() {
        let temperature = 250.0;
        let pressure = 54_000.0;

        let rho = density(temperature, pressure);

        assert_relative_eq!(rho * GAS_CONSTANT * temperature, pressure, max_relative = EPSILON);
    }

    #[test]
    fn test_density_at_standard_pressure() {
        assert_abs_diff_eq!(density_at_standard_pressure(288.15), 1.225, epsilon = 1e-3);
        assert_relative_eq!(
            density_at_standard_pressure(300.0),
            density(300.0, SEA_LEVEL_PRESSURE),
            max_relative = EPSILON
        );
    }

    #[test]
    fn test_non_positive_temperature_is_nan() {
        for temperature in [0.0, -10.0, f64::NAN] {
            assert!(speed_of_sound(temperature).is_nan());
            assert!(viscosity(temperature).is_nan());
            assert!(density(temperature, SEA_LEVEL_PRESSURE).is_nan());
        }
    }
}
