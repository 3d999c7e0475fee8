//! Lower International Standard Atmosphere, sea level to the top of the
//! isothermal stratosphere (Theory of Lift, listing 1.3).

use tracing::debug;

use crate::air::properties::{density, speed_of_sound, viscosity};
use crate::constants::{
    GAS_CONSTANT, LAPSE_RATE, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE, STANDARD_GRAVITY,
    STRATOSPHERE_TOP, TROPOPAUSE_ALTITUDE,
};
use crate::errors::AtmosphereError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Troposphere,
    Stratosphere,
}

impl Layer {
    /// The tropopause itself belongs to the troposphere. Anything above `top`,
    /// and NaN, has no layer.
    pub fn classify(altitude: f64, tropopause_altitude: f64, top_altitude: f64) -> Option<Layer> {
        if altitude <= tropopause_altitude {
            Some(Layer::Troposphere)
        } else if altitude <= top_altitude {
            Some(Layer::Stratosphere)
        } else {
            None
        }
    }
}

/// Properties of the atmosphere at a single altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereState {
    pub altitude: f64,       // m
    pub pressure: f64,       // Pa
    pub temperature: f64,    // K
    pub density: f64,        // kg/m³
    pub speed_of_sound: f64, // m/s
    pub viscosity: f64,      // Pa·s
}

impl AtmosphereState {
    pub fn new(altitude: f64, temperature: f64, pressure: f64) -> Self {
        AtmosphereState {
            altitude,
            pressure,
            temperature,
            density: density(temperature, pressure),
            speed_of_sound: speed_of_sound(temperature),
            viscosity: viscosity(temperature),
        }
    }

    pub fn is_defined(&self) -> bool {
        !(self.pressure.is_nan() || self.temperature.is_nan())
    }
}

/// Column-oriented atmospheric properties, index-aligned with the altitudes
/// they were computed for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtmosphereProfile {
    pub altitude: Vec<f64>,
    pub pressure: Vec<f64>,
    pub temperature: Vec<f64>,
    pub density: Vec<f64>,
    pub speed_of_sound: Vec<f64>,
    pub viscosity: Vec<f64>,
}

impl AtmosphereProfile {
    pub fn len(&self) -> usize {
        self.altitude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.altitude.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<AtmosphereState> {
        Some(AtmosphereState {
            altitude: *self.altitude.get(index)?,
            pressure: *self.pressure.get(index)?,
            temperature: *self.temperature.get(index)?,
            density: *self.density.get(index)?,
            speed_of_sound: *self.speed_of_sound.get(index)?,
            viscosity: *self.viscosity.get(index)?,
        })
    }

    pub fn states(&self) -> impl Iterator<Item = AtmosphereState> + '_ {
        (0..self.len()).filter_map(move |index| self.state(index))
    }

    /// Returns `(p, T, rho, a, mu)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            self.pressure,
            self.temperature,
            self.density,
            self.speed_of_sound,
            self.viscosity,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardAtmosphere {
    sea_level_temperature: f64,
    sea_level_pressure: f64,
    lapse_rate: f64,
    tropopause_altitude: f64,
    top_altitude: f64,
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        StandardAtmosphere {
            sea_level_temperature: SEA_LEVEL_TEMPERATURE,
            sea_level_pressure: SEA_LEVEL_PRESSURE,
            lapse_rate: LAPSE_RATE,
            tropopause_altitude: TROPOPAUSE_ALTITUDE,
            top_altitude: STRATOSPHERE_TOP,
        }
    }
}

impl StandardAtmosphere {
    pub fn new(
        sea_level_temperature: f64,
        sea_level_pressure: f64,
        lapse_rate: f64,
        tropopause_altitude: f64,
        top_altitude: f64,
    ) -> Result<Self, AtmosphereError> {
        if !(sea_level_temperature.is_finite() && sea_level_temperature > 0.0) {
            return Err(AtmosphereError::ConfigurationError(format!(
                "sea level temperature must be positive, got {} K",
                sea_level_temperature
            )));
        }
        if !(sea_level_pressure.is_finite() && sea_level_pressure > 0.0) {
            return Err(AtmosphereError::ConfigurationError(format!(
                "sea level pressure must be positive, got {} Pa",
                sea_level_pressure
            )));
        }
        if !(lapse_rate.is_finite() && lapse_rate > 0.0) {
            return Err(AtmosphereError::ConfigurationError(format!(
                "lapse rate must be positive, got {} K/m",
                lapse_rate
            )));
        }
        if !(tropopause_altitude > 0.0 && top_altitude > tropopause_altitude)
            || !top_altitude.is_finite()
        {
            return Err(AtmosphereError::ConfigurationError(format!(
                "layer altitudes must satisfy 0 < tropopause < top, got {} m and {} m",
                tropopause_altitude, top_altitude
            )));
        }

        let atmosphere = StandardAtmosphere {
            sea_level_temperature,
            sea_level_pressure,
            lapse_rate,
            tropopause_altitude,
            top_altitude,
        };

        if atmosphere.tropopause_temperature() <= 0.0 {
            return Err(AtmosphereError::ConfigurationError(format!(
                "lapse rate {} K/m cools below absolute zero before the tropopause",
                lapse_rate
            )));
        }

        Ok(atmosphere)
    }

    /// Standard layer structure with non-standard sea level conditions.
    pub fn with_sea_level(temperature: f64, pressure: f64) -> Result<Self, AtmosphereError> {
        Self::new(
            temperature,
            pressure,
            LAPSE_RATE,
            TROPOPAUSE_ALTITUDE,
            STRATOSPHERE_TOP,
        )
    }

    pub fn sea_level_temperature(&self) -> f64 {
        self.sea_level_temperature
    }

    pub fn sea_level_pressure(&self) -> f64 {
        self.sea_level_pressure
    }

    pub fn lapse_rate(&self) -> f64 {
        self.lapse_rate
    }

    pub fn tropopause_altitude(&self) -> f64 {
        self.tropopause_altitude
    }

    pub fn top_altitude(&self) -> f64 {
        self.top_altitude
    }

    pub fn layer(&self, altitude: f64) -> Option<Layer> {
        Layer::classify(altitude, self.tropopause_altitude, self.top_altitude)
    }

    pub fn tropopause_temperature(&self) -> f64 {
        self.troposphere_temperature(self.tropopause_altitude)
    }

    pub fn tropopause_pressure(&self) -> f64 {
        self.troposphere_pressure(self.tropopause_temperature())
    }

    fn troposphere_temperature(&self, altitude: f64) -> f64 {
        self.sea_level_temperature - self.lapse_rate * altitude
    }

    fn troposphere_pressure(&self, temperature: f64) -> f64 {
        let exponent = STANDARD_GRAVITY / self.lapse_rate / GAS_CONSTANT;
        self.sea_level_pressure * (temperature / self.sea_level_temperature).powf(exponent)
    }

    fn stratosphere_pressure(&self, altitude: f64) -> f64 {
        let scale = STANDARD_GRAVITY / GAS_CONSTANT / self.tropopause_temperature();
        self.tropopause_pressure() * (scale * (self.tropopause_altitude - altitude)).exp()
    }

    fn temperature_and_pressure(&self, altitude: f64) -> (f64, f64) {
        match self.layer(altitude) {
            Some(Layer::Troposphere) => {
                let temperature = self.troposphere_temperature(altitude);
                (temperature, self.troposphere_pressure(temperature))
            }
            Some(Layer::Stratosphere) => (
                self.tropopause_temperature(),
                self.stratosphere_pressure(altitude),
            ),
            None => (f64::NAN, f64::NAN),
        }
    }

    /// Temperature in K; NaN above the top of the model.
    pub fn temperature_at(&self, altitude: f64) -> f64 {
        self.temperature_and_pressure(altitude).0
    }

    /// Pressure in Pa; NaN above the top of the model.
    pub fn pressure_at(&self, altitude: f64) -> f64 {
        self.temperature_and_pressure(altitude).1
    }

    pub fn state_at(&self, altitude: f64) -> AtmosphereState {
        let (temperature, pressure) = self.temperature_and_pressure(altitude);
        AtmosphereState::new(altitude, temperature, pressure)
    }

    /// Evaluates every altitude, keeping the input order. Altitudes above the
    /// top of the model come back as NaN in every property; altitudes below
    /// sea level are extrapolated along the tropospheric lapse.
    pub fn profile(&self, altitudes: &[f64]) -> AtmosphereProfile {
        let (temperature, pressure): (Vec<f64>, Vec<f64>) = altitudes
            .iter()
            .map(|&altitude| self.temperature_and_pressure(altitude))
            .unzip();

        let density = temperature
            .iter()
            .zip(&pressure)
            .map(|(&t, &p)| density(t, p))
            .collect();
        let speed_of_sound = temperature.iter().map(|&t| speed_of_sound(t)).collect();
        let viscosity = temperature.iter().map(|&t| viscosity(t)).collect();

        let undefined = temperature.iter().filter(|t| t.is_nan()).count();
        debug!(
            points = altitudes.len(),
            undefined,
            top = self.top_altitude,
            "evaluated atmosphere profile"
        );

        AtmosphereProfile {
            altitude: altitudes.to_vec(),
            pressure,
            temperature,
            density,
            speed_of_sound,
            viscosity,
        }
    }

    /// Like [`profile`](Self::profile) but rejects the whole input if any
    /// altitude lies outside `[0, top]`.
    pub fn checked_profile(&self, altitudes: &[f64]) -> Result<AtmosphereProfile, AtmosphereError> {
        for &altitude in altitudes {
            self.check_altitude(altitude)?;
        }
        Ok(self.profile(altitudes))
    }

    fn check_altitude(&self, altitude: f64) -> Result<(), AtmosphereError> {
        if !altitude.is_finite() {
            return Err(AtmosphereError::DomainError(format!(
                "altitude must be finite, got {}",
                altitude
            )));
        }
        if altitude < 0.0 || altitude > self.top_altitude {
            return Err(AtmosphereError::AltitudeOutOfRange {
                altitude,
                min: 0.0,
                max: self.top_altitude,
            });
        }
        Ok(())
    }
}

/// Properties of the standard atmosphere at each altitude, in input order.
pub fn atmosphere(altitudes: &[f64]) -> AtmosphereProfile {
    StandardAtmosphere::default().profile(altitudes)
}

pub fn checked_atmosphere(altitudes: &[f64]) -> Result<AtmosphereProfile, AtmosphereError> {
    StandardAtmosphere::default().checked_profile(altitudes)
}
