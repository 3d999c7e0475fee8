use crate::air::atmosphere::{AtmosphereProfile, AtmosphereState};
use crate::errors::AtmosphereError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Pressure,
    Density,
    Temperature,
    Viscosity,
    SpeedOfSound,
}

impl Property {
    /// Plotting order of the relative-variation chart.
    pub const ALL: [Property; 5] = [
        Property::Pressure,
        Property::Density,
        Property::Temperature,
        Property::Viscosity,
        Property::SpeedOfSound,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Property::Pressure => "p",
            Property::Density => "rho",
            Property::Temperature => "T",
            Property::Viscosity => "mu",
            Property::SpeedOfSound => "a",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Property::Pressure => "Pa",
            Property::Density => "kg/m³",
            Property::Temperature => "K",
            Property::Viscosity => "Pa·s",
            Property::SpeedOfSound => "m/s",
        }
    }

    pub fn value(&self, state: &AtmosphereState) -> f64 {
        match self {
            Property::Pressure => state.pressure,
            Property::Density => state.density,
            Property::Temperature => state.temperature,
            Property::Viscosity => state.viscosity,
            Property::SpeedOfSound => state.speed_of_sound,
        }
    }
}

/// Atmospheric properties divided by their sea level values.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeVariation {
    pub sea_level: AtmosphereState,
    /// Dimensionless ratios to `sea_level`; only `altitude` stays in metres.
    pub rows: Vec<AtmosphereState>,
}

impl RelativeVariation {
    /// The profile must contain an altitude of exactly zero to normalize
    /// against.
    pub fn from_profile(profile: &AtmosphereProfile) -> Result<Self, AtmosphereError> {
        let sea_level = profile
            .states()
            .find(|state| state.altitude == 0.0)
            .ok_or_else(|| {
                AtmosphereError::ReportError("profile has no sea level altitude".to_string())
            })?;

        if !sea_level.is_defined() {
            return Err(AtmosphereError::ReportError(
                "sea level properties are undefined".to_string(),
            ));
        }

        let rows = profile
            .states()
            .map(|state| AtmosphereState {
                altitude: state.altitude,
                pressure: state.pressure / sea_level.pressure,
                temperature: state.temperature / sea_level.temperature,
                density: state.density / sea_level.density,
                speed_of_sound: state.speed_of_sound / sea_level.speed_of_sound,
                viscosity: state.viscosity / sea_level.viscosity,
            })
            .collect();

        Ok(RelativeVariation { sea_level, rows })
    }

    /// One chart series, aligned with [`altitudes`](Self::altitudes).
    pub fn series(&self, property: Property) -> Vec<f64> {
        self.rows.iter().map(|row| property.value(row)).collect()
    }

    pub fn altitudes(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.altitude).collect()
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude.abs() >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn format_table(&self) -> String {
        let mut table = format!("{:>10}", "altitude");
        for property in Property::ALL {
            table.push_str(&format!(" {:>8}", property.symbol()));
        }
        table.push('\n');

        for row in &self.rows {
            table.push_str(&format!("{:>10}", Self::format_altitude(row.altitude)));
            for property in Property::ALL {
                table.push_str(&format!(" {:>8.4}", property.value(row)));
            }
            table.push('\n');
        }
        table
    }

    pub fn format_sea_level(&self) -> String {
        Property::ALL
            .iter()
            .map(|property| {
                format!(
                    "{}: {:.6e} {}",
                    property.symbol(),
                    property.value(&self.sea_level),
                    property.unit()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn display(&self) {
        println!("--- Relative Variation of the Lower Standard Atmosphere ---");
        print!("{}", self.format_table());
        println!("\n--- Sea Level ---");
        println!("{}", self.format_sea_level());
    }
}
