pub mod air;
pub mod constants;
pub mod errors;
pub mod report;
pub mod utils;

pub use constants::*;
pub use errors::AtmosphereError;

// Re-export commonly used items from air
pub use air::atmosphere::{
    atmosphere, checked_atmosphere, AtmosphereProfile, AtmosphereState, Layer,
    StandardAtmosphere,
};
pub use air::properties::{density, density_at_standard_pressure, speed_of_sound, viscosity};

// Re-export commonly used items from report
pub use report::relative_variation::{Property, RelativeVariation};

// Re-export commonly used utilities
pub use utils::linspace::linspace;
