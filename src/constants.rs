// Gas Properties
pub const GAS_CONSTANT: f64 = 287.0; // J/(kg·K)
pub const SPECIFIC_HEAT_RATIO: f64 = 7.0 / 5.0; // cp/cv

// Sea Level Conditions
pub const SEA_LEVEL_TEMPERATURE: f64 = 15.0 + 273.15; // K
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa (one standard atmosphere)
pub const STANDARD_GRAVITY: f64 = 9.806_65; // m/s²

// Layer Structure
pub const LAPSE_RATE: f64 = 6.5e-3; // K per meter
pub const TROPOPAUSE_ALTITUDE: f64 = 11_000.0; // m
pub const STRATOSPHERE_TOP: f64 = 20_000.0; // m

// Sutherland's Law (Theory of Lift, listing 1.2)
pub const SUTHERLAND_COEFFICIENT: f64 = 1.495e-6; // Pa·s/√K
pub const SUTHERLAND_TEMPERATURE: f64 = 120.0; // K

// Reporting
pub const DEFAULT_PROFILE_POINTS: usize = 50;
