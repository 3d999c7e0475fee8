pub mod atmosphere;
pub mod properties;
