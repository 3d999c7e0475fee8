use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AtmosphereError {
    #[error("Altitude {altitude} m is outside the modelled range [{min} m, {max} m]")]
    AltitudeOutOfRange { altitude: f64, min: f64, max: f64 },

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Report error: {0}")]
    ReportError(String),
}
