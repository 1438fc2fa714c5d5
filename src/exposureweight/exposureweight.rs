use thiserror::Error;

pub type ArgumentList = Vec<String>;

pub const DEFAULT_Y_OPTIMUM: f64 = 0.5;
pub const DEFAULT_WIDTH: f64 = 0.25;

/// Error raised by a weight function while it is being initialized.
///
/// Carries only a human-readable message; built-in and dynamically loaded
/// functions report through the same type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InitializationError {
    message: String,
}

impl InitializationError {
    pub fn new(message: impl Into<String>) -> InitializationError {
        InitializationError { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Maps a normalized luminance `y` in [0, 1] to a weight in [0, 1).
///
/// `weight` may be called concurrently from several threads on the same
/// instance, hence the `Send + Sync` supertraits.
pub trait ExposureWeight: Send + Sync {
    fn initialize(&mut self,
                  y_optimum: f64,
                  width: f64,
                  arguments: &[String]) -> Result<(), InitializationError>;

    fn weight(&self, y: f64) -> f64;

    fn y_optimum(&self) -> f64;

    fn width(&self) -> f64;
}

/// Location and width shared by all parametrized curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightParameters {
    y_optimum: f64,
    width: f64
}

impl WeightParameters {
    pub fn new(y_optimum: f64, width: f64) -> WeightParameters {
        WeightParameters { y_optimum, width }
    }

    pub fn y_optimum(&self) -> f64 {
        self.y_optimum
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Distance of `y` from the optimum in units of the width.
    #[inline]
    pub fn normalize(&self, y: f64) -> f64 {
        (y - self.y_optimum) / self.width
    }

    pub fn validated(y_optimum: f64, width: f64) -> Result<WeightParameters, InitializationError> {
        if !(0.0..=1.0).contains(&y_optimum) {
            return Err(InitializationError::new(
                format!("y_optimum {} is outside of [0, 1]", y_optimum)));
        }
        if !(width > 0.0) {
            return Err(InitializationError::new(
                format!("width {} is not positive", width)));
        }
        Ok(WeightParameters::new(y_optimum, width))
    }
}

impl Default for WeightParameters {
    fn default() -> WeightParameters {
        WeightParameters::new(DEFAULT_Y_OPTIMUM, DEFAULT_WIDTH)
    }
}
