use std::f64::consts::PI;

use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

/// (1 + cos z) / 2 on |z| <= π, zero outside.
#[derive(Debug, Clone)]
pub struct FullSinusoidal {
    parameters: WeightParameters
}

impl FullSinusoidal {
    pub fn new(y_optimum: f64, width: f64) -> FullSinusoidal {
        FullSinusoidal { parameters: WeightParameters::new(y_optimum, width) }
    }
}

impl Default for FullSinusoidal {
    fn default() -> FullSinusoidal {
        FullSinusoidal { parameters: WeightParameters::default() }
    }
}

impl ExposureWeight for FullSinusoidal {
    fn initialize(&mut self,
                  y_optimum: f64,
                  width: f64,
                  _arguments: &[String]) -> Result<(), InitializationError> {
        self.parameters = WeightParameters::validated(y_optimum, width)?;
        Ok(())
    }

    #[inline]
    fn weight(&self, y: f64) -> f64 {
        let z = self.parameters.normalize(y);
        if z.abs() <= PI {
            0.5 * (1.0 + z.cos())
        } else {
            0.0
        }
    }

    fn y_optimum(&self) -> f64 {
        self.parameters.y_optimum()
    }

    fn width(&self) -> f64 {
        self.parameters.width()
    }
}
