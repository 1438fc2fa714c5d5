use std::f64::consts::FRAC_PI_2;

use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

/// cos(z) on |z| <= π/2, zero outside.
#[derive(Debug, Clone)]
pub struct HalfSinusoidal {
    parameters: WeightParameters
}

impl HalfSinusoidal {
    pub fn new(y_optimum: f64, width: f64) -> HalfSinusoidal {
        HalfSinusoidal { parameters: WeightParameters::new(y_optimum, width) }
    }
}

impl Default for HalfSinusoidal {
    fn default() -> HalfSinusoidal {
        HalfSinusoidal { parameters: WeightParameters::default() }
    }
}

impl ExposureWeight for HalfSinusoidal {
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
        if z.abs() <= FRAC_PI_2 {
            z.cos().max(0.0)
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
