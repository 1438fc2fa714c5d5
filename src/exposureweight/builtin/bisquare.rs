use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

/// Tukey's biweight: (1 - z²)² on |z| <= 1, zero outside.
#[derive(Debug, Clone)]
pub struct Bisquare {
    parameters: WeightParameters
}

impl Bisquare {
    pub fn new(y_optimum: f64, width: f64) -> Bisquare {
        Bisquare { parameters: WeightParameters::new(y_optimum, width) }
    }
}

impl Default for Bisquare {
    fn default() -> Bisquare {
        Bisquare { parameters: WeightParameters::default() }
    }
}

impl ExposureWeight for Bisquare {
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
        if z.abs() <= 1.0 {
            let t = 1.0 - z * z;
            t * t
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
