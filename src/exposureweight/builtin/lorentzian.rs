use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

/// 1 / (1 + z²/2)
///
/// Heavier tails than [`super::gaussian::Gaussian`]; never reaches zero.
#[derive(Debug, Clone)]
pub struct Lorentzian {
    parameters: WeightParameters
}

impl Lorentzian {
    pub fn new(y_optimum: f64, width: f64) -> Lorentzian {
        Lorentzian { parameters: WeightParameters::new(y_optimum, width) }
    }
}

impl Default for Lorentzian {
    fn default() -> Lorentzian {
        Lorentzian { parameters: WeightParameters::default() }
    }
}

impl ExposureWeight for Lorentzian {
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
        1.0 / (1.0 + 0.5 * z * z)
    }

    fn y_optimum(&self) -> f64 {
        self.parameters.y_optimum()
    }

    fn width(&self) -> f64 {
        self.parameters.width()
    }
}
