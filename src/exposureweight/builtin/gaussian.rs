use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

/// exp(-z²/2)
#[derive(Debug, Clone)]
pub struct Gaussian {
    parameters: WeightParameters
}

impl Gaussian {
    pub fn new(y_optimum: f64, width: f64) -> Gaussian {
        Gaussian { parameters: WeightParameters::new(y_optimum, width) }
    }
}

impl Default for Gaussian {
    fn default() -> Gaussian {
        Gaussian { parameters: WeightParameters::default() }
    }
}

impl ExposureWeight for Gaussian {
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
        (-0.5 * z * z).exp()
    }

    fn y_optimum(&self) -> f64 {
        self.parameters.y_optimum()
    }

    fn width(&self) -> f64 {
        self.parameters.width()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_at_optimum_and_is_symmetric() {
        let gaussian = Gaussian::new(0.4, 0.1);
        assert_eq!(gaussian.weight(0.4), 1.0);
        let left = gaussian.weight(0.3);
        let right = gaussian.weight(0.5);
        assert!((left - right).abs() < 1e-12);
        assert!((left - (-0.5_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn initialize_replaces_parameters() {
        let mut gaussian = Gaussian::default();
        gaussian.initialize(0.7, 0.3, &[]).unwrap();
        assert_eq!(gaussian.y_optimum(), 0.7);
        assert_eq!(gaussian.width(), 0.3);
        assert!(gaussian.initialize(0.7, -1.0, &[]).is_err());
        assert_eq!(gaussian.width(), 0.3);
    }
}
