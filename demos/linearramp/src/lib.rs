//! Tent-shaped exposure weight, loadable as
//! `{"name": "liblinearramp.so", "arguments": ["linear_ramp", "0.9"]}`.
//!
//! The optional argument scales the peak and must lie in (0, 1).

use expoweight::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

#[derive(Debug, Clone)]
pub struct LinearRamp {
    parameters: WeightParameters,
    peak: f64
}

impl Default for LinearRamp {
    fn default() -> LinearRamp {
        LinearRamp { parameters: WeightParameters::default(), peak: 0.99 }
    }
}

impl ExposureWeight for LinearRamp {
    fn initialize(&mut self,
                  y_optimum: f64,
                  width: f64,
                  arguments: &[String]) -> Result<(), InitializationError> {
        let peak = match arguments {
            [] => self.peak,
            [peak] => peak
                .parse::<f64>()
                .map_err(|error| InitializationError::new(format!("invalid peak \"{}\": {}", peak, error)))?,
            _ => return Err(InitializationError::new(
                format!("expected at most one argument, got {}", arguments.len())))
        };
        if !(peak > 0.0 && peak < 1.0) {
            return Err(InitializationError::new(format!("peak {} is outside of (0, 1)", peak)));
        }
        self.parameters = WeightParameters::validated(y_optimum, width)?;
        self.peak = peak;
        Ok(())
    }

    fn weight(&self, y: f64) -> f64 {
        let z = self.parameters.normalize(y).abs();
        if z < 1.0 { self.peak * (1.0 - z) } else { 0.0 }
    }

    fn y_optimum(&self) -> f64 {
        self.parameters.y_optimum()
    }

    fn width(&self) -> f64 {
        self.parameters.width()
    }
}

expoweight::declare_exposure_weight!(linear_ramp, LinearRamp);


#[cfg(test)]
mod tests {
    use expoweight::exposureweight::diagnostics::check_weight_function;
    use expoweight::exposureweight::dynamic::foreignweight::ForeignExposureWeight;

    use super::*;

    #[test]
    fn exported_factory_honours_the_peak_argument() {
        let mut function = unsafe { ForeignExposureWeight::from_factory(linear_ramp) };
        function.initialize(0.5, 0.25, &["0.8".to_string()]).unwrap();
        assert!((function.weight(0.5) - 0.8).abs() < 1e-12);
        assert!((function.weight(0.625) - 0.4).abs() < 1e-12);
        assert_eq!(function.weight(0.9), 0.0);
    }

    #[test]
    fn bad_arguments_are_reported() {
        let mut ramp = LinearRamp::default();
        assert!(ramp.initialize(0.5, 0.25, &["1.5".to_string()]).is_err());
        assert!(ramp.initialize(0.5, 0.25, &["x".to_string()]).is_err());
        assert!(ramp.initialize(0.5, 0.25, &["0.5".to_string(), "0.5".to_string()]).is_err());
        assert!(ramp.initialize(0.5, 0.25, &[]).is_ok());
    }

    #[test]
    fn stays_within_range() {
        let mut ramp = LinearRamp::default();
        ramp.initialize(0.5, 0.3, &[]).unwrap();
        assert!(check_weight_function(&ramp, 1000));
    }
}
