use tracing::info;

use crate::exposureweight::dynamic::dynamicloader::{
    LibraryHandle,
    LibraryLoader,
    LoadError
};
use crate::exposureweight::dynamic::foreignweight::ForeignExposureWeight;
use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError,
    WeightParameters
};

/// Weight function living in a shared object.
///
/// All calls are forwarded unchanged; results are neither checked nor
/// clamped, see `check_weight_function` for that.
pub struct DynamicExposureWeight {
    // Declaration order is drop order: the foreign object must be destroyed
    // while its library is still mapped.
    function: ForeignExposureWeight,
    library: Box<dyn LibraryHandle>,
    symbol: String,
    parameters: WeightParameters
}

impl DynamicExposureWeight {
    pub fn new(loader: &dyn LibraryLoader,
               library_name: &str,
               symbol_name: &str) -> Result<DynamicExposureWeight, LoadError> {
        Self::with_parameters(loader, library_name, symbol_name, WeightParameters::default())
    }

    pub fn with_parameters(loader: &dyn LibraryLoader,
                           library_name: &str,
                           symbol_name: &str,
                           parameters: WeightParameters) -> Result<DynamicExposureWeight, LoadError> {
        let library = loader.load(library_name)?;
        let factory = library.resolve_factory(symbol_name)?;
        // SAFETY: `library` is stored next to the object and outlives it.
        let function = unsafe { ForeignExposureWeight::from_factory(factory) };
        Ok(DynamicExposureWeight {
            function,
            library,
            symbol: symbol_name.to_owned(),
            parameters
        })
    }

    pub fn library_name(&self) -> &str {
        self.library.name()
    }

    pub fn symbol_name(&self) -> &str {
        &self.symbol
    }
}

impl ExposureWeight for DynamicExposureWeight {
    fn initialize(&mut self,
                  y_optimum: f64,
                  width: f64,
                  arguments: &[String]) -> Result<(), InitializationError> {
        info!(library = self.library.name(),
              symbol = %self.symbol,
              y_optimum,
              width,
              arguments = arguments.len(),
              "initializing dynamic exposure weight");
        self.function.initialize(y_optimum, width, arguments)?;
        self.parameters = WeightParameters::new(y_optimum, width);
        Ok(())
    }

    #[inline]
    fn weight(&self, y: f64) -> f64 {
        self.function.weight(y)
    }

    fn y_optimum(&self) -> f64 {
        self.parameters.y_optimum()
    }

    fn width(&self) -> f64 {
        self.parameters.width()
    }
}
