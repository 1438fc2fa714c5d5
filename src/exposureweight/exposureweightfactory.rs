use tracing::debug;

use crate::exposureweight::builtin::builtinweighttype::BuiltInWeightType;
use crate::exposureweight::dynamic::dynamicexposureweight::DynamicExposureWeight;
use crate::exposureweight::dynamic::dynamicloader::LibraryLoader;
use crate::exposureweight::exposureweight::{
    ExposureWeight,
    WeightParameters
};
use crate::exposureweight::exposureweighterror::ExposureWeightError;


/// Turns a function name plus arguments into a weight function.
///
/// Built-in names always win; only unknown names reach the loader, and only
/// if this factory has one.
pub struct WeightFunctionFactory {
    loader: Option<Box<dyn LibraryLoader>>
}

impl WeightFunctionFactory {
    /// Loads shared objects through the platform loader when the crate is
    /// built with `dynamic-loading`.
    pub fn new() -> WeightFunctionFactory {
        #[cfg(feature = "dynamic-loading")]
        {
            use crate::exposureweight::dynamic::dynamicloader::SystemLoader;
            WeightFunctionFactory::with_loader(Box::new(SystemLoader::new()))
        }
        #[cfg(not(feature = "dynamic-loading"))]
        {
            WeightFunctionFactory::without_dynamic_loading()
        }
    }

    pub fn with_loader(loader: Box<dyn LibraryLoader>) -> WeightFunctionFactory {
        WeightFunctionFactory { loader: Some(loader) }
    }

    pub fn without_dynamic_loading() -> WeightFunctionFactory {
        WeightFunctionFactory { loader: None }
    }

    pub fn supports_dynamic_loading(&self) -> bool {
        self.loader.is_some()
    }

    pub fn make_weight_function(&self,
                                name: &str,
                                arguments: &[String],
                                y_optimum: f64,
                                width: f64) -> Result<Box<dyn ExposureWeight>, ExposureWeightError> {
        if let Some(weight_type) = BuiltInWeightType::from_name(name) {
            debug!(name, ?weight_type, "selected built-in exposure weight");
            return Ok(weight_type.generate(y_optimum, width));
        }

        match &self.loader {
            Some(loader) => {
                let function = make_dynamic_weight_function(loader.as_ref(), name, arguments, y_optimum, width)?;
                Ok(Box::new(function))
            },
            None => Err(ExposureWeightError::UnknownBuiltIn { name: name.to_owned() })
        }
    }
}

impl Default for WeightFunctionFactory {
    fn default() -> WeightFunctionFactory {
        WeightFunctionFactory::new()
    }
}


/// `make_weight_function` on a default [`WeightFunctionFactory`].
pub fn make_weight_function(name: &str,
                            arguments: &[String],
                            y_optimum: f64,
                            width: f64) -> Result<Box<dyn ExposureWeight>, ExposureWeightError> {
    WeightFunctionFactory::new().make_weight_function(name, arguments, y_optimum, width)
}

/// Loads `name` as a shared object and builds the weight function exported
/// under `arguments[0]`, initialized with the remaining arguments.
///
/// Nothing half-initialized escapes: if the plugin rejects its
/// initialization the proxy is dropped, unloading the library.
pub fn make_dynamic_weight_function(loader: &dyn LibraryLoader,
                                    name: &str,
                                    arguments: &[String],
                                    y_optimum: f64,
                                    width: f64) -> Result<DynamicExposureWeight, ExposureWeightError> {
    let (symbol_name, user_arguments) = arguments
        .split_first()
        .ok_or_else(|| ExposureWeightError::MissingSymbolName { library: name.to_owned() })?;
    if let Some(position) = user_arguments.iter().position(|argument| argument.contains('\0')) {
        return Err(ExposureWeightError::InvalidArgument {
            symbol: symbol_name.to_owned(),
            library: name.to_owned(),
            position: position + 1
        });
    }

    let mut function = DynamicExposureWeight::with_parameters(
        loader,
        name,
        symbol_name,
        WeightParameters::default())?;
    function
        .initialize(y_optimum, width, user_arguments)
        .map_err(|error| ExposureWeightError::Initialization {
            symbol: symbol_name.to_owned(),
            library: name.to_owned(),
            message: error.message().to_owned()
        })?;
    Ok(function)
}
