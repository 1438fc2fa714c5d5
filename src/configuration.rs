use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::configurationerror::ConfigurationError;
use crate::exposureweight::exposureweight::{
    DEFAULT_Y_OPTIMUM,
    ExposureWeight
};
use crate::exposureweight::exposureweightfactory::WeightFunctionFactory;

/// Width applied when a configuration names a function but no width;
/// narrower than `DEFAULT_WIDTH` to match enfuse.
pub const CONFIGURED_DEFAULT_WIDTH: f64 = 0.2;

fn default_y_optimum() -> f64 {
    DEFAULT_Y_OPTIMUM
}

fn default_width() -> f64 {
    CONFIGURED_DEFAULT_WIDTH
}

/// Requested weight function: a built-in name, or a shared object whose
/// first argument names the exported symbol.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExposureWeightSettings {
    name: String,
    #[serde(default)]
    arguments: Vec<String>,
    #[serde(default = "default_y_optimum")]
    y_optimum: f64,
    #[serde(default = "default_width")]
    width: f64
}

impl ExposureWeightSettings {
    pub fn new(name: String, arguments: Vec<String>, y_optimum: f64, width: f64) -> ExposureWeightSettings {
        ExposureWeightSettings { name, arguments, y_optimum, width }
    }

    pub fn built_in(name: &str) -> ExposureWeightSettings {
        ExposureWeightSettings::new(name.to_owned(), Vec::new(), default_y_optimum(), default_width())
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn arguments(&self) -> &Vec<String> {
        &self.arguments
    }

    pub fn y_optimum(&self) -> f64 {
        self.y_optimum
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    exposure_weight: ExposureWeightSettings,
    #[serde(default)]
    dump_samples: Option<usize>,
    #[serde(default)]
    check_samples: Option<usize>
}

fn validate_sample_count(field: &'static str, count: Option<usize>) -> Result<(), ConfigurationError> {
    match count {
        Some(count) if count < 2 => Err(ConfigurationError::InvalidSampleCount { field, count }),
        _ => Ok(())
    }
}


/// Owns the current exposure weight function.
///
/// At most one function is installed at a time; installing a new one drops
/// the previous instance first, which for a shared object also unloads it.
pub struct Configuration {
    factory: WeightFunctionFactory,
    exposure_weight: Option<Box<dyn ExposureWeight>>,
    exposure_weight_id: Option<Uuid>,
    settings: Option<ExposureWeightSettings>,
    dump_samples: Option<usize>,
    check_samples: Option<usize>
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::with_factory(WeightFunctionFactory::new())
    }

    pub fn with_factory(factory: WeightFunctionFactory) -> Configuration {
        Configuration {
            factory,
            exposure_weight: None,
            exposure_weight_id: None,
            settings: None,
            dump_samples: None,
            check_samples: None
        }
    }

    pub fn exposure_weight(&self) -> Option<&dyn ExposureWeight> {
        self.exposure_weight.as_deref()
    }

    /// Changes whenever a new function is installed.
    pub fn exposure_weight_id(&self) -> Option<&Uuid> {
        self.exposure_weight_id.as_ref()
    }

    pub fn settings(&self) -> Option<&ExposureWeightSettings> {
        self.settings.as_ref()
    }

    pub fn dump_samples(&self) -> Option<usize> {
        self.dump_samples
    }

    pub fn check_samples(&self) -> Option<usize> {
        self.check_samples
    }

    /// Builds the requested function and installs it.
    ///
    /// On failure the previously installed function stays in place.
    pub fn configure_exposure_weight(&mut self,
                                     settings: &ExposureWeightSettings) -> Result<(), ConfigurationError> {
        let function = self.factory.make_weight_function(
            &settings.name,
            &settings.arguments,
            settings.y_optimum,
            settings.width)?;
        self.install(function);
        self.settings = Some(settings.clone());
        Ok(())
    }

    pub fn install(&mut self, function: Box<dyn ExposureWeight>) {
        if let Some(previous) = self.exposure_weight.take() {
            debug!(id = ?self.exposure_weight_id, "releasing exposure weight");
            drop(previous);
        }
        let id = Uuid::new_v4();
        debug!(%id, "installing exposure weight");
        self.exposure_weight = Some(function);
        self.exposure_weight_id = Some(id);
    }

    pub fn from_json_value(&mut self, json_value: serde_json::Value) -> Result<(), ConfigurationError> {
        let json_prop: ConfigurationJsonProp = ConfigurationError::from_json_or_json_parse_error(json_value)?;
        validate_sample_count("dump_samples", json_prop.dump_samples)?;
        validate_sample_count("check_samples", json_prop.check_samples)?;
        self.configure_exposure_weight(&json_prop.exposure_weight)?;
        self.dump_samples = json_prop.dump_samples;
        self.check_samples = json_prop.check_samples;
        Ok(())
    }

    pub fn from_reader(&mut self, file_path: &str) -> Result<(), ConfigurationError> {
        let file = File::open(file_path).map_err(|error| ConfigurationError::IOError {
            path: file_path.to_owned(),
            source: error
        })?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        self.from_json_value(json_value)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
