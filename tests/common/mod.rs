#![allow(dead_code)]

use std::cell::RefCell;

use expoweight::exposureweight::dynamic::dynamicloader::{
    LibraryHandle,
    LibraryLoader,
    LoadError
};
use expoweight::exposureweight::dynamic::foreignweight::{
    WeightFactoryFn,
    export_exposure_weight
};
use expoweight::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Load(String),
    Initialize { y_optimum: f64, width: f64, arguments: Vec<String> },
    Weight(f64),
    Destroy(&'static str),
    Unload(String)
}

thread_local! {
    static EVENTS: RefCell<Vec<Event>> = RefCell::new(Vec::new());
}

pub fn record(event: Event) {
    EVENTS.with(|events| events.borrow_mut().push(event));
}

/// Events recorded on this thread since the last call.
pub fn take_events() -> Vec<Event> {
    EVENTS.with(|events| events.borrow_mut().drain(..).collect())
}


/// Plugin that records every call and answers `weight(y) = y / 2`.
#[derive(Default)]
pub struct RecordingWeight;

impl ExposureWeight for RecordingWeight {
    fn initialize(&mut self, y_optimum: f64, width: f64, arguments: &[String]) -> Result<(), InitializationError> {
        record(Event::Initialize { y_optimum, width, arguments: arguments.to_vec() });
        Ok(())
    }

    fn weight(&self, y: f64) -> f64 {
        record(Event::Weight(y));
        y / 2.0
    }

    fn y_optimum(&self) -> f64 {
        0.0
    }

    fn width(&self) -> f64 {
        0.0
    }
}

impl Drop for RecordingWeight {
    fn drop(&mut self) {
        record(Event::Destroy("recording"));
    }
}

/// Plugin whose initialization always fails.
#[derive(Default)]
pub struct RejectingWeight;

impl ExposureWeight for RejectingWeight {
    fn initialize(&mut self, _y_optimum: f64, _width: f64, arguments: &[String]) -> Result<(), InitializationError> {
        Err(InitializationError::new(format!("expected 1 argument, got {}", arguments.len())))
    }

    fn weight(&self, _y: f64) -> f64 {
        0.0
    }

    fn y_optimum(&self) -> f64 {
        0.0
    }

    fn width(&self) -> f64 {
        0.0
    }
}

impl Drop for RejectingWeight {
    fn drop(&mut self) {
        record(Event::Destroy("rejecting"));
    }
}

/// Plugin that breaks the range invariant at the upper end.
#[derive(Default)]
pub struct OverflowingWeight;

impl ExposureWeight for OverflowingWeight {
    fn initialize(&mut self, _y_optimum: f64, _width: f64, _arguments: &[String]) -> Result<(), InitializationError> {
        Ok(())
    }

    fn weight(&self, y: f64) -> f64 {
        if y > 0.9 { 1.5 } else { 0.5 }
    }

    fn y_optimum(&self) -> f64 {
        0.5
    }

    fn width(&self) -> f64 {
        0.2
    }
}


pub struct StaticLibrary {
    name: String,
    symbols: Vec<(&'static str, WeightFactoryFn)>
}

impl LibraryHandle for StaticLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve_factory(&self, symbol_name: &str) -> Result<WeightFactoryFn, LoadError> {
        self.symbols
            .iter()
            .find(|(symbol, _)| *symbol == symbol_name)
            .map(|(_, factory)| *factory)
            .ok_or_else(|| LoadError::SymbolNotFound {
                library: self.name.clone(),
                symbol: symbol_name.to_owned(),
                reason: "undefined symbol".to_owned()
            })
    }
}

impl Drop for StaticLibrary {
    fn drop(&mut self) {
        record(Event::Unload(self.name.clone()));
    }
}

/// Loader serving a single in-process "library" named `libtest-weights.so`.
pub struct StaticLoader;

pub const TEST_LIBRARY: &str = "libtest-weights.so";

impl LibraryLoader for StaticLoader {
    fn load(&self, library_name: &str) -> Result<Box<dyn LibraryHandle>, LoadError> {
        record(Event::Load(library_name.to_owned()));
        if library_name != TEST_LIBRARY {
            return Err(LoadError::LibraryNotFound {
                library: library_name.to_owned(),
                reason: "cannot open shared object file: No such file or directory".to_owned()
            });
        }
        Ok(Box::new(StaticLibrary {
            name: library_name.to_owned(),
            symbols: vec![
                ("recording", export_exposure_weight::<RecordingWeight> as WeightFactoryFn),
                ("rejecting", export_exposure_weight::<RejectingWeight> as WeightFactoryFn),
                ("overflowing", export_exposure_weight::<OverflowingWeight> as WeightFactoryFn),
            ]
        }))
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
