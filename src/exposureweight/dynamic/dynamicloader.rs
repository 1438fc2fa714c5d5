use thiserror::Error;

use crate::exposureweight::dynamic::foreignweight::WeightFactoryFn;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot load shared object \"{library}\": {reason}")]
    LibraryNotFound {
        library: String,
        reason: String
    },
    #[error("cannot resolve symbol \"{symbol}\" in shared object \"{library}\": {reason}")]
    SymbolNotFound {
        library: String,
        symbol: String,
        reason: String
    }
}

/// A loaded code module. Dropping the handle unloads the module, so every
/// entry point resolved from it must be released first.
pub trait LibraryHandle: Send + Sync {
    fn name(&self) -> &str;

    fn resolve_factory(&self, symbol_name: &str) -> Result<WeightFactoryFn, LoadError>;
}

pub trait LibraryLoader {
    fn load(&self, library_name: &str) -> Result<Box<dyn LibraryHandle>, LoadError>;
}


#[cfg(feature = "dynamic-loading")]
pub use self::system::{
    DynamicLibrary,
    SystemLoader
};

#[cfg(feature = "dynamic-loading")]
mod system {
    use libloading::{
        Library,
        Symbol
    };
    use tracing::debug;

    use super::{
        LibraryHandle,
        LibraryLoader,
        LoadError
    };
    use crate::exposureweight::dynamic::foreignweight::WeightFactoryFn;

    /// Shared object opened through the platform loader (`dlopen`,
    /// `LoadLibraryW`).
    pub struct DynamicLibrary {
        name: String,
        library: Library
    }

    impl DynamicLibrary {
        pub fn open(name: &str) -> Result<DynamicLibrary, LoadError> {
            // SAFETY: running the library's initializers is inherent to loading
            // user supplied weight functions.
            let library = unsafe { Library::new(name) }.map_err(|error| LoadError::LibraryNotFound {
                library: name.to_owned(),
                reason: error.to_string()
            })?;
            debug!(library = name, "loaded shared object");
            Ok(DynamicLibrary { name: name.to_owned(), library })
        }

        /// Resolves `symbol_name` as a value of type `T`.
        ///
        /// # Safety
        /// `T` must match the exported symbol's real type, and the returned
        /// value must not be used after `self` is dropped.
        pub unsafe fn resolve<T: Copy>(&self, symbol_name: &str) -> Result<T, LoadError> {
            let symbol: Symbol<'_, T> = unsafe { self.library.get(symbol_name.as_bytes()) }
                .map_err(|error| LoadError::SymbolNotFound {
                    library: self.name.clone(),
                    symbol: symbol_name.to_owned(),
                    reason: error.to_string()
                })?;
            debug!(library = %self.name, symbol = symbol_name, "resolved symbol");
            Ok(*symbol)
        }
    }

    impl LibraryHandle for DynamicLibrary {
        fn name(&self) -> &str {
            &self.name
        }

        fn resolve_factory(&self, symbol_name: &str) -> Result<WeightFactoryFn, LoadError> {
            // SAFETY: exporting a `WeightFactoryFn` under the requested name is
            // the plugin contract; the caller keeps `self` alive while the
            // factory or anything it produced is in use.
            unsafe { self.resolve::<WeightFactoryFn>(symbol_name) }
        }
    }

    #[derive(Debug, Default, Clone, Copy)]
    pub struct SystemLoader;

    impl SystemLoader {
        pub fn new() -> SystemLoader {
            SystemLoader {}
        }
    }

    impl LibraryLoader for SystemLoader {
        fn load(&self, library_name: &str) -> Result<Box<dyn LibraryHandle>, LoadError> {
            Ok(Box::new(DynamicLibrary::open(library_name)?))
        }
    }
}
