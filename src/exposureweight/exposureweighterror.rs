use thiserror::Error;

use crate::exposureweight::dynamic::dynamicloader::LoadError;

#[derive(Debug, Error)]
pub enum ExposureWeightError {
    #[error("unknown built-in exposure weight function \"{name}\"\n\
             note: this binary has no support for dynamic loading of\n\
             note: exposure weight functions")]
    UnknownBuiltIn {
        name: String
    },
    #[error("unknown built-in exposure weight function \"{library}\"\n\
             note: no symbol name given to load it as a shared object")]
    MissingSymbolName {
        library: String
    },
    #[error("argument {position} for weight function \"{symbol}\" in shared object \"{library}\" \
             contains a NUL byte")]
    InvalidArgument {
        symbol: String,
        library: String,
        position: usize
    },
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("user-defined weight function \"{symbol}\" defined in shared object \"{library}\" \
             raised an error: {message}")]
    Initialization {
        symbol: String,
        library: String,
        message: String
    }
}
