// ─────────────────────────────────────────────────────────────────────────────
// C ABI between the host and shared objects exporting weight functions
// ─────────────────────────────────────────────────────────────────────────────
//
// A plugin exports a symbol of type `WeightFactoryFn`. The host calls it once
// and receives a `RawExposureWeight`: an opaque state pointer and the entry
// points operating on it. Every pointer handed out by the plugin (state and
// error messages) is released through the plugin's own entry points, so host
// and plugin never share an allocator.
//
//   initialize(state, y_optimum, width, argv, argc) -> message | null
//   weight(state, y) -> w
//   free_message(message)
//   destroy(state)

use std::ffi::{
    CStr,
    CString,
    c_char,
    c_void
};
use std::panic::{
    self,
    AssertUnwindSafe
};
use std::ptr;

use crate::exposureweight::exposureweight::{
    ExposureWeight,
    InitializationError
};

pub type WeightFactoryFn = unsafe extern "C" fn() -> RawExposureWeight;

pub type InitializeFn = unsafe extern "C" fn(*mut c_void, f64, f64, *const *const c_char, usize) -> *mut c_char;
pub type WeightFn = unsafe extern "C" fn(*const c_void, f64) -> f64;
pub type FreeMessageFn = unsafe extern "C" fn(*mut c_char);
pub type DestroyFn = unsafe extern "C" fn(*mut c_void);

#[repr(C)]
pub struct RawExposureWeight {
    pub state: *mut c_void,
    pub initialize: InitializeFn,
    pub weight: WeightFn,
    pub free_message: FreeMessageFn,
    pub destroy: DestroyFn
}


/// Host-side owner of an object produced by a plugin factory.
///
/// Must be dropped before the library that produced it is unloaded.
pub struct ForeignExposureWeight {
    raw: RawExposureWeight
}

// SAFETY: plugins promise that `weight` is reentrant and that the state may
// move between threads; the host cannot check either.
unsafe impl Send for ForeignExposureWeight {}
unsafe impl Sync for ForeignExposureWeight {}

impl ForeignExposureWeight {
    /// # Safety
    /// `factory` must follow the ABI above and stay loaded for as long as
    /// the returned object lives.
    pub unsafe fn from_factory(factory: WeightFactoryFn) -> ForeignExposureWeight {
        let raw = unsafe { factory() };
        ForeignExposureWeight { raw }
    }

    pub fn initialize(&mut self,
                      y_optimum: f64,
                      width: f64,
                      arguments: &[String]) -> Result<(), InitializationError> {
        let c_arguments = arguments
            .iter()
            .map(|argument| CString::new(argument.as_str()))
            .collect::<Result<Vec<CString>, _>>()
            .map_err(|_| InitializationError::new("argument contains an interior NUL byte"))?;
        let argv: Vec<*const c_char> = c_arguments.iter().map(|argument| argument.as_ptr()).collect();

        // SAFETY: `argv` and the strings it points to outlive the call.
        let message = unsafe {
            (self.raw.initialize)(self.raw.state, y_optimum, width, argv.as_ptr(), argv.len())
        };
        if message.is_null() {
            return Ok(());
        }

        // SAFETY: a non-null result is a NUL-terminated string owned by the
        // plugin until we hand it back through `free_message`.
        let text = unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned();
        unsafe { (self.raw.free_message)(message) };
        Err(InitializationError::new(text))
    }

    #[inline]
    pub fn weight(&self, y: f64) -> f64 {
        // SAFETY: state stays valid until `drop`.
        unsafe { (self.raw.weight)(self.raw.state, y) }
    }
}

impl Drop for ForeignExposureWeight {
    fn drop(&mut self) {
        // SAFETY: state was produced by the same plugin and is destroyed once.
        unsafe { (self.raw.destroy)(self.raw.state) };
        self.raw.state = ptr::null_mut();
    }
}


// ─────────────────────────────────────────────────────────────────────────────
// Plugin side
// ─────────────────────────────────────────────────────────────────────────────

/// Factory for any `T: ExposureWeight + Default`, usable as a
/// `WeightFactoryFn`. Shared objects normally export it through
/// [`declare_exposure_weight!`](crate::declare_exposure_weight).
///
/// Panics in `T` never cross the boundary: they turn into an initialization
/// error, or into a `NaN` weight that the range check reports.
pub extern "C" fn export_exposure_weight<T>() -> RawExposureWeight
    where T: ExposureWeight + Default + 'static {
    let state = panic::catch_unwind(T::default)
        .map(|object| Box::into_raw(Box::new(object)) as *mut c_void)
        .unwrap_or(ptr::null_mut());
    RawExposureWeight {
        state,
        initialize: initialize_thunk::<T>,
        weight: weight_thunk::<T>,
        free_message: free_message_thunk,
        destroy: destroy_thunk::<T>
    }
}

fn into_message(text: &str) -> *mut c_char {
    CString::new(text.replace('\0', " "))
        .unwrap_or_default()
        .into_raw()
}

unsafe extern "C" fn initialize_thunk<T: ExposureWeight>(state: *mut c_void,
                                                         y_optimum: f64,
                                                         width: f64,
                                                         argv: *const *const c_char,
                                                         argc: usize) -> *mut c_char {
    if state.is_null() {
        return into_message("weight function could not be constructed");
    }
    let object = unsafe { &mut *(state as *mut T) };
    let arguments: Vec<String> = if argc == 0 {
        Vec::new()
    } else {
        (0..argc)
            .map(|i| unsafe { CStr::from_ptr(*argv.add(i)) }.to_string_lossy().into_owned())
            .collect()
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| object.initialize(y_optimum, width, &arguments)));
    match outcome {
        Ok(Ok(())) => ptr::null_mut(),
        Ok(Err(error)) => into_message(error.message()),
        Err(_) => into_message("weight function panicked during initialization")
    }
}

unsafe extern "C" fn weight_thunk<T: ExposureWeight>(state: *const c_void, y: f64) -> f64 {
    if state.is_null() {
        return f64::NAN;
    }
    let object = unsafe { &*(state as *const T) };
    panic::catch_unwind(AssertUnwindSafe(|| object.weight(y))).unwrap_or(f64::NAN)
}

unsafe extern "C" fn free_message_thunk(message: *mut c_char) {
    if !message.is_null() {
        drop(unsafe { CString::from_raw(message) });
    }
}

unsafe extern "C" fn destroy_thunk<T: ExposureWeight>(state: *mut c_void) {
    if !state.is_null() {
        let object = unsafe { Box::from_raw(state as *mut T) };
        let _ = panic::catch_unwind(AssertUnwindSafe(move || drop(object)));
    }
}

/// Exports `$weight_type` from a `cdylib` under the unmangled name `$symbol`.
///
/// ```ignore
/// expoweight::declare_exposure_weight!(linear_ramp, LinearRamp);
/// ```
#[macro_export]
macro_rules! declare_exposure_weight {
    ($symbol:ident, $weight_type:ty) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn $symbol() -> $crate::exposureweight::dynamic::foreignweight::RawExposureWeight {
            $crate::exposureweight::dynamic::foreignweight::export_exposure_weight::<$weight_type>()
        }
    };
}
