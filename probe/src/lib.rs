mod config;
mod error;
mod platform;
mod probe;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use platform::{
    executable_dir, resolve_library_path, resolve_library_path_for, Platform, LIBRARY_BASE_NAME,
};
pub use probe::{
    load_and_call, load_and_call_symbol, report, ExportedI32Fn, ProbeRun, EXPORTED_SYMBOL,
};
