use crate::error::ProbeError;
use libloading::{Library, Symbol};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

/// Name of the function the companion library is expected to export.
pub const EXPORTED_SYMBOL: &str = "getFortyTwo";

/// Signature every probed export is bound with: `int name(void)`.
pub type ExportedI32Fn = unsafe extern "C" fn() -> i32;

pub fn load_and_call(path: &Path) -> Result<i32, ProbeError> {
    load_and_call_symbol(path, EXPORTED_SYMBOL)
}

// Failures are classified by the step that produced them: anything from
// Library::new() is a load failure, anything from get() a resolution failure
pub fn load_and_call_symbol(path: &Path, symbol: &str) -> Result<i32, ProbeError> {
    let library = unsafe { Library::new(path) }.map_err(|e| ProbeError::LibraryLoadFailed {
        path: path.to_path_buf(),
        description: e.to_string(),
    })?;
    debug!("Loaded {}", path.display());
    // A shared object carries no type information: the signature below is
    // trusted, not checked
    let function: Symbol<ExportedI32Fn> =
        unsafe { library.get(symbol.as_bytes()) }.map_err(|e| ProbeError::SymbolNotFound {
            symbol: symbol.to_owned(),
            description: e.to_string(),
        })?;
    let value = unsafe { function() };
    info!("{}() returned {}", symbol, value);
    Ok(value)
}

/// Outcome of one probe: what was loaded, what was called, and how it went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRun {
    pub path: PathBuf,
    pub symbol: String,
    pub result: Result<i32, ProbeError>,
}

impl ProbeRun {
    pub fn report_lines(&self) -> Vec<String> {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string());
        match &self.result {
            Ok(value) => vec![format!("Result from {}(): {}", self.symbol, value)],
            Err(ProbeError::LibraryLoadFailed { path, description }) => vec![
                format!("Error loading library: {}", description),
                format!("Attempted to load from: {}", path.display()),
                "The shared library was not found, or the dynamic loader rejected it.".to_owned(),
                format!("  - Check that '{}' exists at the path above.", file_name),
                format!(
                    "  - Check that '{}' is exported with global linkage: {}",
                    self.symbol,
                    export_listing_hint(&file_name, Some(&self.symbol))
                ),
            ],
            Err(ProbeError::SymbolNotFound {
                symbol,
                description,
            }) => vec![
                format!(
                    "Error: symbol not found or signature mismatch: {}",
                    description
                ),
                format!(
                    "  - The function '{}' might not be exported, or is exported under another name.",
                    symbol
                ),
                format!(
                    "  - Check the exported symbols for the exact name: {}",
                    export_listing_hint(&file_name, None)
                ),
            ],
            Err(other) => vec![format!("Error: {}", other)],
        }
    }
}

fn export_listing_hint(file_name: &str, symbol: Option<&str>) -> String {
    match (cfg!(windows), symbol) {
        (true, Some(symbol)) => format!(
            "run 'dumpbin /exports {}' and look for {}",
            file_name, symbol
        ),
        (true, None) => format!("run 'dumpbin /exports {}'", file_name),
        (false, Some(symbol)) => format!(
            "run 'nm -D {} | grep {}' and make sure it shows 'T' (uppercase)",
            file_name, symbol
        ),
        (false, None) => format!("run 'nm -D {}'", file_name),
    }
}

pub fn report(run: &ProbeRun) {
    if let Err(e) = &run.result {
        error!("{}", e);
    }
    for line in run.report_lines() {
        println!("{}", line);
    }
}
