use crate::error::ProbeError;
use crate::platform::{executable_dir, Platform};
use crate::probe::{load_and_call_symbol, ProbeRun, EXPORTED_SYMBOL};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub(crate) library_dir: Option<PathBuf>,
    pub(crate) library_file_name: Option<String>,
    pub(crate) symbol: String,
    pub(crate) family: Option<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self {
            library_dir: None,
            library_file_name: None,
            symbol: EXPORTED_SYMBOL.to_owned(),
            family: None,
        }
    }

    pub fn with_library_dir(mut self, dir: PathBuf) -> Self {
        self.library_dir = Some(dir);
        self
    }

    pub fn with_library_file_name(mut self, file_name: String) -> Self {
        self.library_file_name = Some(file_name);
        self
    }

    pub fn with_symbol(mut self, symbol: String) -> Self {
        self.symbol = symbol;
        self
    }

    /// Target family to resolve the library for, instead of the one this
    /// binary was built for.
    pub fn with_family(mut self, family: String) -> Self {
        self.family = Some(family);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Absolute path of the library to load. Fails on unsupported platforms
    /// even when every part of the path was set explicitly.
    pub fn library_path(&self) -> Result<PathBuf, ProbeError> {
        let platform = match &self.family {
            Some(family) => Platform::from_family(family)?,
            None => Platform::current()?,
        };
        let dir = match &self.library_dir {
            Some(dir) => dir.clone(),
            None => executable_dir()?,
        };
        let file_name = match &self.library_file_name {
            Some(name) => name.clone(),
            None => platform.library_file_name(),
        };
        Ok(dir.join(file_name))
    }

    /// Resolves the path then loads and calls the symbol. Only resolution
    /// errors are returned here; load and symbol failures end up in the run.
    pub fn run(&self) -> Result<ProbeRun, ProbeError> {
        let path = self.library_path()?;
        info!("Probing {} in {}", self.symbol, path.display());
        let result = load_and_call_symbol(&path, &self.symbol);
        Ok(ProbeRun {
            path,
            symbol: self.symbol.clone(),
            result,
        })
    }
}
