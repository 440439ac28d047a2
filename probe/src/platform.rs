use crate::error::ProbeError;
use log::debug;
use std::path::{Path, PathBuf};

// Base name shared by the library on every supported platform. Only the
// extension changes.
pub const LIBRARY_BASE_NAME: &str = "libtest_export";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Maps a target family name, as found in `std::env::consts::FAMILY`.
    pub fn from_family(family: &str) -> Result<Self, ProbeError> {
        match family {
            "unix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            other => Err(ProbeError::UnsupportedPlatform {
                family: if other.is_empty() {
                    std::env::consts::OS.to_owned()
                } else {
                    other.to_owned()
                },
            }),
        }
    }

    pub fn current() -> Result<Self, ProbeError> {
        Self::from_family(std::env::consts::FAMILY)
    }

    pub fn library_file_name(&self) -> String {
        let extension = match self {
            Self::Posix => "so",
            Self::Windows => "dll",
        };
        format!("{}.{}", LIBRARY_BASE_NAME, extension)
    }

    pub fn library_path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.library_file_name())
    }
}

/// Directory containing the running executable, whatever the current working
/// directory is.
pub fn executable_dir() -> Result<PathBuf, ProbeError> {
    let exe = std::env::current_exe().map_err(|e| ProbeError::ExecutableDirectoryUnavailable {
        description: e.to_string(),
    })?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Err(ProbeError::ExecutableDirectoryUnavailable {
            description: format!("{} has no parent directory", exe.display()),
        }),
    }
}

pub fn resolve_library_path() -> Result<PathBuf, ProbeError> {
    resolve_library_path_for(std::env::consts::FAMILY)
}

/// Same as `resolve_library_path()`, for the given target family name.
pub fn resolve_library_path_for(family: &str) -> Result<PathBuf, ProbeError> {
    // The platform check comes first: an unsupported family must fail before
    // anything is resolved
    let platform = Platform::from_family(family)?;
    let path = platform.library_path_in(&executable_dir()?);
    debug!("Resolved library path for {:?}: {}", platform, path.display());
    Ok(path)
}
