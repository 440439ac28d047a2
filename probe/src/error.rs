use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    UnsupportedPlatform {
        family: String,
    },
    ExecutableDirectoryUnavailable {
        description: String,
    },
    LibraryLoadFailed {
        path: PathBuf,
        description: String,
    },
    SymbolNotFound {
        symbol: String,
        description: String,
    },
}

impl ProbeError {
    // Failures past path resolution are reported to the operator, everything
    // before that aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::LibraryLoadFailed { .. } | Self::SymbolNotFound { .. }
        )
    }
}

impl core::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedPlatform { family } => {
                write!(f, "unsupported platform family {:?}", family)
            }
            Self::ExecutableDirectoryUnavailable { description } => write!(
                f,
                "unable to determine the directory of the running executable: {}",
                description
            ),
            Self::LibraryLoadFailed { path, description } => write!(
                f,
                "unable to load library {}: {}",
                path.display(),
                description
            ),
            Self::SymbolNotFound {
                symbol,
                description,
            } => write!(f, "unable to resolve symbol {}: {}", symbol, description),
        }
    }
}

impl std::error::Error for ProbeError {}
