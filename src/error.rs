use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions callers may want to tell apart from plain I/O failures.
#[derive(Debug, Error)]
pub enum PanelError {
    #[error("CSV no encontrado: {}", path.display())]
    SourceMissing { path: PathBuf },
}
