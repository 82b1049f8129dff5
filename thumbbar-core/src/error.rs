use crate::{catalog::Size, config::ConfigError, render::RenderError};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing dependency '{name}', {hint}")]
    DependencyMissing {
        name: &'static str,
        hint: &'static str,
    },
    #[error("variant folder not found: {}", .0.display())]
    VariantNotFound(PathBuf),
    #[error("missing icon source: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("failed to read icon source {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render {} at {size}", path.display())]
    Render {
        path: PathBuf,
        size: Size,
        #[source]
        source: RenderError,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
