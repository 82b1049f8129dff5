use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Name of a visual theme, used as a folder name under both the input and the output root.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Variant(pub String);

impl Variant {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Variants(Vec<Variant>);

impl Variants {
    /// Parses a comma-separated list, dropping blank entries. An empty result is an error.
    pub fn parse(s: &str) -> Result<Variants, ConfigError> {
        let variants = s
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| Variant(v.to_owned()))
            .collect::<Vec<_>>();
        if variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }
        Ok(Variants(variants))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variant> {
        self.0.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub variants: Variants,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no variants specified")]
    NoVariants,
    #[error("can't resolve path {}", .0.display())]
    InvalidPath(PathBuf, #[source] std::io::Error),
}

impl Config {
    /// Builds a configuration with both roots resolved to absolute paths.
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        variants: Variants,
    ) -> Result<Config, ConfigError> {
        Ok(Config {
            input: absolute(input.as_ref())?,
            output: absolute(output.as_ref())?,
            variants,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf, ConfigError> {
    std::path::absolute(path).map_err(|e| ConfigError::InvalidPath(path.to_owned(), e))
}
