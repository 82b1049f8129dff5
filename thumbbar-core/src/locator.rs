use crate::{catalog::IconName, config::Variant, Error};
use std::path::{Path, PathBuf};

pub fn variant_dir(root: &Path, variant: &Variant) -> Result<PathBuf, Error> {
    let dir = root.join(variant.as_str());
    if !dir.is_dir() {
        return Err(Error::VariantNotFound(dir));
    }
    Ok(dir)
}

pub fn source_path(variant_dir: &Path, icon: IconName) -> Result<PathBuf, Error> {
    let path = variant_dir.join(icon.svg_file_name());
    if !path.is_file() {
        return Err(Error::SourceNotFound(path));
    }
    Ok(path)
}
