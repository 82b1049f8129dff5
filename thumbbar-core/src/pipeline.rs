use crate::{
    catalog::{IconName, ICON_SIZES},
    config::{Config, Variant},
    locator,
    pack::pack,
    render::{Frame, Rasterizer, RenderError},
    Error,
};
use std::path::{Path, PathBuf};

/// The icon bundles written by a successful run, in the order they were written.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub written: Vec<PathBuf>,
}

/// Builds every icon bundle of every configured variant, stopping at the first error.
#[derive(Debug)]
pub struct Pipeline<R> {
    config: Config,
    rasterizer: R,
}

impl<R: Rasterizer> Pipeline<R> {
    pub fn new(config: Config, rasterizer: R) -> Self {
        Pipeline { config, rasterizer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self) -> Result<Report, Error> {
        let mut report = Report::default();
        for variant in self.config.variants.iter() {
            report.written.extend(self.build_variant(variant)?);
        }
        Ok(report)
    }

    pub fn build_variant(&self, variant: &Variant) -> Result<Vec<PathBuf>, Error> {
        let _span = tracing::info_span!("variant", %variant).entered();
        let variant_dir = locator::variant_dir(&self.config.input, variant)?;

        let output_dir = self.config.output.join(variant.as_str());
        std::fs::create_dir_all(&output_dir).map_err(|source| Error::Write {
            path: output_dir.clone(),
            source,
        })?;

        IconName::ALL
            .iter()
            .map(|&icon| self.build_icon(icon, &variant_dir, &output_dir))
            .collect()
    }

    pub fn build_icon(
        &self,
        icon: IconName,
        variant_dir: &Path,
        output_dir: &Path,
    ) -> Result<PathBuf, Error> {
        let source = locator::source_path(variant_dir, icon)?;
        let svg = std::fs::read_to_string(&source).map_err(|e| Error::Read {
            path: source.clone(),
            source: e,
        })?;
        let frames = self.render_all_sizes(&svg, &source)?;

        let destination = output_dir.join(icon.ico_file_name());
        pack(&frames, &destination)?;
        tracing::info!("wrote {}", destination.display());
        Ok(destination)
    }

    fn render_all_sizes(&self, svg: &str, source: &Path) -> Result<Vec<Frame>, Error> {
        ICON_SIZES
            .iter()
            .map(|&size| {
                tracing::debug!("rendering {} at {}", source.display(), size);
                self.rasterizer
                    .render(svg, size)
                    .and_then(|frame| {
                        if frame.size() == size {
                            Ok(frame)
                        } else {
                            Err(RenderError::SizeMismatch {
                                expected: size,
                                actual: frame.size(),
                            })
                        }
                    })
                    .map_err(|e| Error::Render {
                        path: source.to_owned(),
                        size,
                        source: e,
                    })
            })
            .collect()
    }
}
