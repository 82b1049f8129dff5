use super::{Frame, Rasterizer, RenderError};
use crate::{catalog::Size, Error};
use resvg::{tiny_skia, usvg};
use std::sync::Arc;

pub struct SvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for SvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SvgRasterizer")
            .field("fonts", &self.fontdb.len())
            .finish()
    }
}

impl SvgRasterizer {
    pub fn new() -> Result<SvgRasterizer, Error> {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!("loaded {} system fonts", fontdb.len());
        Ok(SvgRasterizer {
            fontdb: Arc::new(fontdb),
        })
    }
}

impl Rasterizer for SvgRasterizer {
    fn render(&self, svg: &str, size: Size) -> Result<Frame, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree =
            usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Parse(Box::new(e)))?;

        let mut pixmap =
            tiny_skia::Pixmap::new(size.width, size.height).ok_or(RenderError::Allocation(size))?;
        resvg::render(&tree, fit(tree.size(), size), &mut pixmap.as_mut());

        let rgba = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        Frame::new(size, rgba)
    }
}

/// Scales the image uniformly into the target and centers it.
fn fit(source: usvg::Size, target: Size) -> tiny_skia::Transform {
    let (width, height) = (target.width as f32, target.height as f32);
    let scale = (width / source.width()).min(height / source.height());
    let dx = (width - source.width() * scale) / 2.0;
    let dy = (height - source.height() * scale) / 2.0;
    tiny_skia::Transform::from_row(scale, 0.0, 0.0, scale, dx, dy)
}
