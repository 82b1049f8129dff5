use crate::catalog::Size;

#[cfg(feature = "resvg")]
mod resvg_backend;
#[cfg(not(feature = "resvg"))]
mod resvg_disabled;

#[cfg(feature = "resvg")]
pub use resvg_backend::SvgRasterizer;
#[cfg(not(feature = "resvg"))]
pub use resvg_disabled::SvgRasterizer;

/// A rendered image in straight (non-premultiplied) RGBA8, row-major.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Frame {
    size: Size,
    rgba: Vec<u8>,
}

impl Frame {
    /// Fails unless `rgba` holds exactly four bytes per pixel of `size`.
    pub fn new(size: Size, rgba: Vec<u8>) -> Result<Self, RenderError> {
        if rgba.len() != size.pixel_count() * 4 {
            return Err(RenderError::BufferSize {
                size,
                len: rgba.len(),
            });
        }
        Ok(Frame { size, rgba })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = (y as usize * self.size.width as usize + x as usize) * 4;
        [
            self.rgba[offset],
            self.rgba[offset + 1],
            self.rgba[offset + 2],
            self.rgba[offset + 3],
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("invalid SVG")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to allocate {0} pixmap")]
    Allocation(Size),
    #[error("{len} byte buffer doesn't hold a {size} RGBA frame")]
    BufferSize { size: Size, len: usize },
    #[error("rasterizer produced {actual} frame instead of {expected}")]
    SizeMismatch { expected: Size, actual: Size },
}

pub trait Rasterizer {
    fn render(&self, svg: &str, size: Size) -> Result<Frame, RenderError>;
}

impl<R: Rasterizer + ?Sized> Rasterizer for &R {
    fn render(&self, svg: &str, size: Size) -> Result<Frame, RenderError> {
        (**self).render(svg, size)
    }
}
