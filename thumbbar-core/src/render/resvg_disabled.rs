use super::{Frame, Rasterizer, RenderError};
use crate::{catalog::Size, Error};

#[derive(Debug)]
pub enum SvgRasterizer {}

impl SvgRasterizer {
    pub fn new() -> Result<SvgRasterizer, Error> {
        Err(Error::DependencyMissing {
            name: "resvg",
            hint: "rebuild with `--features resvg`",
        })
    }
}

impl Rasterizer for SvgRasterizer {
    fn render(&self, _svg: &str, _size: Size) -> Result<Frame, RenderError> {
        match *self {}
    }
}
