use crate::{render::Frame, Error};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Writes `frames` into one ICO file at `destination`, keeping their order.
///
/// All frames are encoded before the file is opened, but the write itself isn't atomic: an I/O
/// failure part-way through can leave a truncated file behind.
pub fn pack(frames: &[Frame], destination: &Path) -> Result<(), Error> {
    write_icon(frames, destination).map_err(|source| Error::Write {
        path: destination.to_owned(),
        source,
    })
}

fn write_icon(frames: &[Frame], destination: &Path) -> std::io::Result<()> {
    if frames.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "no frames to pack",
        ));
    }

    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
    for frame in frames {
        let size = frame.size();
        let image = ico::IconImage::from_rgba_data(size.width, size.height, frame.rgba().to_vec());
        icon_dir.add_entry(ico::IconDirEntry::encode(&image)?);
    }

    let mut writer = BufWriter::new(File::create(destination)?);
    icon_dir.write(&mut writer)?;
    writer.flush()?;
    tracing::debug!(
        "packed {} frames into {}",
        icon_dir.entries().len(),
        destination.display()
    );
    Ok(())
}
