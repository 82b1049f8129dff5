use std::path::PathBuf;

/// Builds the Windows taskbar thumbnail toolbar icons from their SVG sources.
///
/// Expected input layout: <INPUT>/<VARIANT>/<NAME>.svg for every NAME in previous, play, pause
/// and next. Each source becomes <OUTPUT>/<VARIANT>/<NAME>.ico with 16, 20, 24 and 32 pixel
/// frames.
#[derive(clap::Parser)]
#[command(name = "thumbbar-icons", version)]
pub struct Cli {
    /// Sets the input root directory containing variant folders
    #[arg(
        long,
        env = "THUMBBAR_INPUT",
        default_value = "assets/thumbbar",
        value_name = "DIR"
    )]
    pub input: PathBuf,

    /// Sets the output root directory for generated .ico files
    #[arg(
        long,
        env = "THUMBBAR_OUTPUT",
        default_value = "build/windows/thumbbar",
        value_name = "DIR"
    )]
    pub output: PathBuf,

    /// Sets the comma-separated variant folder names
    #[arg(
        long,
        env = "THUMBBAR_VARIANTS",
        default_value = "dark,light",
        value_name = "LIST"
    )]
    pub variants: String,

    /// Increases log output, can be repeated
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
