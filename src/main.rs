use clap::Parser as _;
use std::path::PathBuf;
use thumbbar_core::{
    config::{Config, Variants},
    render::SvgRasterizer,
    Pipeline,
};

mod cli;

fn setup_logger(verbose: u8) -> eyre::Result<()> {
    use std::io::IsTerminal as _;
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

fn run(args: cli::Cli) -> eyre::Result<PathBuf> {
    let variants = Variants::parse(&args.variants)?;
    let config = Config::new(&args.input, &args.output, variants)?;
    let rasterizer = SvgRasterizer::new()?;

    let pipeline = Pipeline::new(config, rasterizer);
    tracing::info!(
        "building {} variants from {}",
        pipeline.config().variants.iter().count(),
        pipeline.config().input.display()
    );
    let report = pipeline.run()?;
    tracing::info!("wrote {} icons", report.written.len());

    Ok(pipeline.config().output.clone())
}

fn main() {
    let args = cli::Cli::parse();
    let result = setup_logger(args.verbose).and_then(|_| run(args));
    match result {
        Ok(output) => println!("Generated thumbbar icons in: {}", output.display()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
