use color_eyre::eyre;
use gumdrop::Options;

use crate::cli_arguments::CliArguments;

pub mod batch;
pub mod cli_arguments;
pub mod helpers;
pub mod image_files;
pub mod mask;
pub mod progress;


fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let subscriber = tracing_subscriber::FmtSubscriber::new();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli_arguments = CliArguments::parse_args_default_or_exit();

    tracing::info!("Applying mask with coordinates: {}", cli_arguments.mask_rectangle());
    tracing::info!("Input directory: '{}'", cli_arguments.input);
    tracing::info!("Output directory: '{}'", cli_arguments.output);


    let summary = batch::run(&cli_arguments)?;

    if summary.discovered > 0 {
        tracing::info!(
            "Masked {} of {} image(s), skipped {}.",
            summary.written.len(),
            summary.discovered,
            summary.skipped.len()
        );
    }


    Ok(())
}
