use std::collections::HashSet;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::eyre;
use color_eyre::eyre::{eyre, WrapErr};
use image::{DynamicImage, ImageError, ImageFormat};
use image::io::Reader;

use crate::cli_arguments::CliArguments;
use crate::image_files;
use crate::mask::{self, MaskRectangle};
use crate::progress::ProgressBar;

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub discovered: usize,
    pub written: Vec<Utf8PathBuf>,
    pub skipped: Vec<Utf8PathBuf>,
}

pub fn run(cli_arguments: &CliArguments) -> eyre::Result<BatchSummary> {
    mask_directory(&cli_arguments.input, &cli_arguments.output, &cli_arguments.mask_rectangle())
}

pub fn mask_directory(input_dir: &Utf8Path, output_dir: &Utf8Path, rectangle: &MaskRectangle) -> eyre::Result<BatchSummary> {
    fs::create_dir_all(output_dir).wrap_err_with(|| format!("Unable to create output directory '{output_dir}'"))?;

    let image_files = image_files::find_image_files(input_dir)?;

    if image_files.is_empty() {
        tracing::info!("No image files found in '{}'.", input_dir);
        return Ok(BatchSummary::default());
    }

    tracing::info!("Found {} image(s) in '{}'.", image_files.len(), input_dir);

    let mut summary = BatchSummary {
        discovered: image_files.len(),
        ..Default::default()
    };

    let mut used_output_names = HashSet::new();
    let mut progress_bar = ProgressBar::new(image_files.len());

    for image_path in &image_files {
        let mut image = match decode_image(image_path) {
            Ok(image) => image.to_rgb8(),
            Err(e) => {
                tracing::warn!("Could not read image '{}': {e}", image_path);
                summary.skipped.push(image_path.clone());
                progress_bar.advance();
                continue;
            }
        };

        if !mask::apply_mask(&mut image, rectangle) {
            tracing::warn!(
                "Mask {} lies outside '{}' ({}x{}), writing it unmasked.",
                rectangle, image_path, image.width(), image.height()
            );
        }

        let output_path = output_path_for(image_path, output_dir)?;

        if !used_output_names.insert(output_path.clone()) {
            tracing::warn!("'{}' overwrites an earlier result at '{}'.", image_path, output_path);
        }

        image.save_with_format(&output_path, ImageFormat::Png)
            .wrap_err_with(|| format!("Unable to write masked image '{output_path}'"))?;

        summary.written.push(output_path);
        progress_bar.advance();
    }

    progress_bar.finish();

    tracing::info!("Processed images saved to '{}'.", output_dir);

    Ok(summary)
}

/// Picks the decoder from the file content, falling back to the extension when the content is not recognized.
pub fn decode_image(image_path: &Utf8Path) -> Result<DynamicImage, ImageError> {
    Reader::open(image_path)?
        .with_guessed_format()?
        .decode()
}

/// `<output_dir>/<stem>.png`, whatever the input format was.
pub fn output_path_for(image_path: &Utf8Path, output_dir: &Utf8Path) -> eyre::Result<Utf8PathBuf> {
    let stem = image_path.file_stem().ok_or(eyre!("Image path '{}' has no file name.", image_path))?;

    Ok(output_dir.join(format!("{stem}.png")))
}
