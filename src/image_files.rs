use std::{fs, io};

use camino::{Utf8Path, Utf8PathBuf};
use color_eyre::eyre;
use color_eyre::eyre::WrapErr;
use itertools::Itertools;

pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "bmp", "tif", "tiff"];

pub fn has_image_extension(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|extension| IMAGE_EXTENSIONS.iter().any(|allowed| extension.eq_ignore_ascii_case(allowed)))
}

/// Lists the image files directly inside `input_dir`, sorted by path.
///
/// A directory that does not exist simply has no images. Sub-directories are never descended into.
pub fn find_image_files(input_dir: &Utf8Path) -> eyre::Result<Vec<Utf8PathBuf>> {
    let entries = match fs::read_dir(input_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("Input directory '{}' does not exist.", input_dir);
            return Ok(vec![]);
        }
        Err(e) => return Err(e).wrap_err_with(|| format!("Unable to read input directory '{input_dir}'")),
    };

    let mut image_files = vec![];

    for entry in entries {
        let entry = entry.wrap_err_with(|| format!("Unable to read entry of '{input_dir}'"))?;

        let path = match Utf8PathBuf::from_path_buf(entry.path()) {
            Ok(path) => path,
            Err(path) => {
                tracing::warn!("Skipping non UTF-8 file name '{}'.", path.display());
                continue;
            }
        };

        // Follows symlinks, so links to images count as images.
        if !path.is_file() || !has_image_extension(&path) {
            continue;
        }

        image_files.push(path);
    }

    Ok(image_files.into_iter().sorted().collect())
}
