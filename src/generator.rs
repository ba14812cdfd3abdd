use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use crate::error::{GenError, Result};
use crate::render::GeneratedStruct;

const EXTENSION: &str = "rs";

fn is_valid_file_stem(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
        && !name.starts_with('.')
        && !name.contains("..")
}

fn file_name(stem: &str) -> String {
    format!("{}.{}", stem, EXTENSION)
}

/// Fails when `<input>.rs` already exists in the target directory.
///
/// Inputs that cannot be a file name are never probed.
pub fn check_input_collision(target_dir: &Path, input: &str) -> Result<()> {
    let input = input.trim();
    if !is_valid_file_stem(input) {
        return Ok(());
    }

    let path = target_dir.join(file_name(input));
    if path.exists() {
        return Err(GenError::NameCollision(file_name(input)));
    }

    Ok(())
}

/// Writes `<file_stem>.rs` into the target directory and returns its path.
///
/// Existing files are never overwritten.
pub fn generate_file(target_dir: &Path, generated: &GeneratedStruct) -> Result<PathBuf> {
    if !is_valid_file_stem(&generated.file_stem) {
        return Err(GenError::InvalidFileName(format!(
            "'{}' contains disallowed characters",
            generated.file_stem
        )));
    }

    let name = file_name(&generated.file_stem);
    let path = target_dir.join(&name);

    if path.exists() {
        return Err(GenError::NameCollision(name));
    }

    fs::write(&path, generated.render())?;

    debug!(
        "Created {} with {} fields",
        path.display(),
        generated.fields.len()
    );

    Ok(path)
}

pub fn print_success_message(path: &Path, generated: &GeneratedStruct) {
    println!(
        "{} {} {}",
        "✓".green(),
        "Created".bold(),
        path.display()
    );
    println!(
        "  struct {} with {} fields",
        generated.struct_name.cyan(),
        generated.fields.len()
    );
}
