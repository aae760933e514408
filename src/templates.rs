use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::ioutils::{copy_file, map_io_error, write_file};

/// Recursively copies a template tree into a destination directory.
///
/// # Arguments
/// * `src` - Source directory containing template files
/// * `dest` - Destination directory the tree is copied into
///
/// # Behavior
/// Every file under `src` is copied to the same relative path under `dest`,
/// creating parent directories as needed and preserving the modification
/// time. The copy is additive: files already present in the destination but
/// absent from the source are left untouched. The operation is not
/// transactional; a failure partway leaves the files copied so far on disk.
pub fn copy_templates<P: AsRef<Path>>(src: P, dest: P) -> Result<()> {
    let src = src.as_ref();
    let dest = dest.as_ref();

    if !src.exists() {
        return Err(Error::TemplateDirMissingError {
            template_dir: src.display().to_string(),
        });
    }

    for dir_entry in WalkDir::new(src) {
        let entry = dir_entry.map_err(|e| Error::ProcessError {
            source_path: src.display().to_string(),
            e: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path =
            entry.path().strip_prefix(src).map_err(|e| Error::ProcessError {
                source_path: entry.path().display().to_string(),
                e: e.to_string(),
            })?;
        let dest_file = dest.join(relative_path);

        log::debug!(
            "Copying '{}' to '{}'",
            entry.path().display(),
            dest_file.display()
        );
        copy_file(entry.path(), dest_file.as_path())?;
    }

    Ok(())
}

/// Replaces every occurrence of a placeholder token in a text file with the
/// title-cased replacement value.
///
/// # Arguments
/// * `file_path` - File mutated in place
/// * `placeholder` - Literal token to search for
/// * `replacement` - Value substituted for the token, title-cased first
///
/// # Behavior
/// A file without the token is left untouched. The whole file is read and
/// rewritten; this is not intended for binary or very large files.
pub fn replace_placeholder<P: AsRef<Path>>(
    file_path: P,
    placeholder: &str,
    replacement: &str,
) -> Result<()> {
    let file_path = file_path.as_ref();

    if !file_path.is_file() {
        return Err(Error::FileMissingError { path: file_path.display().to_string() });
    }

    let content = std::fs::read_to_string(file_path)
        .map_err(|e| map_io_error(file_path, e))?;

    if !content.contains(placeholder) {
        log::debug!(
            "Placeholder '{placeholder}' not found in '{}'. No replacement made.",
            file_path.display()
        );
        return Ok(());
    }

    let updated = content.replace(placeholder, &title_case(replacement));
    write_file(&updated, file_path)
}

/// Upper-cases the first letter of every word and lower-cases the rest, with
/// word boundaries at every non-alphabetic character. `"my app"` becomes
/// `"My App"`; `"my-app"` becomes `"My-App"`.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut at_word_start = true;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                result.extend(ch.to_uppercase());
            } else {
                result.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }

    result
}
