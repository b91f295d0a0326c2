//! Reading single script files.

use std::fs;
use std::path::Path;

use super::collection::SCRIPT_EXTENSIONS;
use crate::project::LoadError;

/// Get the extension of a path, if it has a UTF-8 one.
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

pub(super) fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    get_extension(path).is_some_and(|ext| {
        extensions
            .iter()
            .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(ext))
    })
}

/// Check that `path` has one of the accepted `extensions`.
pub fn validate_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> Result<(), LoadError> {
    let Some(ext) = get_extension(path) else {
        return Err(LoadError::NoExtension(path.to_path_buf()));
    };
    if has_extension(path, extensions) {
        Ok(())
    } else {
        Err(LoadError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension: ext.to_string(),
        })
    }
}

/// Load a script file with one of the default extensions.
pub fn load_file(path: &Path) -> Result<String, LoadError> {
    load_file_with(path, SCRIPT_EXTENSIONS)
}

/// Load a file after checking its extension.
///
/// Legacy scripts are often not UTF-8; invalid sequences are replaced
/// rather than rejected.
pub fn load_file_with<S: AsRef<str>>(path: &Path, extensions: &[S]) -> Result<String, LoadError> {
    validate_extension(path, extensions)?;
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
