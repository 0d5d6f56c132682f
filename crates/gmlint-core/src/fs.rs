use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use path_absolutize::path_dedot;

/// Whether the path has a `.gml` extension, case-insensitively.
pub fn has_gml_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gml"))
}

/// Convert any path to an absolute path (based on the current working directory).
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(path) = path.absolutize() {
        return path.to_path_buf();
    }
    path.to_path_buf()
}

/// Convert an absolute path to be relative to the current working directory.
pub fn relativize_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Ok(path) = path.strip_prefix(path_dedot::CWD.as_path()) {
        return format!("{}", path.display());
    }
    format!("{}", path.display())
}

/// The sibling path the fixed copy of a file is written to.
pub fn fixed_file_path(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => path.with_file_name(format!("fixed_{}", name.to_string_lossy())),
        None => path.to_path_buf(),
    }
}
