//
// Adapted from Air
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/toml.rs
// and
// https://github.com/posit-dev/air/blob/affa92cd514525c4bab6c8c2ca251ea19414b89f/crates/workspace/src/toml_options.rs
//
// MIT License - Posit PBC

use std::fmt::Display;
use std::fmt::Formatter;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::settings::LinterSettings;
use crate::settings::Settings;

#[derive(Debug)]
pub enum ParseTomlError {
    Read(PathBuf, io::Error),
    Deserialize(PathBuf, toml::de::Error),
}

impl std::error::Error for ParseTomlError {}

impl Display for ParseTomlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // It's nicer if we don't make these paths relative, so we can quickly
            // jump to the TOML file to see what is wrong
            Self::Read(path, err) => {
                write!(f, "Failed to read {path}:\n{err}", path = path.display())
            }
            Self::Deserialize(path, err) => {
                write!(f, "Failed to parse {path}:\n{err}", path = path.display())
            }
        }
    }
}

pub fn parse_gmlint_toml(path: &Path) -> Result<TomlOptions, ParseTomlError> {
    let toml = fs::read_to_string(path)
        .map_err(|err| ParseTomlError::Read(path.to_path_buf(), err))?;
    toml::from_str(&toml).map_err(|err| ParseTomlError::Deserialize(path.to_path_buf(), err))
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    #[serde(flatten)]
    pub global: GlobalTomlOptions,
    pub lint: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GlobalTomlOptions {}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    /// # Rules to select
    ///
    /// If this is empty, then all rules that are provided by `gmlint` are
    /// used. Group names (`CORR`, `STYLE`) expand to every rule in that
    /// group.
    pub select: Option<Vec<String>>,

    /// # Rules to ignore
    ///
    /// If this is empty, then no rules are excluded. This field has higher
    /// importance than `select`, so if a rule name appears by mistake in both
    /// `select` and `ignore`, it is ignored.
    pub ignore: Option<Vec<String>>,

    /// # Patterns to exclude from checking
    ///
    /// By default, gmlint will refuse to check files matched by patterns listed in
    /// `default-exclude`. Use this option to supply an additional list of exclude
    /// patterns.
    ///
    /// Exclude patterns are modeled after what you can provide in a
    /// [.gitignore](https://git-scm.com/docs/gitignore), and are resolved relative to the
    /// parent directory that your `gmlint.toml` is contained within. For example, if your
    /// `gmlint.toml` was located at `root/gmlint.toml`, then:
    ///
    /// - `file.gml` excludes a file named `file.gml` located anywhere below `root/`. This
    ///   is equivalent to `**/file.gml`.
    ///
    /// - `folder/` excludes a directory named `folder` (and all of its children) located
    ///   anywhere below `root/`. You can also just use `folder`, but this would
    ///   technically also match a file named `folder`, so the trailing slash is preferred
    ///   when targeting directories. This is equivalent to `**/folder/`.
    ///
    /// - `/file.gml` excludes a file named `file.gml` located at `root/file.gml`.
    ///
    /// - `/folder/` excludes a directory named `folder` (and all of its children) located
    ///   at `root/folder/`.
    ///
    /// - `file-*.gml` excludes GML files named like `file-this.gml` and `file-that.gml`
    ///   located anywhere below `root/`.
    ///
    /// - `folder/*.gml` excludes all GML files located at `root/folder/`. Note that GML
    ///   files in directories under `folder/` are not excluded in this case (such as
    ///   `root/folder/subfolder/file.gml`).
    ///
    /// - `folder/**/*.gml` excludes all GML files located anywhere below `root/folder/`.
    ///
    /// See the full [.gitignore](https://git-scm.com/docs/gitignore) documentation for
    /// all of the patterns you can provide.
    pub exclude: Option<Vec<String>>,

    /// # Whether or not to use default exclude patterns
    ///
    /// gmlint automatically excludes a default set of folders and files. If this option
    /// is set to `false`, these files will be checked as well.
    ///
    /// The default set of excluded patterns are:
    /// - `.git/`
    /// - `datafiles/`
    /// - `fixed_*.gml`
    pub default_exclude: Option<bool>,
}

/// Return the path to the `gmlint.toml` or `.gmlint.toml` file in a given directory.
pub fn find_gmlint_toml_in_directory<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    // Check for `gmlint.toml` first, as we prioritize the "visible" one.
    let toml = path.as_ref().join("gmlint.toml");
    if toml.is_file() {
        return Some(toml);
    }

    // Now check for `.gmlint.toml` as well
    let toml = path.as_ref().join(".gmlint.toml");
    if toml.is_file() {
        return Some(toml);
    }

    // Didn't find a configuration file
    None
}

/// Find the path to the closest `gmlint.toml` or `.gmlint.toml` if one exists, walking up the filesystem
pub fn find_gmlint_toml<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    for directory in path.as_ref().ancestors() {
        if let Some(toml) = find_gmlint_toml_in_directory(directory) {
            return Some(toml);
        }
    }
    None
}

impl TomlOptions {
    pub fn into_settings(self, _root: &Path) -> anyhow::Result<Settings> {
        let linter = self.lint.unwrap_or_default();

        let linter = LinterSettings {
            select: linter.select,
            ignore: linter.ignore,
            exclude: linter.exclude,
            default_exclude: linter.default_exclude,
        };

        Ok(Settings { linter })
    }
}
