//! Reader for MSBuild C++ project descriptors.
//!
//! Consumes only the pieces of a `.vcxproj` file the rules need: declared
//! header items (`ClInclude`), declared source items (`ClCompile` with an
//! `Include` attribute), and per-configuration compile settings
//! (`ItemDefinitionGroup`/`ClCompile`). Everything else in the descriptor
//! is skipped over.

use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Errors that make a single project descriptor unusable.
///
/// Fatal for that project only; sibling projects keep being processed.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("reading project file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed project descriptor {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Warning-related compile settings of one `ItemDefinitionGroup`.
///
/// A group without a `ClCompile` child, or whose `ClCompile` omits a flag,
/// leaves that flag `None`. The rules treat an absent flag as failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub treat_warning_as_error: Option<String>,
    pub warning_level: Option<String>,
}

impl BuildConfig {
    /// True if this configuration treats warnings as errors.
    pub fn warnings_are_errors(&self) -> bool {
        self.treat_warning_as_error
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// True if this configuration's warning level ends in 4.
    ///
    /// Suffix match on purpose: MSBuild writes the level as e.g. `Level4`.
    pub fn has_warning_level_4(&self) -> bool {
        self.warning_level
            .as_deref()
            .map(|v| v.ends_with('4'))
            .unwrap_or(false)
    }
}

/// In-memory snapshot of one project descriptor's declarations.
#[derive(Debug, Clone, Default)]
pub struct ProjectDescriptor {
    /// Declared header files, resolved against the descriptor's directory.
    pub headers: Vec<PathBuf>,
    /// Declared source files, resolved against the descriptor's directory.
    /// `ClCompile` items without an `Include` path are dropped.
    pub sources: Vec<PathBuf>,
    /// One entry per `ItemDefinitionGroup`, in document order.
    pub configurations: Vec<BuildConfig>,
}

impl ProjectDescriptor {
    /// Parse the descriptor at `path`.
    pub fn parse_file(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&content, dir).map_err(|message| DescriptorError::Malformed {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse descriptor XML, resolving declared paths against `dir`.
    pub fn parse(content: &str, dir: &Path) -> Result<Self, String> {
        let mut reader = Reader::from_str(content);
        let mut descriptor = ProjectDescriptor::default();

        // MSBuild puts everything in an unprefixed default namespace, so
        // matching local element names is sufficient.
        let mut in_definition_group = false;
        let mut in_compile_settings = false;
        let mut current = BuildConfig::default();

        loop {
            match reader.read_event().map_err(|e| e.to_string())? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"ItemDefinitionGroup" => {
                        in_definition_group = true;
                        current = BuildConfig::default();
                    }
                    b"ClInclude" => {
                        if let Some(include) = include_attribute(&e)? {
                            descriptor.headers.push(resolve(dir, &include));
                        }
                    }
                    b"ClCompile" => {
                        if let Some(include) = include_attribute(&e)? {
                            descriptor.sources.push(resolve(dir, &include));
                        } else if in_definition_group {
                            in_compile_settings = true;
                        }
                    }
                    b"TreatWarningAsError" if in_compile_settings => {
                        let text = reader.read_text(e.name()).map_err(|e| e.to_string())?;
                        current.treat_warning_as_error = Some(text.into_owned());
                    }
                    b"WarningLevel" if in_compile_settings => {
                        let text = reader.read_text(e.name()).map_err(|e| e.to_string())?;
                        current.warning_level = Some(text.into_owned());
                    }
                    _ => {}
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"ClInclude" => {
                        if let Some(include) = include_attribute(&e)? {
                            descriptor.headers.push(resolve(dir, &include));
                        }
                    }
                    b"ClCompile" => {
                        if let Some(include) = include_attribute(&e)? {
                            descriptor.sources.push(resolve(dir, &include));
                        }
                    }
                    _ => {}
                },
                Event::End(e) => match e.local_name().as_ref() {
                    b"ClCompile" => in_compile_settings = false,
                    b"ItemDefinitionGroup" => {
                        descriptor.configurations.push(std::mem::take(&mut current));
                        in_definition_group = false;
                        in_compile_settings = false;
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(descriptor)
    }
}

/// Read the `Include` attribute of an item element, if present.
fn include_attribute(e: &quick_xml::events::BytesStart<'_>) -> Result<Option<String>, String> {
    match e.try_get_attribute("Include").map_err(|e| e.to_string())? {
        Some(attr) => {
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// Join a declared relative path onto the project directory.
///
/// Descriptors use backslash separators regardless of host platform;
/// normalize to the platform convention before joining.
fn resolve(dir: &Path, declared: &str) -> PathBuf {
    let normalized = declared.replace('\\', std::path::MAIN_SEPARATOR_STR);
    dir.join(normalized)
}
