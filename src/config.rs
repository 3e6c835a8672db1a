//! Optional per-repository settings.
//!
//! A `.tag-release.json` at the repository top level can move the target file,
//! pick another remote or change the message templates. Command-line flags and
//! their environment variables take precedence over the file, which takes
//! precedence over the built-in defaults.

use std::fs;
use std::path::Path;

use anyhow::Context;
use regex::{Captures, Regex};
use serde::Deserialize;

use crate::prelude::*;

pub const CONFIG_FILE: &str = ".tag-release.json";

pub const DEFAULT_FILE: &str = "plugin/util.py";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_COMMIT_MESSAGE: &str = "Bump version to {version}";
pub const DEFAULT_TAG_MESSAGE: &str = "Release {version}";

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repository-relative path of the file holding the version declaration.
    pub file: Option<String>,
    pub remote: Option<String>,
    pub commit_message: Option<String>,
    pub tag_message: Option<String>,
}

impl Config {
    /// Load `explicit` if given (it must exist), else `<root>/.tag-release.json`
    /// if present, else the defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = root.join(CONFIG_FILE);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Message text with `{version}` and `{tag}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template(String);

impl Template {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitutes both placeholders in a single pass; the inserted text is
    /// never scanned again.
    pub fn render(&self, version: &str, tag: &str) -> Result<String> {
        let placeholder = Regex::new(r"\{(version|tag)\}")?;

        let rendered = placeholder.replace_all(&self.0, |caps: &Captures| {
            if &caps[1] == "version" {
                version.to_string()
            } else {
                tag.to_string()
            }
        });

        Ok(rendered.into_owned())
    }
}
