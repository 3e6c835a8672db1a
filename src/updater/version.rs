use std::fs;
use std::ops::Range;
use std::path::Path;

use regex::Regex;

use crate::prelude::*;

/// The shapes of version declaration we know how to rewrite, in the order
/// they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// `version = "1.2.3"` at the start of a line.
    Assignment,
    /// `"version": "1.2.3"` anywhere in the text.
    MappingEntry,
}

impl Declaration {
    pub const ALL: [Declaration; 2] = [Declaration::Assignment, Declaration::MappingEntry];

    // The value quotes must pair up, hence one alternative per quote style.
    fn pattern(self) -> &'static str {
        match self {
            Declaration::Assignment => r#"(?m)^\s*version\s*=\s*(?:"([^'"]+)"|'([^'"]+)')"#,
            Declaration::MappingEntry => r#"['"]version['"]\s*:\s*(?:"([^'"]+)"|'([^'"]+)')"#,
        }
    }
}

/// Where the current version value sits in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    pub declaration: Declaration,
    pub current: String,
    pub value: Range<usize>,
}

/// Find the first declaration of the first pattern that matches anywhere.
pub fn locate(text: &str) -> Result<Option<Located>> {
    for declaration in Declaration::ALL {
        let regex = Regex::new(declaration.pattern())?;

        let value = regex
            .captures(text)
            .and_then(|c| c.get(1).or_else(|| c.get(2)));

        if let Some(value) = value {
            return Ok(Some(Located {
                declaration,
                current: value.as_str().to_string(),
                value: value.range(),
            }));
        }
    }

    Ok(None)
}

/// Splice `version` over the located value. Nothing else in `text` moves.
pub fn replace(text: &str, located: &Located, version: &str) -> String {
    let mut updated = String::with_capacity(text.len() + version.len());
    updated.push_str(&text[..located.value.start]);
    updated.push_str(version);
    updated.push_str(&text[located.value.end..]);
    updated
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file already declared the requested version and was not written.
    Unchanged,
    Updated { previous: String },
}

/// Rewrite the version declared in the file at `path`.
pub fn set_version(path: &Path, version: &str) -> Result<Outcome> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    let located = locate(&content)?.ok_or_else(|| Error::VersionNotFound {
        path: path.to_path_buf(),
    })?;

    if located.current == version {
        return Ok(Outcome::Unchanged);
    }

    let updated = replace(&content, &located, version);
    fs::write(path, updated).map_err(|e| Error::io(path, e))?;

    Ok(Outcome::Updated {
        previous: located.current,
    })
}

/// True when both sides are semantic versions and `new` does not move forward.
pub fn is_downgrade(current: &str, new: &str) -> bool {
    let parse = |v: &str| semver::Version::parse(v.trim_start_matches('v')).ok();

    match (parse(current), parse(new)) {
        (Some(current), Some(new)) => new <= current,
        _ => false,
    }
}
