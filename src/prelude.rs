use std::path::PathBuf;

/// Every way a release run can stop early.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("working tree is not clean; commit or use --allow-dirty")]
    DirtyWorkingTree { entries: usize, untracked: usize },

    /// Neither the assignment nor the mapping-entry pattern matched.
    #[error("failed to locate a 'version' entry in {}; please update manually", path.display())]
    VersionNotFound { path: PathBuf },

    #[error(
        "git command failed: `{program} {}` ({status}): {}",
        crate::cmd::render_args(args),
        stderr.trim()
    )]
    Command {
        program: String,
        args: Vec<String>,
        status: String,
        stderr: String,
    },

    #[error("failed to run `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to update {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Process exit status callers can branch on.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::VersionNotFound { .. } => 2,
            _ => 1,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
