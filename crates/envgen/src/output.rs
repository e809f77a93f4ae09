//! Writing the generated source.

use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::Error;

/// Where the generated source goes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Output {
    /// A file, created or truncated.
    File(PathBuf),

    /// Standard output, selected with `-`.
    Stdout,
}

impl Output {
    /// Path used in error messages.
    fn path(&self) -> PathBuf {
        match self {
            Output::File(path) => path.clone(),
            Output::Stdout => PathBuf::from("<stdout>"),
        }
    }
}

impl From<PathBuf> for Output {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Output::Stdout
        } else {
            Output::File(path)
        }
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Output::File(path) => write!(f, "{}", path.display()),
            Output::Stdout => write!(f, "-"),
        }
    }
}

/// Writes `source` to `output`.
///
/// Files go through three stages, each with its own error: create
/// ([`Error::Open`]), write ([`Error::Write`]), flush and sync
/// ([`Error::Close`]).
pub fn write_output(output: &Output, source: &str) -> Result<(), Error> {
    match output {
        Output::File(path) => write_file(path, source),
        Output::Stdout => {
            let mut stdout = io::stdout().lock();

            stdout
                .write_all(source.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| Error::Write {
                    path: output.path(),
                    source,
                })
        }
    }
}

fn write_file(path: &Path, source: &str) -> Result<(), Error> {
    let file = File::create(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);

    writer
        .write_all(source.as_bytes())
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

    let file = writer.into_inner().map_err(|error| Error::Close {
        path: path.to_path_buf(),
        source: error.into_error(),
    })?;

    file.sync_all().map_err(|source| Error::Close {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = source.len(), "wrote output");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_dash_is_stdout() {
        assert_eq!(Output::from(PathBuf::from("-")), Output::Stdout);
        assert_eq!(
            Output::from(PathBuf::from("src/env.rs")),
            Output::File(PathBuf::from("src/env.rs"))
        );
    }

    #[test]
    fn test_writes_and_truncates() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("env.rs");
        fs::write(&path, "old content that is longer than the new one").expect("seed");

        write_output(&Output::File(path.clone()), "new").expect("should write");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "new");
    }

    #[test]
    fn test_missing_parent_is_open_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("env.rs");

        assert!(matches!(
            write_output(&Output::File(path), "x"),
            Err(Error::Open { .. })
        ));
    }
}
