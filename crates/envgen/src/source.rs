//! Reading the `.env` file.

use std::collections::HashMap;
use std::path::Path;

use crate::Error;

/// Reads `path` into a key/value map.
///
/// Parsing follows `dotenvy`: comments, `export` prefixes, quoting and
/// `${VAR}` substitution are handled there. When a key repeats, the last
/// occurrence wins. Nothing is written to the process environment.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, Error> {
    let read_error = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let mapping = dotenvy::from_path_iter(path)
        .map_err(read_error)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(read_error)?;

    tracing::debug!(path = %path.display(), variables = mapping.len(), "read .env file");

    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn test_reads_pairs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        fs::write(&path, "# comment\nPORT=8080\nNAME=\"my svc\"\n\nexport DEBUG=true\n")
            .expect("write .env");

        let mapping = read_env_file(&path).expect("should read");

        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping["PORT"], "8080");
        assert_eq!(mapping["NAME"], "my svc");
        assert_eq!(mapping["DEBUG"], "true");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        fs::write(&path, "PORT=1\nPORT=2\n").expect("write .env");

        assert_eq!(read_env_file(&path).expect("should read")["PORT"], "2");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.env");

        assert!(matches!(
            read_env_file(&path),
            Err(Error::Read { path: ref p, .. }) if *p == path
        ));
    }

    #[test]
    fn test_malformed_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(".env");
        fs::write(&path, "NOT A PAIR\n").expect("write .env");

        assert!(matches!(read_env_file(&path), Err(Error::Read { .. })));
    }
}
