//! `.env`-style files: `KEY=VALUE` per line.

use std::path::{Path, PathBuf};

use super::{EnvSource, MapEnv};

#[derive(Debug, thiserror::Error)]
pub enum EnvFileError {
    #[error("read env file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("env file line {line}: expected KEY=VALUE, got {content:?}")]
    Malformed { line: usize, content: String },
}

/// Variables parsed from a `.env` file.
///
/// Blank lines and `#` comments are skipped, an `export ` prefix is allowed,
/// and one pair of matching surrounding quotes is stripped from the value.
/// Later assignments to the same key win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotEnv {
    vars: MapEnv,
}

impl DotEnv {
    pub fn parse(contents: &str) -> Result<Self, EnvFileError> {
        let mut vars = MapEnv::new();
        for (idx, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let malformed = || EnvFileError::Malformed {
                line: idx + 1,
                content: raw.to_string(),
            };
            let (key, value) = line.split_once('=').ok_or_else(malformed)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(malformed());
            }
            vars.set(key, unquote(value.trim()));
        }
        Ok(Self { vars })
    }

    pub fn from_path(path: &Path) -> Result<Self, EnvFileError> {
        let contents = std::fs::read_to_string(path).map_err(|source| EnvFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let env = Self::parse(&contents)?;
        tracing::debug!(path = %path.display(), vars = env.vars.len(), "loaded env file");
        Ok(env)
    }
}

fn unquote(value: &str) -> &str {
    for q in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(q) && value.ends_with(q) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

impl EnvSource for DotEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_pairs_comments_and_blanks() {
        let env = DotEnv::parse(
            "# frontend settings\n\nVITE_API_URL=https://api.example.com\nOTHER = x \n",
        )
        .unwrap();
        assert_eq!(
            env.get("VITE_API_URL").as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(env.get("OTHER").as_deref(), Some("x"));
    }

    #[test]
    fn strips_export_and_quotes() {
        let env = DotEnv::parse("export A=\"/custom/api/path\"\nB='q'\nC=\"\"\n").unwrap();
        assert_eq!(env.get("A").as_deref(), Some("/custom/api/path"));
        assert_eq!(env.get("B").as_deref(), Some("q"));
        assert_eq!(env.get("C").as_deref(), Some(""));
    }

    #[test]
    fn value_may_contain_equals() {
        let env = DotEnv::parse("A=https://h/x?a=b").unwrap();
        assert_eq!(env.get("A").as_deref(), Some("https://h/x?a=b"));
    }

    #[test]
    fn later_assignment_wins() {
        let env = DotEnv::parse("A=1\nA=2\n").unwrap();
        assert_eq!(env.get("A").as_deref(), Some("2"));
    }

    #[test]
    fn line_without_equals_is_malformed() {
        let err = DotEnv::parse("A=1\nnot a pair\n").unwrap_err();
        match err {
            EnvFileError::Malformed { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "not a pair");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn empty_key_is_malformed() {
        assert!(matches!(
            DotEnv::parse("=value"),
            Err(EnvFileError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "VITE_API_URL=/from/file").unwrap();
        let env = DotEnv::from_path(file.path()).unwrap();
        assert_eq!(env.get("VITE_API_URL").as_deref(), Some("/from/file"));
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.env");
        let err = DotEnv::from_path(&path).unwrap_err();
        assert!(matches!(err, EnvFileError::Io { .. }));
        assert!(err.to_string().contains("missing.env"));
    }
}
