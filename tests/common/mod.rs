//! Shared test infrastructure for integration tests.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Output of one `verse` invocation.
#[derive(Debug)]
pub struct RunResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunResult {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// A corpus document placed in a private temp dir.
pub struct CorpusFixture {
    _temp_dir: TempDir,
    pub corpus_path: PathBuf,
}

fn manifest_dir() -> PathBuf {
    PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()))
}

impl CorpusFixture {
    /// Copy `tests/data/{name}` into a fresh temp dir.
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let source = manifest_dir().join("tests/data").join(name);
        let contents = std::fs::read_to_string(&source)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", source.display(), e))?;
        Self::from_json(&contents)
    }

    /// Write an inline corpus document.
    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        let temp_dir = TempDir::new()?;
        let corpus_path = temp_dir.path().join("corpus.json");
        std::fs::write(&corpus_path, contents)?;
        Ok(Self {
            _temp_dir: temp_dir,
            corpus_path,
        })
    }

    /// Run `verse --corpus <fixture> <args...>`.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<RunResult> {
        self.run_with_input(args, "")
    }

    /// Run `verse` with `input` piped to stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> anyhow::Result<RunResult> {
        let mut child = Command::new(env!("CARGO_BIN_EXE_verse"))
            .arg("--corpus")
            .arg(&self.corpus_path)
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes())?;
        }
        Ok(child.wait_with_output()?.into())
    }
}
