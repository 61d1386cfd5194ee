//! Git command runner for amur.
//!
//! Provides a thin wrapper around git commands with captured stdout/stderr
//! and structured error handling. All git operations go through this module.

use crate::error::{AmurError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(AmurError::Git)` - If git cannot be started or exits non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            AmurError::Git(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(AmurError::Git(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Initialize an empty repository in `dir`.
pub fn init_repo<P: AsRef<Path>>(dir: P) -> Result<()> {
    run_git(dir, &["init", "--quiet"])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_repo_creates_git_dir() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join(".git").is_dir());
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path()).unwrap();
        // No commits yet, so HEAD does not resolve.
        let result = run_git(temp_dir.path(), &["rev-parse", "HEAD"]);
        assert!(matches!(result, Err(AmurError::Git(_))));
    }

    #[test]
    fn test_run_git_captures_stdout() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path()).unwrap();

        let output = run_git(temp_dir.path(), &["rev-parse", "--is-inside-work-tree"]).unwrap();
        assert_eq!(output.stdout, "true");
    }
}
