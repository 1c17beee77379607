//! Git command runner and repository bootstrap for goscaffold.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling, plus [`init_repository`] which turns a freshly
//! generated project into a repository with an initial commit.

use crate::error::{Result, ScaffoldError};
use crate::fs::write_file;
use std::path::Path;
use std::process::{Command, Output};
use tracing::debug;

/// `.gitignore` written into every new repository.
const GITIGNORE: &str = "# Binaries for programs and plugins
*.exe
*.exe~
*.dll
*.so
*.dylib

# Test binary, built with go test -c
*.test

# Output of the go coverage tool
*.out

# Dependency directories
vendor/

# Go workspace file
go.work

# IDE directories
.idea/
.vscode/
*.swp
*.swo
*~

# OS files
.DS_Store
Thumbs.db

# Environment variables
.env
.env.local

# Build directories
dist/
build/
";

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
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
/// * `Err(ScaffoldError::GitError)` - If git could not be started or exited non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            ScaffoldError::GitError(format!(
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

        Err(ScaffoldError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Initialize a repository in `project_root` with an initial commit.
///
/// Runs `git init`, writes a Go `.gitignore`, stages everything and commits
/// it as "Initial commit". Stops at the first failing step; whatever was
/// done before the failure is left in place.
pub fn init_repository<P: AsRef<Path>>(project_root: P) -> Result<()> {
    let root = project_root.as_ref();

    run_git(root, &["init"])?;
    debug!(path = %root.display(), "initialized git repository");

    let gitignore = root.join(".gitignore");
    write_file(&gitignore, GITIGNORE)
        .map_err(|e| ScaffoldError::GitError(format!("failed to create .gitignore: {}", e)))?;

    run_git(root, &["add", "."])
        .map_err(|e| ScaffoldError::GitError(format!("failed to stage files: {}", e)))?;

    run_git(root, &["commit", "-m", "Initial commit"]).map_err(|e| {
        ScaffoldError::GitError(format!(
            "failed to create initial commit: {}\n\n\
             You may need to configure git user.name and user.email:\n\
             git config --global user.name \"Your Name\"\n\
             git config --global user.email \"you@example.com\"",
            e
        ))
    })?;
    debug!("created initial commit");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::git_available;
    use tempfile::TempDir;

    #[test]
    fn test_run_git_success() {
        if !git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let result = run_git(temp_dir.path(), &["--version"]);
        assert!(result.unwrap().stdout.starts_with("git version"));
    }

    #[test]
    fn test_run_git_failure_returns_git_error() {
        if !git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let result = run_git(temp_dir.path(), &["definitely-not-a-git-command"]);
        let err = result.unwrap_err();
        assert!(matches!(err, ScaffoldError::GitError(_)));
        assert!(err.to_string().contains("definitely-not-a-git-command"));
    }

    #[test]
    fn test_init_repository() {
        if !git_available() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("acme");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("main.go"), "package main\n").unwrap();

        let result = init_repository(&root);

        assert!(root.join(".git").exists());
        let gitignore = std::fs::read_to_string(root.join(".gitignore")).unwrap();
        assert!(gitignore.contains("vendor/"));

        match result {
            Ok(()) => {
                let log = run_git(&root, &["log", "--format=%s"]).unwrap();
                assert_eq!(log.stdout, "Initial commit");
            }
            // Environments without a configured identity cannot commit.
            Err(err) => assert!(err.to_string().contains("initial commit")),
        }
    }

    #[test]
    fn test_init_repository_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = init_repository(temp_dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ScaffoldError::GitError(_)));
    }
}
