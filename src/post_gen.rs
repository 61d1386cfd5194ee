//! Collaborators that run after a project has been generated.
//!
//! Neither collaborator takes part in generation. They receive the finished
//! output root and the flags recorded on the [`GenerationOutcome`].

use crate::error::{AmurError, Result};
use crate::generator::GenerationOutcome;
use crate::git;
use std::path::Path;
use std::process::Command;

/// Installs the generated project's dependencies.
pub trait Installer {
    fn install(&self, project_root: &Path) -> Result<()>;
}

/// Puts the generated project under version control.
pub trait VcsInitializer {
    fn init(&self, project_root: &Path) -> Result<()>;
}

/// Runs the configured install command inside the project root.
///
/// The command is split with shell-words and executed directly, without a
/// shell. Its output is inherited so the user sees installer progress.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    command: String,
}

impl CommandInstaller {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Installer for CommandInstaller {
    fn install(&self, project_root: &Path) -> Result<()> {
        let args = shell_words::split(&self.command).map_err(|e| {
            AmurError::Install(format!(
                "failed to parse install command '{}': {}",
                self.command, e
            ))
        })?;
        let Some((program, rest)) = args.split_first() else {
            return Err(AmurError::Install("install command is empty".to_string()));
        };

        tracing::info!(command = %self.command, root = %project_root.display(), "installing dependencies");
        let status = Command::new(program)
            .args(rest)
            .current_dir(project_root)
            .status()
            .map_err(|e| {
                AmurError::Install(format!(
                    "failed to execute '{}': {} (is it installed and in PATH?)",
                    self.command, e
                ))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(AmurError::Install(format!(
                "'{}' exited with code {}",
                self.command,
                status.code().unwrap_or(-1)
            )))
        }
    }
}

/// Runs `git init` in the project root.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitInitializer;

impl VcsInitializer for GitInitializer {
    fn init(&self, project_root: &Path) -> Result<()> {
        tracing::info!(root = %project_root.display(), "initializing git repository");
        git::init_repo(project_root)
    }
}

/// Which collaborators ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostGenReport {
    pub installed: bool,
    pub vcs_initialized: bool,
}

/// Invoke the collaborators the recorded flags ask for.
///
/// Dependencies are installed unless `skip_install` is set; the repository is
/// initialized only when `git_init` is set. The first failure is returned.
pub fn run_post_generation(
    outcome: &GenerationOutcome,
    installer: &dyn Installer,
    vcs: &dyn VcsInitializer,
) -> Result<PostGenReport> {
    let mut report = PostGenReport::default();

    if outcome.flags.git_init {
        vcs.init(&outcome.output_root)?;
        report.vcs_initialized = true;
    }

    if !outcome.flags.skip_install {
        installer.install(&outcome.output_root)?;
        report.installed = true;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ProjectFlags;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<PathBuf>>,
    }

    impl Installer for Recorder {
        fn install(&self, project_root: &Path) -> Result<()> {
            self.calls.borrow_mut().push(project_root.to_path_buf());
            Ok(())
        }
    }

    impl VcsInitializer for Recorder {
        fn init(&self, project_root: &Path) -> Result<()> {
            self.calls.borrow_mut().push(project_root.to_path_buf());
            Ok(())
        }
    }

    struct FailingInstaller;

    impl Installer for FailingInstaller {
        fn install(&self, _project_root: &Path) -> Result<()> {
            Err(AmurError::Install("offline".to_string()))
        }
    }

    fn outcome(flags: ProjectFlags) -> GenerationOutcome {
        GenerationOutcome {
            output_root: PathBuf::from("/tmp/brand-new-app"),
            files: Vec::new(),
            flags,
        }
    }

    #[test]
    fn installs_by_default_without_git() {
        let installer = Recorder::default();
        let vcs = Recorder::default();

        let report =
            run_post_generation(&outcome(ProjectFlags::default()), &installer, &vcs).unwrap();

        assert_eq!(
            report,
            PostGenReport {
                installed: true,
                vcs_initialized: false
            }
        );
        assert_eq!(
            *installer.calls.borrow(),
            vec![PathBuf::from("/tmp/brand-new-app")]
        );
        assert!(vcs.calls.borrow().is_empty());
    }

    #[test]
    fn skip_install_never_invokes_installer() {
        let installer = Recorder::default();
        let vcs = Recorder::default();
        let flags = ProjectFlags {
            test: true,
            skip_install: true,
            ..Default::default()
        };

        let report = run_post_generation(&outcome(flags), &installer, &vcs).unwrap();

        assert!(!report.installed);
        assert!(installer.calls.borrow().is_empty());
    }

    #[test]
    fn git_init_flag_invokes_vcs() {
        let installer = Recorder::default();
        let vcs = Recorder::default();
        let flags = ProjectFlags {
            git_init: true,
            skip_install: true,
            ..Default::default()
        };

        let report = run_post_generation(&outcome(flags), &installer, &vcs).unwrap();

        assert!(report.vcs_initialized);
        assert_eq!(vcs.calls.borrow().len(), 1);
    }

    #[test]
    fn installer_failure_propagates() {
        let vcs = Recorder::default();
        let err = run_post_generation(&outcome(ProjectFlags::default()), &FailingInstaller, &vcs)
            .unwrap_err();
        assert!(matches!(err, AmurError::Install(ref m) if m == "offline"));
    }

    #[test]
    fn command_installer_rejects_empty_command() {
        let temp_dir = TempDir::new().unwrap();
        let err = CommandInstaller::new("  ")
            .install(temp_dir.path())
            .unwrap_err();
        assert!(matches!(err, AmurError::Install(_)));
    }

    #[test]
    fn command_installer_reports_missing_program() {
        let temp_dir = TempDir::new().unwrap();
        let err = CommandInstaller::new("amur-no-such-installer-binary install")
            .install(temp_dir.path())
            .unwrap_err();
        assert!(matches!(err, AmurError::Install(ref m) if m.contains("failed to execute")));
    }

    #[test]
    fn git_initializer_creates_repository() {
        let temp_dir = TempDir::new().unwrap();
        GitInitializer.init(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join(".git").is_dir());
    }
}
