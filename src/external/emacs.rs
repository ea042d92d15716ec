//! Emacs subprocess dispatch
//!
//! Every subcommand funnels through here. The backend locates an Emacs
//! executable, resolves the Elisp script behind a subsystem path like
//! `checker/check-eask`, and runs it with the forwarded arguments plus
//! the translated global options. The child inherits stdio, so whatever
//! the Elisp side prints reaches the user unmodified.

use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::{bail, Context, Result};
use tokio::process::Command;
use tracing::debug;

use crate::cli::{GlobalOpts, Output};

/// Environment variable overriding the Elisp script directory
const LISP_DIR_ENV: &str = "EASK_LISP";

/// Handle on the Emacs executable and the Elisp script tree
pub struct EmacsBackend {
    emacs: PathBuf,
    lisp_dir: PathBuf,
    globals: GlobalOpts,
}

impl EmacsBackend {
    /// Locate the Emacs executable and the backend script directory
    pub fn locate(globals: &GlobalOpts) -> Result<Self> {
        let emacs = match &globals.emacs {
            Some(path) => PathBuf::from(path),
            None => which::which("emacs")
                .context("Emacs executable not found in PATH; install Emacs or set EASK_EMACS")?,
        };

        Ok(Self {
            emacs,
            lisp_dir: lisp_dir()?,
            globals: globals.clone(),
        })
    }

    /// Path of the Elisp script backing a subsystem like `core/reinstall`
    pub fn script_path(&self, subsystem: &str) -> PathBuf {
        self.lisp_dir.join(format!("{subsystem}.el"))
    }

    /// Run the backend script for `subsystem`, forwarding `args` followed
    /// by the global option tokens. Returns the child's exit code.
    pub async fn call(&self, subsystem: &str, args: Vec<String>, output: &Output) -> Result<i32> {
        let script = self.script_path(subsystem);
        if !script.is_file() {
            bail!("backend script not found: {}", script.display());
        }

        let mut forwarded = args;
        forwarded.extend(global_flags(&self.globals));

        if output.is_verbose() {
            output.step(&format!(
                "Running: {} -Q --script {} -- {}",
                self.emacs.display(),
                script.display(),
                forwarded.join(" ")
            ));
        }
        debug!(script = %script.display(), ?forwarded, "dispatching to emacs");

        let status = Command::new(&self.emacs)
            .arg("-Q")
            .arg("--script")
            .arg(&script)
            .arg("--")
            .args(&forwarded)
            .status()
            .await
            .with_context(|| format!("failed to run {}", self.emacs.display()))?;

        let code = exit_code(status);
        if code != 0 {
            output.verbose(&format!("backend exited with code {code}"));
        }
        Ok(code)
    }
}

/// Translate a boolean option into its flag token when present
pub fn flag_if(present: bool, token: &str) -> Vec<String> {
    if present {
        vec![token.to_string()]
    } else {
        Vec::new()
    }
}

/// Translate a valued option into its token pair when set
pub fn flag_with(value: Option<&str>, token: &str) -> Vec<String> {
    match value {
        Some(value) => vec![token.to_string(), value.to_string()],
        None => Vec::new(),
    }
}

/// Global options rendered as backend command-line tokens
fn global_flags(globals: &GlobalOpts) -> Vec<String> {
    let mut flags = Vec::new();
    flags.extend(flag_if(globals.global, "--global"));
    flags.extend(flag_if(globals.all, "--all"));
    flags.extend(flag_if(globals.quick, "--quick"));
    flags.extend(flag_if(globals.force, "--force"));
    flags.extend(flag_if(globals.debug, "--debug"));
    flags.extend(flag_if(globals.strict, "--strict"));
    flags.extend(flag_if(globals.allow_error, "--allow-error"));
    flags.extend(flag_if(globals.insecure, "--insecure"));
    flags.extend(flag_if(globals.timestamps, "--timestamps"));
    flags.extend(flag_with(globals.log_level.as_deref(), "--log-level"));
    flags.extend(flag_if(globals.no_color, "--no-color"));
    if globals.verbose > 0 {
        flags.push("--verbose".to_string());
        flags.push(globals.verbose.to_string());
    }
    flags
}

/// Resolve the directory holding the Elisp backend scripts
fn lisp_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(LISP_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let exe = env::current_exe().context("cannot resolve the running executable")?;
    let base = exe.parent().unwrap_or(Path::new("."));
    Ok(base.join("lisp"))
}

/// Exit code of a finished child; signal termination maps to 1
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_if() {
        assert_eq!(flag_if(true, "--json"), vec!["--json"]);
        assert!(flag_if(false, "--json").is_empty());
    }

    #[test]
    fn test_flag_with() {
        assert_eq!(
            flag_with(Some("lint.txt"), "--output"),
            vec!["--output", "lint.txt"]
        );
        assert!(flag_with(None, "--output").is_empty());
    }

    #[test]
    fn test_global_flags_empty_by_default() {
        assert!(global_flags(&GlobalOpts::default()).is_empty());
    }

    #[test]
    fn test_global_flags_translation() {
        let globals = GlobalOpts {
            strict: true,
            log_level: Some("debug".to_string()),
            verbose: 2,
            ..Default::default()
        };
        assert_eq!(
            global_flags(&globals),
            vec!["--strict", "--log-level", "debug", "--verbose", "2"]
        );
    }

    #[test]
    fn test_global_flags_keep_declaration_order() {
        let globals = GlobalOpts {
            global: true,
            force: true,
            no_color: true,
            ..Default::default()
        };
        assert_eq!(
            global_flags(&globals),
            vec!["--global", "--force", "--no-color"]
        );
    }

    #[test]
    fn test_script_path() {
        let backend = EmacsBackend {
            emacs: PathBuf::from("emacs"),
            lisp_dir: PathBuf::from("/opt/eask/lisp"),
            globals: GlobalOpts::default(),
        };
        assert_eq!(
            backend.script_path("checker/check-eask"),
            Path::new("/opt/eask/lisp/checker/check-eask.el")
        );
    }
}
