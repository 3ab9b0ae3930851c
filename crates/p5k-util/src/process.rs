use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

use crate::errors::P5kError;

/// Builder for constructing and executing external processes.
///
/// Provides a fluent API for setting program, arguments, environment variables, and working directory.
/// A built command can be run captured ([`exec`](Self::exec)), in the foreground with inherited
/// stdio ([`status`](Self::status)), or in place of the current process ([`replace`](Self::replace)).
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
    cwd: Option<PathBuf>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Set the working directory for the child process.
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Execute the command, capturing stdout and stderr.
    pub fn exec(&self) -> Result<Output, P5kError> {
        self.command().output().map_err(P5kError::from)
    }

    /// Execute the command in the foreground with inherited stdio and wait for it.
    pub fn status(&self) -> Result<ExitStatus, P5kError> {
        self.command().status().map_err(P5kError::from)
    }

    /// Replace the current process with the command.
    ///
    /// On Unix this calls `execvp` and only returns if the program could not be
    /// started. Elsewhere the command is spawned with inherited stdio and its
    /// exit status is returned once it terminates.
    pub fn replace(&self) -> Result<ExitStatus, P5kError> {
        let mut cmd = self.command();
        tracing::debug!("replacing process with `{self}`");
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            let err = cmd.exec();
            Err(P5kError::from(err))
        }
        #[cfg(not(unix))]
        {
            cmd.status().map_err(P5kError::from)
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (k, v) in &self.env {
            cmd.env(k, v);
        }
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl fmt::Display for CommandBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
