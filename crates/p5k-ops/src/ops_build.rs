//! Operation: build a target through the external builder.
//!
//! The boot workflow only needs one thing from a build: the path of the
//! produced artifact. [`BuildService`] is that narrow seam; [`ExternalBuilder`]
//! implements it by running the builder configured in `p5k.toml`.

use std::path::{Path, PathBuf};
use std::process::Output;

use p5k_core::config::{BuilderConfig, ProjectConfig};
use p5k_core::CONFIG_FILE;
use p5k_util::errors::{P5kError, P5kResult};
use p5k_util::process::CommandBuilder;
use p5k_util::progress::{spinner, status};

/// Lines of captured builder output kept in a build failure message.
const FAILURE_TAIL_LINES: usize = 20;

/// Something that can turn a (target, profile) pair into an artifact.
pub trait BuildService {
    fn build(&self, target: &str, profile: &str) -> Result<BuildResult, P5kError>;
}

/// Result of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildResult {
    pub target: String,
    pub profile: String,
    outfile: PathBuf,
}

impl BuildResult {
    pub fn new(target: impl Into<String>, profile: impl Into<String>, outfile: PathBuf) -> Self {
        Self {
            target: target.into(),
            profile: profile.into(),
            outfile,
        }
    }

    /// Path of the produced artifact.
    pub fn outfile(&self) -> &Path {
        &self.outfile
    }
}

/// Runs the project's builder program from the project root.
pub struct ExternalBuilder {
    root: PathBuf,
    config: BuilderConfig,
    verbose: bool,
}

impl ExternalBuilder {
    pub fn new(root: impl Into<PathBuf>, config: BuilderConfig, verbose: bool) -> Self {
        Self {
            root: root.into(),
            config,
            verbose,
        }
    }

    /// Locate the project root from `cwd` and load its builder configuration.
    pub fn from_project(cwd: &Path, verbose: bool) -> P5kResult<Self> {
        let root = p5k_util::fs::project_root(cwd, CONFIG_FILE);
        let config = ProjectConfig::load(&root)?;
        Ok(Self::new(root, config.builder, verbose))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn command(&self, target: &str, profile: &str) -> CommandBuilder {
        let mut cmd = CommandBuilder::new(&self.config.program)
            .args(self.config.render_args(target, profile))
            .cwd(&self.root);
        for (k, v) in &self.config.env {
            cmd = cmd.env(k, v);
        }
        cmd
    }

    /// Run the builder with inherited stdio.
    fn run_foreground(&self, cmd: &CommandBuilder) -> Result<(), P5kError> {
        let exit = cmd.status().map_err(|e| self.start_failure(e))?;
        if exit.success() {
            Ok(())
        } else {
            Err(P5kError::Build {
                message: format!("`{}` exited with {exit}", self.config.program),
            })
        }
    }

    /// Run the builder behind a spinner, keeping its output for the error message.
    fn run_captured(&self, cmd: &CommandBuilder, label: &str) -> Result<(), P5kError> {
        let pb = spinner(&format!("Building {label}"));
        let output = cmd.exec();
        pb.finish_and_clear();

        let output = output.map_err(|e| self.start_failure(e))?;
        if output.status.success() {
            return Ok(());
        }

        let mut message = format!("`{}` exited with {}", self.config.program, output.status);
        let tail = output_tail(&output);
        if !tail.is_empty() {
            message.push('\n');
            message.push_str(&tail);
        }
        Err(P5kError::Build { message })
    }

    fn start_failure(&self, err: P5kError) -> P5kError {
        P5kError::Build {
            message: format!("could not run `{}`: {err}", self.config.program),
        }
    }
}

impl BuildService for ExternalBuilder {
    fn build(&self, target: &str, profile: &str) -> Result<BuildResult, P5kError> {
        let label = format!("{target} ({profile})");
        let cmd = self.command(target, profile);
        tracing::debug!("running builder `{cmd}` in {}", self.root.display());

        if self.verbose {
            status("Building", &label);
            self.run_foreground(&cmd)?;
        } else {
            self.run_captured(&cmd, &label)?;
        }

        let outfile = self.config.render_artifact(&self.root, target, profile);
        if !outfile.is_file() {
            return Err(P5kError::Build {
                message: format!(
                    "`{}` succeeded but produced no artifact at {}",
                    self.config.program,
                    outfile.display()
                ),
            });
        }

        status("Finished", &format!("{label} -> {}", outfile.display()));
        Ok(BuildResult::new(target, profile, outfile))
    }
}

/// Last lines of stderr, or of stdout when stderr is empty.
fn output_tail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout)
    } else {
        stderr
    };
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(FAILURE_TAIL_LINES);
    lines[start..].join("\n")
}
