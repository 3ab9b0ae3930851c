use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use p5k_util::errors::P5kError;

use crate::CONFIG_FILE;

/// Project configuration loaded from `p5k.toml` at the project root.
///
/// Only the build collaborator is configurable; the emulator invocation is fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// External builder settings from `[builder]`.
///
/// `args` and `artifact` may contain the `{target}` and `{profile}` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default = "default_artifact")]
    pub artifact: String,

    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            artifact: default_artifact(),
            env: BTreeMap::new(),
        }
    }
}

fn default_program() -> String {
    "ck".to_string()
}

fn default_args() -> Vec<String> {
    vec![
        "build".to_string(),
        "--target={profile}".to_string(),
        "{target}".to_string(),
    ]
}

fn default_artifact() -> String {
    ".cutekit/build/{profile}/{target}/{target}.elf".to_string()
}

impl BuilderConfig {
    /// Builder arguments with placeholders substituted.
    pub fn render_args(&self, target: &str, profile: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|a| expand(a, target, profile))
            .collect()
    }

    /// Artifact path with placeholders substituted, resolved against `root`.
    pub fn render_artifact(&self, root: &Path, target: &str, profile: &str) -> PathBuf {
        let rendered = expand(&self.artifact, target, profile);
        p5k_util::fs::resolve_against(root, Path::new(&rendered))
    }
}

fn expand(template: &str, target: &str, profile: &str) -> String {
    template
        .replace("{target}", target)
        .replace("{profile}", profile)
}

impl ProjectConfig {
    /// Load `p5k.toml` from `project_root`, or return defaults if the file doesn't exist.
    pub fn load(project_root: &Path) -> miette::Result<Self> {
        let path = project_root.join(CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!(
                "no {CONFIG_FILE} in {}, using defaults",
                project_root.display()
            );
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| P5kError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            P5kError::Config {
                message: format!("Failed to parse {CONFIG_FILE}: {e}"),
            }
            .into()
        })
    }
}
