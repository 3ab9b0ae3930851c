//! Boot command implementation.

use miette::Result;

use p5k_ops::ops_build::ExternalBuilder;
use p5k_ops::ops_launch::SystemRunner;
use p5k_util::errors::P5kError;

use crate::cli::BootArgs;

pub fn exec(_args: &BootArgs, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(P5kError::Io)?;
    let builder = ExternalBuilder::from_project(&cwd, verbose)?;
    p5k_ops::ops_boot::boot(&builder, &SystemRunner)
}
