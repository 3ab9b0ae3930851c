//! Operation: build the kernel and boot it under QEMU.

use p5k_core::launch::LaunchSpec;
use p5k_core::target::BuildTarget;
use p5k_util::errors::P5kResult;
use p5k_util::progress::status;

use crate::ops_build::BuildService;
use crate::ops_launch::ProcessRunner;

/// Build the kernel and launch it with the fixed QEMU invocation.
///
/// Build and launch failures are returned unchanged. When the build fails
/// the runner is never called; the runner is called at most once.
pub fn boot(builder: &dyn BuildService, runner: &dyn ProcessRunner) -> P5kResult<()> {
    let kernel = BuildTarget::kernel();
    tracing::debug!("requesting build of {kernel}");
    let result = builder.build(kernel.target, kernel.profile)?;

    let launch = LaunchSpec::qemu_riscv32(result.outfile());
    tracing::debug!(tokens = ?launch.tokens(), "launching emulator");
    status("Booting", &result.outfile().display().to_string());

    runner.execute(&launch)?;
    Ok(())
}
