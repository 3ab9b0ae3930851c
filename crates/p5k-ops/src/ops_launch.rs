//! Operation: hand a launch specification to the operating system.

use std::io::ErrorKind;

use p5k_core::launch::LaunchSpec;
use p5k_util::errors::P5kError;
use p5k_util::process::CommandBuilder;

/// Something that can execute a [`LaunchSpec`].
pub trait ProcessRunner {
    /// Run the program with stdio inherited from the current process.
    ///
    /// Implementations that replace the current process only return on failure.
    fn execute(&self, launch: &LaunchSpec) -> Result<(), P5kError>;
}

/// Runs programs through the operating system.
///
/// On Unix the current process image is replaced, so a successful launch
/// never returns and the emulator's exit status becomes ours.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn execute(&self, launch: &LaunchSpec) -> Result<(), P5kError> {
        let program = launch.program();
        let cmd = CommandBuilder::new(program).args(launch.args().iter().cloned());

        match cmd.replace() {
            Ok(exit) if exit.success() => Ok(()),
            Ok(exit) => Err(P5kError::Launch {
                message: format!("`{program}` exited with {exit}"),
            }),
            Err(P5kError::Io(e)) if e.kind() == ErrorKind::NotFound => Err(P5kError::Launch {
                message: format!("`{program}` was not found on PATH"),
            }),
            Err(P5kError::Io(e)) => Err(P5kError::Launch {
                message: format!("could not start `{program}`: {e}"),
            }),
            Err(e) => Err(e),
        }
    }
}
