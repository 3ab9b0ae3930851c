use std::fmt;

/// Build target of the kernel component.
pub const KERNEL_TARGET: &str = "p5k-core";

/// Build profile the kernel is compiled for.
pub const KERNEL_PROFILE: &str = "riscv32-kernel";

/// A (target, profile) pair handed to the build collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildTarget {
    pub target: &'static str,
    pub profile: &'static str,
}

impl BuildTarget {
    /// The kernel image booted by `p5k boot`.
    pub const fn kernel() -> Self {
        Self {
            target: KERNEL_TARGET,
            profile: KERNEL_PROFILE,
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.target, self.profile)
    }
}
