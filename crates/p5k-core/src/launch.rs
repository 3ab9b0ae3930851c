//! Emulator launch specification.
//!
//! A [`LaunchSpec`] is the ordered token list handed to the process runner:
//! the program name followed by its arguments. The QEMU invocation used to
//! boot the kernel is fixed; flags always precede their values.

use std::fmt;
use std::path::Path;

/// Emulator binary used to boot the kernel.
pub const QEMU_PROGRAM: &str = "qemu-system-riscv32";

/// QEMU arguments preceding `-kernel <path>`, in command-line order.
pub const QEMU_ARGS: [&str; 9] = [
    "-machine",
    "virt",
    "-bios",
    "default",
    "-nographic",
    "-serial",
    "mon:stdio",
    "--no-reboot",
    "-kernel",
];

/// Ordered program-and-arguments token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    tokens: Vec<String>,
}

impl LaunchSpec {
    /// Launch a program with the given arguments.
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut tokens = vec![program.into()];
        tokens.extend(args.into_iter().map(Into::into));
        Self { tokens }
    }

    /// Boot `kernel` on the RISC-V 32 `virt` machine with the default SBI
    /// firmware, the serial console multiplexed onto stdio, and no reboot.
    pub fn qemu_riscv32(kernel: &Path) -> Self {
        let kernel = kernel.to_string_lossy().into_owned();
        Self::new(
            QEMU_PROGRAM,
            QEMU_ARGS.into_iter().map(String::from).chain([kernel]),
        )
    }

    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for LaunchSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
