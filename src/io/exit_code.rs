//! Process exit codes shared by every command.

/// Unix exit codes for the `mathkit` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// The operation was understood but failed: validation, computation,
    /// or I/O.
    GeneralError = 1,
    /// Unknown operation or malformed command-line arguments.
    UsageError = 2,
}

impl ExitCode {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Terminate the process with this code.
    pub fn exit(self) -> ! {
        std::process::exit(i32::from(self.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(ExitCode::GeneralError.code(), 1);
        assert_eq!(ExitCode::UsageError.code(), 2);
    }
}
