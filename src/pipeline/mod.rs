//! Shared orchestration for CLI commands: load → analyze/resolve → report.

mod load;
mod output;

pub use load::load_variant_set;
pub use output::{output_report, write_output, OutputTarget};

/// Process exit codes.
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// `resolve` found no variant carrying the requested value
    pub const NO_MATCH: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::NO_MATCH, 1);
        assert_eq!(exit_codes::ERROR, 2);
    }
}
