//! Logging targets
//!
//! Messages go through the [`log`] facade; the binary installs `env_logger`, so
//! `RUST_LOG=resolve=trace trisim sim` shows every gate as it is resolved.

/// Targets passed to the `log` macros
pub mod targets {
    /// Parsing of input, circuit and log files
    pub const PARSE: &str = "parse";
    /// Gate resolution
    pub const RESOLVE: &str = "resolve";
    /// Random input generation
    pub const GENERATE: &str = "generate";
}
