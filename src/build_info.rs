//! Compile-time build metadata.
//!
//! The build script stamps each compile with an incrementing build number
//! and a timestamp; this module exposes them alongside the Cargo package
//! fields so the startup banner and the status tool agree on what is
//! running.

use serde::Serialize;

/// Build number, incremented on each recompilation
pub const BUILD_NUMBER: u64 = match option_env!("GROCER_BUILD_NUMBER") {
    Some(s) => parse_build_number(s),
    None => 0,
};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("GROCER_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Digit-by-digit parse usable in const context; a malformed stamp counts
/// as build 0 instead of failing the compile.
const fn parse_build_number(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < b'0' || b > b'9' {
            return 0;
        }
        value = value * 10 + (b - b'0') as u64;
        i += 1;
    }
    value
}

/// Build information snapshot for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    /// Get the current build info
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER,
            build_timestamp: BUILD_TIMESTAMP,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Grocer Shopping List Helper");
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!(
        "  Catalog: {} unit spellings, {} category keywords",
        crate::units::catalog::known_unit_count(),
        crate::category::keywords::keyword_count()
    );
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number("42"), 42);
        assert_eq!(parse_build_number("0"), 0);
        assert_eq!(parse_build_number(""), 0);
        assert_eq!(parse_build_number("12a"), 0);
    }

    #[test]
    fn test_current_carries_package_fields() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "grocer");
        assert!(!info.version.is_empty());
    }
}
