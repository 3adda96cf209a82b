//! # Runtime Configuration
//!
//! Coroutine settings loaded from the environment.
//!
//! ### `PETSHOP_STACK_SIZE`
//!
//! Stack size in bytes for handler coroutines, as decimal (`65536`) or
//! hexadecimal (`0x10000`). Unset or unparsable values fall back to
//! [`DEFAULT_STACK_SIZE`].
//!
//! Page rendering goes through askama and builds the full card list on the
//! coroutine stack, so the default is larger than a bare JSON handler needs.
//!
//! ```rust
//! use petshop::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! assert!(config.stack_size > 0);
//! ```

use std::env;

/// Stack size used when `PETSHOP_STACK_SIZE` is absent (64 KB).
pub const DEFAULT_STACK_SIZE: usize = 0x10000;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Stack size for coroutines in bytes
    pub stack_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let stack_size = env::var("PETSHOP_STACK_SIZE")
            .ok()
            .and_then(|val| parse_stack_size(&val))
            .unwrap_or(DEFAULT_STACK_SIZE);
        RuntimeConfig { stack_size }
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal size. Zero is rejected.
pub(crate) fn parse_stack_size(val: &str) -> Option<usize> {
    let val = val.trim();
    let parsed = match val.strip_prefix("0x").or_else(|| val.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => val.parse().ok(),
    };
    parsed.filter(|&size| size > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_and_hex() {
        assert_eq!(parse_stack_size("32768"), Some(0x8000));
        assert_eq!(parse_stack_size("0x8000"), Some(32768));
        assert_eq!(parse_stack_size(" 0X4000 "), Some(0x4000));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_stack_size("lots"), None);
        assert_eq!(parse_stack_size("0xzz"), None);
        assert_eq!(parse_stack_size("0"), None);
    }

    #[test]
    fn test_default() {
        assert_eq!(RuntimeConfig::default().stack_size, DEFAULT_STACK_SIZE);
    }
}
