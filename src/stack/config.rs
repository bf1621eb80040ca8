//! Configuration of the stack's defensive layers.
//!
//! Verification always runs on every mutating operation; this configuration
//! selects which layers the verification actually probes. Disabled layers are
//! skipped at maintenance time as well: an unguarded buffer allocates no
//! canary cells, and with digests off the digest fields stay at zero.

/// Which defensive layers a [`GuardedStack`](crate::GuardedStack) maintains.
///
/// The structural geometry checks (length, capacity, buffer presence) always
/// run; the guard and digest layers can be toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Keep and check the guard words stored in the stack struct itself.
    pub struct_guards: bool,

    /// Place and check the canary cells at both edges of the element buffer.
    /// Independent of `struct_guards`.
    pub buffer_guards: bool,

    /// Maintain and check the content and struct digests.
    /// Each mutation then recomputes both digests over the live elements.
    pub digests: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            struct_guards: true,
            buffer_guards: true,
            digests: true,
        }
    }
}

impl CheckConfig {
    /// Creates a configuration with every defensive layer disabled.
    ///
    /// Only the structural geometry checks remain. Use when measuring the
    /// container's raw cost, or when an outer layer already owns corruption
    /// detection.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            struct_guards: false,
            buffer_guards: false,
            digests: false,
        }
    }

    /// Creates a configuration with both guard layers but no digests.
    ///
    /// Catches out-of-bounds writes adjacent to the struct and the buffer,
    /// without paying the per-mutation digest scan.
    #[must_use]
    pub fn guards_only() -> Self {
        Self {
            struct_guards: true,
            buffer_guards: true,
            digests: false,
        }
    }

    /// Creates a configuration with digests but no guard words.
    ///
    /// Catches element and bookkeeping overwrites, but not writes into the
    /// sentinel positions.
    #[must_use]
    pub fn digests_only() -> Self {
        Self {
            struct_guards: false,
            buffer_guards: false,
            digests: true,
        }
    }

    /// Creates a configuration with every defensive layer enabled.
    ///
    /// Equivalent to [`CheckConfig::default`].
    #[must_use]
    pub fn comprehensive() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_config_presets() {
        let disabled = CheckConfig::disabled();
        assert!(!disabled.struct_guards);
        assert!(!disabled.buffer_guards);
        assert!(!disabled.digests);

        let guards = CheckConfig::guards_only();
        assert!(guards.struct_guards);
        assert!(guards.buffer_guards);
        assert!(!guards.digests);

        let digests = CheckConfig::digests_only();
        assert!(!digests.struct_guards);
        assert!(!digests.buffer_guards);
        assert!(digests.digests);
    }

    #[test]
    fn test_default_config() {
        let default = CheckConfig::default();
        assert!(default.struct_guards);
        assert!(default.buffer_guards);
        assert!(default.digests);
        assert_eq!(default, CheckConfig::comprehensive());
    }
}
