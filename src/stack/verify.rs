//! The verification predicate.
//!
//! A pure, side-effect-free scan that reports the first violated invariant in
//! a fixed priority order: the poison markers, then the digests, then the
//! struct guards, then the buffer geometry, then the buffer canaries. Cheap
//! structural probes come before anything that reads the element buffer, and
//! every buffer read goes through checked views, so the scan itself can never
//! read out of bounds - not even on a stack whose geometry has been smashed.

use super::{digest, GuardedStack, CANARY, CANARY_CELL, POISON};
use crate::{Result, Violation};

/// Scans `stack` and reports the first violation found.
///
/// Calling this repeatedly without intervening mutation always yields the
/// same answer.
pub(crate) fn scan(stack: &GuardedStack) -> Result<()> {
    // The destroyed state short-circuits everything else: every other field
    // is expected to carry poison too and would misreport as corruption.
    if stack.len == POISON && stack.cap == POISON {
        return Err(Violation::Destroyed);
    }

    if stack.config.digests {
        let live = stack.live_view();
        if stack.struct_digest != digest::struct_digest(live, stack.len, stack.cap) {
            return Err(Violation::StructDigest);
        }
        if stack.content_digest != digest::content_digest(live) {
            return Err(Violation::ContentDigest);
        }
    }

    if stack.config.struct_guards {
        let left_ok = stack.left_guard == CANARY;
        let right_ok = stack.right_guard == CANARY;
        if !left_ok && !right_ok {
            return Err(Violation::BothGuards);
        }
        if !left_ok {
            return Err(Violation::LeftGuard);
        }
        if !right_ok {
            return Err(Violation::RightGuard);
        }
    }

    let Some(buf) = &stack.buf else {
        return Err(Violation::NullBuffer);
    };

    if stack.len < 0 {
        return Err(Violation::NegativeLength);
    }
    if stack.cap <= 0 {
        return Err(Violation::NonPositiveCapacity);
    }
    if stack.cap < stack.len {
        return Err(Violation::CapacityBelowLength);
    }

    if stack.config.buffer_guards {
        let left_ok = buf.left_canary() == Some(CANARY_CELL);
        let right_ok = buf.right_canary() == Some(CANARY_CELL);
        if !left_ok && !right_ok {
            return Err(Violation::BothBufferGuards);
        }
        if !left_ok {
            return Err(Violation::LeftBufferGuard);
        }
        if !right_ok {
            return Err(Violation::RightBufferGuard);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CheckConfig;

    #[test]
    fn test_fresh_stack_verifies_ok() {
        let stack = GuardedStack::new(4);
        assert_eq!(stack.verify(), Ok(()));
    }

    #[test]
    fn test_verify_is_idempotent() {
        let mut stack = GuardedStack::new(4);
        stack.push(12);
        assert_eq!(stack.verify(), stack.verify());

        stack.left_guard = 0;
        assert_eq!(stack.verify(), Err(Violation::LeftGuard));
        assert_eq!(stack.verify(), Err(Violation::LeftGuard));
    }

    #[test]
    fn test_destroyed_outranks_everything() {
        let mut stack = GuardedStack::new(4);
        stack.destroy();
        assert_eq!(stack.verify(), Err(Violation::Destroyed));

        // Even with additional damage, the poisoned pair wins.
        stack.left_guard = 0;
        stack.content_digest = 1;
        assert_eq!(stack.verify(), Err(Violation::Destroyed));
    }

    #[test]
    fn test_counter_overwrite_hits_struct_digest_first() {
        let mut stack = GuardedStack::new(4);
        stack.push(1);

        stack.len = 2;
        assert_eq!(stack.verify(), Err(Violation::StructDigest));
    }

    #[test]
    fn test_element_overwrite_preserving_sum_hits_content_digest() {
        let mut stack = GuardedStack::new(4);
        stack.push(1);
        stack.push(3);

        // Same arithmetic sum, different per-element hashes: only the
        // content digest notices.
        let buf = stack.buf.as_mut().unwrap();
        buf.elements_mut()[0] = 2;
        buf.elements_mut()[1] = 2;
        assert_eq!(stack.verify(), Err(Violation::ContentDigest));
    }

    #[test]
    fn test_struct_guard_classification() {
        let mut stack = GuardedStack::with_config(4, CheckConfig::guards_only());
        stack.left_guard = 1;
        assert_eq!(stack.verify(), Err(Violation::LeftGuard));

        let mut stack = GuardedStack::with_config(4, CheckConfig::guards_only());
        stack.right_guard = 1;
        assert_eq!(stack.verify(), Err(Violation::RightGuard));

        let mut stack = GuardedStack::with_config(4, CheckConfig::guards_only());
        stack.left_guard = 1;
        stack.right_guard = 1;
        assert_eq!(stack.verify(), Err(Violation::BothGuards));
    }

    #[test]
    fn test_buffer_canary_classification() {
        let mut stack = GuardedStack::with_config(4, CheckConfig::guards_only());
        stack.buf.as_mut().unwrap().cells[0] = 0;
        assert_eq!(stack.verify(), Err(Violation::LeftBufferGuard));

        let mut stack = GuardedStack::with_config(4, CheckConfig::guards_only());
        *stack.buf.as_mut().unwrap().cells.last_mut().unwrap() = 0;
        assert_eq!(stack.verify(), Err(Violation::RightBufferGuard));

        let mut stack = GuardedStack::with_config(4, CheckConfig::guards_only());
        let buf = stack.buf.as_mut().unwrap();
        buf.cells[0] = 0;
        *buf.cells.last_mut().unwrap() = 0;
        assert_eq!(stack.verify(), Err(Violation::BothBufferGuards));
    }

    #[test]
    fn test_geometry_classification_without_digests() {
        // Digests would flag the counter overwrite first; switch them off to
        // reach the geometry checks.
        let mut stack = GuardedStack::with_config(4, CheckConfig::disabled());
        stack.len = -1;
        assert_eq!(stack.verify(), Err(Violation::NegativeLength));

        let mut stack = GuardedStack::with_config(4, CheckConfig::disabled());
        stack.cap = 0;
        assert_eq!(stack.verify(), Err(Violation::NonPositiveCapacity));

        let mut stack = GuardedStack::with_config(4, CheckConfig::disabled());
        stack.len = 9;
        assert_eq!(stack.verify(), Err(Violation::CapacityBelowLength));

        let mut stack = GuardedStack::with_config(4, CheckConfig::disabled());
        stack.buf = None;
        assert_eq!(stack.verify(), Err(Violation::NullBuffer));
    }

    #[test]
    fn test_missing_buffer_with_digests_reports_digest_mismatch() {
        // The priority order probes digests before the buffer presence; the
        // recomputation sees an empty view and flags the stored digest.
        let mut stack = GuardedStack::new(4);
        stack.push(5);
        stack.buf = None;
        assert_eq!(stack.verify(), Err(Violation::StructDigest));
    }

    #[test]
    fn test_digest_outranks_guards() {
        let mut stack = GuardedStack::new(4);
        stack.push(1);
        stack.len = 2;
        stack.left_guard = 0;
        assert_eq!(stack.verify(), Err(Violation::StructDigest));
    }

    #[test]
    fn test_disabled_layers_are_not_probed() {
        let mut stack = GuardedStack::with_config(4, CheckConfig::disabled());
        stack.left_guard = 0;
        stack.right_guard = 0;
        stack.content_digest = 999;
        assert_eq!(stack.verify(), Ok(()));
    }
}
