//! # stackguard Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the stackguard library. Import this module to get quick access to the
//! guarded stack and its diagnostics.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The violation classification returned by verification
pub use crate::Violation;

/// The result type returned by verification
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// The self-integrity-checking stack
pub use crate::GuardedStack;

/// Configuration of the defensive layers
pub use crate::CheckConfig;

/// The element kind stored by the stack
pub use crate::Element;

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Failure-block rendering to the append-only sink
pub use crate::dump;

/// Failure-block rendering to an arbitrary writer
pub use crate::render;

/// The caller-side verify-dump-abort contract
pub use crate::assert_stack;

// ================================================================================================
// Sentinels
// ================================================================================================

/// The fixed guard/canary sentinel value
pub use crate::CANARY;

/// The poison marker of a destroyed stack
pub use crate::POISON;
