// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # stackguard
//!
//! A self-integrity-checking dynamic array stack: a LIFO container over a
//! contiguous buffer that defends against memory corruption and misuse by
//! validating its own structural invariants on every public operation.
//!
//! ## Features
//!
//! - **Guard canaries** - Fixed sentinel words at the struct boundaries and at
//!   both edges of the element buffer detect adjacent out-of-bounds writes
//! - **Content digests** - Rolling-hash checksums over the live elements and
//!   the structural fields detect overwrites that guards alone would miss
//! - **Fail-fast policy** - Every mutating operation verifies the stack before
//!   and after the mutation; a detected violation renders a diagnostic dump and
//!   terminates the process
//! - **Configurable layers** - Each defensive layer can be switched off
//!   independently via [`CheckConfig`]
//!
//! ## Quick Start
//!
//! Add `stackguard` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! stackguard = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use stackguard::prelude::*;
//!
//! let mut stack = GuardedStack::new(4);
//! stack.push(17);
//! stack.push(42);
//! assert_eq!(stack.pop(), 42);
//! assert!(stack.verify().is_ok());
//! stack.destroy();
//! ```
//!
//! ### Probing for corruption
//!
//! [`GuardedStack::verify`] is a pure predicate and never terminates the
//! process on its own. It returns the first violated invariant, so callers can
//! compose their own policy:
//!
//! ```rust
//! use stackguard::{GuardedStack, Violation};
//!
//! let mut stack = GuardedStack::new(8);
//! stack.push(1);
//! stack.destroy();
//!
//! // A destroyed stack is permanently poisoned.
//! assert_eq!(stack.verify(), Err(Violation::Destroyed));
//! ```
//!
//! The bundled [`assert_stack!`] macro expresses the library's own
//! verify-dump-abort contract for external callers.
//!
//! ## Architecture
//!
//! `stackguard` is organized into a small set of modules:
//!
//! - [`prelude`] - Convenient re-exports of the commonly used types
//! - [`stack`] - The guarded stack engine: buffer lifecycle, verification,
//!   digests, and diagnostic rendering
//! - [`Violation`] and [`Result`] - The corruption/misuse taxonomy
//!
//! ## Error Handling
//!
//! Verification failures during a mutating operation are not recoverable: the
//! operation renders a diagnostic block to the append-only sink (falling back
//! to stderr) and aborts the process. Corruption detection exists to localize
//! bugs during development, not to keep a corrupted stack running. The only
//! operation that reports a classification to its caller is
//! [`GuardedStack::verify`].
//!
//! ## Performance
//!
//! Every mutating call recomputes the digests over the live elements, so the
//! worst-case per-operation cost is a linear scan. This is a deliberate
//! correctness-over-throughput trade-off for a debugging-hardened container;
//! disable layers via [`CheckConfig`] to trade safety back for speed.

mod macros;

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use stackguard::prelude::*;
///
/// let mut stack = GuardedStack::new(2);
/// stack.push(7);
/// assert_eq!(stack.pop(), 7);
/// stack.destroy();
/// ```
pub mod prelude;

/// The guarded stack engine.
///
/// This module contains the validated-storage machinery:
///
/// - [`GuardedStack`] - the container itself, with its verify-before /
///   verify-after lifecycle
/// - [`CheckConfig`] - which defensive layers are active
/// - [`stack::dump`] - diagnostic rendering and the append-only failure sink
///
/// # Examples
///
/// ```rust
/// use stackguard::{CheckConfig, GuardedStack};
///
/// // Digests only, no canaries.
/// let mut stack = GuardedStack::with_config(4, CheckConfig::digests_only());
/// stack.push(3);
/// assert!(stack.verify().is_ok());
/// stack.destroy();
/// ```
pub mod stack;

/// `stackguard` Result type
///
/// A type alias for [`std::result::Result<T, Violation>`]. Returned by
/// [`GuardedStack::verify`], the one operation that reports a classification
/// instead of escalating to process termination.
pub type Result<T> = std::result::Result<T, Violation>;

/// `stackguard` violation taxonomy
///
/// The classification of every corruption or misuse condition the
/// verification predicate can detect, in the order it probes for them.
pub use error::Violation;

/// The guarded stack container.
///
/// See [`stack::GuardedStack`] for the full lifecycle and operation set.
pub use stack::GuardedStack;

/// Configuration of the defensive layers.
///
/// See [`stack::CheckConfig`] for the available presets.
pub use stack::CheckConfig;

/// The element kind stored by [`GuardedStack`].
pub use stack::Element;

/// The fixed sentinel value expected in every guard and canary slot.
pub use stack::CANARY;

/// The reserved marker written into a destroyed stack's fields.
pub use stack::POISON;

/// Renders a diagnostic failure block to the append-only sink.
///
/// See [`stack::dump::dump`] for the sink and fallback behavior.
pub use stack::dump::dump;

/// Renders a diagnostic failure block to an arbitrary writer.
///
/// See [`stack::dump::render`] for the block format.
pub use stack::dump::render;
