use strum::{EnumCount, EnumIter};
use thiserror::Error;

/// The classification returned by stack verification, which provides coverage
/// for every corruption and misuse condition this library can detect.
///
/// The verification predicate probes the stack in a fixed priority order and
/// reports the first violated invariant: cheap structural checks run before
/// anything that reads the element buffer, so a missing or undersized buffer
/// never causes an out-of-bounds read during verification itself.
///
/// # Categories
///
/// ## Lifecycle
/// - [`Violation::NullInstance`] - No instance was supplied to a diagnostic entry point
/// - [`Violation::Destroyed`] - The instance carries the poison markers of a destroyed stack
/// - [`Violation::Underflow`] - Pop was requested on an empty stack
///
/// ## Digests
/// - [`Violation::StructDigest`] - Structural checksum mismatch
/// - [`Violation::ContentDigest`] - Element checksum mismatch
///
/// ## Struct guards
/// - [`Violation::BothGuards`] / [`Violation::LeftGuard`] / [`Violation::RightGuard`]
///
/// ## Geometry
/// - [`Violation::NullBuffer`] - The element buffer is gone
/// - [`Violation::NegativeLength`] - The live-element count is below zero
/// - [`Violation::NonPositiveCapacity`] - The slot count is zero or negative
/// - [`Violation::CapacityBelowLength`] - More live elements than slots
///
/// ## Buffer canaries
/// - [`Violation::BothBufferGuards`] / [`Violation::LeftBufferGuard`] /
///   [`Violation::RightBufferGuard`]
///
/// # Examples
///
/// ```rust
/// use stackguard::{GuardedStack, Violation};
///
/// let mut stack = GuardedStack::new(4);
/// assert!(stack.verify().is_ok());
///
/// stack.destroy();
/// assert_eq!(stack.verify(), Err(Violation::Destroyed));
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, EnumCount, EnumIter)]
pub enum Violation {
    /// No stack instance was supplied.
    ///
    /// Safe references cannot be null, so this classification is only
    /// produced on the diagnostic path, where a dump may be rendered without
    /// an instance at hand.
    #[error("no stack instance was supplied")]
    NullInstance,

    /// The stack was destroyed, or was never constructed.
    ///
    /// Both the length and the capacity carry the reserved poison marker.
    /// Probing a destroyed stack is legal; mutating it is fatal.
    #[error("the stack was destroyed or never constructed")]
    Destroyed,

    /// The stored structural digest does not match its recomputed value.
    ///
    /// The structural digest covers the element sum, the length, and the
    /// capacity, so it catches overwrites of the bookkeeping fields as well
    /// as most element overwrites.
    #[error("struct digest does not match the stack contents")]
    StructDigest,

    /// The stored content digest does not match its recomputed value.
    ///
    /// The content digest sums a per-element hash over the live elements.
    #[error("content digest does not match the stack contents")]
    ContentDigest,

    /// Both struct-level guard words were clobbered.
    #[error("both stack guards were overwritten")]
    BothGuards,

    /// The leading struct-level guard word was clobbered.
    #[error("left stack guard was overwritten")]
    LeftGuard,

    /// The trailing struct-level guard word was clobbered.
    #[error("right stack guard was overwritten")]
    RightGuard,

    /// The element buffer is gone.
    ///
    /// A live stack always owns its buffer; this state is reachable only
    /// through corruption.
    #[error("the stack buffer is missing")]
    NullBuffer,

    /// The live-element count is below zero.
    #[error("stack length is negative")]
    NegativeLength,

    /// The slot count is zero or negative.
    ///
    /// Construction rounds a requested capacity of zero up to one slot, so a
    /// live stack always has at least one slot.
    #[error("stack capacity is not positive")]
    NonPositiveCapacity,

    /// The stack holds more live elements than it has slots.
    #[error("stack capacity is below the stack length")]
    CapacityBelowLength,

    /// Both buffer boundary canaries were clobbered.
    #[error("both buffer boundary canaries were overwritten")]
    BothBufferGuards,

    /// The canary cell before element 0 was clobbered.
    #[error("left buffer boundary canary was overwritten")]
    LeftBufferGuard,

    /// The canary cell after the last slot was clobbered.
    #[error("right buffer boundary canary was overwritten")]
    RightBufferGuard,

    /// Pop was requested on an empty stack.
    ///
    /// Reported by the pop precondition check rather than by the
    /// verification predicate.
    #[error("pop was called on an empty stack")]
    Underflow,
}
