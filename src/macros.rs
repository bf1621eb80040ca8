/// Verifies a stack, and on a violation renders a diagnostic dump and aborts.
///
/// This is the library's own fail-fast contract, exposed so callers can wrap
/// their batches the same way the mutating operations wrap themselves: call
/// [`GuardedStack::verify`](crate::GuardedStack::verify), and if it reports a
/// violation, render a dump with the call site and terminate the process.
///
/// The one-argument form records the enclosing module path as the calling
/// function; the two-argument form lets the caller name it explicitly.
///
/// ```rust
/// use stackguard::{assert_stack, GuardedStack};
///
/// let mut stack = GuardedStack::new(4);
/// stack.push(1);
/// assert_stack!(stack);
/// assert_stack!(stack, "main");
/// # stack.destroy();
/// ```
#[macro_export]
macro_rules! assert_stack {
    ($stack:expr) => {
        $crate::assert_stack!($stack, module_path!())
    };
    ($stack:expr, $function:expr) => {{
        let stack: &$crate::GuardedStack = &$stack;
        if let Err(violation) = stack.verify() {
            $crate::dump(Some(stack), &violation, file!(), $function, line!());
            ::std::process::abort();
        }
    }};
}
