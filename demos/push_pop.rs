//! # Push/Pop Driver
//!
//! **What this example teaches:**
//! - Constructing a guarded stack with an initial capacity
//! - Pushing and popping batches of values
//! - Wrapping batches in the `assert_stack!` verify-dump-abort contract
//! - Destroying the stack and leaving it poisoned
//!
//! The driver pushes a sequence of integers, pops them all back printing each
//! value to stdout (newest first), then destroys the stack. `assert_stack!`
//! runs after every batch, matching the library's own internal policy.

use stackguard::prelude::*;
use std::env;

fn main() {
    let count: i64 = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(100);

    let mut stack = GuardedStack::new(5);
    assert_stack!(stack, "main");

    for value in 0..count {
        stack.push(value);
    }
    assert_stack!(stack, "main");

    for _ in 0..count {
        let value = stack.pop();
        println!("{value}");
    }
    assert_stack!(stack, "main");

    stack.destroy();
}
