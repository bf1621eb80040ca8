#![no_main]

use libfuzzer_sys::fuzz_target;
use stackguard::GuardedStack;

fuzz_target!(|data: &[u8]| {
    let mut stack = GuardedStack::new(1);
    let mut expected: Vec<i64> = Vec::new();

    for &byte in data {
        if byte & 1 == 0 {
            stack.push(i64::from(byte));
            expected.push(i64::from(byte));
        } else if let Some(top) = expected.pop() {
            assert_eq!(stack.pop(), top);
        }
        assert!(stack.verify().is_ok());
        assert_eq!(stack.len(), expected.len());
    }

    stack.destroy();
    assert!(stack.verify().is_err());
});
