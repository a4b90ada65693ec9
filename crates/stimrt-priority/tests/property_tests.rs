//! Property-based tests for the priority shim.

use std::cell::Cell;

use proptest::prelude::*;
use quickcheck_macros::quickcheck;
use stimrt_priority::{PriorityBackend, PriorityShim, ProcessPriority, ThreadPriority};

/// Echoes a fixed result and remembers the last argument.
struct Echo {
    result: i32,
    class: Cell<Option<u32>>,
    thread: Cell<Option<i32>>,
}

impl Echo {
    fn new(result: i32) -> Self {
        Self {
            result,
            class: Cell::new(None),
            thread: Cell::new(None),
        }
    }
}

impl PriorityBackend for Echo {
    fn set_priority_class(&self, class: u32) -> i32 {
        self.class.set(Some(class));
        self.result
    }

    fn set_thread_priority(&self, priority: i32) -> i32 {
        self.thread.set(Some(priority));
        self.result
    }

    fn current_display_frequency(&self) -> Option<u32> {
        None
    }
}

#[quickcheck]
fn process_class_round_trips_through_typed_value(value: u32) -> bool {
    ProcessPriority::from(value).value() == value
}

#[quickcheck]
fn thread_level_round_trips_through_typed_value(value: i32) -> bool {
    ThreadPriority::from(value).value() == value
}

proptest! {
    #[test]
    fn process_priority_is_pure_pass_through(class in any::<i32>(), result in any::<i32>()) {
        let shim = PriorityShim::new(Echo::new(result));
        prop_assert_eq!(shim.set_process_priority(class), result);
        prop_assert_eq!(shim.backend().class.get(), Some(class.cast_unsigned()));
    }

    #[test]
    fn thread_priority_is_pure_pass_through(priority in any::<i32>(), result in any::<i32>()) {
        let shim = PriorityShim::new(Echo::new(result));
        prop_assert_eq!(shim.set_thread_priority(priority), result);
        prop_assert_eq!(shim.backend().thread.get(), Some(priority));
    }
}
