// Host-side tests for the change-only write cache used by the DOM overlays.

#![allow(dead_code)]
mod core {
    pub mod latch {
        include!("../src/core/latch.rs");
    }
}

use crate::core::latch::*;

#[test]
fn first_value_is_always_written() {
    let mut last = LastWritten::default();
    assert!(last.set(false));
}

#[test]
fn repeated_anchor_is_skipped() {
    let mut anchor: LastWritten<Option<(i32, i32)>> = LastWritten::default();
    assert!(anchor.set(Some((640, 360))));
    for _ in 0..10 {
        assert!(!anchor.set(Some((640, 360))));
    }
    assert!(anchor.set(Some((641, 360))));
}

#[test]
fn hiding_and_showing_are_changes() {
    let mut anchor: LastWritten<Option<(i32, i32)>> = LastWritten::default();
    assert!(anchor.set(Some((10, 20))));
    assert!(anchor.set(None));
    assert!(!anchor.set(None));
    assert!(anchor.set(Some((10, 20))));
}
