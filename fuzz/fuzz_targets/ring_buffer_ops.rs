#![no_main]

use libfuzzer_sys::fuzz_target;
use ringq::RingBuffer;
use std::collections::VecDeque;

fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 32) + 1;
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();
    let mut model = VecDeque::new();

    for &op in ops {
        match op % 4 {
            0 | 1 => {
                if rb.push(op).is_ok() {
                    model.push_back(op);
                }
            }
            2 => {
                if rb.pop().is_ok() {
                    model.pop_front();
                }
            }
            _ => {
                rb.clear();
                model.clear();
            }
        }
        assert!(rb.iter().eq(model.iter()));
    }
});
