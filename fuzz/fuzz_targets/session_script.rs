#![no_main]

use libfuzzer_sys::fuzz_target;
use ringq::{Session, SessionOptions};
use std::io::Cursor;
use std::num::NonZeroUsize;

fuzz_target!(|data: &[u8]| {
    let mut session = Session::new(SessionOptions {
        capacity: NonZeroUsize::new(8).unwrap(),
        prompts: false,
        show_menu: false,
    });
    let mut out = Vec::new();
    let _ = session.run(Cursor::new(data), &mut out);
    if let Some(queue) = session.queue() {
        assert!(queue.len() <= queue.capacity());
        assert_eq!(queue.iter().count(), queue.len());
    }
});
