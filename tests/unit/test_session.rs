use ringq::{Session, SessionOptions};
use std::io::Cursor;
use std::num::NonZeroUsize;

fn run(capacity: usize, script: &str) -> (Session, String) {
    colored::control::set_override(false);
    let mut session = Session::new(SessionOptions {
        capacity: NonZeroUsize::new(capacity).unwrap(),
        prompts: false,
        show_menu: false,
    });
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

#[test]
fn test_default_capacity_session() {
    let mut script = String::from("new init 64");
    for v in 0..64 {
        script.push_str(&format!(" {}", v));
    }
    script.push_str(" is-full push\n");
    let (session, out) = run(64, &script);
    assert!(out.contains("The queue is full."));
    assert!(out.contains("Cannot push, queue is full."));
    assert_eq!(session.queue().unwrap().len(), 64);
}

#[test]
fn test_concrete_scenario_by_number() {
    let (session, out) = run(4, "1\n2\n4\n1 2 3 4\n4\n3\n4\n5\n5\n");
    assert!(out.contains("Cannot push, queue is full."));
    assert!(out.contains("Popped element: 1"));
    assert!(out.ends_with("Elements in queue (in pushing order):\n2 3 4 5\n"));
    let queue = session.queue().unwrap();
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
}

#[test]
fn test_help_before_new_is_allowed() {
    let (session, out) = run(4, "help\n");
    assert!(out.contains("1. new"));
    assert!(!out.contains("queue not created"));
    assert!(!session.is_created());
}

#[test]
fn test_empty_print_all() {
    let (_, out) = run(4, "new print-all\n");
    assert_eq!(out, "Elements in queue (in pushing order):\n\n");
}
