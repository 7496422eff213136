use ringq::{QueueError, RingBuffer};
use std::num::NonZeroUsize;

fn filled(capacity: usize) -> RingBuffer<i64> {
    let mut rb = RingBuffer::with_capacity(capacity).unwrap();
    for v in 0..capacity as i64 {
        rb.push(v).unwrap();
    }
    rb
}

fn contents(rb: &RingBuffer<i64>) -> Vec<i64> {
    rb.iter().copied().collect()
}

#[test]
fn test_capacity_bound() {
    let mut rb = filled(64);
    let before = rb.clone();
    assert_eq!(rb.push(99), Err(QueueError::Full { capacity: 64 }));
    assert_eq!(rb.len(), 64);
    assert_eq!(rb, before);
}

#[test]
fn test_empty_bound() {
    let mut rb: RingBuffer<i64> = RingBuffer::new(NonZeroUsize::new(3).unwrap());
    assert_eq!(rb.pop(), Err(QueueError::Empty));
    assert_eq!(rb.front(), Err(QueueError::Empty));
    assert_eq!(rb.len(), 0);
    assert!(rb.is_empty());
}

#[test]
fn test_fifo_order() {
    let values = [5, -1, 12, 0, 7];
    let mut rb = RingBuffer::with_capacity(8).unwrap();
    for v in values {
        rb.push(v).unwrap();
    }
    assert_eq!(contents(&rb), values.to_vec());
}

#[test]
fn test_wraparound_every_offset() {
    let capacity = 6;
    for k in 1..capacity {
        let mut rb = filled(capacity);
        for _ in 0..k {
            rb.pop().unwrap();
        }
        for v in 0..k as i64 {
            rb.push(100 + v).unwrap();
        }
        let mut expected: Vec<i64> = (k as i64..capacity as i64).collect();
        expected.extend((0..k as i64).map(|v| 100 + v));
        assert_eq!(contents(&rb), expected, "k = {}", k);
        assert!(rb.is_full());
    }
}

#[test]
fn test_clear_idempotent() {
    let mut rb = filled(4);
    rb.pop().unwrap();
    rb.clear();
    let once = rb.clone();
    rb.clear();
    assert_eq!(rb, once);
    assert_eq!(rb.len(), 0);
    assert!(rb.is_empty());
    assert_eq!(rb.capacity(), 4);
}

#[test]
fn test_push_front_pop_round_trip() {
    let mut rb = filled(5);
    rb.pop().unwrap();
    rb.pop().unwrap();
    let len = rb.len();

    let mut fresh = RingBuffer::with_capacity(5).unwrap();
    fresh.push(-42).unwrap();
    assert_eq!(fresh.front(), Ok(&-42));
    fresh.pop().unwrap();
    assert!(fresh.is_empty());

    rb.push(9).unwrap();
    assert_eq!(rb.len(), len + 1);
}

#[test]
fn test_capacity_one() {
    let mut rb = RingBuffer::with_capacity(1).unwrap();
    rb.push('a').unwrap();
    assert!(rb.is_full());
    assert!(rb.push('b').is_err());
    assert_eq!(rb.front(), Ok(&'a'));
    rb.pop().unwrap();
    rb.push('c').unwrap();
    assert_eq!(rb.iter().collect::<Vec<_>>(), vec![&'c']);
}

#[test]
fn test_non_copy_elements() {
    let mut rb = RingBuffer::with_capacity(2).unwrap();
    rb.push(String::from("first")).unwrap();
    rb.push(String::from("second")).unwrap();
    assert_eq!(rb.front().map(String::as_str), Ok("first"));
    rb.pop().unwrap();
    rb.push(String::from("third")).unwrap();
    let joined: Vec<&str> = rb.iter().map(String::as_str).collect();
    assert_eq!(joined, vec!["second", "third"]);
}
