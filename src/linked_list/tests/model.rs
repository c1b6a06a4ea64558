//! Random operation sequences checked against the standard collections.

extern crate std;

use std::collections::VecDeque;
use std::vec::Vec;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Queue, Stack};

const STEPS: usize = 10_000;

#[test]
fn test_stack_matches_vec() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut stack = Stack::new();
    let mut model = Vec::new();

    for _ in 0..STEPS {
        match rng.random_range(0..100) {
            0..50 => {
                let value: u32 = rng.random();
                stack.push(value);
                model.push(value);
            }
            50..85 => assert_eq!(stack.pop(), model.pop()),
            _ => assert_eq!(stack.peek(), model.last()),
        }
        assert_eq!(stack.count(), model.len());
        assert_eq!(stack.is_empty(), model.is_empty());
    }

    assert!(stack.iter().eq(model.iter().rev()));
}

#[test]
fn test_queue_matches_vec_deque() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut queue = Queue::new();
    let mut model = VecDeque::new();

    for _ in 0..STEPS {
        match rng.random_range(0..100) {
            0..50 => {
                let value: u32 = rng.random();
                queue.enqueue(value);
                model.push_back(value);
            }
            50..85 => assert_eq!(queue.dequeue(), model.pop_front()),
            _ => {
                assert_eq!(queue.peek(), model.front());
                assert_eq!(queue.peek_back(), model.back());
            }
        }
        assert_eq!(queue.count(), model.len());
        assert_eq!(queue.is_empty(), model.is_empty());
    }

    assert!(queue.iter().eq(model.iter()));
}
