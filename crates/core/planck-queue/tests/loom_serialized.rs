//! Loom model of a queue shared through an external lock.
//!
//! The queue has no synchronization of its own; callers that share one
//! between threads wrap it in a lock. This checks that under every
//! interleaving loom explores, a lock-serialized producer/consumer pair
//! still sees FIFO order and never exceeds capacity.
//!
//! Run with `RUSTFLAGS="--cfg loom" cargo test -p planck-queue --test loom_serialized --release`.

#![cfg(loom)]
#![allow(missing_docs)]

use loom::sync::{Arc, Mutex};
use loom::thread;
use planck_queue::{ArrayQueue, QueueError};

#[test]
fn producer_consumer_under_mutex() {
    loom::model(|| {
        let queue = Arc::new(Mutex::new(ArrayQueue::<u32, 2>::new()));

        let producer = {
            let queue = Arc::clone(&queue);
            thread::spawn(move || {
                let mut sent = 0u32;
                while sent < 3 {
                    let mut q = queue.lock().unwrap();
                    match q.push(sent) {
                        Ok(()) => sent += 1,
                        Err(QueueError::Full) => {
                            drop(q);
                            thread::yield_now();
                        }
                        Err(e) => panic!("unexpected push error: {e}"),
                    }
                }
            })
        };

        let mut expected = 0u32;
        while expected < 3 {
            let mut q = queue.lock().unwrap();
            assert!(q.len() <= q.capacity());
            match q.pop() {
                Ok(v) => {
                    assert_eq!(v, expected);
                    expected += 1;
                }
                Err(QueueError::Empty) => {
                    drop(q);
                    thread::yield_now();
                }
                Err(e) => panic!("unexpected pop error: {e}"),
            }
        }

        producer.join().unwrap();
        assert!(queue.lock().unwrap().is_empty());
    });
}
