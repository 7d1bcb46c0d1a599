use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use pixel_window::RepaintScheduler;

fn counting_scheduler() -> (RepaintScheduler, Arc<AtomicUsize>) {
    let posts = Arc::new(AtomicUsize::new(0));
    let counter = posts.clone();
    let scheduler = RepaintScheduler::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (scheduler, posts)
}

// ============================================================================
// Coalescing
// ============================================================================

#[test]
fn test_n_requests_between_passes_coalesce_to_one_post() {
    for n in [1, 2, 5, 100] {
        let (scheduler, posts) = counting_scheduler();
        let handle = scheduler.handle();

        for _ in 0..n {
            handle.request();
        }

        assert_eq!(posts.load(Ordering::SeqCst), 1, "n = {n}");
        assert!(scheduler.take(), "n = {n}");
        assert!(!scheduler.take(), "take must consume the flag");
    }
}

#[test]
fn test_flag_rearms_after_presentation_pass() {
    let (scheduler, posts) = counting_scheduler();
    let handle = scheduler.handle();

    for cycle in 1..=4 {
        handle.request();
        handle.request();
        assert_eq!(posts.load(Ordering::SeqCst), cycle);
        assert!(scheduler.take());
    }
}

#[test]
fn test_cloned_handles_share_the_flag() {
    let (scheduler, posts) = counting_scheduler();
    let a = scheduler.handle();
    let b = a.clone();

    a.request();
    b.request();
    assert_eq!(posts.load(Ordering::SeqCst), 1);
}

// ============================================================================
// Teardown Race
// ============================================================================

#[test]
fn test_request_after_teardown_is_a_silent_noop() {
    let (scheduler, posts) = counting_scheduler();
    let handle = scheduler.handle();
    drop(scheduler);

    for _ in 0..10 {
        handle.request();
    }
    assert_eq!(posts.load(Ordering::SeqCst), 0);
}

#[test]
fn test_teardown_while_other_threads_request() {
    let (scheduler, posts) = counting_scheduler();
    let handle = scheduler.handle();

    let workers: Vec<_> = (0..4)
        .map(|_| {
            let handle = handle.clone();
            thread::spawn(move || {
                for _ in 0..1000 {
                    handle.request();
                }
            })
        })
        .collect();

    drop(scheduler);
    for worker in workers {
        worker.join().unwrap();
    }

    // Whatever landed before the drop was coalesced; nothing crashed.
    assert!(posts.load(Ordering::SeqCst) <= 1);
}

// ============================================================================
// Cross-Thread Requests
// ============================================================================

#[test]
fn test_concurrent_requests_post_at_most_once_per_cycle() {
    let (scheduler, posts) = counting_scheduler();

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let handle = scheduler.handle();
            thread::spawn(move || {
                for _ in 0..500 {
                    handle.request();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    // No take() ran, so every request after the first coalesced.
    assert_eq!(posts.load(Ordering::SeqCst), 1);
    assert!(scheduler.take());
}
