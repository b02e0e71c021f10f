//! Concurrent container resolution tests
//!
//! These tests verify the single-flight guarantee: first-time resolution
//! of a lazy singleton from many threads runs the factory exactly once,
//! and every caller observes the same instance.
//!
//! Run with: cargo test --test container_concurrency_test -- --nocapture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use keel_core::container::Container;

/// Number of concurrent threads for the contention tests.
/// Keep this realistic - a process wires one context, but desktop apps may
/// resolve from a handful of tasks at once.
const THREAD_COUNT: usize = 8;

struct Service {
    marker: usize,
}

#[test]
fn test_concurrent_singleton_resolution_runs_factory_once() {
    let container = Arc::new(Container::new());
    let invocations = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&invocations);
    container
        .register_singleton(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            // Widen the race window so every thread arrives before the
            // factory finishes.
            thread::sleep(Duration::from_millis(50));
            Ok(Arc::new(Service { marker: 42 }))
        })
        .unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let mut handles = vec![];

    for _ in 0..THREAD_COUNT {
        let container = Arc::clone(&container);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let service: Arc<Service> = container.resolve().unwrap();
            service
        }));
    }

    let resolved: Vec<Arc<Service>> = handles
        .into_iter()
        .map(|h| h.join().expect("resolver thread panicked"))
        .collect();

    assert_eq!(
        invocations.load(Ordering::SeqCst),
        1,
        "factory must run exactly once"
    );
    for service in &resolved {
        assert_eq!(service.marker, 42);
        assert!(
            Arc::ptr_eq(service, &resolved[0]),
            "all callers must observe the same instance"
        );
    }
}

#[test]
fn test_concurrent_factory_resolution_yields_fresh_instances() {
    let container = Arc::new(Container::new());
    let invocations = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&invocations);
    container
        .register_factory(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(Service { marker: 7 }))
        })
        .unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let mut handles = vec![];

    for _ in 0..THREAD_COUNT {
        let container = Arc::clone(&container);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            let service: Arc<Service> = container.resolve().unwrap();
            service
        }));
    }

    let resolved: Vec<Arc<Service>> = handles
        .into_iter()
        .map(|h| h.join().expect("resolver thread panicked"))
        .collect();

    assert_eq!(invocations.load(Ordering::SeqCst), THREAD_COUNT);
    for pair in resolved.windows(2) {
        assert!(!Arc::ptr_eq(&pair[0], &pair[1]));
    }
}

#[test]
fn test_concurrent_resolution_of_dependent_singletons() {
    struct Inner;
    struct Outer {
        _inner: Arc<Inner>,
    }

    let container = Arc::new(Container::new());
    let inner_invocations = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&inner_invocations);
    container
        .register_singleton(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            Ok(Arc::new(Inner))
        })
        .unwrap();
    container
        .register_singleton::<Arc<Outer>, _>(|c| {
            Ok(Arc::new(Outer { _inner: c.resolve()? }))
        })
        .unwrap();

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let mut handles = vec![];

    // Half the threads resolve the outer service, half the inner one.
    for i in 0..THREAD_COUNT {
        let container = Arc::clone(&container);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            if i % 2 == 0 {
                let _: Arc<Outer> = container.resolve().unwrap();
            } else {
                let _: Arc<Inner> = container.resolve().unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().expect("resolver thread panicked");
    }

    assert_eq!(inner_invocations.load(Ordering::SeqCst), 1);
}
