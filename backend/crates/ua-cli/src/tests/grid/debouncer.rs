use crate::grid::Debouncer;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use googletest::assert_that;
use googletest::prelude::eq;

#[tokio::test]
async fn given_burst_when_flushed_then_only_last_task_runs() {
    // Given
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let runs = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(AtomicUsize::new(0));

    // When
    for i in 1..=3 {
        let runs = Arc::clone(&runs);
        let last = Arc::clone(&last);
        debouncer.schedule(async move {
            runs.fetch_add(1, Ordering::SeqCst);
            last.store(i, Ordering::SeqCst);
        });
    }
    debouncer.flush().await;

    // Then
    assert_that!(runs.load(Ordering::SeqCst), eq(1));
    assert_that!(last.load(Ordering::SeqCst), eq(3));
    assert_that!(debouncer.is_pending(), eq(false));
}

#[tokio::test]
async fn given_pending_task_when_cancelled_then_never_runs() {
    let debouncer = Debouncer::new(Duration::from_millis(20));
    let runs = Arc::new(AtomicUsize::new(0));
    let task_runs = Arc::clone(&runs);
    debouncer.schedule(async move {
        task_runs.fetch_add(1, Ordering::SeqCst);
    });
    assert_that!(debouncer.is_pending(), eq(true));

    debouncer.cancel();
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_that!(runs.load(Ordering::SeqCst), eq(0));
}
