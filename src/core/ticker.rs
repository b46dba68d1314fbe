use std::ops::ControlFlow;
use std::time::{Duration, Instant};

/// Invoke `step` once per `interval` until it returns `ControlFlow::Break`.
///
/// The loop owns no other state: callers cancel it by dropping or cancelling
/// the task that awaits it, which discards the pending sleep before the next
/// step runs.
pub async fn run_ticker<F>(interval: Duration, mut step: F)
where
    F: FnMut(Instant) -> ControlFlow<()>,
{
    loop {
        tokio::time::sleep(interval).await;
        if step(Instant::now()).is_break() {
            break;
        }
    }
}
