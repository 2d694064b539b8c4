//! `MoveCompletion`: resolves when the body stops steering.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

/// Handle returned by [`PhysicsIntegrator::wait_for_arrival`][crate::PhysicsIntegrator::wait_for_arrival].
///
/// Completes the tick `is_moving` clears, whether because the target was
/// reached, cleared, or pre-empted by a drag.  Dropping the integrator also
/// completes it.  Awaiting it never yields a value: the caller re-reads the
/// body to learn where it ended up.
#[derive(Debug)]
pub struct MoveCompletion {
    rx: Option<oneshot::Receiver<()>>,
}

impl MoveCompletion {
    pub(crate) fn pending(rx: oneshot::Receiver<()>) -> Self {
        Self { rx: Some(rx) }
    }

    /// A handle that is already complete.
    pub(crate) fn ready() -> Self {
        Self { rx: None }
    }

    /// Non-blocking check, usable from a host's frame loop.
    pub fn is_complete(&mut self) -> bool {
        let Some(rx) = self.rx.as_mut() else {
            return true;
        };
        // A dropped sender means the integrator is gone; nothing will move again.
        let done = !matches!(rx.try_recv(), Ok(None));
        if done {
            self.rx = None;
        }
        done
    }
}

impl Future for MoveCompletion {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(rx) = self.rx.as_mut() else {
            return Poll::Ready(());
        };
        match Pin::new(rx).poll(cx) {
            Poll::Ready(_) => {
                self.rx = None;
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
