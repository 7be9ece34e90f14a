use crate::error::{Error, Result};
use futures::{channel::mpsc, Future};
use log::debug;
use std::cell::RefCell;
use std::pin::Pin;
use std::task::Poll;

pub type ExecutorFuture =
    Pin<Box<dyn Future<Output = Result<(), Box<dyn std::error::Error>>> + 'static>>;

/// Drives a single module future, polling it whenever an event arrives.
///
/// Events sent while the future is being polled, e.g. from a SimConnect
/// dispatch inside the module, are queued and picked up by the running poll.
pub struct Executor<I, T> {
    handle: fn(I) -> ExecutorFuture,
    future: RefCell<Option<ExecutorFuture>>,
    tx: RefCell<Option<mpsc::Sender<T>>>,
}

impl<I, T> Executor<I, T> {
    pub const fn new(handle: fn(I) -> ExecutorFuture) -> Self {
        Self {
            handle,
            future: RefCell::new(None),
            tx: RefCell::new(None),
        }
    }

    pub fn is_running(&self) -> bool {
        self.future.try_borrow().map_or(true, |future| future.is_some())
    }

    pub(crate) fn start(&self, get_input: impl FnOnce(mpsc::Receiver<T>) -> I) -> Result<()> {
        if self.is_running() {
            return Err(Error::ExecutorRunning);
        }
        let (tx, rx) = mpsc::channel(1);
        *self.tx.borrow_mut() = Some(tx);
        let future = (self.handle)(get_input(rx));
        *self.future.borrow_mut() = Some(future);
        self.poll()
    }

    /// Enqueues `data` and polls the future. `None` closes the channel, after
    /// which the module sees the end of its event stream.
    pub(crate) fn send(&self, data: Option<T>) -> Result<()> {
        self.enqueue(data)?;
        self.poll()
    }

    /// Enqueues `data` without polling.
    pub(crate) fn enqueue(&self, data: Option<T>) -> Result<()> {
        match data {
            Some(data) => {
                let mut tx = self.tx.borrow_mut();
                let tx = tx.as_mut().ok_or(Error::ExecutorIdle)?;
                tx.try_send(data).map_err(|e| {
                    if e.is_full() {
                        Error::EventDropped
                    } else {
                        Error::ExecutorIdle
                    }
                })
            }
            None => {
                self.tx.borrow_mut().take();
                Ok(())
            }
        }
    }

    pub(crate) fn poll(&self) -> Result<()> {
        let Ok(mut slot) = self.future.try_borrow_mut() else {
            // Re-entered from inside the module.
            return Ok(());
        };
        let future = slot.as_mut().ok_or(Error::ExecutorIdle)?;

        let mut context = std::task::Context::from_waker(futures::task::noop_waker_ref());
        match future.as_mut().poll(&mut context) {
            Poll::Pending => Ok(()),
            Poll::Ready(result) => {
                slot.take();
                drop(slot);
                self.tx.borrow_mut().take();
                debug!("module finished: {:?}", result.as_ref().map_err(|e| e.to_string()));
                result.map_err(|e| Error::Module(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    struct Input {
        rx: mpsc::Receiver<u32>,
    }

    fn sum_until_closed(mut input: Input) -> ExecutorFuture {
        Box::pin(async move {
            let mut total = 0;
            while let Some(n) = input.rx.next().await {
                total += n;
                if total > 100 {
                    return Err("overflow".into());
                }
            }
            Ok::<(), Box<dyn std::error::Error>>(())
        })
    }

    fn finish_immediately(_: Input) -> ExecutorFuture {
        Box::pin(async { Ok::<(), Box<dyn std::error::Error>>(()) })
    }

    #[test]
    fn runs_until_channel_closes() {
        let executor = Executor::new(sum_until_closed);
        executor.start(|rx| Input { rx }).unwrap();
        assert!(executor.is_running());
        executor.send(Some(1)).unwrap();
        executor.send(Some(2)).unwrap();
        executor.send(None).unwrap();
        assert!(!executor.is_running());
        assert!(matches!(executor.send(Some(3)), Err(Error::ExecutorIdle)));
    }

    #[test]
    fn second_start_is_rejected() {
        let executor = Executor::new(sum_until_closed);
        executor.start(|rx| Input { rx }).unwrap();
        assert!(matches!(
            executor.start(|rx| Input { rx }),
            Err(Error::ExecutorRunning)
        ));
    }

    #[test]
    fn finished_future_is_dropped() {
        let executor = Executor::new(finish_immediately);
        executor.start(|rx| Input { rx }).unwrap();
        assert!(!executor.is_running());
        assert!(matches!(executor.send(None), Err(Error::ExecutorIdle)));
        // Can be started again once idle.
        executor.start(|rx| Input { rx }).unwrap();
    }

    #[test]
    fn module_errors_are_reported() {
        let executor = Executor::new(sum_until_closed);
        executor.start(|rx| Input { rx }).unwrap();
        let err = executor.send(Some(101)).unwrap_err();
        assert!(matches!(err, Error::Module(message) if message == "overflow"));
        assert!(!executor.is_running());
    }

    #[test]
    fn full_channel_drops_events() {
        let executor = Executor::new(sum_until_closed);
        executor.start(|rx| Input { rx }).unwrap();
        executor.enqueue(Some(1)).unwrap();
        executor.enqueue(Some(1)).unwrap();
        assert!(matches!(executor.enqueue(Some(1)), Err(Error::EventDropped)));
        executor.poll().unwrap();
        executor.send(Some(1)).unwrap();
    }

    #[test]
    fn send_before_start_is_idle() {
        let executor: Executor<Input, u32> = Executor::new(sum_until_closed);
        assert!(matches!(executor.send(Some(1)), Err(Error::ExecutorIdle)));
    }
}
