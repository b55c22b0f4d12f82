// src/application/cancel.rs
use tokio::sync::watch;

/// Receiving half of a cancellation signal. Clones observe the same handle.
#[derive(Clone, Debug)]
pub struct CancellationSignal {
    rx: watch::Receiver<bool>,
}

/// Sending half; dropping it without cancelling means "never cancelled".
#[derive(Debug)]
pub struct CancellationHandle {
    tx: watch::Sender<bool>,
}

pub fn cancellation() -> (CancellationHandle, CancellationSignal) {
    let (tx, rx) = watch::channel(false);
    (CancellationHandle { tx }, CancellationSignal { rx })
}

impl CancellationHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl CancellationSignal {
    pub fn never() -> Self {
        let (_, signal) = cancellation();
        signal
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once cancellation is requested; pends forever if the handle is
    /// dropped first.
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
