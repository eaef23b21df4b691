use tokio::sync::watch;

/// Signals a [`Shutdown`] that in-flight work should stop.
#[derive(Debug)]
pub struct ShutdownTrigger {
    sender: watch::Sender<bool>,
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        let _ = self.sender.send_replace(true);
    }

    /// Fire on the first interrupt and call `force_exit` on the second.
    ///
    /// `interrupt` resolves once per delivered interrupt; an error means
    /// interrupts cannot be observed and the trigger never fires.
    pub async fn on_interrupts<F, Fut>(self, mut interrupt: F, force_exit: impl FnOnce())
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::io::Result<()>>,
    {
        if interrupt().await.is_err() {
            return;
        }
        self.trigger();

        if interrupt().await.is_ok() {
            force_exit();
        }
    }
}

/// Cancellation signal observed by the API client while a request is in flight.
#[derive(Debug, Clone)]
pub struct Shutdown {
    receiver: watch::Receiver<bool>,
}

impl Shutdown {
    #[must_use]
    pub fn new() -> (ShutdownTrigger, Self) {
        let (sender, receiver) = watch::channel(false);
        (ShutdownTrigger { sender }, Self { receiver })
    }

    /// A signal that never fires.
    #[must_use]
    pub fn never() -> Self {
        let (_, shutdown) = Self::new();
        shutdown
    }

    #[must_use]
    pub fn is_requested(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolves once shutdown has been requested.
    ///
    /// If the trigger is dropped without firing, this never resolves.
    pub async fn requested(&self) {
        let mut receiver = self.receiver.clone();
        if receiver.wait_for(|requested| *requested).await.is_err() {
            core::future::pending::<()>().await;
        }
    }
}
