use tokio::sync::watch;
use tracing::warn;

/// Creates a readiness gate that stays closed until [`ReadySignal::mark_ready`]
/// is called.
pub fn ready_gate() -> (ReadySignal, ReadyGate) {
    let (tx, rx) = watch::channel(false);
    (ReadySignal { tx }, ReadyGate { rx })
}

/// Owner side of the gate, held by whatever loads the directory.
#[derive(Debug)]
pub struct ReadySignal {
    tx: watch::Sender<bool>,
}

impl ReadySignal {
    pub fn mark_ready(&self) {
        self.tx.send_replace(true);
    }
}

#[derive(Debug, Clone)]
pub struct ReadyGate {
    rx: watch::Receiver<bool>,
}

impl ReadyGate {
    /// A gate that never blocks.
    pub fn open() -> Self {
        let (_tx, rx) = watch::channel(true);
        Self { rx }
    }

    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the gate is ready. A signal dropped before marking the
    /// gate ready opens it as well.
    pub async fn wait(&self) {
        if self.is_ready() {
            return;
        }
        let mut rx = self.rx.clone();
        if rx.wait_for(|ready| *ready).await.is_err() {
            warn!("Directory readiness signal dropped before it was marked ready");
        }
    }
}
