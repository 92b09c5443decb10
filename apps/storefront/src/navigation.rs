//! Navigation for a terminal host: "going back" ends the command.

use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::Notify;

use savor_session::Navigator;

/// Records `go_back` requests and wakes whoever is waiting on them.
#[derive(Debug, Default)]
pub struct ExitNavigator {
    backs: AtomicUsize,
    notify: Notify,
}

impl ExitNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back_count(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }

    /// Resolves once `go_back` has been called at least once.
    pub async fn wait(&self) {
        if self.back_count() > 0 {
            return;
        }
        // notify_one stores a permit, so a call racing with this is not lost
        self.notify.notified().await;
    }
}

impl Navigator for ExitNavigator {
    fn go_back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
        self.notify.notify_one();
        tracing::debug!("navigating back");
    }
}
