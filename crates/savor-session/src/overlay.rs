//! # Confirmation Overlay
//!
//! Drives the toast shown after an order is confirmed. The overlay itself
//! is a presentation collaborator; this module owns its props and the two
//! callbacks.
//!
//! ```text
//! show() ──► visible ──┬── timeout elapses ──► hide ──► on_timeout ──► go_back()
//!                      └── close() (backdrop) ─► hide ──► on_close ──► go_back()
//! ```
//!
//! Whichever fires first wins; the other is a no-op for that `show()`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::debug;

/// Default confirmation text.
pub const DEFAULT_MESSAGE: &str = "Pedido confirmado!";

/// Default icon name.
pub const DEFAULT_ICON: &str = "thumbs-up";

/// Default icon color.
pub const DEFAULT_ICON_COLOR: &str = "#39B100";

/// Default auto-dismiss delay.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);

/// Navigation seam for the screen that hosts the overlay.
pub trait Navigator: Send + Sync {
    fn go_back(&self);
}

/// What the overlay component receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayProps {
    pub visible: bool,
    pub message: String,
    pub icon: String,
    pub icon_color: String,
    #[serde(rename = "timeout_ms", serialize_with = "as_millis")]
    pub timeout: Duration,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl Default for OverlayProps {
    fn default() -> Self {
        OverlayProps {
            visible: false,
            message: DEFAULT_MESSAGE.to_string(),
            icon: DEFAULT_ICON.to_string(),
            icon_color: DEFAULT_ICON_COLOR.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl OverlayProps {
    pub fn with_timeout(timeout: Duration) -> Self {
        OverlayProps {
            timeout,
            ..Self::default()
        }
    }
}

struct OverlayState {
    props: OverlayProps,
    /// Incremented per `show()`; a timer only acts on its own showing.
    showing: u64,
    timer: Option<AbortHandle>,
}

struct OverlayInner {
    state: Mutex<OverlayState>,
    navigator: Arc<dyn Navigator>,
    props_tx: watch::Sender<OverlayProps>,
}

/// Why the overlay was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dismissal {
    Timeout,
    Close,
}

/// Cloneable handle to one overlay.
#[derive(Clone)]
pub struct Overlay {
    inner: Arc<OverlayInner>,
}

impl Overlay {
    pub fn new(props: OverlayProps, navigator: Arc<dyn Navigator>) -> Self {
        let props = OverlayProps {
            visible: false,
            ..props
        };
        let (props_tx, _) = watch::channel(props.clone());
        Overlay {
            inner: Arc::new(OverlayInner {
                state: Mutex::new(OverlayState {
                    props,
                    showing: 0,
                    timer: None,
                }),
                navigator,
                props_tx,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, OverlayState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn props(&self) -> OverlayProps {
        self.lock().props.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<OverlayProps> {
        self.inner.props_tx.subscribe()
    }

    pub fn is_visible(&self) -> bool {
        self.lock().props.visible
    }

    /// Makes the overlay visible and arms the auto-dismiss timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn show(&self) {
        let mut state = self.lock();
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        state.showing += 1;
        state.props.visible = true;

        let showing = state.showing;
        let timeout = state.props.timeout;
        let overlay = self.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            overlay.dismiss(Some(showing), Dismissal::Timeout);
        });
        state.timer = Some(timer.abort_handle());

        self.inner.props_tx.send_replace(state.props.clone());
        debug!(showing, ?timeout, "overlay shown");
    }

    /// Backdrop press.
    pub fn close(&self) {
        self.dismiss(None, Dismissal::Close);
    }

    /// Timeout callback for hosts that run their own timer.
    pub fn on_timeout(&self) {
        self.dismiss(None, Dismissal::Timeout);
    }

    fn dismiss(&self, showing: Option<u64>, reason: Dismissal) {
        {
            let mut state = self.lock();
            if !state.props.visible || showing.is_some_and(|s| s != state.showing) {
                return;
            }
            state.props.visible = false;
            if reason == Dismissal::Close {
                if let Some(timer) = state.timer.take() {
                    timer.abort();
                }
            } else {
                state.timer = None;
            }
            self.inner.props_tx.send_replace(state.props.clone());
        }

        debug!(?reason, "overlay dismissed");
        // Both callbacks leave the screen
        self.inner.navigator.go_back();
    }
}
