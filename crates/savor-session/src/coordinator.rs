//! # Async Fetch Coordinator
//!
//! Bookkeeping that decides whether a finished remote call may write its
//! result into the session.
//!
//! ## Generations
//! ```text
//! open(1) ──► gen 1 ──► Item#1, FavoriteStatus#2 issued
//! open(2) ──► gen 2 ──► gen-1 tickets cancelled, new tickets issued
//!                        │
//!     late Item#1 reply ─┴──► ticket.generation != current ──► discarded
//! ```
//!
//! A result is applied only when its ticket is still *current*:
//! - same generation as the session,
//! - not cancelled,
//! - still the registered operation of its [`FetchKind`].
//!
//! The check happens at apply time, under the session lock, so a reply that
//! was already in flight when cancellation was requested cannot win.

use std::collections::HashMap;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::{AbortHandle, JoinHandle};

use crate::error::SessionError;

// =============================================================================
// Generation
// =============================================================================

/// Identifies the current identifier/screen instance.
///
/// Advances on every `open` and on `close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Fetch Kind
// =============================================================================

/// The kinds of remote operation a session runs. At most one of each is
/// pending at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Item,
    FavoriteStatus,
    FavoriteToggle,
    SubmitOrder,
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FetchKind::Item => "item",
            FetchKind::FavoriteStatus => "favorite_status",
            FetchKind::FavoriteToggle => "favorite_toggle",
            FetchKind::SubmitOrder => "submit_order",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Ticket
// =============================================================================

/// Captured at issue time and carried by the operation's task.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Generation,
    kind: FetchKind,
    seq: u64,
    cancelled: Arc<AtomicBool>,
}

impl Ticket {
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

struct Pending {
    ticket: Ticket,
    abort: Option<AbortHandle>,
}

impl Pending {
    fn cancel(&self) {
        self.ticket.cancel();
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }
}

// =============================================================================
// Coordinator
// =============================================================================

/// Tracks the current generation and the pending operation of each kind.
#[derive(Default)]
pub struct Coordinator {
    generation: Generation,
    next_seq: u64,
    pending: HashMap<FetchKind, Pending>,
}

impl Coordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Cancels everything pending and moves to a new generation.
    pub fn advance(&mut self) -> Generation {
        self.cancel_all();
        self.generation = self.generation.next();
        self.generation
    }

    /// Issues a ticket for `kind`, cancelling the pending one of that kind.
    pub fn issue(&mut self, kind: FetchKind) -> Ticket {
        if let Some(previous) = self.pending.remove(&kind) {
            previous.cancel();
        }

        self.next_seq += 1;
        let ticket = Ticket {
            generation: self.generation,
            kind,
            seq: self.next_seq,
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        self.pending.insert(
            kind,
            Pending {
                ticket: ticket.clone(),
                abort: None,
            },
        );
        ticket
    }

    /// Attaches the spawned task to its ticket so cancellation can abort it.
    pub fn attach(&mut self, ticket: &Ticket, abort: AbortHandle) {
        match self.pending.get_mut(&ticket.kind) {
            Some(pending) if pending.ticket.seq == ticket.seq => pending.abort = Some(abort),
            // Superseded before the task was attached
            _ => abort.abort(),
        }
    }

    /// Whether a result carried by `ticket` may still be applied.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation
            && !ticket.is_cancelled()
            && self
                .pending
                .get(&ticket.kind)
                .is_some_and(|p| p.ticket.seq == ticket.seq)
    }

    /// Retires `ticket` if it is current. Returns `false` for stale tickets.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pending.remove(&ticket.kind);
        true
    }

    pub fn cancel_all(&mut self) {
        for (_, pending) in self.pending.drain() {
            pending.cancel();
        }
    }

    pub fn has_pending(&self, kind: FetchKind) -> bool {
        self.pending
            .get(&kind)
            .is_some_and(|p| !p.ticket.is_cancelled())
    }
}

// =============================================================================
// Handles
// =============================================================================

/// How an operation ended when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// Superseded, cancelled, or torn down. Never an error.
    Cancelled,
}

impl<T> Outcome<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }

    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }
}

/// Cancels one operation. Cloneable; cancelling twice is harmless.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
    abort: AbortHandle,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.abort.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Future-like handle to a running operation.
///
/// Awaiting it yields `Ok(Outcome::Cancelled)` for cancelled operations and
/// `Err` only for real failures.
#[derive(Debug)]
pub struct OperationHandle<T> {
    join: JoinHandle<Result<Outcome<T>, SessionError>>,
    cancel: CancelHandle,
}

impl<T> OperationHandle<T> {
    pub(crate) fn new(join: JoinHandle<Result<Outcome<T>, SessionError>>, ticket: &Ticket) -> Self {
        let cancel = CancelHandle {
            cancelled: Arc::clone(&ticket.cancelled),
            abort: join.abort_handle(),
        };
        Self { join, cancel }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }
}

impl<T: Send + 'static> IntoFuture for OperationHandle<T> {
    type Output = Result<Outcome<T>, SessionError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            match self.join.await {
                Ok(result) => result,
                Err(e) if e.is_cancelled() => Ok(Outcome::Cancelled),
                Err(e) => Err(SessionError::TaskFailed(e.to_string())),
            }
        })
    }
}
