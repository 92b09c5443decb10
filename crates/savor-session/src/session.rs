//! # Details Session
//!
//! One detail screen: the item on display, its extras ledger, the order
//! quantity, the favorite flag, and every remote operation they depend on.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  open(id) ─► generation+1 ─► reset state ─► spawn Item + FavoriteStatus │
//! │                                                                         │
//! │  increment/decrement ─► mutate ledger/counter ─► publish view           │
//! │                                                                         │
//! │  toggle_favorite ─► spawn FavoriteToggle ─► flip on success             │
//! │  submit_order    ─► spawn SubmitOrder    ─► confirm + show overlay      │
//! │                                                                         │
//! │  close() / drop ─► generation+1 ─► cancel everything                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Locking
//! State lives behind a `std::sync::Mutex`. It is never held across an
//! `.await`: tasks are spawned and registered inside one critical section,
//! and results are applied inside another.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use savor_client::{ClientResult, MenuApi};
use savor_core::{
    CoreError, ExtraId, ExtrasLedger, Item, ItemId, ItemSummary, MoneyFormatter, Order,
    OrderConfirmation, QuantityCounter,
};

use crate::coordinator::{Coordinator, FetchKind, Generation, OperationHandle, Outcome};
use crate::error::{SessionError, SessionResult};
use crate::overlay::Overlay;
use crate::view::DetailsView;

// =============================================================================
// Options
// =============================================================================

/// Presentation settings for a session.
#[derive(Clone, Default)]
pub struct SessionOptions {
    pub formatter: MoneyFormatter,
    /// Shown when an order is confirmed.
    pub overlay: Option<Overlay>,
}

// =============================================================================
// State
// =============================================================================

struct SessionState {
    coordinator: Coordinator,
    item_id: Option<ItemId>,
    item: Option<Item>,
    ledger: ExtrasLedger,
    quantity: QuantityCounter,
    is_favorite: bool,
    order_confirmed: bool,
}

impl SessionState {
    fn new() -> Self {
        SessionState {
            coordinator: Coordinator::new(),
            item_id: None,
            item: None,
            ledger: ExtrasLedger::new(),
            quantity: QuantityCounter::new(),
            is_favorite: false,
            order_confirmed: false,
        }
    }

    /// Clears everything tied to the previous item.
    fn reset(&mut self, item_id: Option<ItemId>) {
        self.item_id = item_id;
        self.item = None;
        self.ledger.clear();
        self.quantity.reset();
        self.is_favorite = false;
        self.order_confirmed = false;
    }

    fn loaded_item(&self) -> SessionResult<&Item> {
        if self.item_id.is_none() {
            return Err(SessionError::NoItemSelected);
        }
        self.item
            .as_ref()
            .ok_or(SessionError::Core(CoreError::ItemNotLoaded))
    }
}

struct Shared {
    id: Uuid,
    api: Arc<dyn MenuApi>,
    state: Mutex<SessionState>,
    view_tx: watch::Sender<DetailsView>,
    options: SessionOptions,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &SessionState) {
        let view = DetailsView::compute(
            state.item_id,
            state.item.as_ref(),
            &state.ledger,
            state.quantity.get(),
            state.is_favorite,
            state.order_confirmed,
            &self.options.formatter,
        );
        self.view_tx.send_replace(view);
    }
}

// =============================================================================
// Session
// =============================================================================

/// Handles returned by [`DetailsSession::open`].
#[derive(Debug)]
pub struct OpenHandles {
    pub generation: Generation,
    pub item: OperationHandle<Item>,
    pub favorite: OperationHandle<bool>,
}

/// The detail screen's state and its cancellable remote operations.
///
/// Methods that start remote work spawn tokio tasks and must be called
/// from within a runtime. Dropping the session cancels all of them.
pub struct DetailsSession {
    shared: Arc<Shared>,
}

impl DetailsSession {
    pub fn new(api: Arc<dyn MenuApi>) -> Self {
        Self::with_options(api, SessionOptions::default())
    }

    pub fn with_options(api: Arc<dyn MenuApi>, options: SessionOptions) -> Self {
        let (view_tx, _) = watch::channel(DetailsView::empty(&options.formatter));
        DetailsSession {
            shared: Arc::new(Shared {
                id: Uuid::new_v4(),
                api,
                state: Mutex::new(SessionState::new()),
                view_tx,
                options,
            }),
        }
    }

    pub fn id(&self) -> Uuid {
        self.shared.id
    }

    // -------------------------------------------------------------------------
    // Observation
    // -------------------------------------------------------------------------

    pub fn subscribe(&self) -> watch::Receiver<DetailsView> {
        self.shared.view_tx.subscribe()
    }

    /// Latest published snapshot.
    pub fn view(&self) -> DetailsView {
        self.shared.view_tx.borrow().clone()
    }

    pub fn generation(&self) -> Generation {
        self.shared.lock().coordinator.generation()
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.shared.options.overlay.as_ref()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Shows `id`: cancels everything for the previous item, resets the
    /// ledger, quantity, and favorite flag, then fetches the item and its
    /// favorite status.
    pub fn open(&self, id: ItemId) -> OpenHandles {
        let mut state = self.shared.lock();
        let generation = state.coordinator.advance();
        state.reset(Some(id));
        info!(session = %self.shared.id, item_id = %id, %generation, "opening item");

        let api = Arc::clone(&self.shared.api);
        let item = self.launch(
            &mut state,
            FetchKind::Item,
            async move { api.get_food(id).await },
            |state, item: Item| {
                state.ledger.load(&item.extras);
                state.quantity.reset();
                state.item = Some(item.clone());
                item
            },
        );

        let api = Arc::clone(&self.shared.api);
        let favorite = self.launch(
            &mut state,
            FetchKind::FavoriteStatus,
            async move { api.list_favorites(id).await },
            |state, records: Vec<ItemSummary>| {
                if !records.is_empty() {
                    state.is_favorite = true;
                }
                state.is_favorite
            },
        );

        self.shared.publish(&state);
        OpenHandles {
            generation,
            item,
            favorite,
        }
    }

    /// Tears the screen down: cancels all pending operations and clears
    /// the state.
    pub fn close(&self) {
        let mut state = self.shared.lock();
        let generation = state.coordinator.advance();
        state.reset(None);
        self.shared.publish(&state);
        info!(session = %self.shared.id, %generation, "session closed");
    }

    // -------------------------------------------------------------------------
    // Extras and quantity
    // -------------------------------------------------------------------------

    /// Adds one unit of an extra. Unknown ids are ignored.
    pub fn increment_extra(&self, id: ExtraId) -> bool {
        self.mutate(|state| state.ledger.increment(id))
    }

    /// Removes one unit of an extra, never below 0.
    pub fn decrement_extra(&self, id: ExtraId) -> bool {
        self.mutate(|state| state.ledger.decrement(id))
    }

    pub fn increment_order_quantity(&self) -> u32 {
        self.mutate(|state| {
            state.quantity.increment();
            state.quantity.get()
        })
    }

    /// Removes one from the order quantity, never below 1.
    pub fn decrement_order_quantity(&self) -> u32 {
        self.mutate(|state| {
            state.quantity.decrement();
            state.quantity.get()
        })
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut state = self.shared.lock();
        let result = f(&mut state);
        self.shared.publish(&state);
        result
    }

    // -------------------------------------------------------------------------
    // Favorite Toggle
    // -------------------------------------------------------------------------

    /// Flips the favorite flag once the menu service accepts the change.
    ///
    /// A pending toggle is cancelled by the next one. The handle resolves to
    /// the committed flag.
    ///
    /// Refused with [`SessionError::FavoriteStatusPending`] until the status
    /// lookup started by `open` has finished, since the flag it would flip
    /// is not known yet.
    pub fn toggle_favorite(&self) -> SessionResult<OperationHandle<bool>> {
        let mut state = self.shared.lock();
        let item = state.loaded_item()?;
        if state.coordinator.has_pending(FetchKind::FavoriteStatus) {
            return Err(SessionError::FavoriteStatusPending);
        }
        let id = item.id;
        let next = !state.is_favorite;
        let record = ItemSummary::from(item);
        debug!(session = %self.shared.id, item_id = %id, next, "toggling favorite");

        let api = Arc::clone(&self.shared.api);
        let call = async move {
            if next {
                api.create_favorite(&record).await
            } else {
                api.delete_favorite(id).await
            }
        };

        Ok(self.launch(&mut state, FetchKind::FavoriteToggle, call, move |state, ()| {
            state.is_favorite = next;
            next
        }))
    }

    // -------------------------------------------------------------------------
    // Order Submission
    // -------------------------------------------------------------------------

    /// Submits the current item and extras.
    ///
    /// On success `order_confirmed` becomes true and the overlay is shown,
    /// at most once per opened item.
    pub fn submit_order(&self) -> SessionResult<OperationHandle<OrderConfirmation>> {
        let mut state = self.shared.lock();
        let order = Order::snapshot(state.loaded_item()?, &state.ledger);
        let product_id = order.product_id;

        let api = Arc::clone(&self.shared.api);
        let overlay = self.shared.options.overlay.clone();
        let session = self.shared.id;

        Ok(self.launch(
            &mut state,
            FetchKind::SubmitOrder,
            async move { api.create_order(&order).await },
            move |state, ()| {
                if !state.order_confirmed {
                    state.order_confirmed = true;
                    info!(%session, item_id = %product_id, "order confirmed");
                    if let Some(overlay) = &overlay {
                        overlay.show();
                    }
                }
                OrderConfirmation::now(product_id)
            },
        ))
    }

    // -------------------------------------------------------------------------
    // Spawning
    // -------------------------------------------------------------------------

    /// Issues a ticket, spawns `call`, and attaches the task, all under the
    /// caller's lock. The task applies its result only if the ticket is
    /// still current when the reply arrives.
    fn launch<R, T, Fut, F>(
        &self,
        state: &mut SessionState,
        kind: FetchKind,
        call: Fut,
        apply: F,
    ) -> OperationHandle<T>
    where
        R: Send + 'static,
        T: Send + 'static,
        Fut: Future<Output = ClientResult<R>> + Send + 'static,
        F: FnOnce(&mut SessionState, R) -> T + Send + 'static,
    {
        let ticket = state.coordinator.issue(kind);
        let span = info_span!(
            "operation",
            session = %self.shared.id,
            item_id = ?state.item_id,
            generation = %ticket.generation(),
            %kind,
        );

        let shared = Arc::clone(&self.shared);
        let task_ticket = ticket.clone();
        let join = tokio::spawn(
            async move {
                let result = call.await;

                let mut state = shared.lock();
                if !state.coordinator.finish(&task_ticket) {
                    debug!(ok = result.is_ok(), "discarding stale result");
                    return Ok(Outcome::Cancelled);
                }

                match result {
                    Ok(value) => {
                        let out = apply(&mut state, value);
                        shared.publish(&state);
                        debug!("result applied");
                        Ok(Outcome::Completed(out))
                    }
                    Err(e) => {
                        warn!(error = %e, "operation failed");
                        Err(SessionError::Remote(e))
                    }
                }
            }
            .instrument(span),
        );

        state.coordinator.attach(&ticket, join.abort_handle());
        OperationHandle::new(join, &ticket)
    }
}

impl Drop for DetailsSession {
    fn drop(&mut self) {
        self.shared.lock().coordinator.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::{Navigator, OverlayProps};
    use crate::testing::{item, Call, Endpoint, FakeMenuApi};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn session(api: &Arc<FakeMenuApi>) -> DetailsSession {
        DetailsSession::new(api.clone())
    }

    async fn opened(api: &Arc<FakeMenuApi>, id: u64) -> DetailsSession {
        let session = session(api);
        let handles = session.open(ItemId(id));
        handles.item.await.unwrap();
        handles.favorite.await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_open_loads_item_and_seeds_ledger() {
        let api = FakeMenuApi::new();
        let session = session(&api);
        let handles = session.open(ItemId(2));

        let item = handles.item.await.unwrap().completed().unwrap();
        assert_eq!(item.id, ItemId(2));
        assert_eq!(handles.favorite.await.unwrap(), Outcome::Completed(false));

        let view = session.view();
        assert_eq!(view.item_id, Some(ItemId(2)));
        assert_eq!(view.extras.len(), 2);
        assert!(view.extras.iter().all(|e| e.quantity == 0));
        assert_eq!(view.order_quantity, 1);
        assert_eq!(view.formatted_total, "$25.00");
        assert_eq!(view.favorite_icon, "favorite-border");
    }

    #[tokio::test]
    async fn test_running_total_scenario() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;
        assert_eq!(session.view().formatted_total, "$10.00");

        session.increment_extra(ExtraId(1));
        session.increment_extra(ExtraId(1));
        let view = session.view();
        assert_eq!(view.extras[0].quantity, 2);
        assert_eq!(view.formatted_total, "$14.00");

        assert_eq!(session.increment_order_quantity(), 2);
        assert_eq!(session.view().formatted_total, "$28.00");
    }

    #[tokio::test]
    async fn test_floors_are_idempotent() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;

        assert!(!session.decrement_extra(ExtraId(1)));
        assert!(!session.decrement_extra(ExtraId(1)));
        assert_eq!(session.view().extras[0].quantity, 0);

        assert_eq!(session.decrement_order_quantity(), 1);
        assert_eq!(session.decrement_order_quantity(), 1);
        assert_eq!(session.view().formatted_total, "$10.00");
    }

    #[tokio::test]
    async fn test_extra_step_adds_value_times_quantity() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 2).await;
        session.increment_order_quantity();
        session.increment_order_quantity();
        let before = session.view().total;

        session.increment_extra(ExtraId(5));
        let after = session.view().total;
        assert_eq!((after - before).cents(), 300 * 3);
    }

    #[tokio::test]
    async fn test_reopen_resets_extras_and_quantity() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;
        session.increment_extra(ExtraId(1));
        session.increment_order_quantity();

        let handles = session.open(ItemId(1));
        // Reset is immediate, before the reload lands
        let view = session.view();
        assert!(view.item.is_none());
        assert!(view.extras.is_empty());
        assert_eq!(view.order_quantity, 1);

        handles.item.await.unwrap();
        let view = session.view();
        assert_eq!(view.extras[0].quantity, 0);
        assert_eq!(view.order_quantity, 1);
    }

    #[tokio::test]
    async fn test_opening_other_item_starts_fresh() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;
        session.increment_extra(ExtraId(1));
        session.increment_extra(ExtraId(1));
        session.increment_order_quantity();
        session.increment_order_quantity();

        let handles = session.open(ItemId(2));
        handles.item.await.unwrap();
        handles.favorite.await.unwrap();

        let view = session.view();
        assert_eq!(view.item_id, Some(ItemId(2)));
        let ids: Vec<_> = view.extras.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![ExtraId(5), ExtraId(6)]);
        assert!(view.extras.iter().all(|e| e.quantity == 0));
        assert_eq!(view.order_quantity, 1);
        assert_eq!(view.formatted_total, "$25.00");
    }

    #[tokio::test]
    async fn test_new_id_cancels_previous_fetch() {
        let api = FakeMenuApi::new();
        api.hold(Endpoint::GetFood);
        let session = session(&api);

        let first = session.open(ItemId(1));
        api.wait_for_call(|c| *c == Call::GetFood(ItemId(1))).await;
        let second = session.open(ItemId(2));

        // The stale reply is let through first, then the fresh one
        api.release(Endpoint::GetFood);
        api.release(Endpoint::GetFood);

        assert_eq!(first.item.await.unwrap(), Outcome::Cancelled);
        let item = second.item.await.unwrap().completed().unwrap();
        assert_eq!(item.id, ItemId(2));
        assert_eq!(session.view().item.map(|i| i.id), Some(ItemId(2)));
    }

    #[tokio::test]
    async fn test_cancelled_fetch_does_not_mutate_state() {
        let api = FakeMenuApi::new();
        api.set_favorite(ItemId(1));
        api.hold(Endpoint::GetFood);
        api.hold(Endpoint::ListFavorites);
        let session = session(&api);

        let handles = session.open(ItemId(1));
        api.wait_for_call(|c| *c == Call::GetFood(ItemId(1))).await;
        handles.item.cancel();
        handles.favorite.cancel();

        api.release(Endpoint::GetFood);
        api.release(Endpoint::ListFavorites);

        assert_eq!(handles.item.await.unwrap(), Outcome::Cancelled);
        assert_eq!(handles.favorite.await.unwrap(), Outcome::Cancelled);
        let view = session.view();
        assert!(view.item.is_none());
        assert!(view.extras.is_empty());
        assert!(!view.is_favorite);
    }

    #[tokio::test]
    async fn test_close_cancels_everything() {
        let api = FakeMenuApi::new();
        api.hold(Endpoint::GetFood);
        let session = session(&api);

        let handles = session.open(ItemId(1));
        let generation = session.generation();
        session.close();
        api.release(Endpoint::GetFood);

        assert_eq!(handles.item.await.unwrap(), Outcome::Cancelled);
        assert!(session.generation() > generation);
        assert!(session.view().item_id.is_none());
    }

    #[tokio::test]
    async fn test_drop_cancels_pending() {
        let api = FakeMenuApi::new();
        api.hold(Endpoint::GetFood);
        let session = session(&api);
        let handles = session.open(ItemId(1));
        let cancel = handles.item.cancel_handle();

        drop(session);
        assert!(cancel.is_cancelled());
        assert_eq!(handles.item.await.unwrap(), Outcome::Cancelled);
    }

    #[tokio::test]
    async fn test_remote_failure_propagates() {
        let api = FakeMenuApi::new();
        let session = session(&api);

        let handles = session.open(ItemId(404));
        let err = handles.item.await.unwrap_err();
        assert!(err.is_not_found());
        assert!(session.view().item.is_none());
    }

    #[tokio::test]
    async fn test_favorite_status_from_membership() {
        let api = FakeMenuApi::new();
        api.set_favorite(ItemId(1));
        let session = opened(&api, 1).await;

        let view = session.view();
        assert!(view.is_favorite);
        assert_eq!(view.favorite_icon, "favorite");
    }

    #[tokio::test]
    async fn test_toggle_favorite_round_trip() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;
        assert!(!session.view().is_favorite);

        let on = session.toggle_favorite().unwrap().await.unwrap();
        assert_eq!(on, Outcome::Completed(true));
        assert!(session.view().is_favorite);

        let off = session.toggle_favorite().unwrap().await.unwrap();
        assert_eq!(off, Outcome::Completed(false));
        assert!(!session.view().is_favorite);

        let calls = api.calls();
        let created = calls.iter().find_map(|c| match c {
            Call::CreateFavorite(record) => Some(record.clone()),
            _ => None,
        });
        let created = created.unwrap();
        assert_eq!(created.id, ItemId(1));
        assert!(serde_json::to_value(&created).unwrap().get("extras").is_none());
        assert!(calls.contains(&Call::DeleteFavorite(ItemId(1))));
    }

    #[tokio::test]
    async fn test_toggle_failure_keeps_state() {
        let api = FakeMenuApi::new();
        api.fail(Endpoint::CreateFavorite);
        let session = opened(&api, 1).await;

        let err = session.toggle_favorite().unwrap().await.unwrap_err();
        assert!(matches!(err, SessionError::Remote(_)));
        assert!(!session.view().is_favorite);
    }

    #[tokio::test]
    async fn test_cancelled_toggle_is_silent() {
        let api = FakeMenuApi::new();
        api.hold(Endpoint::CreateFavorite);
        let session = opened(&api, 1).await;

        let handle = session.toggle_favorite().unwrap();
        handle.cancel();
        api.release(Endpoint::CreateFavorite);

        assert_eq!(handle.await.unwrap(), Outcome::Cancelled);
        assert!(!session.view().is_favorite);
    }

    #[tokio::test]
    async fn test_second_toggle_supersedes_first() {
        let api = FakeMenuApi::new();
        api.hold(Endpoint::CreateFavorite);
        let session = opened(&api, 1).await;

        let first = session.toggle_favorite().unwrap();
        let second = session.toggle_favorite().unwrap();
        api.release(Endpoint::CreateFavorite);
        api.release(Endpoint::CreateFavorite);

        assert_eq!(first.await.unwrap(), Outcome::Cancelled);
        assert_eq!(second.await.unwrap(), Outcome::Completed(true));
        assert!(session.view().is_favorite);
    }

    #[tokio::test]
    async fn test_toggle_requires_item() {
        let api = FakeMenuApi::new();
        let session = session(&api);
        assert!(matches!(
            session.toggle_favorite(),
            Err(SessionError::NoItemSelected)
        ));

        api.hold(Endpoint::GetFood);
        let _handles = session.open(ItemId(1));
        assert!(matches!(
            session.toggle_favorite(),
            Err(SessionError::Core(CoreError::ItemNotLoaded))
        ));
    }

    #[tokio::test]
    async fn test_toggle_waits_for_favorite_status() {
        let api = FakeMenuApi::new();
        api.set_favorite(ItemId(1));
        api.hold(Endpoint::ListFavorites);
        let session = session(&api);

        let handles = session.open(ItemId(1));
        handles.item.await.unwrap();
        assert!(matches!(
            session.toggle_favorite(),
            Err(SessionError::FavoriteStatusPending)
        ));

        api.release(Endpoint::ListFavorites);
        assert_eq!(handles.favorite.await.unwrap(), Outcome::Completed(true));

        let off = session.toggle_favorite().unwrap().await.unwrap();
        assert_eq!(off, Outcome::Completed(false));
        let calls = api.calls();
        assert!(calls.contains(&Call::DeleteFavorite(ItemId(1))));
        assert!(!calls.iter().any(|c| matches!(c, Call::CreateFavorite(_))));
    }

    #[tokio::test]
    async fn test_submit_order_confirms_once() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;

        session.increment_extra(ExtraId(1));
        let confirmation = session.submit_order().unwrap().await.unwrap();
        assert_eq!(confirmation.completed().unwrap().product_id, ItemId(1));
        assert!(session.view().order_confirmed);

        session.submit_order().unwrap().await.unwrap();
        assert!(session.view().order_confirmed);

        let orders: Vec<_> = api
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::CreateOrder(order) => Some(order),
                _ => None,
            })
            .collect();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].extras[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_order_payload_keeps_zero_quantity_extras() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 2).await;
        session.increment_extra(ExtraId(6));
        session.submit_order().unwrap().await.unwrap();

        let order = api
            .calls()
            .into_iter()
            .find_map(|c| match c {
                Call::CreateOrder(order) => Some(order),
                _ => None,
            })
            .unwrap();
        assert_eq!(order.product_id, ItemId(2));
        let quantities: Vec<_> = order.extras.iter().map(|e| e.quantity).collect();
        assert_eq!(quantities, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_cancelled_submit_leaves_unconfirmed() {
        let api = FakeMenuApi::new();
        api.hold(Endpoint::CreateOrder);
        let session = opened(&api, 1).await;

        let handle = session.submit_order().unwrap();
        api.wait_for_call(|c| matches!(c, Call::CreateOrder(_))).await;
        handle.cancel();
        api.release(Endpoint::CreateOrder);

        assert_eq!(handle.await.unwrap(), Outcome::Cancelled);
        assert!(!session.view().order_confirmed);
    }

    #[tokio::test]
    async fn test_submit_failure_propagates() {
        let api = FakeMenuApi::new();
        api.fail(Endpoint::CreateOrder);
        let session = opened(&api, 1).await;

        assert!(session.submit_order().unwrap().await.is_err());
        assert!(!session.view().order_confirmed);
    }

    #[tokio::test]
    async fn test_submit_without_item_fails_fast() {
        let api = FakeMenuApi::new();
        let session = session(&api);
        assert!(matches!(
            session.submit_order(),
            Err(SessionError::NoItemSelected)
        ));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_view_updates_are_published() {
        let api = FakeMenuApi::new();
        let session = opened(&api, 1).await;
        let mut rx = session.subscribe();
        rx.borrow_and_update();

        session.increment_order_quantity();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().order_quantity, 2);
    }

    #[derive(Default)]
    struct CountingNavigator {
        backs: AtomicUsize,
    }

    impl Navigator for CountingNavigator {
        fn go_back(&self) {
            self.backs.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirmation_shows_overlay_and_navigates_back() {
        let api = FakeMenuApi::new();
        let nav = Arc::new(CountingNavigator::default());
        let overlay = Overlay::new(OverlayProps::default(), nav.clone());
        let session = DetailsSession::with_options(
            api.clone(),
            SessionOptions {
                formatter: MoneyFormatter::en_us(),
                overlay: Some(overlay.clone()),
            },
        );

        let handles = session.open(ItemId(1));
        handles.item.await.unwrap();
        assert!(!overlay.is_visible());

        session.submit_order().unwrap().await.unwrap();
        assert!(overlay.is_visible());

        tokio::time::sleep(Duration::from_millis(2001)).await;
        assert!(!overlay.is_visible());
        assert_eq!(nav.backs.load(Ordering::SeqCst), 1);
    }
}
