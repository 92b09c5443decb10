//! # Detail Screen Commands
//!
//! Each command opens one [`DetailsSession`], drives it, and closes it.
//!
//! ## Order Flow
//! ```text
//! open(id) ──► item + favorite status
//!    │
//!    ▼
//! --extra 1:2 ──► increment_extra ×2      (running total printed)
//! --quantity 3 ─► increment_order_quantity ×2
//!    │
//!    ▼
//! submit_order ──► overlay shown ──► timeout / close ──► go_back ──► exit
//! ```

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use savor_core::{validation, Item, ItemId};
use savor_session::{DetailsSession, Outcome, Overlay, SessionOptions};

use super::{print_details, write_line, CommandContext};
use crate::cli::ExtraRequest;
use crate::error::{AppError, AppResult};
use crate::navigation::ExitNavigator;

/// Shows one item.
pub async fn show(ctx: &CommandContext, id: &str, out: &mut dyn Write) -> AppResult<()> {
    let id = validation::parse_item_id(Some(id))?;
    let session = new_session(ctx, None);
    load(&session, id).await?;
    print_details(out, &session.view())?;
    session.close();
    Ok(())
}

/// Flips the favorite flag of one item.
pub async fn favorite(ctx: &CommandContext, id: &str, out: &mut dyn Write) -> AppResult<()> {
    let id = validation::parse_item_id(Some(id))?;
    let session = new_session(ctx, None);
    let item = load(&session, id).await?;

    let now_favorite = match session.toggle_favorite()?.await? {
        Outcome::Completed(flag) => flag,
        Outcome::Cancelled => return Err(AppError::internal("Favorite update was cancelled")),
    };

    let message = if now_favorite {
        format!("Added {} to favorites", item.name)
    } else {
        format!("Removed {} from favorites", item.name)
    };
    write_line(out, message)?;
    session.close();
    Ok(())
}

/// Composes an order for one item and submits it.
///
/// Returns after the confirmation overlay has dismissed itself.
pub async fn order(
    ctx: &CommandContext,
    id: &str,
    extras: &[String],
    quantity: u32,
    out: &mut dyn Write,
) -> AppResult<()> {
    let id = validation::parse_item_id(Some(id))?;
    let requests = extras
        .iter()
        .map(|raw| ExtraRequest::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let quantity = validation::validate_step_count("quantity", quantity)?.max(1);

    let navigator = Arc::new(ExitNavigator::new());
    let overlay = Overlay::new(ctx.config.overlay_props(), navigator.clone());
    let session = new_session(ctx, Some(overlay.clone()));
    load(&session, id).await?;

    for request in &requests {
        if !session.view().extras.iter().any(|e| e.id == request.id) {
            return Err(AppError::validation(format!(
                "Item {id} has no extra {}",
                request.id
            )));
        }
        for _ in 0..request.count {
            session.increment_extra(request.id);
        }
        write_line(
            out,
            format!("+{} extra {} -> {}", request.count, request.id, session.view().formatted_total),
        )?;
    }

    while session.view().order_quantity < quantity {
        session.increment_order_quantity();
    }

    print_details(out, &session.view())?;

    match session.submit_order()?.await? {
        Outcome::Completed(confirmation) => {
            info!(item_id = %confirmation.product_id, at = %confirmation.confirmed_at, "order placed");
        }
        Outcome::Cancelled => return Err(AppError::internal("Order submission was cancelled")),
    }

    write_line(out, overlay.props().message)?;
    navigator.wait().await;
    session.close();
    write_line(out, "Back to the menu.")
}

fn new_session(ctx: &CommandContext, overlay: Option<Overlay>) -> DetailsSession {
    DetailsSession::with_options(
        Arc::clone(&ctx.api),
        SessionOptions {
            formatter: ctx.config.formatter(),
            overlay,
        },
    )
}

/// Opens `id` and waits for the item and its favorite status.
async fn load(session: &DetailsSession, id: ItemId) -> AppResult<Item> {
    let handles = session.open(id);
    let item = match handles.item.await? {
        Outcome::Completed(item) => item,
        Outcome::Cancelled => return Err(AppError::internal("Item load was cancelled")),
    };
    handles.favorite.await?;
    Ok(item)
}
