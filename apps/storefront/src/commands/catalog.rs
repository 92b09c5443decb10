//! Catalog listing.

use std::io::Write;

use tracing::info;

use savor_core::{CatalogFilter, CategoryId};

use super::{write_line, CommandContext};
use crate::error::AppResult;

/// Lists categories, then the foods matching `category` and `search`.
pub async fn browse(
    ctx: &CommandContext,
    category: Option<u64>,
    search: Option<&str>,
    out: &mut dyn Write,
) -> AppResult<()> {
    let mut filter = CatalogFilter::new();
    if let Some(category) = category {
        filter.select_category(CategoryId(category));
    }
    if let Some(search) = search {
        filter.set_search(search)?;
    }

    let categories = ctx.api.list_categories().await?;
    let foods = ctx.api.list_foods(&filter).await?;
    info!(
        categories = categories.len(),
        foods = foods.len(),
        "catalog loaded"
    );

    write_line(out, "Categories:")?;
    for c in &categories {
        let marker = if filter.category == Some(c.id) { "*" } else { " " };
        write_line(out, format!(" {marker} [{}] {}", c.id, c.title))?;
    }

    let formatter = ctx.config.formatter();
    write_line(out, "Foods:")?;
    if foods.is_empty() {
        write_line(out, "  (none)")?;
    }
    for food in &foods {
        write_line(
            out,
            format!("  [{}] {} {}", food.id, food.name, formatter.format(food.price)),
        )?;
    }
    Ok(())
}
