use crate::MonitorContext;
use crate::store::Store;
use anyhow::Result;
use tracing::info;

/// Commit the last observed diff into the new baseline.
///
/// Records observed as deleted are removed from monitoring; every remaining
/// record's last observation becomes its accepted baseline. Should only be
/// called after a diff pass; the store does not enforce that ordering.
///
/// # Errors
/// Returns an error if the store cannot be read or written back.
pub fn execute(ctx: &MonitorContext) -> Result<()> {
    super::print_info("Updating store entries");

    let mut store = Store::load(ctx.store_path())?;
    let before = store.len();
    store.accept_changes();
    store.save(ctx.store_path())?;

    info!(
        removed = before - store.len(),
        remaining = store.len(),
        "baseline updated"
    );

    super::print_success("Store updated");
    Ok(())
}
