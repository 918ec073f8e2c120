use crate::MonitorContext;
use crate::resolver::FileSetResolver;
use crate::store::Store;
use anyhow::Result;
use tracing::info;

/// Rebuild the store from scratch: resolve the monitored file set, hash every
/// readable file, and save the result as the new baseline.
///
/// Any existing store content is discarded; a missing store file is not an
/// error.
///
/// # Errors
/// Returns an error if the rebuilt store cannot be written.
pub fn execute(ctx: &MonitorContext) -> Result<()> {
    super::print_info("Initializing store with file hashes");

    let resolved = FileSetResolver::new(&ctx.config).resolve();
    info!(resolved = resolved.len(), "resolved monitored file set");

    let store = Store::rebuild(&resolved);
    store.save(ctx.store_path())?;

    super::print_success(&format!("Store initialized with {} files", store.len()));
    Ok(())
}
