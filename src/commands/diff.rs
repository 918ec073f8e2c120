use crate::MonitorContext;
use crate::resolver::FileSetResolver;
use crate::store::Store;
use anyhow::Result;
use tracing::info;

/// Run one reconciliation pass and print the modified records.
///
/// Phase A re-hashes every stored path and classifies it against its
/// baseline; Phase B inserts records for newly discovered files. Baselines
/// are never changed here; the pass only observes.
///
/// # Errors
/// Returns an error if the store cannot be read or written back.
pub fn execute(ctx: &MonitorContext) -> Result<()> {
    super::print_info("Checking for differences");

    let mut store = Store::load(ctx.store_path())?;
    store.refresh_existing();

    let resolved = FileSetResolver::new(&ctx.config).resolve();
    store.discover_new(&resolved);

    store.save(ctx.store_path())?;

    let modified = super::sorted(store.modified_records());
    info!(
        checked = store.len(),
        modified = modified.len(),
        "diff pass complete"
    );

    println!();
    for record in &modified {
        super::print_record(record);
    }
    println!("Number of modified files: {}", modified.len());

    Ok(())
}
