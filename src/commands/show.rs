use crate::MonitorContext;
use crate::store::Store;
use anyhow::Result;

/// Print every record's path, original hash, and current hash, followed by a
/// total count.
///
/// # Errors
/// Returns an error if the store cannot be read.
pub fn execute(ctx: &MonitorContext) -> Result<()> {
    let store = Store::load(ctx.store_path())?;

    for record in super::sorted(store.records()) {
        super::print_record(record);
    }
    println!("Number of files monitored: {}", store.len());

    Ok(())
}
