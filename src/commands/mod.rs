//! Command implementations, one module per CLI command.

pub mod diff;
pub mod init;
pub mod show;
pub mod update;

use crate::store::Record;
use colored::Colorize;

pub(crate) fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub(crate) fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print one record as a path line plus aligned hash columns.
pub(crate) fn print_record(record: &Record) {
    println!("{}", record.path.display());
    println!("Original Hash:    {}", record.original_hash);
    println!("New Hash:         {}\n", record.current_hash);
}

/// Sort records by path for stable output; the store itself guarantees no
/// iteration order.
pub(crate) fn sorted<'a>(records: impl Iterator<Item = &'a Record>) -> Vec<&'a Record> {
    let mut records: Vec<&Record> = records.collect();
    records.sort_by(|a, b| a.path.cmp(&b.path));
    records
}
