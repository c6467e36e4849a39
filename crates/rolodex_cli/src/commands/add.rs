//! Add command implementation.

use rolodex_book::ContactBook;
use rolodex_sheet::SheetCodec;
use rolodex_store::RecordStore;

/// Runs the add command.
pub fn run<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = book.add(name)?;
    println!("Added {name} ({id})");
    Ok(())
}
