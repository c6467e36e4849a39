//! List command implementation.

use rolodex_book::ContactBook;
use rolodex_core::DirectoryView;
use rolodex_sheet::SheetCodec;
use rolodex_store::RecordStore;
use serde::Serialize;

/// Directory listing result.
#[derive(Debug, Serialize)]
pub struct ListResult {
    /// Normalized query the listing was filtered by.
    pub query: String,
    /// Number of contacts shown.
    pub shown: usize,
    /// Number of contacts in the store.
    pub total: usize,
    /// Non-empty sections in rail order.
    pub sections: Vec<Section>,
}

/// One letter section of the listing.
#[derive(Debug, Serialize)]
pub struct Section {
    /// Rail letter.
    pub letter: char,
    /// Contact names in store order.
    pub names: Vec<String>,
}

/// Runs the list command.
pub fn run<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    query: Option<&str>,
    letter: Option<char>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = collect(book, query, letter)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        _ => {
            print_text_output(&result);
        }
    }

    Ok(())
}

/// Loads the book and gathers the sections to show.
///
/// With a `letter`, sections before that letter's bucket are skipped, the
/// way the rail scrolls the list.
pub fn collect<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    query: Option<&str>,
    letter: Option<char>,
) -> Result<ListResult, Box<dyn std::error::Error>> {
    let total = book.load()?;
    let view = match query {
        Some(q) => book.search(q),
        None => book.view(),
    };

    let start = match letter {
        Some(c) => book
            .jump(c)?
            .ok_or_else(|| format!("No contacts under '{}'", c.to_ascii_uppercase()))?,
        None => 0,
    };

    let sections: Vec<Section> = view.buckets()[start..]
        .iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|bucket| Section {
            letter: bucket.key().as_char(),
            names: bucket.members().iter().map(|r| r.name.clone()).collect(),
        })
        .collect();

    Ok(ListResult {
        query: view.query().to_string(),
        shown: sections.iter().map(|s| s.names.len()).sum(),
        total,
        sections,
    })
}

fn print_text_output(result: &ListResult) {
    if result.sections.is_empty() {
        if result.query.is_empty() {
            println!("No contacts.");
        } else {
            println!("No contacts match \"{}\".", result.query);
        }
        return;
    }

    for section in &result.sections {
        println!("{}", section.letter);
        for name in &section.names {
            println!("  {name}");
        }
    }
    println!();
    println!("{} of {} contacts", result.shown, result.total);
}
