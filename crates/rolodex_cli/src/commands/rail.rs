//! Rail command implementation.

use rolodex_book::ContactBook;
use rolodex_core::{BucketKey, DirectoryView};
use rolodex_sheet::SheetCodec;
use rolodex_store::RecordStore;

/// Runs the rail command.
pub fn run<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    query: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    for (key, count) in counts(book, query)? {
        match count {
            Some(n) => println!("{} {n}", key.as_char()),
            None => println!("{} -", key.as_char()),
        }
    }
    Ok(())
}

/// Returns every rail letter with its member count in the view, or `None`
/// when the view has no bucket for it.
pub fn counts<S: RecordStore, C: SheetCodec>(
    book: &ContactBook<S, C>,
    query: Option<&str>,
) -> Result<Vec<(BucketKey, Option<usize>)>, Box<dyn std::error::Error>> {
    book.load()?;
    let view = match query {
        Some(q) => book.search(q),
        None => book.view(),
    };

    Ok(BucketKey::all()
        .map(|key| (key, view.anchor(key).map(|i| view.buckets()[i].len())))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_book::BookConfig;
    use rolodex_testkit::scenario_store;

    #[test]
    fn unfiltered_rail_has_every_letter() {
        let book = ContactBook::with_xlsx(scenario_store(), BookConfig::default()).unwrap();
        let counts = counts(&book, None).unwrap();
        assert_eq!(counts.len(), BucketKey::COUNT);
        assert!(counts.iter().all(|(_, c)| c.is_some()));
        assert_eq!(counts[0], (BucketKey::letter('A').unwrap(), Some(1)));
        assert_eq!(counts[2].1, Some(0));
    }

    #[test]
    fn filtered_rail_marks_missing_letters() {
        let book = ContactBook::with_xlsx(scenario_store(), BookConfig::default()).unwrap();
        let counts = counts(&book, Some("张")).unwrap();
        let present: Vec<_> = counts.iter().filter(|(_, c)| c.is_some()).collect();
        assert_eq!(present, vec![&(BucketKey::OTHER, Some(1))]);
    }
}
