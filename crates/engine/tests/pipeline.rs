use std::path::PathBuf;

use aufiles_engine::model::{UNKNOWN, UNKNOWN_ID};
use aufiles_engine::{
    filter_records, merge_records, page_slice, parse_text, to_block_text, Origin, PageSize, Record,
    RecordView,
};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_dump() -> Vec<Record> {
    let path = fixtures_dir().join("dump.txt");
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    parse_text(&text)
}

// -------------------------------------------------------------------------
// Parse
// -------------------------------------------------------------------------

#[test]
fn dump_parses_into_expected_records() {
    let records = load_dump();
    assert_eq!(records.len(), 6);

    assert_eq!(records[0].identifier, "pichipuk");
    assert_eq!(records[0].puid, "00023bde5dd04f3ba92427d9e59359a1");

    // Friend-code-only entry gets a sentinel PUID.
    assert_eq!(records[2].identifier, "crewmate eleven");
    assert_eq!(records[2].friend_code, "vent#9012");
    assert_eq!(records[2].puid, UNKNOWN);

    // Bare PUID block gets sentinel identifier and friend code.
    assert_eq!(records[3].identifier, UNKNOWN_ID);
    assert_eq!(records[3].puid, "5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b");

    // Last friend-code line wins; trailing notes are dropped.
    assert_eq!(records[4].identifier, "sus sally");
    assert_eq!(records[4].friend_code, "sally#4242");

    // Dashed hex strips to the canonical PUID form.
    assert_eq!(records[5].puid, "aabbccddeeff00112233445566778899");

    assert!(records.iter().all(|r| r.origin == Origin::Remote));
}

#[test]
fn reparsing_serialized_records_is_idempotent() {
    let records = load_dump();
    let reparsed = parse_text(&to_block_text(&records));
    assert_eq!(records, reparsed);
}

// -------------------------------------------------------------------------
// Merge + view
// -------------------------------------------------------------------------

#[test]
fn database_rows_override_remote_entries() {
    let remote = load_dump();
    let database = vec![
        // Same PUID as pichipuk: the database row wins.
        Record::database("pichipuk (verified)", "pichipuk#0001", "00023bde5dd04f3ba92427d9e59359a1"),
        // New entry only present in the database.
        Record::database("dbonly", "dbonly#5555", "0123456789abcdef0123456789abcdef"),
    ];

    let merged = merge_records(&remote, &database);
    assert!(merged.len() <= remote.len() + database.len());
    assert_eq!(merged.len(), 7);

    let pichipuk = merged
        .iter()
        .find(|r| r.puid == "00023bde5dd04f3ba92427d9e59359a1")
        .unwrap();
    assert_eq!(pichipuk.identifier, "pichipuk (verified)");
    assert_eq!(pichipuk.origin, Origin::Database);

    // Sorted by identifier, case-insensitive.
    let mut sorted = merged.clone();
    sorted.sort_by_key(|r| r.identifier.to_lowercase());
    assert_eq!(merged, sorted);
}

#[test]
fn view_filters_and_pages_the_merged_list() {
    let merged = merge_records(&load_dump(), &[]);
    let mut view = RecordView::new(merged);

    view.set_query("APEX");
    assert_eq!(view.page_records().len(), 1);
    assert_eq!(view.page_records()[0].identifier, "warmapex");

    // Filtered output is a subset of the full list.
    let hits = filter_records(view.records(), "a");
    assert!(hits.len() <= view.records().len());

    view.set_query("");
    view.set_page_size(PageSize::new(25).unwrap());
    assert_eq!(view.total_pages(), 1);
    assert!(!view.set_page(2));
    assert_eq!(view.page_records().len(), view.records().len());
}

#[test]
fn page_slices_reconstruct_the_list() {
    let merged = merge_records(&load_dump(), &[]);
    let size = 2;
    let mut rebuilt: Vec<Record> = Vec::new();
    for page in 1.. {
        let slice = page_slice(&merged, page, size);
        if slice.is_empty() {
            break;
        }
        assert!(slice.len() <= size);
        rebuilt.extend_from_slice(slice);
    }
    assert_eq!(rebuilt, merged);
}
