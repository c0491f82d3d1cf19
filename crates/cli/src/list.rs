//! `aufiles list` — merged, searchable, paginated listing.

use aufiles_config::Settings;
use aufiles_engine::{PageSize, Record, RecordView};

use crate::exit_codes::EXIT_ERROR;
use crate::load::load_merged;
use crate::CliError;

pub fn cmd_list(
    query: Option<String>,
    page: usize,
    page_size: Option<usize>,
    refresh: bool,
    json: bool,
) -> Result<(), CliError> {
    let settings = Settings::load();
    let records = load_merged(&settings, refresh)?;

    let mut view = RecordView::new(records);
    if let Some(q) = query {
        view.set_query(q);
    }
    let size = page_size
        .and_then(PageSize::new)
        .or_else(|| PageSize::new(settings.page_size))
        .unwrap_or_default();
    view.set_page_size(size);

    // Out-of-range pages are refused with no state change; stay on page 1.
    if page != 1 && !view.set_page(page) {
        eprintln!("warning: page {page} is out of range; showing page 1");
    }

    let shown = view.page_records();

    if json {
        let out = serde_json::to_string_pretty(&shown).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{out}");
    } else {
        print_table(&shown);
    }

    let total = view.filtered().len();
    let scope = if view.query().is_empty() {
        String::new()
    } else {
        format!(" matching \"{}\"", view.query())
    };
    eprintln!(
        "{} record(s){} — page {} of {}",
        total,
        scope,
        view.page(),
        view.total_pages().max(1),
    );

    Ok(())
}

fn print_table(records: &[&Record]) {
    let id_w = records
        .iter()
        .map(|r| r.identifier.chars().count())
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let fc_w = records
        .iter()
        .map(|r| r.friend_code.chars().count())
        .max()
        .unwrap_or(0)
        .max("FRIEND CODE".len());

    println!("{:<id_w$}  {:<fc_w$}  {:<32}  SOURCE", "ID", "FRIEND CODE", "PUID");
    for r in records {
        println!(
            "{:<id_w$}  {:<fc_w$}  {:<32}  {}",
            r.identifier, r.friend_code, r.puid, r.origin,
        );
    }
}
