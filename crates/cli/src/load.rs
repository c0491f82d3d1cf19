//! Joint load of database rows and remote (or cached) records.

use aufiles_client::{FetchError, TextClient};
use aufiles_config::Settings;
use aufiles_engine::{merge_records, parse_text, Record};
use aufiles_store::{now_ms, FileStore, RecordDb, RemoteCache};

use crate::exit_codes::EXIT_LOAD;
use crate::CliError;

/// User-facing message for any failed load. Details go to stderr as a
/// warning; recovery is re-invoking the command.
const LOAD_FAILED: &str = "Unable to load archive data. Please try again later.";

/// Load both sources and merge them. The two fetches run concurrently and
/// are joined before the merge, so it never sees partial data.
pub fn load_merged(settings: &Settings, refresh: bool) -> Result<Vec<Record>, CliError> {
    std::thread::scope(|scope| {
        let remote = scope.spawn(|| load_remote(settings, refresh));

        // Database rows are fetched fresh on every load. An unavailable
        // database degrades to an empty set rather than failing the view.
        let database = match RecordDb::open(&settings.database_file()).and_then(|db| db.select_all())
        {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("warning: database unavailable: {e}");
                Vec::new()
            }
        };

        let remote = remote
            .join()
            .unwrap_or_else(|_| Err(FetchError::Body("remote loader panicked".into())))
            .map_err(|e| {
                eprintln!("warning: {e}");
                load_error()
            })?;

        Ok(merge_records(&remote, &database))
    })
}

/// Remote records: cache read-through, fetch + parse + cache write on miss.
fn load_remote(settings: &Settings, refresh: bool) -> Result<Vec<Record>, FetchError> {
    let cache = RemoteCache::new(FileStore::default_location(), settings.cache_ttl_ms());
    let now = now_ms();

    if !refresh {
        if let Some(records) = cache.read(now) {
            return Ok(records);
        }
    }

    let client = TextClient::new(settings.data_url.clone());
    let text = client.fetch_text()?;
    let records = parse_text(&text);
    cache.write(now, &records);
    Ok(records)
}

/// `aufiles refresh` — force-refetch the dump and rewrite the cache.
pub fn cmd_refresh() -> Result<(), CliError> {
    let settings = Settings::load();
    let records = load_remote(&settings, true).map_err(|e| {
        eprintln!("warning: {e}");
        load_error()
    })?;
    eprintln!("cached {} remote record(s)", records.len());
    Ok(())
}

fn load_error() -> CliError {
    CliError {
        code: EXIT_LOAD,
        message: LOAD_FAILED.into(),
        hint: None,
    }
}
