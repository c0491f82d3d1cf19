//! `aufiles add` / `aufiles import` — record submission.
//!
//! Submission is a sequential chain: validate → duplicate pre-check →
//! insert. The uniqueness constraint backs up the pre-check; both paths
//! surface the same "already exists" outcome. No retries.

use aufiles_config::Settings;
use aufiles_engine::{validate_submission, Submission};
use aufiles_store::{FileStore, RecordDb, StoreError, SubmitLog};

use crate::exit_codes::{EXIT_ADD_BACKEND, EXIT_ADD_EXISTS, EXIT_ADD_VALIDATION};
use crate::CliError;

const ALREADY_EXISTS: &str = "This record already exists in the database.";

pub fn cmd_add(id: &str, friend_code: &str, puid: &str) -> Result<(), CliError> {
    let submission = validate(id, friend_code, puid)?;
    let settings = Settings::load();
    insert_record(&settings, &submission)?;
    eprintln!("Entry added to database successfully!");
    Ok(())
}

pub fn cmd_import(link: &str) -> Result<(), CliError> {
    let (id, friend_code, puid) = parse_link_params(link)?;

    let log = SubmitLog::new(FileStore::default_location());
    if log.already_processed(&id, &friend_code, &puid) {
        eprintln!("import link already processed; skipping");
        return Ok(());
    }
    // Marked before the attempt: one shot per parameter set, whatever the
    // outcome.
    log.mark_processed(&id, &friend_code, &puid);

    let submission = validate(&id, &friend_code, &puid)?;
    let settings = Settings::load();
    insert_record(&settings, &submission)?;
    eprintln!("Auto-added via import link.");
    Ok(())
}

fn validate(id: &str, friend_code: &str, puid: &str) -> Result<Submission, CliError> {
    validate_submission(id, friend_code, puid).map_err(|e| CliError {
        code: EXIT_ADD_VALIDATION,
        message: e.message().to_string(),
        hint: None,
    })
}

fn insert_record(settings: &Settings, submission: &Submission) -> Result<(), CliError> {
    let db = RecordDb::open(&settings.database_file()).map_err(backend_error)?;

    match db.exists_by_puid(&submission.puid) {
        Ok(true) => {
            return Err(CliError {
                code: EXIT_ADD_EXISTS,
                message: ALREADY_EXISTS.into(),
                hint: None,
            })
        }
        Ok(false) => {}
        // The constraint still guards the insert.
        Err(e) => eprintln!("warning: duplicate pre-check failed: {e}"),
    }

    match db.insert(&submission.identifier, &submission.friend_code, &submission.puid) {
        Ok(_) => Ok(()),
        Err(e) => Err(backend_error(e)),
    }
}

fn backend_error(e: StoreError) -> CliError {
    match e {
        StoreError::Duplicate => CliError {
            code: EXIT_ADD_EXISTS,
            message: ALREADY_EXISTS.into(),
            hint: None,
        },
        StoreError::Backend(msg) => CliError {
            code: EXIT_ADD_BACKEND,
            message: format!("Failed to add record: {msg}"),
            hint: None,
        },
    }
}

/// Accept a full URL or a bare query string carrying `id`, `fc`, `puid`.
fn parse_link_params(link: &str) -> Result<(String, String, String), CliError> {
    let parsed = if link.contains("://") {
        url::Url::parse(link)
    } else {
        url::Url::parse(&format!(
            "https://localhost/add?{}",
            link.trim_start_matches('?')
        ))
    }
    .map_err(|e| CliError::args(format!("invalid link: {e}")))?;

    let mut id = None;
    let mut fc = None;
    let mut puid = None;
    for (key, value) in parsed.query_pairs() {
        match key.as_ref() {
            "id" => id = Some(value.into_owned()),
            "fc" => fc = Some(value.into_owned()),
            "puid" => puid = Some(value.into_owned()),
            _ => {}
        }
    }

    match (id, fc, puid) {
        (Some(id), Some(fc), Some(puid)) => Ok((id, fc, puid)),
        _ => Err(CliError::args(
            "link must carry id, fc, and puid parameters",
        )),
    }
}
