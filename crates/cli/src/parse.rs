//! `aufiles parse` — run the dump parser over a local file.

use std::path::Path;

use aufiles_engine::parse_text;

use crate::exit_codes::EXIT_ERROR;
use crate::CliError;

pub fn cmd_parse(file: &Path, json: bool) -> Result<(), CliError> {
    let text = std::fs::read_to_string(file).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("cannot read {}: {e}", file.display()),
        hint: None,
    })?;

    let records = parse_text(&text);

    if json {
        let out = serde_json::to_string_pretty(&records).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{out}");
    } else {
        for record in &records {
            println!("{}\t{}\t{}", record.identifier, record.friend_code, record.puid);
        }
    }

    eprintln!("{} record(s) parsed", records.len());
    Ok(())
}
