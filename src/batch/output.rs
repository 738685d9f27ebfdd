//! Output table writing.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::config::OUTPUT_COLUMNS;
use crate::scrape::SiteResult;

/// Writes one row per result to `path`, in the order given.
///
/// # Errors
///
/// Returns a `csv::Error` if the file cannot be created or written.
pub fn write_results(path: &Path, results: &[SiteResult]) -> Result<(), csv::Error> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    write_results_to(std::fs::File::create(path)?, results)
}

/// Writes the output table to any writer.
///
/// Columns are `Title`, `Working_URL`, `Email`, `Phone`.
pub fn write_results_to<W: Write>(writer: W, results: &[SiteResult]) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(OUTPUT_COLUMNS)?;
    for result in results {
        let emails = result.contacts.email_cell();
        let phones = result.contacts.phone_cell();
        writer.write_record([
            result.label.as_str(),
            result.working_url_cell(),
            emails.as_str(),
            phones.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
