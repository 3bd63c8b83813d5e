//! README index generation.
//!
//! The README lists every record as a relative markdown link, sorted by
//! filename, with a generation timestamp. It is rebuilt from scratch after
//! every change; the only thing that varies between rebuilds of an
//! unchanged directory is the timestamp.

use crate::error::Result;
use crate::paths::AdrPaths;
use crate::store;
use crate::template::{self, TemplateSet, CONTENTS_TOKEN, TIMESTAMP_TOKEN};
use chrono::Utc;

/// RFC 7231 IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Current time in HTTP-date format.
pub fn http_date_now() -> String {
    Utc::now().format(HTTP_DATE_FORMAT).to_string()
}

/// Format the listing body: one ` - [name](./name)` line per record,
/// lexicographically sorted, joined by newlines.
pub fn format_listing(mut entries: Vec<String>) -> String {
    entries.sort();
    entries
        .iter()
        .map(|name| format!(" - [{}](./{})", name, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Regenerate `adr/README.md` from the current directory contents.
pub fn rebuild(paths: &AdrPaths, templates: &TemplateSet) -> Result<()> {
    let entries = store::list_adr_entries(paths.adr_dir())?;
    let listing = format_listing(entries);
    let timestamp = http_date_now();

    let body = template::render(
        &templates.readme_template()?,
        &[
            (TIMESTAMP_TOKEN, timestamp.as_str()),
            (CONTENTS_TOKEN, listing.as_str()),
        ],
    );
    store::write_locked(&paths.readme_path(), &body)
}
