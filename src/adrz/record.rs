//! Record generation: sequence formatting, name sanitization, and writing
//! a new record from its template.

use crate::error::Result;
use crate::paths::AdrPaths;
use crate::store;
use crate::template::{self, TemplateSet, NAME_TOKEN};
use std::path::PathBuf;

/// Width of the zero-padded sequence number in filenames and headings.
pub const SEQUENCE_WIDTH: usize = 5;

/// Characters that cannot appear in a record filename on at least one
/// supported platform. Each is replaced with a space, one character at a
/// time in this order.
const FILENAME_UNSAFE: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Render a sequence number as used in filenames and headings, e.g. `00042`.
pub fn format_sequence(sequence: usize) -> String {
    format!("{:0width$}", sequence, width = SEQUENCE_WIDTH)
}

/// Make a record name safe for use as a filename.
pub fn sanitize_name(name: &str) -> String {
    FILENAME_UNSAFE
        .iter()
        .fold(name.to_string(), |out, c| out.replace(*c, " "))
}

/// Filename for the record with the given sequence number and (unsanitized)
/// name.
pub fn record_filename(sequence: usize, name: &str) -> String {
    format!("{}-{}.md", format_sequence(sequence), sanitize_name(name))
}

/// Write a new record into the record directory and return its path.
///
/// The record directory must already exist (callers establish core files
/// first). The name is used as-is in the heading and sanitized only for the
/// filename.
pub fn generate(
    sequence: usize,
    name: &str,
    paths: &AdrPaths,
    templates: &TemplateSet,
) -> Result<PathBuf> {
    let heading = format!("{} - {}", format_sequence(sequence), name);
    let body = template::render(&templates.adr_template()?, &[(NAME_TOKEN, heading.as_str())]);

    let path = paths.record_path(&record_filename(sequence, name));
    store::write_locked(&path, &body)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_paths(adr_dir: &Path) -> (AdrPaths, TemplateSet) {
        let asset_root = Path::new(env!("CARGO_MANIFEST_DIR")).to_path_buf();
        let paths = AdrPaths::with_roots(adr_dir.to_path_buf(), asset_root);
        let templates = TemplateSet::new(
            paths.override_templates_dir(),
            paths.default_templates_dir(),
        );
        (paths, templates)
    }

    #[test]
    fn sequence_is_zero_padded_to_five_digits() {
        assert_eq!(format_sequence(0), "00000");
        assert_eq!(format_sequence(7), "00007");
        assert_eq!(format_sequence(12345), "12345");
    }

    #[test]
    fn sanitize_replaces_each_unsafe_character_with_a_space() {
        assert_eq!(sanitize_name("A/B:C"), "A B C");
        assert_eq!(sanitize_name(r#"a\b*c?d"e<f>g|h"#), "a b c d e f g h");
        assert_eq!(sanitize_name("plain name"), "plain name");
    }

    #[test]
    fn filename_combines_padding_and_sanitized_name() {
        assert_eq!(record_filename(3, "Use/Rust"), "00003-Use Rust.md");
    }

    #[test]
    fn generate_writes_record_with_heading() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = test_paths(dir.path());

        let path = generate(0, "First decision", &paths, &templates).unwrap();

        assert_eq!(path, dir.path().join("00000-First decision.md"));
        let body = fs::read_to_string(&path).unwrap();
        assert!(body.contains("00000 - First decision"));
        assert!(!body.contains("{{name}}"));
    }

    #[test]
    fn generate_keeps_raw_name_in_heading() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = test_paths(dir.path());

        let path = generate(1, "A/B", &paths, &templates).unwrap();

        assert_eq!(path, dir.path().join("00001-A B.md"));
        let body = fs::read_to_string(&path).unwrap();
        // Heading keeps the original name; only the filename is sanitized.
        assert!(body.contains("00001 - A/B"));
    }

    #[test]
    fn generate_uses_override_template() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = test_paths(dir.path());
        fs::create_dir_all(paths.override_templates_dir()).unwrap();
        fs::write(
            paths.override_templates_dir().join("template_adr.md"),
            "## {{name}}\n\ncustom form, {{name}} twice\n",
        )
        .unwrap();

        let path = generate(2, "Pick a codec", &paths, &templates).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        assert_eq!(
            body,
            "## 00002 - Pick a codec\n\ncustom form, 00002 - Pick a codec twice\n"
        );
    }

    #[test]
    fn generate_fails_without_record_directory() {
        let dir = TempDir::new().unwrap();
        let (paths, templates) = test_paths(&dir.path().join("absent"));

        assert!(generate(0, "x", &paths, &templates).is_err());
    }
}
