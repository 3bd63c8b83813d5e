use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::paths::AdrPaths;
use crate::readme;
use crate::store;
use crate::template::TemplateSet;

/// Establish the record directory skeleton and rebuild the README index.
/// Idempotent apart from the index timestamp.
pub fn run(paths: &AdrPaths, templates: &TemplateSet) -> Result<CmdResult> {
    store::establish_core_files(paths, templates)?;
    readme::rebuild(paths, templates)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Regenerated {}",
        paths.readme_path().display()
    )));
    Ok(result)
}
