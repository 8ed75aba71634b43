//! Flatten command: Write the markdown snapshot of a directory

use std::path::Path;

use anyhow::Result;
use codemd_core::{FlattenOptions, FlattenSummary, flatten};
use tracing::debug;

/// Run the flatten command
///
/// The running executable's own file name is ignored along with the
/// output file, so a binary copied into the tree never lands in the snapshot.
///
/// # Errors
/// Returns an error if the root cannot be walked or the output cannot be written.
pub fn run(root: &Path, output: &Path) -> Result<FlattenSummary> {
    let mut options = FlattenOptions::new(root).with_output(output);
    if let Some(name) = executable_name() {
        debug!("Ignoring own executable: {}", name);
        options = options.with_ignored_file(name);
    }

    Ok(flatten(&options)?)
}

fn executable_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    exe.file_name().map(|name| name.to_string_lossy().into_owned())
}
