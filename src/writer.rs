use std::io::Write;

use log::info;

use crate::output::args::OutputArgs;
use crate::output::errors::OutputError;

/// Writes the artifact to the `--output` file, or to stdout when none is set.
pub fn write_output(args: &OutputArgs, contents: &str) -> Result<(), OutputError> {
    match &args.output {
        Some(path) => {
            std::fs::write(path, contents).map_err(|e| {
                OutputError::FileError(format!("failed to write {}: {}", path, e))
            })?;
            info!("wrote {} bytes to {}", contents.len(), path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| OutputError::FileError(format!("failed to write stdout: {}", e)))?;
        }
    }
    Ok(())
}
