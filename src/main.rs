use anyhow::{Context, Result};
use tracing::error;

use lang_seed::logging::init_logging;
use lang_seed::{convert, ConvertConfig, VERSION};

fn main() -> Result<()> {
    init_logging();
    tracing::debug!("lang-seed {}", VERSION);

    // Fixed file names, no flags
    let config = ConvertConfig::default();

    // Both read and write failures exit non-zero; anyhow prints the cause chain.
    if let Err(e) = convert(&config) {
        error!("{}", e);
        if e.is_fatal() {
            return Err(e).context("Conversion aborted, no output written");
        }
        return Err(e).with_context(|| {
            format!("Conversion finished but {} was not saved", config.output_path.display())
        });
    }

    Ok(())
}
