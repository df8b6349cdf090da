//! The check run: discover headers, probe each in order, halt at the first
//! failure
//!
//! Fail-fast is deliberate: the tool exists to catch the first header that
//! breaks when included alone, so later headers stay unchecked in a failing
//! run and no aggregate report is produced.

use log::debug;

use selfinc::checker::{Checker, HeaderStatus};
use selfinc::config::CheckConfig;
use selfinc::discovery::Discovery;

/// Walk the configured header tree and probe every non-excluded header,
/// strictly sequentially, stopping at the first one that does not compile
/// standalone. Returns whether every probed header passed; a failure has
/// already printed its diagnostic, so the caller only maps it to a
/// non-zero exit.
pub fn check(config: &CheckConfig) -> anyhow::Result<bool> {
    println!("-- self-sufficiency check: {} --", config.root.display());

    let discovery = Discovery::new(&config.root, &config.excluded_dirs, &config.excluded_files)?;
    let files = discovery.files()?;
    debug!("{} candidate file(s) under {}", files.len(), config.root.display());

    let checker = Checker::new(config);
    for file in &files {
        println!("checking {}", file.display());

        match checker.check_header(file)? {
            HeaderStatus::SelfSufficient => {},
            HeaderStatus::Failed { output } => {
                println!("ERROR: {} is not self-sufficient", file.display());
                print!("{output}");
                return Ok(false);
            },
        }
    }

    Ok(true)
}
