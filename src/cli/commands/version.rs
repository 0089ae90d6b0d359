//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

pub fn execute(output: &Output) -> Result<()> {
    output.header("parbench version information");
    output.key_value("Version:", &format!("{} v{}", crate::PKG_NAME, crate::VERSION));
    output.key_value("Description:", crate::PKG_DESCRIPTION);
    output.key_value(
        "Workers:",
        &crate::parallel::available_workers().to_string(),
    );
    output.key_value("Target:", std::env::consts::ARCH);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );
    Ok(())
}
