use std::io;

use anyhow::Result;
use tracing::info;

use rookery_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("rookery starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new().run(stdin.lock(), stdout.lock())?;
    Ok(())
}
