//! Binary entry point: resolve configuration, start file logging, make sure
//! the schema exists, then hand control to the Ratatui event loop.
use anyhow::Result;
use library_desk::{logging, run_app, App, Config, Database, Library};
use tracing::info;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let _guard = logging::init(&config)?;

    let db = Database::new(&config);
    db.ensure_schema()?;
    info!(path = %config.database_path.display(), "database ready");

    let mut app = App::new(Library::new(db));
    let result = run_app(&mut app);
    info!("shutting down");
    result
}
