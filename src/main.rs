mod actions;
mod config;
mod console;
mod db;
mod error;
mod logging;
mod models;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    let paths = config::AppPaths::resolve()?;
    logging::init(&paths.log_file)?;

    let mut db = db::Database::open(&paths.database)?;
    let mut console = console::Console::stdio();
    let result = run::as_menu(&mut db, &mut console);
    let closed = db.close();

    if let Err(ref e) = result {
        tracing::error!("{e:#}");
    }
    result.and(closed)
}
