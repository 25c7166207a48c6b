//! `carsharing` entry point: open the company store and run the manager menu
//! on stdin/stdout.

mod app;
mod config;
mod input;
mod menu;

use anyhow::{Context, Result};
use app::App;
use carsharing_core::db::open_db;
use carsharing_core::{init_logging, CompanyService, SqliteCompanyRepository};
use config::CliArgs;
use log::info;
use std::io;

fn main() -> Result<()> {
    let args = CliArgs::from_env();
    init_logging(&args.log_level, args.log_sink()).map_err(anyhow::Error::msg)?;

    let db_path = args.database_path();
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open company store `{}`", db_path.display()))?;

    {
        let service = CompanyService::new(SqliteCompanyRepository::new(&conn));
        let mut app = App::new(service, io::stdin().lock(), io::stdout().lock());
        app.run()?;
    }

    conn.close().map_err(|(_, err)| err)?;
    info!("event=db_close module=db status=ok");
    Ok(())
}
