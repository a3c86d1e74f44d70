//! Tracker demo entry point.
//!
//! # Responsibility
//! - Open the configured database and walk one client through the parcel
//!   lifecycle using `parcel_core`.
//! - Report each step on stdout.

use log::warn;
use parcel_core::db::open_db;
use parcel_core::{
    default_log_level, init_logging, ClientId, LogLevel, Parcel, ParcelService,
    SqliteParcelRepository,
};
use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

const DEFAULT_DB_PATH: &str = "tracker.db";
const DEFAULT_CLIENT: ClientId = 1;

/// Runtime settings read from `PARCEL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CliConfig {
    db_path: String,
    log_level: LogLevel,
    log_dir: Option<String>,
    client: ClientId,
}

impl CliConfig {
    fn from_env() -> Result<Self, Box<dyn Error>> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let client = match lookup("PARCEL_CLIENT") {
            Some(raw) => raw
                .trim()
                .parse::<ClientId>()
                .map_err(|err| format!("invalid PARCEL_CLIENT `{raw}`: {err}"))?,
            None => DEFAULT_CLIENT,
        };

        let log_level = match lookup("PARCEL_LOG_LEVEL") {
            Some(raw) => LogLevel::parse(&raw)
                .map_err(|err| format!("invalid PARCEL_LOG_LEVEL: {err}"))?,
            None => LogLevel::parse(default_log_level())?,
        };

        Ok(Self {
            db_path: lookup("PARCEL_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            log_level,
            log_dir: lookup("PARCEL_LOG_DIR").filter(|dir| !dir.trim().is_empty()),
            client,
        })
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = CliConfig::from_env()?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level.as_str(), log_dir)?;
    }

    let stdout = io::stdout();
    run_demo(&config, &mut stdout.lock())
}

fn run_demo(config: &CliConfig, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn)?);
    let client = config.client;

    let parcel = service.register(client, "Pskov, Verkhnyaya st. 5")?;
    report(out, "registered", &parcel)?;

    service.change_address(parcel.number, "Saratov, Sadovaya st. 21")?;
    report(out, "address changed", &service.get(parcel.number)?)?;

    let status = service.next_status(parcel.number)?;
    writeln!(out, "parcel {} status -> {status}", parcel.number)?;

    for item in service.client_parcels(client)? {
        report(out, "client parcel", &item)?;
    }

    let current = service.get(parcel.number)?;
    if !current.is_registered() {
        writeln!(
            out,
            "parcel {} is {}; delete should be refused",
            current.number, current.status
        )?;
    }
    if let Err(err) = service.delete(parcel.number) {
        warn!(
            "event=parcel_delete module=cli status=rejected number={}",
            parcel.number
        );
        writeln!(out, "parcel {} kept: {err}", parcel.number)?;
    }

    let temporary = service.register(client, "Samara, Lesnaya st. 3")?;
    report(out, "registered", &temporary)?;
    service.delete(temporary.number)?;
    writeln!(out, "parcel {} deleted", temporary.number)?;

    Ok(())
}

fn report(out: &mut impl Write, step: &str, parcel: &Parcel) -> io::Result<()> {
    writeln!(
        out,
        "{step}: number={} client={} status={} address={} created_at={}",
        parcel.number, parcel.client, parcel.status, parcel.address, parcel.created_at
    )
}
