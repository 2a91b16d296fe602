use std::process;

use clap::Parser;
use dbridge_cli::{App, Command, DriverKind, DriversArgs, PingArgs};
use dbridge_core::driver::{open, Driver};
use dbridge_core::params::ConnectParams;
use dbridge_drivers::mariadb::MariaDbDriver;
use dbridge_drivers::mysql::MySqlDriver;
use dbridge_drivers::probe::CompiledProbe;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = App::parse();
    match &app.command {
        Command::Drivers(args) => drivers(args),
        Command::Ping(args) => ping(args),
    }
}

fn drivers(args: &DriversArgs) {
    let probe = CompiledProbe;
    let entries = [
        (MySqlDriver.driver_name(), MySqlDriver.is_supported(&probe)),
        (
            MariaDbDriver.driver_name(),
            MariaDbDriver.is_supported(&probe),
        ),
    ];

    if args.json {
        let list: Vec<_> = entries
            .iter()
            .map(|(name, supported)| {
                serde_json::json!({ "driver": name, "supported": supported })
            })
            .collect();
        println!("{}", serde_json::to_string(&list).unwrap());
    } else {
        for (name, supported) in entries {
            let status = if supported {
                "supported"
            } else {
                "not supported"
            };
            println!("{name}: {status}");
        }
    }
}

fn ping(args: &PingArgs) {
    let params = ConnectParams::builder()
        .host(args.host.clone())
        .username(args.username.clone())
        .password(args.password.clone())
        .database(args.database.clone())
        .port(args.port)
        .build();
    let probe = CompiledProbe;

    let (name, result) = match args.driver {
        DriverKind::Mysql => (
            MySqlDriver.driver_name(),
            open(&MySqlDriver, &probe, &params).map(drop),
        ),
        DriverKind::Mariadb => (
            MariaDbDriver.driver_name(),
            open(&MariaDbDriver, &probe, &params).map(drop),
        ),
    };

    match result {
        Ok(()) => {
            if args.json {
                let result = serde_json::json!({ "driver": name, "ok": true });
                println!("{}", serde_json::to_string(&result).unwrap());
            } else {
                println!("{name}: connection ok");
            }
        }
        Err(err) => {
            if args.json {
                let result = serde_json::json!({
                    "driver": name,
                    "ok": false,
                    "error": err,
                });
                println!("{}", serde_json::to_string(&result).unwrap());
            } else {
                eprintln!("{name}: connection failed: {err}");
                if err.code != 0 {
                    eprintln!("  code: {}", err.code);
                }
                if let Some(state) = &err.info.sql_state {
                    eprintln!("  sqlstate: {state}");
                }
            }
            process::exit(1);
        }
    }
}
