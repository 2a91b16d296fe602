//! dbridge CLI -- probe database drivers and check connectivity.

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "dbridge", about = "Pluggable database driver layer")]
pub struct App {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List known drivers and whether each is supported
    Drivers(DriversArgs),
    /// Open a connection and report the outcome
    Ping(PingArgs),
}

#[derive(Debug, Parser)]
pub struct DriversArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct PingArgs {
    /// Driver to connect with
    #[arg(long, value_enum, default_value = "mysql")]
    pub driver: DriverKind,
    /// Server hostname or IP
    #[arg(long, default_value = "localhost")]
    pub host: String,
    /// TCP port (0 selects the driver's default port)
    #[arg(long, default_value_t = 0)]
    pub port: u16,
    /// Username for login
    #[arg(long, default_value = "")]
    pub username: String,
    /// Password for login
    #[arg(long, default_value = "")]
    pub password: String,
    /// Database to use
    #[arg(long, default_value = "")]
    pub database: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum DriverKind {
    Mysql,
    Mariadb,
}
