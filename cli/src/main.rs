//! zbx-provision - Zabbix agent 2 provisioning for Ubuntu hosts

use clap::Parser;

use zbx_provision::cli::{Cli, error_code};
use zbx_provision::logging;
use zbx_provision::output::json;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let as_json = cli.json;

    if let Err(e) = cli.run().await {
        let message = format!("{e:#}");
        match json::format_error(&message, error_code(&e)) {
            Ok(obj) if as_json => println!("{obj}"),
            _ => eprintln!("Error: {message}"),
        }
        std::process::exit(1);
    }
}
