//! Command-line tool for talking to a VF747-class RFID reader.

use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vf747_client::{ClientConfig, ProtocolClient, SerialTransport};

#[derive(Parser)]
#[command(name = "vf747", about = "Talk to a VF747-class RFID reader over a serial port")]
struct Cli {
    /// Serial port path (e.g. /dev/ttyUSB0 or COM3).
    #[arg(short, long)]
    port: String,

    /// Baud rate of the serial link.
    #[arg(short, long, default_value_t = 57600)]
    baud: u32,

    /// Response timeout in milliseconds.
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// Tag identifier width in bytes for this reader's tag population.
    #[arg(long, default_value_t = 8)]
    tag_width: usize,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// List identifiers of all tags currently visible to the reader.
    ListTags,
    /// Show reader firmware and model information.
    Info,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    debug!(port = %cli.port, baud = cli.baud, "opening serial port");
    let transport = SerialTransport::open(&cli.port, cli.baud)?;

    let config = ClientConfig {
        read_timeout: Duration::from_millis(cli.timeout_ms),
        tag_id_width: cli.tag_width,
    };
    let mut client = ProtocolClient::with_config(transport, config);

    match cli.command {
        CliCommand::ListTags => {
            let result = client.list_tag_ids()?;
            println!("{} tag(s) visible", result.count);
            for tag in &result.tags {
                println!("{}", tag.to_hex());
            }
        }
        CliCommand::Info => {
            let info = client.reader_info()?;
            println!("model:    {}", info.model);
            println!("firmware: {}", info.firmware_version());
        }
    }

    Ok(())
}
