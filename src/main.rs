// src/main.rs
//! NMEA Monitor - serial GNSS fix/navigation display

use clap::Parser;
use nmea_monitor::{
    config::MonitorConfig,
    display::TerminalDisplay,
    monitor::list_serial_ports,
    MonitorError, NmeaMonitor, Result,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Serial port to read from (e.g. /dev/ttyUSB0 or COM4)
    port: Option<String>,

    /// Baud rate of the receiver
    #[arg(short, long)]
    baud: Option<u32>,

    /// List available serial ports and exit
    #[arg(long)]
    list_ports: bool,

    /// Print parsed records as JSON lines instead of the status screen
    #[arg(long)]
    json: bool,

    /// Save the resolved port and baud rate as the new defaults
    #[arg(long)]
    save_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_ports {
        return list_serial_ports().await;
    }

    let mut config = MonitorConfig::load().unwrap_or_default();
    if let Some(port) = args.port {
        config.serial_port = Some(port);
    }
    if let Some(baud) = args.baud {
        config.baudrate = baud;
    }

    let port = config.serial_port.clone().ok_or_else(|| {
        MonitorError::Other(
            "No serial port configured; pass one as an argument or use --list-ports".to_string(),
        )
    })?;

    if args.save_config {
        config.save()?;
        println!("Saved configuration");
    }

    if args.json {
        run_json(&port, config.baudrate).await
    } else {
        run_terminal(&port, &config).await
    }
}

/// Full-screen status display, redrawn on an interval.
async fn run_terminal(port: &str, config: &MonitorConfig) -> Result<()> {
    println!("Connecting to receiver on {} at {} baud...", port, config.baudrate);

    let monitor = NmeaMonitor::new();
    monitor.connect_serial(port, config.baudrate).await?;

    let display = TerminalDisplay::new(config.refresh_interval_ms);
    display.run(monitor.snapshot_handle(), monitor.running_handle()).await
}

/// One JSON line per parsed record, until EOF or Ctrl+C.
async fn run_json(port: &str, baudrate: u32) -> Result<()> {
    let mut monitor = NmeaMonitor::new();
    let mut records = monitor.subscribe();
    monitor.connect_serial(port, baudrate).await?;

    loop {
        tokio::select! {
            record = records.recv() => match record {
                Some(record) => println!("{}", serde_json::to_string(&record)?),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    monitor.stop();
    Ok(())
}
