// src/display/terminal.rs
//! Terminal-based display implementation

use crate::{
    error::{MonitorError, Result},
    monitor::MonitorSnapshot,
    nmea::records::{format_coordinate, format_token},
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType, DisableLineWrap, EnableLineWrap},
};
use std::{
    io::{self, Write},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
    time::Duration,
};
use tokio::time::sleep;

pub struct TerminalDisplay {
    refresh_interval: Duration,
}

impl TerminalDisplay {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval: Duration::from_millis(refresh_interval_ms),
        }
    }

    /// Start the terminal display loop
    pub async fn run(
        &self,
        snapshot: Arc<RwLock<MonitorSnapshot>>,
        running: Arc<AtomicBool>,
    ) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Hide, DisableLineWrap)
            .map_err(MonitorError::Io)?;

        // Set up Ctrl+C handler
        let running_clone = Arc::clone(&running);
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            running_clone.store(false, Ordering::Relaxed);
        });

        while running.load(Ordering::Relaxed) {
            execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))
                .map_err(MonitorError::Io)?;

            let current = snapshot.read().unwrap().clone();
            self.render_display(&mut stdout, &current)?;

            stdout.flush().map_err(MonitorError::Io)?;
            sleep(self.refresh_interval).await;
        }

        execute!(stdout, Show, EnableLineWrap)
            .map_err(MonitorError::Io)?;
        println!("\nShutting down...");
        Ok(())
    }

    /// Render the current snapshot to the terminal
    fn render_display(&self, stdout: &mut impl Write, snapshot: &MonitorSnapshot) -> Result<()> {
        // Header
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print("=".repeat(60)),
            Print("\n"),
            Print("NMEA Monitor - GGA/RMC Serial Stream Display"),
            Print("\n"),
            Print("=".repeat(60)),
            Print("\n"),
            ResetColor
        ).map_err(MonitorError::Io)?;

        // Timestamp
        let timestamp_str = match snapshot.timestamp {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => "No data received".to_string(),
        };
        execute!(
            stdout,
            Print(format!(
                "Last Update: {} ({} sentences, {} parsed)\n\n",
                timestamp_str, snapshot.sentences_seen, snapshot.sentences_parsed
            ))
        ).map_err(MonitorError::Io)?;

        self.render_fix_section(stdout, snapshot)?;
        self.render_navigation_section(stdout, snapshot)?;
        self.render_raw_section(stdout, snapshot)?;

        // Footer
        execute!(
            stdout,
            SetForegroundColor(Color::Green),
            Print("=".repeat(60)),
            Print("\n"),
            Print("Press Ctrl+C to exit"),
            Print("\n"),
            ResetColor
        ).map_err(MonitorError::Io)?;

        Ok(())
    }

    fn render_fix_section(&self, stdout: &mut impl Write, snapshot: &MonitorSnapshot) -> Result<()> {
        execute!(
            stdout,
            SetForegroundColor(Color::Yellow),
            Print("FIX (GGA):\n"),
            ResetColor
        ).map_err(MonitorError::Io)?;

        match &snapshot.fix {
            Some(fix) => {
                execute!(
                    stdout,
                    Print(format!("  Time (UTC):  {}\n", if fix.time_utc.is_empty() { "Unknown" } else { fix.time_utc.as_str() })),
                    Print(format!("  Latitude:   {}\n", format_coordinate(fix.latitude))),
                    Print(format!("  Longitude:  {}\n", format_coordinate(fix.longitude))),
                    Print(format!("  Altitude:   {}\n", format_token(&fix.altitude_m, "m"))),
                    Print(format!("  Satellites: {}\n", format_token(&fix.satellites, ""))),
                    Print(format!("  HDOP:       {}\n", format_token(&fix.hdop, ""))),
                    Print(format!("  Fix Type:   {:>12}\n\n", fix.fix_description()))
                ).map_err(MonitorError::Io)?;
            }
            None => {
                execute!(stdout, Print("  No GGA sentence received yet\n\n"))
                    .map_err(MonitorError::Io)?;
            }
        }

        Ok(())
    }

    fn render_navigation_section(&self, stdout: &mut impl Write, snapshot: &MonitorSnapshot) -> Result<()> {
        execute!(
            stdout,
            SetForegroundColor(Color::Cyan),
            Print("NAVIGATION (RMC):\n"),
            ResetColor
        ).map_err(MonitorError::Io)?;

        match &snapshot.navigation {
            Some(nav) => {
                let status = if nav.is_active() { "Active" } else { "Void" };
                execute!(
                    stdout,
                    Print(format!("  Status:     {:>12}\n", status)),
                    Print(format!("  Latitude:   {}\n", format_coordinate(nav.latitude))),
                    Print(format!("  Longitude:  {}\n", format_coordinate(nav.longitude))),
                    Print(format!("  Speed:      {}\n", format_token(&nav.speed_knots, "kn"))),
                    Print(format!("  Course:     {}\n\n", format_token(&nav.course_deg, "°")))
                ).map_err(MonitorError::Io)?;
            }
            None => {
                execute!(stdout, Print("  No RMC sentence received yet\n\n"))
                    .map_err(MonitorError::Io)?;
            }
        }

        Ok(())
    }

    fn render_raw_section(&self, stdout: &mut impl Write, snapshot: &MonitorSnapshot) -> Result<()> {
        execute!(
            stdout,
            SetForegroundColor(Color::Blue),
            Print("RAW DATA:\n"),
            ResetColor
        ).map_err(MonitorError::Io)?;

        let raw_display = if snapshot.raw_sentence.is_empty() {
            "No data"
        } else {
            &snapshot.raw_sentence
        };

        execute!(
            stdout,
            Print(format!("  {}\n\n", raw_display))
        ).map_err(MonitorError::Io)?;

        Ok(())
    }
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self::new(1000)
    }
}
