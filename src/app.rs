//! Main application orchestration and execution

use crate::cli::Cli;
use crate::config::{display_config_summary, load_config};
use crate::control::ControlSignal;
use crate::engine::TestOrchestrator;
use crate::error::Result;
use crate::logging::SessionLogger;
use crate::models::ProgressEvent;
use crate::output::ResultFormatter;
use crate::transport::HttpTransport;
use tokio::sync::mpsc;

/// Capacity of the progress channel; the renderer only ever wants the
/// freshest event, so a small buffer with drop-on-full is enough.
const PROGRESS_BUFFER: usize = 16;

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run one full speed test session and print the results
    pub async fn run(self) -> Result<()> {
        let config = load_config(self.cli)?;
        let logger = SessionLogger::new(config.verbose, config.enable_color);

        for warning in config.validation_warnings() {
            logger.warn(&warning);
        }
        logger.debug(&display_config_summary(&config));

        let transport = HttpTransport::new(&config)?;
        let signal = ControlSignal::new();
        // Ctrl-C stops the session cleanly; partial results still print
        let interrupt = signal.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.stop();
            }
        });

        let (progress_tx, mut progress_rx) = mpsc::channel::<ProgressEvent>(PROGRESS_BUFFER);
        let show_live = !config.json_output;
        let renderer = tokio::spawn(async move {
            while let Some(event) = progress_rx.recv().await {
                if show_live {
                    eprint!(
                        "\r{} {:>3}%  {:.1} Mbps    ",
                        event.phase_label, event.percent_complete, event.current_mbps
                    );
                }
            }
            if show_live {
                eprintln!();
            }
        });

        logger.info("Starting speed test session");
        let orchestrator = TestOrchestrator::new(&transport, &config);
        let result = orchestrator.run(&signal, &progress_tx).await;

        // Close the channel so the renderer drains and exits
        drop(progress_tx);
        let _ = renderer.await;

        if !result.any_success() {
            logger.warn("No phase produced usable data; check connectivity to the endpoints");
        }

        let formatter = ResultFormatter::new(config.enable_color);
        if config.json_output {
            println!("{}", formatter.format_json(&result)?);
        } else {
            println!("{}", formatter.format(&result));
        }

        Ok(())
    }
}
