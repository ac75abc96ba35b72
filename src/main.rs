/*!
 * Command-line interface for quotefs
 */

use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use quotefs::app::Application;
use quotefs::config::{Args, Config};
use quotefs::quote::HttpQuoteClient;
use quotefs::report::{ReportFormat, Reporter};

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut command = Args::command();
        clap_complete::generate(shell, &mut command, "quotefs", &mut io::stdout());
        return Ok(());
    }

    init_tracing(args.verbose);

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    let client = HttpQuoteClient::new(config.endpoint_url()?);

    let progress = ProgressBar::new(config.count as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("💬 Fetching");
    progress.set_message(format!("Querying {}", client.endpoint()));

    let on_stored = |index: usize, path: &Path| {
        progress.set_position(index as u64);
        progress.set_message(format!("Stored {}", path.display()));
    };

    let app = Application::new(config);
    let result = app.run(&client, Some(&on_stored));

    // Clear the progress bar before anything else is printed
    progress.finish_and_clear();
    let report = result?;

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("quotefs={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}
