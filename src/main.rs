//! CV analyzer: scores two PDF resumes and exports comparison reports

use clap::Parser;
use cv_analyzer::cli::{self, Cli, Commands, OutputFormat};
use cv_analyzer::config::Config;
use cv_analyzer::error::{CvAnalyzerError, Result};
use cv_analyzer::output::formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter};
use cv_analyzer::session::Session;
use log::{error, info};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run_command(cli.command) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Analyze {
            files,
            output,
            out_dir,
            export_pdf,
            export_excel,
            no_color,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(CvAnalyzerError::InvalidInput)?;

            for file in &files {
                cli::validate_file_extension(file, &["pdf"])
                    .map_err(|e| CvAnalyzerError::InvalidSelection(format!("{}: {}", file.display(), e)))?;
            }

            let config = Config::default().with_output_dir(&out_dir);
            let mut session = Session::new(config)?;

            session.select_files(&files)?;
            info!("Analyzing {} CV files", files.len());

            let result = session.analyze()?.clone();

            let formatter: Box<dyn OutputFormatter> = match output_format {
                OutputFormat::Console => Box::new(ConsoleFormatter::new(!no_color)),
                OutputFormat::Json => Box::new(JsonFormatter::new(true)),
            };
            println!("{}", formatter.format_result(&result)?);

            if export_excel {
                let path = session.export_spreadsheet()?;
                println!("Results have been exported to {}", path.display());
            }

            if export_pdf {
                let path = session.export_report()?;
                println!("Report has been exported to {}", path.display());
            }
        }
    }

    Ok(())
}
