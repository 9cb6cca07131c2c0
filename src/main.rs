use std::path::Path;

use clap::Parser;

use bikeshare_stats::cli::{Cli, ColorChoice, Commands, ReportArgs};
use bikeshare_stats::config::{Config, ConfigLoader, FileConfigLoader};
use bikeshare_stats::dataset::{DatasetLoader, TripRecord};
use bikeshare_stats::error::BikeshareError;
use bikeshare_stats::explore::ExploreSession;
use bikeshare_stats::filter::FilterCriteria;
use bikeshare_stats::output::{
    ColorMode, JsonReportFormatter, OutputFormat, ReportDocument, ReportFormatter,
    TextReportFormatter,
};
use bikeshare_stats::stats::CityReport;
use bikeshare_stats::{EXIT_CONFIG_ERROR, EXIT_DATA_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Some(Commands::Report(args)) => run_report(args, &cli),
        Some(Commands::Explore) | None => run_explore(&cli),
    };

    std::process::exit(exit_code);
}

fn run_explore(cli: &Cli) -> i32 {
    match run_explore_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_explore_impl(cli: &Cli) -> bikeshare_stats::Result<()> {
    let config = resolve_config(cli)?;
    let loader = DatasetLoader::new().with_quiet(cli.quiet);
    let formatter = TextReportFormatter::new(color_choice_to_mode(cli.color));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = ExploreSession::new(stdin.lock(), stdout.lock(), config, loader, formatter);
    session.run()
}

fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code_for(&e)
        }
    }
}

fn run_report_impl(args: &ReportArgs, cli: &Cli) -> bikeshare_stats::Result<()> {
    // 1. Load configuration and resolve the dataset path.
    let config = resolve_config(cli)?;
    let path = config.data_path(args.city);

    // 2. Load the dataset and apply the filters.
    let criteria = FilterCriteria::new(args.city, args.month, args.day);
    let loader = DatasetLoader::new().with_quiet(cli.quiet);
    let set = loader.load(args.city, &path)?.filter(&criteria);

    // 3. Compute the report, attaching the requested record sample.
    let mut document = ReportDocument::new(criteria, CityReport::compute(&set));
    if let Some(count) = args.sample {
        document = document.with_sample(
            set.records()
                .iter()
                .take(count)
                .map(TripRecord::sample_row)
                .collect(),
        );
    }

    // 4. Format and print.
    let output = format_report(args.format, cli.color, &document)?;
    print!("{output}");
    Ok(())
}

fn format_report(
    format: OutputFormat,
    color: ColorChoice,
    document: &ReportDocument,
) -> bikeshare_stats::Result<String> {
    match format {
        OutputFormat::Text => {
            TextReportFormatter::new(color_choice_to_mode(color)).format(document)
        }
        OutputFormat::Json => JsonReportFormatter::new().format(document),
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> bikeshare_stats::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Configuration from file discovery plus CLI overrides.
fn resolve_config(cli: &Cli) -> bikeshare_stats::Result<Config> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    Ok(match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir.clone()),
        None => config,
    })
}

const fn exit_code_for(error: &BikeshareError) -> i32 {
    match error {
        BikeshareError::Config(_) | BikeshareError::TomlParse(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_DATA_ERROR,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
