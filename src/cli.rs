use crate::config::ClientConfig;
use crate::date_range;
use crate::errors::{AppError, AppResult};
use crate::portal::PortalClient;
use crate::ui;
use clap::{Arg, ArgAction, ArgGroup, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the argument parser.
///
/// At least one of `--list` / `--tax-list` must be given; both are allowed
/// in one invocation.
pub fn build_command() -> Command<'static> {
    Command::new("uvtax-cli")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .after_help(
            "Example:\n  uvtax-cli --make Toyota --model Camry --year 2022 --assessment 2w --list",
        )
        .arg(
            Arg::new("make")
                .short('m')
                .long("make")
                .help("Make of the car (e.g., 'Tesla')")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("model")
                .short('M')
                .long("model")
                .help("Model of the car (e.g., 'Model X')")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("year")
                .short('y')
                .long("year")
                .help("Year of manufacture")
                .default_value("2024")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("assessment")
                .short('a')
                .long("assessment")
                .help("Assessment date range (e.g., 4d, 2w, 3m, 1y). '1d' for today only.")
                .default_value("3m")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("Display the list of matching vehicles and their total tax")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tax_list")
                .short('t')
                .long("tax-list")
                .help("Display the detailed tax breakdown for the most recent vehicle found")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Log each outbound request's target and body")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a TOML config file (base_url, timeout_secs, debug)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .group(
            ArgGroup::new("display")
                .args(&["list", "tax_list"])
                .required(true)
                .multiple(true),
        )
}

/// Parses command-line arguments and executes the lookup workflow.
///
/// 1. Resolves the make and model names into portal codes
/// 2. Resolves the assessment-range token into concrete dates
/// 3. Searches for matching used-vehicle tax assessments
/// 4. Renders the vehicle list and/or the most recent vehicle's tax
///    breakdown
///
/// # Errors
///
/// Returns an error if code resolution finds no match, the range token is
/// malformed, a request fails, or the portal answers with a non-success
/// status. The pipeline is fail-fast: the first error aborts the run.
pub async fn run() -> AppResult<()> {
    let matches = build_command().get_matches();

    let make = matches.get_one::<String>("make").expect("make is required");
    let model = matches
        .get_one::<String>("model")
        .expect("model is required");
    let year = matches
        .get_one::<String>("year")
        .expect("year has default_value");
    let assessment = matches
        .get_one::<String>("assessment")
        .expect("assessment has default_value");
    let show_list = matches.get_flag("list");
    let show_tax_list = matches.get_flag("tax_list");

    if make.trim().is_empty() || model.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "--make and --model must not be empty".into(),
        ));
    }

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => ClientConfig::from_toml_file(path)?,
        None => ClientConfig::default(),
    };
    if matches.get_flag("debug") {
        config.debug = true;
    }

    let client = PortalClient::new(config)?;
    run_workflow(
        &client,
        make,
        model,
        year,
        assessment,
        show_list,
        show_tax_list,
    )
    .await
}

async fn run_workflow(
    client: &PortalClient,
    make: &str,
    model: &str,
    year: &str,
    assessment: &str,
    show_list: bool,
    show_tax_list: bool,
) -> AppResult<()> {
    info!(make, model, "Fetching portal codes");
    let make_code = client.resolve_make_code(make).await?;
    let model_code = client.resolve_model_code(make, model).await?;
    info!(make_code = %make_code, model_code = %model_code, "Codes resolved");

    let (start_date, end_date) = date_range::resolve_range(assessment)?;

    info!(
        start_date = %start_date,
        end_date = %end_date,
        year,
        "Searching for vehicle assessments"
    );
    let results = client
        .search_vehicles(
            make,
            &make_code,
            model,
            &model_code,
            year,
            &start_date,
            &end_date,
        )
        .await?;

    if results.is_empty() {
        println!("No data found for the specified criteria.");
        return Ok(());
    }
    info!(count = results.len(), "Search completed");

    if show_list {
        println!("--- Vehicle List ---");
        print!("{}", ui::vehicle_table(&results));
        println!();
    }

    if show_tax_list {
        let most_recent = &results[0];
        info!(
            make = %most_recent.make,
            model = %most_recent.model,
            trim_level = %most_recent.trim_level,
            "Fetching tax breakdown for most recent assessment"
        );
        let tax_items = client.fetch_tax_details(&most_recent.detail_key).await?;
        if tax_items.is_empty() {
            println!("Could not retrieve detailed tax breakdown.");
        } else {
            println!("--- Tax Breakdown (Most Recent) ---");
            print!("{}", ui::tax_table(&tax_items));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::build_command;

    #[test]
    fn parses_required_args_and_defaults() {
        let matches = build_command()
            .try_get_matches_from(vec!["uvtax-cli", "--make", "Toyota", "--model", "Camry", "--list"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("make").unwrap(), "Toyota");
        assert_eq!(matches.get_one::<String>("model").unwrap(), "Camry");
        assert_eq!(matches.get_one::<String>("year").unwrap(), "2024");
        assert_eq!(matches.get_one::<String>("assessment").unwrap(), "3m");
        assert!(matches.get_flag("list"));
        assert!(!matches.get_flag("tax_list"));
    }

    #[test]
    fn make_and_model_are_required() {
        assert!(build_command()
            .try_get_matches_from(vec!["uvtax-cli", "--make", "Toyota", "--list"])
            .is_err());
        assert!(build_command()
            .try_get_matches_from(vec!["uvtax-cli", "--model", "Camry", "--list"])
            .is_err());
    }

    #[test]
    fn at_least_one_display_flag_is_required() {
        assert!(build_command()
            .try_get_matches_from(vec!["uvtax-cli", "--make", "Toyota", "--model", "Camry"])
            .is_err());
    }

    #[test]
    fn both_display_flags_are_allowed_together() {
        let matches = build_command()
            .try_get_matches_from(vec![
                "uvtax-cli",
                "--make",
                "Toyota",
                "--model",
                "Camry",
                "--list",
                "--tax-list",
            ])
            .unwrap();
        assert!(matches.get_flag("list"));
        assert!(matches.get_flag("tax_list"));
    }
}
