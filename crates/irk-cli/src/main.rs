use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use irk_cli::problem::{
    evaluate, evaluate_batch, load_problem_set, BatchEntry, Overrides, ProblemReport,
};
use irk_cli::render::render_text;
use irk_matrix::config::{Operation, ProblemConfig};
use irk_matrix::determinant::DetMethod;
use irk_matrix::format::{parse_matrix, parse_vector};
use irk_matrix::inverse::InvMethod;
use irk_matrix::linear_system::PivotMode;

fn matrix_arg() -> Arg {
    Arg::new("matrix")
        .short('a')
        .long("matrix")
        .help("Square coefficient matrix, rows separated by ';' (e.g. \"2 1; 1 1\")")
        .required(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .value_hint(ValueHint::Other)
}

fn vector_arg() -> Arg {
    Arg::new("vector")
        .short('b')
        .long("vector")
        .help("Right-hand side vector (e.g. \"3 2\")")
        .required(true)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .value_hint(ValueHint::Other)
}

fn det_method_arg() -> Arg {
    Arg::new("method")
        .short('m')
        .long("method")
        .help("Determinant algorithm")
        .value_parser(["row-reduction", "cofactor", "sarrus"])
        .default_value("row-reduction")
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("IRK_LOG", "error,irk=info"))
        .init();

    let matches = Command::new("irk")
        .version(clap::crate_version!())
        .about("\u{1F9EE} irk - step-by-step determinants, inverses and linear systems")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the result and steps as JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_steps")
                .long("no-steps")
                .help("Print only the result, without the step trace")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("det")
                .about("Compute a determinant")
                .arg(matrix_arg())
                .arg(det_method_arg()),
        )
        .subcommand(
            Command::new("inverse")
                .about("Invert a square matrix")
                .arg(matrix_arg())
                .arg(
                    Arg::new("method")
                        .short('m')
                        .long("method")
                        .help("Inversion algorithm")
                        .value_parser(["gauss-jordan", "adjoint"])
                        .default_value("gauss-jordan"),
                ),
        )
        .subcommand(
            Command::new("solve")
                .about("Solve A x = b by Gauss-Jordan elimination and classify the system")
                .arg(matrix_arg())
                .arg(vector_arg())
                .arg(
                    Arg::new("pivot")
                        .short('p')
                        .long("pivot")
                        .help("Pivot selection: largest magnitude (greedy) or first non-zero (first)")
                        .value_parser(["greedy", "first"])
                        .default_value("greedy"),
                ),
        )
        .subcommand(
            Command::new("cramer")
                .about("Solve A x = b with Cramer's rule")
                .arg(matrix_arg())
                .arg(vector_arg())
                .arg(det_method_arg()),
        )
        .subcommand(
            Command::new("run")
                .about("Evaluate one problem or a batch of problems from a JSON file")
                .arg(
                    Arg::new("config")
                        .help("Path to the JSON problem file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("det_method")
                        .long("det-method")
                        .help("Override the determinant algorithm of determinant and Cramer problems")
                        .value_parser(["row-reduction", "cofactor", "sarrus"]),
                )
                .arg(
                    Arg::new("inv_method")
                        .long("inv-method")
                        .help("Override the inversion algorithm of inverse problems")
                        .value_parser(["gauss-jordan", "adjoint"]),
                )
                .arg(
                    Arg::new("pivot")
                        .short('p')
                        .long("pivot")
                        .help("Override the pivot selection of solve problems")
                        .value_parser(["greedy", "first"]),
                ),
        )
        .subcommand(Command::new("template").about("Print an example problem file"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("template", _)) => {
            println!("{}", serde_json::to_string_pretty(&ProblemConfig::default())?);
            Ok(())
        }
        Some(("run", sub_m)) => handle_run(sub_m),
        Some((name, sub_m)) => {
            let problem = problem_from_arguments(name, sub_m)?;
            match evaluate(&problem) {
                Ok(report) => print_report(&report, sub_m),
                Err(e) => {
                    log::error!("[irk] {} failed: {:#}", name, e);
                    std::process::exit(1)
                }
            }
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn problem_from_arguments(name: &str, matches: &ArgMatches) -> Result<ProblemConfig> {
    let matrix_text: &String = matches.get_one("matrix").unwrap();
    let matrix = parse_matrix(matrix_text)?.to_rows();

    let (operation, vector) = match name {
        "det" => (
            Operation::Determinant {
                method: parse_or_default::<DetMethod>(matches.get_one("method"))?,
            },
            None,
        ),
        "inverse" => (
            Operation::Inverse {
                method: parse_or_default::<InvMethod>(matches.get_one("method"))?,
            },
            None,
        ),
        "solve" => (
            Operation::Solve {
                pivot: parse_or_default::<PivotMode>(matches.get_one("pivot"))?,
            },
            Some(vector_from_arguments(matches)?),
        ),
        "cramer" => (
            Operation::Cramer {
                method: parse_or_default::<DetMethod>(matches.get_one("method"))?,
            },
            Some(vector_from_arguments(matches)?),
        ),
        _ => unreachable!(),
    };

    Ok(ProblemConfig::new(matrix, vector, operation))
}

fn vector_from_arguments(matches: &ArgMatches) -> Result<Vec<f64>> {
    let vector_text: &String = matches.get_one("vector").unwrap();
    Ok(parse_vector(vector_text)?.to_vec())
}

fn parse_or_default<T>(value: Option<&String>) -> Result<T>
where
    T: FromStr<Err = String> + Default,
{
    match value {
        Some(v) => T::from_str(v).map_err(anyhow::Error::msg),
        None => Ok(T::default()),
    }
}

fn print_report(report: &ProblemReport, matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render_text(report, !matches.get_flag("no_steps")));
    }
    Ok(())
}

fn handle_run(matches: &ArgMatches) -> Result<()> {
    let config_path: &PathBuf = matches.get_one("config").unwrap();
    log::info!("[irk] Evaluating problems from: {:?}", config_path);

    let mut problems = load_problem_set(config_path)?;

    let mut overrides = Overrides::default();
    if let Some(method) = matches.get_one::<String>("det_method") {
        overrides.det_method = Some(DetMethod::from_str(method).map_err(anyhow::Error::msg)?);
    }
    if let Some(method) = matches.get_one::<String>("inv_method") {
        overrides.inv_method = Some(InvMethod::from_str(method).map_err(anyhow::Error::msg)?);
    }
    if let Some(pivot) = matches.get_one::<String>("pivot") {
        overrides.pivot = Some(PivotMode::from_str(pivot).map_err(anyhow::Error::msg)?);
    }
    if !overrides.is_empty() {
        log::info!("[irk] Applying command-line overrides: {:?}", overrides);
        for problem in problems.iter_mut() {
            overrides.apply(problem);
        }
    }

    let entries = evaluate_batch(&problems);
    let failures = entries
        .iter()
        .filter(|e| matches!(e, BatchEntry::Failed { .. }))
        .count();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let show_steps = !matches.get_flag("no_steps");
        for (idx, entry) in entries.iter().enumerate() {
            match entry {
                BatchEntry::Report(report) => {
                    println!(
                        "=== Problem {} ({}, {}) ===",
                        idx + 1,
                        report.operation,
                        report.variant
                    );
                    print!("{}", render_text(report, show_steps));
                }
                BatchEntry::Failed { error } => {
                    println!("=== Problem {} ===", idx + 1);
                    log::error!("[irk] Problem {} failed: {}", idx + 1, error);
                }
            }
        }
    }

    if failures > 0 {
        log::error!("[irk] {} of {} problems failed", failures, entries.len());
        std::process::exit(1)
    }
    Ok(())
}
