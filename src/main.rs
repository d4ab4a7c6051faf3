mod debug_report;

use chrono::{Local, NaiveDateTime};
use fila::{Advisor, Context};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let advisor = match &config.tables_dir {
        Some(dir) => match Advisor::from_dir(dir) {
            Ok(advisor) => advisor,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        None => Advisor::default(),
    };

    let ctx = Context { reference_time: config.reference_time };

    if config.json {
        let result = advisor.ask_with(&config.question, &ctx);
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to encode result: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let res = advisor.ask_verbose_with(&config.question, &ctx);
    debug_report::print_run(&res, config.color);
}

struct CliConfig {
    question: String,
    reference_time: NaiveDateTime,
    tables_dir: Option<PathBuf>,
    json: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut question: Option<String> = None;
    let mut reference_time = Local::now().naive_local();
    let mut tables_dir = None;
    let mut json = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("fila {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = parse_reference(&value)?;
            }
            "--config" => {
                let value = args.next().ok_or_else(|| "error: --config expects a directory".to_string())?;
                tables_dir = Some(PathBuf::from(value));
            }
            "--question" | "-q" => {
                let value = args.next().ok_or_else(|| "error: --question expects a value".to_string())?;
                set_question(&mut question, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_question(&mut question, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                reference_time = parse_reference(arg.trim_start_matches("--reference="))?;
            }
            _ if arg.starts_with("--config=") => {
                tables_dir = Some(PathBuf::from(arg.trim_start_matches("--config=")));
            }
            _ if arg.starts_with("--question=") => {
                set_question(&mut question, arg.trim_start_matches("--question=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_question(&mut question, rest)?;
                break;
            }
        }
    }

    let question = match question {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    // An empty question is a valid request (it gets the default answer), but
    // the report has nothing to show for it.
    if question.trim().is_empty() && !json {
        return Err(format!("error: no question provided\n\n{}", help_text()));
    }

    Ok(CliConfig { question: question.trim().to_string(), reference_time, tables_dir, json, color })
}

fn set_question(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: question provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    if io::stdin().is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM[:SS])"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "fila {version}

Answers campus congestion questions (snack bars, parking, service desks).

Usage:
  fila [OPTIONS] [--] <question...>
  fila [OPTIONS] --question <text>

Options:
  -q, --question <text>      Question to answer. If omitted, reads remaining args
                             or stdin when no args are provided.
  --reference <timestamp>    Time to evaluate at, YYYY-MM-DDTHH:MM[:SS].
                             Default: current local time.
  --config <dir>             Load {keywords}, {parking} and
                             {snacks} from <dir> instead of the
                             embedded tables.
  --json                     Print the response payload as JSON.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter, e.g. RUST_LOG=fila=debug.

Exit codes:
  0  Success.
  1  Invalid rule tables or internal error.
  2  Invalid arguments or missing question.
",
        version = env!("CARGO_PKG_VERSION"),
        keywords = fila::config::KEYWORDS_FILE,
        parking = fila::config::PARKING_FILE,
        snacks = fila::config::SNACKS_FILE,
    )
}
