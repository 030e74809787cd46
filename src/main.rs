use chrono::{Local, NaiveDate};
use env_logger::Env;
use nthweekday::{Context, Mode, convert_to_date_with};
use std::io::{self, BufRead, Write};

/// Sentinel that ends an interactive session, besides an empty line.
const STOP_WORD: &str = "stop";

fn main() {
    env_logger::init_from_env(Env::new().filter_or("RUST_LOG", "info"));

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context { reference_date: config.reference_date };

    if let Some(input) = config.input {
        if !convert_and_report(&input, config.mode, &ctx) {
            std::process::exit(1);
        }
        return;
    }

    run_prompt_loop(config.mode, &ctx);
}

/// Prompt for phrases until an empty line or the stop word.
fn run_prompt_loop(mode: Mode, ctx: &Context) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("phrase> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                log::error!("failed to read stdin: {err}");
                break;
            }
            None => break,
        };

        let phrase = line.trim();
        if phrase.is_empty() || phrase.eq_ignore_ascii_case(STOP_WORD) {
            break;
        }

        convert_and_report(phrase, mode, ctx);
    }
}

fn convert_and_report(text: &str, mode: Mode, ctx: &Context) -> bool {
    match convert_to_date_with(text, mode, ctx) {
        Ok(date) => {
            println!("{date}");
            true
        }
        Err(err) => {
            log::warn!("could not convert {text:?}: {err}");
            eprintln!("error: {err}");
            false
        }
    }
}

struct CliConfig {
    input: Option<String>,
    reference_date: NaiveDate,
    mode: Mode,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_date = Local::now().date_naive();
    let mut mode = Mode::Strict;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("nthweekday {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--lenient" => mode = Mode::Lenient,
            "--strict" => mode = Mode::Strict,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_date = parse_reference(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_date = parse_reference(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    Ok(CliConfig { input, reference_date, mode })
}

fn parse_reference(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DD)"))
}

fn help_text() -> String {
    format!(
        "nthweekday {version}

Resolve \"Nth weekday of month\" phrases (e.g. \"2-й четверг ноября\") into dates.

Usage:
  nthweekday [OPTIONS] [<phrase...>]
  nthweekday [OPTIONS] --input <phrase>

Without a phrase argument an interactive prompt is started; an empty line
or \"{stop}\" ends the session.

Options:
  -i, --input <phrase>   Phrase to convert (one-shot mode).
  --reference <date>     Reference date in YYYY-MM-DD. Fixes the target year
                         and supplies --lenient defaults. Default: today.
  --strict               Require the full phrase shape (default).
  --lenient              Allow missing fields, defaulting from the reference date.
  -h, --help             Show this help message.
  -V, --version          Print version information.

Exit codes:
  0  Success.
  1  Conversion failed.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
        stop = STOP_WORD
    )
}
