//! splot: convert S-parameter payloads into VSWR series from the shell

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use splot_core::pipeline::{convert_batch, BatchOutcome};
use splot_core::wire::{
    convert_request_lenient, decode_request, encode_response, encode_response_pretty,
};
use splot_core::{Config, EnvelopeMap};

#[derive(Parser, Debug)]
#[command(name = "splot", version, about = "S-parameter to VSWR conversion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a JSON request into the JSON envelope map
    Convert {
        /// Request file; reads stdin when omitted or "-"
        input: Option<PathBuf>,
        /// Output file; writes stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
        /// Skip invalid datasets instead of failing the whole request
        #[arg(long)]
        lenient: bool,
    },
    /// Print the repository URL (SPLOT_REPO_URL overrides the default)
    RepoUrl,
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Convert {
            input,
            output,
            pretty,
            lenient,
        } => {
            let body = read_input(input.as_ref())?;
            let envelopes = if lenient {
                convert_lenient(&body)?
            } else {
                let datasets = decode_request(&body).context("decoding request")?;
                convert_batch(&datasets).context("converting datasets")?
            };
            let json = if pretty {
                encode_response_pretty(&envelopes)?
            } else {
                encode_response(&envelopes)?
            };
            write_output(output.as_ref(), &json)
        }
        Command::RepoUrl => {
            println!("{}", Config::from_env().repo_url);
            Ok(())
        }
    }
}

/// Lenient conversion; fails only when nothing could be converted
fn convert_lenient(body: &str) -> Result<EnvelopeMap> {
    let outcome = convert_request_lenient(body).context("decoding request")?;
    report_skipped(&outcome)?;
    Ok(outcome.envelopes)
}

fn report_skipped(outcome: &BatchOutcome) -> Result<()> {
    for err in &outcome.failures {
        eprintln!("skipped: {err}");
    }
    let failed = outcome.failures.len();
    if outcome.envelopes.is_empty() && failed > 0 {
        bail!("none of the {failed} datasets could be converted");
    }
    log::info!(
        "converted {} datasets, skipped {failed}",
        outcome.envelopes.len()
    );
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))
        }
        _ => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("reading stdin")?;
            Ok(body)
        }
    }
}

fn write_output(path: Option<&PathBuf>, json: &str) -> Result<()> {
    match path {
        Some(p) => fs::write(p, json).with_context(|| format!("writing {}", p.display())),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("writing stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert_flags() {
        let cli = Cli::parse_from(["splot", "convert", "req.json", "-o", "out.json", "--lenient"]);
        match cli.command {
            Command::Convert {
                input,
                output,
                pretty,
                lenient,
            } => {
                assert_eq!(input, Some(PathBuf::from("req.json")));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(!pretty);
                assert!(lenient);
            }
            Command::RepoUrl => panic!("expected convert"),
        }
    }

    #[test]
    fn test_lenient_fails_when_everything_is_invalid() {
        let err = convert_lenient(r#"[{"a.s1p": {"real": {}}}]"#).unwrap_err();
        assert!(err.to_string().contains("none of the 1 datasets"));
        assert!(convert_lenient("[]").unwrap().is_empty());
    }

    #[test]
    fn test_lenient_counts_each_failure_once() {
        let err = convert_lenient(r#"[{}, 1, {"a.s1p": {"real": {}}}]"#).unwrap_err();
        assert!(err.to_string().contains("none of the 3 datasets"));
        assert!(convert_lenient("{}").is_err());
    }
}
