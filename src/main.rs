#![warn(rust_2018_idioms)]

use fing::{reachable_targets, Config, Coordinator, PingError, ProbeOutcome};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(argh::FromArgs)]
/// fing - ping every host of a list at once and report which ones answer
struct Args {
    #[argh(option, short = 'd')]
    /// file with one host name per line
    domain_file: PathBuf,

    #[argh(option, short = 'o')]
    /// write the reachable host names to this file
    output_file: Option<PathBuf>,

    #[argh(option, short = 't', default = "1000")]
    /// milliseconds to wait for each echo reply (default 1000)
    timeout: u64,
}

#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error("could not read domain file {}: {source}", .path.display())]
    MissingInputFile { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Ping(#[from] PingError),

    #[error("could not write output file {}: {source}", .path.display())]
    Output { path: PathBuf, source: io::Error },
}

impl Failure {
    fn exit_code(&self) -> ExitCode {
        match self {
            Failure::MissingInputFile { .. } | Failure::Output { .. } => ExitCode::from(1),
            Failure::Ping(_) => ExitCode::from(2),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("could not install tracing subscriber: {e}");
    }

    let args: Args = argh::from_env();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            tracing::error!("{failure}");
            eprintln!("error: {failure}");
            failure.exit_code()
        }
    }
}

async fn run(args: &Args) -> Result<(), Failure> {
    let contents = std::fs::read_to_string(&args.domain_file)
        .map_err(|source| Failure::MissingInputFile { path: args.domain_file.clone(), source })?;
    let targets = parse_targets(&contents);
    tracing::trace!("targets.len() == {}", targets.len());

    let config = Config::new(Duration::from_millis(args.timeout));
    let outcomes = Coordinator::new(config).run_all(&targets).await?;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    for outcome in &outcomes {
        // stdout going away is no reason to fail the run
        let _ = writeln!(stdout, "{}", status_line(outcome));
    }

    if let Some(path) = &args.output_file {
        write_reachable(path, &outcomes).map_err(|source| Failure::Output { path: path.clone(), source })?;
        let _ = writeln!(stdout, "Active domains written to {}", path.display());
    }
    Ok(())
}

/// Host names from the domain file: one per line, trimmed, blank lines skipped.
fn parse_targets(contents: &str) -> Vec<String> {
    contents.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect()
}

fn status_line(outcome: &ProbeOutcome) -> String {
    let status = if outcome.is_reachable() { "[FOUND]" } else { "[NOT FOUND]" };
    format!("{status} {}", outcome.target())
}

fn write_reachable(path: &Path, outcomes: &[ProbeOutcome]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for target in reachable_targets(outcomes) {
        writeln!(file, "{target}")?;
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    #[test]
    fn parse_targets_skips_blank_lines_and_trims() {
        let contents = "example.com\n\n  localhost  \r\n\t\n10.255.255.1\nexample.com\n";
        assert_eq!(vec!["example.com", "localhost", "10.255.255.1", "example.com"], parse_targets(contents));
    }

    #[test]
    fn parse_targets_of_empty_file() {
        assert!(parse_targets("").is_empty());
        assert!(parse_targets("\n \n").is_empty());
    }

    #[test]
    fn status_lines() {
        assert_eq!("[FOUND] a", status_line(&ProbeOutcome::Reachable("a".to_owned())));
        assert_eq!("[NOT FOUND] b", status_line(&ProbeOutcome::Unreachable("b".to_owned())));
        assert_eq!("[NOT FOUND] c", status_line(&ProbeOutcome::Unresolvable("c".to_owned())));
    }

    #[test]
    fn output_file_holds_only_reachable_targets_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("active.txt");
        let outcomes = vec![
            ProbeOutcome::Reachable("first".to_owned()),
            ProbeOutcome::Unreachable("10.255.255.1".to_owned()),
            ProbeOutcome::Unresolvable("definitely.invalid.tld".to_owned()),
            ProbeOutcome::Reachable("last".to_owned()),
        ];

        write_reachable(&path, &outcomes).unwrap();

        assert_eq!("first\nlast\n", std::fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn args_short_and_long_options() {
        let args = Args::from_args(&["fing"], &["-d", "domains.txt", "--output-file", "out.txt", "-t", "250"]).unwrap();
        assert_eq!(PathBuf::from("domains.txt"), args.domain_file);
        assert_eq!(Some(PathBuf::from("out.txt")), args.output_file);
        assert_eq!(250, args.timeout);
    }

    #[test]
    fn args_domain_file_is_required() {
        assert!(Args::from_args(&["fing"], &["-o", "out.txt"]).is_err());
        let args = Args::from_args(&["fing"], &["--domain-file", "d.txt"]).unwrap();
        assert_eq!(None, args.output_file);
        assert_eq!(1000, args.timeout);
    }

    #[tokio::test]
    async fn missing_domain_file_fails_before_probing() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args { domain_file: dir.path().join("missing.txt"), output_file: None, timeout: 10 };

        let failure = run(&args).await.unwrap_err();

        assert!(matches!(failure, Failure::MissingInputFile { .. }));
    }
}
