//! filedrop-check: check files on disk against drop-zone validation rules.
//!
//! Applies the same extension and size checks a drop zone would, without
//! a browser. Useful for verifying a configuration before shipping it, or
//! for pre-screening a batch of files.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin filedrop-check -- --types png,jpg --max-size 1000000 <FILES>...
//! ```
//!
//! Exits with status 0 when every file would be accepted, 1 when any file
//! would be rejected, and 2 when a file cannot be inspected.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use filedrop_core::{FileDescriptor, RejectionReason, ValidationConfig};
use serde::Serialize;

/// Check files against drop-zone validation rules.
///
/// Only file names and sizes are inspected; contents are never read.
#[derive(Parser)]
#[command(name = "filedrop-check", version)]
struct Cli {
    /// Files to check.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Accepted extensions, comma separated, without the leading dot.
    ///
    /// Omit to accept every type.
    #[arg(long, value_delimiter = ',')]
    types: Vec<String>,

    /// Largest accepted size in bytes. Omit for no limit.
    #[arg(long)]
    max_size: Option<u64>,

    /// Full validation config as a JSON string.
    ///
    /// When provided, `--types` and `--max-size` are ignored. Uses the
    /// `{"supportedFileTypes": [...], "maximumSizeBytes": n}` shape.
    #[arg(long)]
    config_json: Option<String>,

    /// Output verdicts as JSON instead of one line per file.
    #[arg(long)]
    json: bool,
}

/// Outcome for one file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Verdict {
    path: PathBuf,
    name: String,
    size_bytes: u64,
    accepted: bool,
    reason: Option<RejectionReason>,
}

/// Build a [`ValidationConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual flags are ignored.
fn config_from_cli(cli: &Cli) -> Result<ValidationConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }
    Ok(ValidationConfig::new(cli.types.iter().cloned(), cli.max_size))
}

/// Read the metadata a drop would expose for `path`.
fn describe(path: &Path) -> Result<FileDescriptor<PathBuf>, String> {
    let metadata =
        std::fs::metadata(path).map_err(|e| format!("Error reading {}: {e}", path.display()))?;
    if !metadata.is_file() {
        return Err(format!("{} is not a file", path.display()));
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(FileDescriptor::new(name, metadata.len(), path.to_path_buf()))
}

fn verdict(config: &ValidationConfig, file: FileDescriptor<PathBuf>) -> Verdict {
    let reason = config.check(&file.name, file.size_bytes);
    Verdict {
        path: file.raw,
        name: file.name,
        size_bytes: file.size_bytes,
        accepted: reason.is_none(),
        reason,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut verdicts = Vec::with_capacity(cli.files.len());
    let mut unreadable = false;
    for path in &cli.files {
        match describe(path) {
            Ok(file) => verdicts.push(verdict(&config, file)),
            Err(msg) => {
                eprintln!("{msg}");
                unreadable = true;
            }
        }
    }

    if cli.json {
        match serde_json::to_string_pretty(&verdicts) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing verdicts: {e}");
                return ExitCode::from(2);
            }
        }
    } else {
        for v in &verdicts {
            match v.reason {
                None => println!("accepted  {} ({} bytes)", v.path.display(), v.size_bytes),
                Some(reason) => println!("rejected  {}: {reason}", v.path.display()),
            }
        }
    }

    if unreadable {
        ExitCode::from(2)
    } else if verdicts.iter().all(|v| v.accepted) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("filedrop-check").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn flags_build_config() {
        let cli = parse(&["--types", "png,jpg", "--max-size", "1000", "a.png"]);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config, ValidationConfig::new(["png", "jpg"], Some(1000)));
    }

    #[test]
    fn no_flags_permit_all() {
        let cli = parse(&["a.bin"]);
        assert_eq!(
            config_from_cli(&cli).unwrap(),
            ValidationConfig::permit_all()
        );
    }

    #[test]
    fn config_json_overrides_flags() {
        let cli = parse(&[
            "--types",
            "png",
            "--config-json",
            r#"{"supportedFileTypes": ["pdf"]}"#,
            "a.pdf",
        ]);
        assert_eq!(
            config_from_cli(&cli).unwrap(),
            ValidationConfig::new(["pdf"], None)
        );
    }

    #[test]
    fn bad_config_json_is_reported() {
        let cli = parse(&["--config-json", "{", "a.pdf"]);
        assert!(config_from_cli(&cli).unwrap_err().contains("--config-json"));
    }

    #[test]
    fn files_are_required() {
        assert!(Cli::try_parse_from(["filedrop-check", "--types", "png"]).is_err());
    }

    #[test]
    fn verdict_records_reason() {
        let config = ValidationConfig::new(["png"], Some(10));
        let v = verdict(
            &config,
            FileDescriptor::new("big.png", 11, PathBuf::from("dir/big.png")),
        );
        assert!(!v.accepted);
        assert_eq!(v.reason, Some(RejectionReason::ExceedsMaxSize));
        assert_eq!(v.path, PathBuf::from("dir/big.png"));

        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["sizeBytes"], 11);
        assert_eq!(json["reason"], "ExceedsMaxSize");
    }

    #[test]
    fn describe_rejects_missing_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        assert!(describe(&dir.path().join("missing.png")).is_err());
        assert!(describe(dir.path()).unwrap_err().contains("not a file"));
    }

    #[test]
    fn describe_reads_name_and_size() {
        let mut sample = tempfile::Builder::new()
            .prefix("sample")
            .suffix(".PNG")
            .tempfile()
            .unwrap();
        std::io::Write::write_all(&mut sample, &[0_u8; 42]).unwrap();
        let file = describe(sample.path()).unwrap();

        assert!(file.name.starts_with("sample"));
        assert!(file.name.ends_with(".PNG"));
        assert_eq!(file.size_bytes, 42);
        assert_eq!(
            verdict(&ValidationConfig::new(["png"], None), file).reason,
            None
        );
    }
}
