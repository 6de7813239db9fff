use super::types::{ConfigFile, DurationValue};
use super::{ReportSettings, RunConfig, apply_config, load_config_file};
use clap::{CommandFactory, FromArgMatches};
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

use crate::args::RunArgs;
use crate::error::ValidationError;

fn parse_with_matches(raw: &[&str]) -> Result<(RunArgs, clap::ArgMatches), String> {
    let matches = RunArgs::command()
        .try_get_matches_from(raw)
        .map_err(|err| format!("parse failed: {}", err))?;
    let args =
        RunArgs::from_arg_matches(&matches).map_err(|err| format!("from matches failed: {}", err))?;
    Ok((args, matches))
}

#[test]
fn parse_toml_config() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("shex.toml");
    let content = r#"
url = "http://localhost:3000"
rps = 25
duration = 10
timeout = "15s"
max_in_flight = 200
csv_path = "out/results.csv"
"#;
    std::fs::write(&path, content).map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    if config.url.as_deref() != Some("http://localhost:3000") {
        return Err("Unexpected url".to_owned());
    }
    if config.rps != Some(25) || config.duration != Some(10) {
        return Err("Unexpected rps/duration".to_owned());
    }
    let timeout = config
        .timeout
        .as_ref()
        .ok_or_else(|| "Expected timeout".to_owned())?
        .to_duration()
        .map_err(|err| err.to_string())?;
    if timeout != Duration::from_secs(15) {
        return Err(format!("Unexpected timeout: {:?}", timeout));
    }
    if config.max_in_flight != Some(200) {
        return Err("Unexpected max_in_flight".to_owned());
    }
    Ok(())
}

#[test]
fn parse_json_config_with_numeric_timeout() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("shex.json");
    std::fs::write(
        &path,
        r#"{"url": "http://localhost:8080", "rps": 3, "timeout": 20, "no_csv": true}"#,
    )
    .map_err(|err| format!("write failed: {}", err))?;

    let config = load_config_file(&path).map_err(|err| err.to_string())?;
    match config.timeout {
        Some(DurationValue::Seconds(20)) => {}
        other => return Err(format!("Unexpected timeout: {:?}", other)),
    }
    if config.no_csv != Some(true) {
        return Err("Expected no_csv".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_extension_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("shex.yaml");
    std::fs::write(&path, "url: x").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected yaml config to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn unknown_field_is_rejected() -> Result<(), String> {
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let path = dir.path().join("shex.toml");
    std::fs::write(&path, "method = \"post\"\n").map_err(|err| format!("write failed: {}", err))?;
    if load_config_file(&path).is_ok() {
        return Err("Expected unknown field to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn cli_values_win_over_config() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["shex", "-u", "http://cli", "-n", "9"])?;
    let config = ConfigFile {
        url: Some("http://file".to_owned()),
        rps: Some(100),
        duration: Some(5),
        timeout: Some(DurationValue::Text("2s".to_owned())),
        ..ConfigFile::default()
    };

    apply_config(&mut args, &matches, &config).map_err(|err| err.to_string())?;

    if args.url.as_deref() != Some("http://cli") {
        return Err("CLI url should win".to_owned());
    }
    if args.rps != 9 {
        return Err("CLI rps should win".to_owned());
    }
    if args.duration != 5 {
        return Err("Config duration should apply".to_owned());
    }
    if args.request_timeout != Duration::from_secs(2) {
        return Err("Config timeout should apply".to_owned());
    }
    Ok(())
}

#[test]
fn invalid_config_timeout_is_reported() -> Result<(), String> {
    let (mut args, matches) = parse_with_matches(&["shex"])?;
    let config = ConfigFile {
        timeout: Some(DurationValue::Seconds(0)),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &config).is_ok() {
        return Err("Expected zero timeout to be rejected".to_owned());
    }
    Ok(())
}

#[test]
fn run_config_validation() -> Result<(), String> {
    let cases: [(&str, i64, i64, Option<usize>, fn(&ValidationError) -> bool); 6] = [
        ("  ", 1, 1, None, |err| {
            matches!(err, ValidationError::MissingUrl)
        }),
        ("http://x", 0, 1, None, |err| {
            matches!(err, ValidationError::RpsZero)
        }),
        ("http://x", 1, 0, None, |err| {
            matches!(err, ValidationError::DurationZero)
        }),
        ("http://x", -1, 1, None, |err| {
            matches!(err, ValidationError::RpsZero)
        }),
        ("http://x", 1, -5, None, |err| {
            matches!(err, ValidationError::DurationZero)
        }),
        ("http://x", 1, 1, Some(0), |err| {
            matches!(err, ValidationError::MaxInFlightZero)
        }),
    ];
    for (url, rps, duration, max_in_flight, expected) in cases {
        match RunConfig::new(url, rps, duration, max_in_flight) {
            Ok(config) => return Err(format!("Expected failure, got {:?}", config)),
            Err(err) if expected(&err) => {}
            Err(err) => return Err(format!("Unexpected error: {}", err)),
        }
    }
    Ok(())
}

#[test]
fn run_config_from_args() -> Result<(), String> {
    let (args, _) = parse_with_matches(&["shex", "-u", " http://localhost/ ", "-n", "4", "-d", "3"])?;
    let config = RunConfig::from_args(&args).map_err(|err| err.to_string())?;
    if config.url() != "http://localhost/" {
        return Err(format!("Unexpected url: {}", config.url()));
    }
    if config.total_requests() != 12 {
        return Err(format!("Unexpected total: {}", config.total_requests()));
    }
    if config.max_in_flight().is_some() {
        return Err("Expected unbounded admission".to_owned());
    }

    let (missing, _) = parse_with_matches(&["shex"])?;
    match RunConfig::from_args(&missing) {
        Err(ValidationError::MissingUrl) => Ok(()),
        other => Err(format!("Expected MissingUrl, got {:?}", other)),
    }
}

#[test]
fn report_settings_respect_no_csv() -> Result<(), String> {
    let (args, _) = parse_with_matches(&["shex", "-u", "http://x", "--csv-path", "a.csv"])?;
    let settings = ReportSettings::from(&args);
    if settings.csv_path != Some(PathBuf::from("a.csv")) {
        return Err("Expected csv path".to_owned());
    }

    let (disabled, _) = parse_with_matches(&["shex", "-u", "http://x", "--no-csv"])?;
    if ReportSettings::from(&disabled).csv_path.is_some() {
        return Err("Expected csv export disabled".to_owned());
    }
    Ok(())
}
