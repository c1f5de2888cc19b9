//! Command-line parsing, configuration layering and command execution

use clap::Parser;
use gopherdoc::{
    cli::{Args, Command},
    config::{load_config_with_env_prefix, CliArgs},
    models::config::OutputFormat,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from(["gopherdoc"]);
    assert_eq!(args.path, None);
    assert!(args.exclude.is_empty());
    assert_eq!(args.format, None);
    assert!(!args.quiet);
    assert!(!args.include_private);

    let args = Args::parse_from([
        "gopherdoc",
        "--path",
        "/test/path",
        "--exclude",
        "mocks",
        "--max-depth",
        "5",
        "--format",
        "json",
        "--output-dir",
        "site",
        "--quiet",
        "--no-parallel",
    ]);
    assert_eq!(args.path, Some(PathBuf::from("/test/path")));
    assert_eq!(args.exclude, vec!["mocks".to_string()]);
    assert_eq!(args.max_depth, Some(5));
    assert_eq!(args.output_dir, Some(PathBuf::from("site")));
    assert!(args.quiet);
    assert!(args.no_parallel);
}

#[test]
fn test_cli_invalid_format() {
    assert!(Args::try_parse_from(["gopherdoc", "--format", "csv"]).is_err());
}

#[test]
fn test_cli_overrides_config_file() {
    let scan = TempDir::new().unwrap();
    let config_path = scan.path().join("gopherdoc.toml");
    fs::write(
        &config_path,
        "output_format = \"json\"\ninclude_private = true\nmax_depth = 2\n",
    )
    .unwrap();

    let args = Args::parse_from([
        "gopherdoc",
        "--path",
        scan.path().to_str().unwrap(),
        "--config",
        config_path.to_str().unwrap(),
        "--format",
        "markdown",
    ]);
    let settings = load_config_with_env_prefix(CliArgs::from(&args), "GOPHERDOC_CLI_TEST").unwrap();

    assert_eq!(settings.scan_path, scan.path().to_path_buf());
    assert_eq!(settings.output_format, OutputFormat::Markdown);
    assert!(settings.include_private);
    assert_eq!(settings.max_depth, Some(2));
}

#[test]
fn test_generate_command_end_to_end() {
    let scan = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::create_dir_all(scan.path().join("greet")).unwrap();
    fs::write(
        scan.path().join("greet/greet.go"),
        "// Package greet says hello.\npackage greet\n\n// Hello greets name.\nfunc Hello(name string) string { return name }\n",
    )
    .unwrap();
    fs::write(scan.path().join(".gopherdoc.toml"), "output_format = \"json\"\n").unwrap();

    let args = Args::parse_from([
        "gopherdoc",
        "-p",
        scan.path().to_str().unwrap(),
        "-c",
        scan.path().join(".gopherdoc.toml").to_str().unwrap(),
        "-o",
        out.path().to_str().unwrap(),
        "--quiet",
        "--no-progress",
    ]);

    let command = Command::from_args(args);
    let report = command.execute().unwrap().unwrap();
    assert_eq!(report.packages.len(), 1);
    assert!(report.errors.is_empty());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("greet.json")).unwrap()).unwrap();
    assert_eq!(json["functions"][0]["signature"], "func Hello(name string) string");

    assert_eq!(command.run(), 0);
}

#[test]
fn test_failed_package_sets_exit_code() {
    let scan = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(scan.path().join("bad.go"), "package bad\n\nfunc (\n").unwrap();

    let args = Args::parse_from([
        "gopherdoc",
        "-p",
        scan.path().to_str().unwrap(),
        "-o",
        out.path().to_str().unwrap(),
        "-c",
        "/no/such/file.toml",
    ]);
    assert_eq!(Command::from_args(args).run(), 2);

    fs::write(scan.path().join("cfg.toml"), "quiet = true\nshow_progress = false\n").unwrap();
    let args = Args::parse_from([
        "gopherdoc",
        "-p",
        scan.path().to_str().unwrap(),
        "-o",
        out.path().to_str().unwrap(),
        "-c",
        scan.path().join("cfg.toml").to_str().unwrap(),
    ]);
    assert_eq!(Command::from_args(args).run(), 1);
}
