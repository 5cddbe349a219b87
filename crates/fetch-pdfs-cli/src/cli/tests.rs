use super::*;
use std::fs;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_defaults() {
    let cli = parse(&["fetch_pdfs"]);
    assert!(!cli.rewrite);
    assert_eq!(cli.root, Path::new("."));
    assert!(cli.config.is_none());
    assert!(!cli.verbose);
}

#[test]
fn cli_parse_verbose() {
    assert!(parse(&["fetch_pdfs", "-v"]).verbose);
    assert!(parse(&["fetch_pdfs", "--verbose", "--rewrite"]).verbose);
}

#[test]
fn cli_parse_rewrite() {
    let cli = parse(&["fetch_pdfs", "--rewrite"]);
    assert!(cli.rewrite);
}

#[test]
fn cli_parse_root_and_config() {
    let cli = parse(&[
        "fetch_pdfs",
        "--root",
        "/srv/site",
        "--config",
        "/etc/fetch-pdfs.toml",
    ]);
    assert_eq!(cli.root, Path::new("/srv/site"));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/fetch-pdfs.toml")));
}

#[test]
fn cli_rejects_subcommands_and_unknown_flags() {
    assert!(Cli::try_parse_from(["fetch_pdfs", "run"]).is_err());
    assert!(Cli::try_parse_from(["fetch_pdfs", "--force"]).is_err());
}

#[test]
fn execute_empty_site_exits_zero() {
    let site = tempfile::tempdir().unwrap();
    fs::write(site.path().join("index.html"), "<p>hello</p>").unwrap();
    let cfg = site.path().join("fetch-pdfs.toml");
    fs::write(&cfg, "timeout_secs = 5\n").unwrap();

    let cli = Cli {
        rewrite: false,
        root: site.path().to_path_buf(),
        config: Some(cfg),
        verbose: false,
    };
    assert_eq!(cli.execute().unwrap(), 0);
}

#[test]
fn execute_missing_root_is_error() {
    let site = tempfile::tempdir().unwrap();
    let cfg = site.path().join("fetch-pdfs.toml");
    fs::write(&cfg, "").unwrap();
    let cli = Cli {
        rewrite: true,
        root: site.path().join("missing"),
        config: Some(cfg),
        verbose: false,
    };
    let err = cli.execute().unwrap_err();
    assert!(format!("{:#}", err).contains("site root"));
}

#[test]
fn execute_bad_config_is_error() {
    let site = tempfile::tempdir().unwrap();
    let cfg = site.path().join("fetch-pdfs.toml");
    fs::write(&cfg, "timeout_secs = [").unwrap();
    let cli = Cli {
        rewrite: false,
        root: site.path().to_path_buf(),
        config: Some(cfg),
        verbose: false,
    };
    assert!(cli.execute().is_err());
}
