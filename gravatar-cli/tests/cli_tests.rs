use clap::Parser;
use gravatar::{Protocol, Rating};
use gravatar_cli::Args;
use pretty_assertions::assert_eq;
use std::io::Write;

const EXAMPLE_URL: &str = "://s.gravatar.com/avatar/23463b99b62a72f26ed677cc556c44e8";

fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("gravatar-url").chain(argv.iter().copied())).unwrap()
}

#[test]
fn email_only() {
    let args = parse(&["example@example.com"]);
    assert_eq!(args.url().unwrap(), EXAMPLE_URL);
}

#[test]
fn all_flags() {
    let args = parse(&[
        "example@example.com",
        "--protocol",
        "https",
        "--size",
        "80",
        "--rating",
        "pg",
        "--default",
        "404",
    ]);
    assert_eq!(args.protocol, Some(Protocol::Https));
    assert_eq!(args.rating, Some(Rating::Pg));
    assert_eq!(args.url().unwrap(), format!("https{EXAMPLE_URL}?s=80&r=pg&d=404"));
}

#[test]
fn short_flags() {
    let args = parse(&["example@example.com", "-p", "http", "-s", "16"]);
    assert_eq!(args.url().unwrap(), format!("http{EXAMPLE_URL}?s=16"));
}

#[test]
fn default_url_flag_is_encoded() {
    let args = parse(&["example@example.com", "-d", "http://some.url/a.png"]);
    assert_eq!(
        args.url().unwrap(),
        format!("{EXAMPLE_URL}?d=http%3A%2F%2Fsome.url%2Fa.png")
    );
}

#[test]
fn unknown_rating_is_rejected_by_parser() {
    let result = Args::try_parse_from(["gravatar-url", "a@b.c", "--rating", "nc17"]);
    assert!(result.is_err());
}

#[test]
fn out_of_range_size_fails() {
    let args = parse(&["example@example.com", "--size", "0"]);
    let err = args.url().unwrap_err();
    assert!(format!("{err:#}").contains("size"));
}

#[test]
fn bad_charset_fails() {
    let args = parse(&["example@example.com", "--charset", "utf-8"]);
    assert!(args.url().is_err());
}

#[test]
fn flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"protocol": "https", "size": 80, "rating": "x"}}"#).unwrap();
    let path = file.path().to_str().unwrap();

    let args = parse(&["example@example.com", "--config", path, "--size", "120"]);
    assert_eq!(
        args.url().unwrap(),
        format!("https{EXAMPLE_URL}?s=120&r=x")
    );
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let args = parse(&["example@example.com", "-c", missing.to_str().unwrap()]);
    let err = args.url().unwrap_err();
    assert!(format!("{err:#}").contains("nope.json"));
}

#[test]
fn default_flag_accepts_builtin_code_in_any_case() {
    let args = parse(&["example@example.com", "-d", "IdentIcon"]);
    let gravatar = args.gravatar().unwrap();
    assert_eq!(gravatar.parameters().collect::<Vec<_>>(), vec![("d", "identicon")]);
}
