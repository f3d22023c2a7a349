//! Tests for CLI argument parsing

use super::*;
use crate::storage::bundle::{ArtifactName, VersionId};
use std::path::PathBuf;

fn v(token: &str) -> VersionId {
    VersionId::parse(token).unwrap()
}

#[test]
fn test_parse_versions_command() {
    let cli = parse_args(["sentimiento", "versions"]).unwrap();
    match cli.command {
        Command::Versions(args) => assert_eq!(args.format, OutputFormat::Text),
        _ => panic!("Expected Versions command"),
    }
}

#[test]
fn test_parse_versions_json() {
    let cli = parse_args(["sentimiento", "versions", "--format", "JSON"]).unwrap();
    match cli.command {
        Command::Versions(args) => assert_eq!(args.format, OutputFormat::Json),
        _ => panic!("Expected Versions command"),
    }
}

#[test]
fn test_parse_show_version() {
    let cli = parse_args(["sentimiento", "show", "20240101-000000"]).unwrap();
    match cli.command {
        Command::Show(args) => {
            assert_eq!(args.version, Some(v("20240101-000000")));
            assert!(!args.legacy);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn test_parse_show_legacy() {
    let cli = parse_args(["sentimiento", "show", "--legacy"]).unwrap();
    match cli.command {
        Command::Show(args) => {
            assert!(args.legacy);
            assert_eq!(args.version, None);
        }
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn test_show_requires_version_or_legacy() {
    assert!(parse_args(["sentimiento", "show"]).is_err());
    assert!(parse_args(["sentimiento", "show", "v1", "--legacy"]).is_err());
}

#[test]
fn test_show_rejects_invalid_version() {
    assert!(parse_args(["sentimiento", "show", "a/b"]).is_err());
}

#[test]
fn test_parse_compare_defaults() {
    let cli = parse_args(["sentimiento", "compare"]).unwrap();
    match cli.command {
        Command::Compare(args) => {
            assert_eq!(args.a, None);
            assert_eq!(args.b, None);
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_parse_compare_pair() {
    let cli = parse_args(["sentimiento", "compare", "v2", "v1"]).unwrap();
    match cli.command {
        Command::Compare(args) => {
            assert_eq!(args.a, Some(v("v2")));
            assert_eq!(args.b, Some(v("v1")));
        }
        _ => panic!("Expected Compare command"),
    }
}

#[test]
fn test_parse_publish() {
    let cli = parse_args([
        "sentimiento",
        "publish",
        "--model",
        "model.joblib",
        "--vectorizer",
        "vectorizer.joblib",
        "--metrics",
        "metrics.json",
        "--confusion-image",
        "confusion_matrix.png",
    ])
    .unwrap();

    match cli.command {
        Command::Publish(args) => {
            assert_eq!(args.model, PathBuf::from("model.joblib"));
            assert_eq!(args.confusion_image, PathBuf::from("confusion_matrix.png"));
            assert_eq!(args.version, None);
        }
        _ => panic!("Expected Publish command"),
    }
}

#[test]
fn test_publish_requires_all_artifacts() {
    let result = parse_args(["sentimiento", "publish", "--model", "model.joblib"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_fetch() {
    let cli =
        parse_args(["sentimiento", "fetch", "v1", "confusion_image", "--output", "out.png"]).unwrap();
    match cli.command {
        Command::Fetch(args) => {
            assert_eq!(args.version, v("v1"));
            assert_eq!(args.artifact, ArtifactName::ConfusionImage);
            assert_eq!(args.output, PathBuf::from("out.png"));
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn test_fetch_rejects_unknown_artifact() {
    let result = parse_args(["sentimiento", "fetch", "v1", "weights", "--output", "out"]);
    assert!(result.is_err());
}

#[test]
fn test_global_store_flags() {
    let cli = parse_args([
        "sentimiento",
        "versions",
        "--bucket",
        "models",
        "--region",
        "eu-west-1",
        "--endpoint",
        "http://localhost:9000",
        "--no-cache",
    ])
    .unwrap();

    let overrides = cli.store_overrides();
    assert_eq!(overrides.bucket.as_deref(), Some("models"));
    assert_eq!(overrides.region.as_deref(), Some("eu-west-1"));
    assert_eq!(overrides.endpoint.as_deref(), Some("http://localhost:9000"));
    assert!(overrides.no_cache);
    assert_eq!(overrides.local, None);
}

#[test]
fn test_local_conflicts_with_bucket() {
    let result = parse_args(["sentimiento", "--bucket", "b", "--local", "./store", "versions"]);
    assert!(result.is_err());
}

#[test]
fn test_verbose_and_quiet_flags() {
    let cli = parse_args(["sentimiento", "-v", "versions"]).unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = parse_args(["sentimiento", "--quiet", "versions"]).unwrap();
    assert!(!cli.verbose);
    assert!(cli.quiet);
}

#[test]
fn test_unknown_command() {
    assert!(parse_args(["sentimiento", "train"]).is_err());
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_show_accepts_version_tokens(token in "[0-9]{8}-[0-9]{6}") {
            let cli = parse_args(["sentimiento", "show", &token]).unwrap();
            match cli.command {
                Command::Show(args) => {
                    let version = args.version.unwrap();
                    prop_assert_eq!(version.as_str(), token.as_str());
                }
                _ => prop_assert!(false, "Expected Show command"),
            }
        }

        #[test]
        fn prop_output_format_case_insensitive(
            format in prop::sample::select(vec!["text", "TEXT", "Text", "json", "JSON", "Json"])
        ) {
            prop_assert!(format.parse::<OutputFormat>().is_ok());
        }
    }
}
