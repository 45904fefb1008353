//! Tests for configuration file loading

use epflags::config::{ConfigError, ConfigFile};

mod parse {
    use super::*;

    #[test]
    fn empty_document_is_an_empty_configuration() {
        let config = ConfigFile::parse("").unwrap();
        let args = config.into_options().render().unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn full_document_maps_onto_the_model() {
        let config = ConfigFile::parse(
            r#"
            disable_warnings_in_generated_code = true
            ignore_unknown_check_names = true
            excluded_paths = ".*/build/generated/.*"

            extra_args = ["-XepPatchLocation:IN_PLACE"]

            [checks]
            NullAway = "error"
            BetaApi = "off"
            ArrayEquals = "default"

            [check_options]
            "NullAway:AnnotatedPackages" = "com.example"
            "#,
        )
        .unwrap();

        let args = config.into_options().render().unwrap();
        assert_eq!(
            args,
            vec![
                "-XepDisableWarningsInGeneratedCode",
                "-XepIgnoreUnknownCheckNames",
                "-XepExcludedPaths:.*/build/generated/.*",
                "-Xep:NullAway:ERROR",
                "-Xep:BetaApi:OFF",
                "-Xep:ArrayEquals",
                "-XepOpt:NullAway:AnnotatedPackages=com.example",
                "-XepPatchLocation:IN_PLACE",
            ]
        );
    }

    #[test]
    fn checks_keep_document_order() {
        let config = ConfigFile::parse(
            r#"
            [checks]
            Zebra = "warn"
            Alpha = "warn"
            Middle = "warn"
            "#,
        )
        .unwrap();

        let names: Vec<&String> = config.checks.keys().collect();
        assert_eq!(names, ["Zebra", "Alpha", "Middle"]);
    }

    #[test]
    fn unknown_severity_fails_to_parse() {
        let result = ConfigFile::parse(
            r#"
            [checks]
            NullAway = "fatal"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn severities_are_lowercase_strings() {
        let result = ConfigFile::parse(
            r#"
            [checks]
            NullAway = "ERROR"
            "#,
        );
        assert!(result.is_err());
    }
}

mod load {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn reads_a_file_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errorprone.toml");
        fs::write(&path, "disable_all_checks = true\n").unwrap();

        let config = ConfigFile::load(&path).unwrap();
        let args = config.into_options().render().unwrap();
        assert_eq!(args, vec!["-XepDisableAllChecks"]);
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn invalid_toml_reports_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("errorprone.toml");
        fs::write(&path, "checks = not toml").unwrap();

        assert!(matches!(
            ConfigFile::load(&path).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }
}

mod into_options {
    use epflags::options::CheckSeverity;

    use super::*;

    #[test]
    fn moves_every_field_across() {
        let config = ConfigFile::parse(
            r#"
            disable_all_checks = true
            all_errors_as_warnings = true
            all_disabled_checks_as_warnings = true
            disable_warnings_in_generated_code = true
            ignore_unknown_check_names = true
            compiling_test_only_code = true
            excluded_paths = "pattern"
            extra_args = ["-a", "-b"]

            [checks]
            NullAway = "warn"
            "#,
        )
        .unwrap();

        let opts = config.into_options();
        assert!(opts.disable_all_checks);
        assert!(opts.all_errors_as_warnings);
        assert!(opts.all_disabled_checks_as_warnings);
        assert!(opts.disable_warnings_in_generated_code);
        assert!(opts.ignore_unknown_check_names);
        assert!(opts.compiling_test_only_code);
        assert_eq!(opts.excluded_paths.as_deref(), Some("pattern"));
        assert_eq!(opts.checks.get("NullAway"), Some(&CheckSeverity::Warn));
        assert_eq!(opts.extra_args, ["-a", "-b"]);
        assert!(opts.argument_providers.is_empty());
    }

    #[test]
    fn invalid_values_surface_at_render_time() {
        // The file layer does not validate flag content; the model does.
        let config = ConfigFile::parse(r#"excluded_paths = "a b""#).unwrap();
        assert!(config.into_options().render().is_err());
    }
}
