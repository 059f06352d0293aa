//! Tests for the command-line front end

use chrono::{TimeZone, Utc};
use clap::Parser;

use core_kernel::Currency;
use domain_schedule::{ScheduleError, ScheduleRequest, TermType};
use interface_cli::config::{CliConfig, OutputFormat};
use interface_cli::dto::{DocumentError, RequestDocument};
use interface_cli::output::{render, render_table};
use interface_cli::{input, run, schedule_from_json, Args};

const INSTALLMENTS_REQUEST: &str = r#"{
    "terms": "installments",
    "amountInCents": 3001,
    "feePercentage": 5,
    "durationDays": 60,
    "startDate": "2022-01-10T00:00:00Z",
    "currency": "USD"
}"#;

mod request_parsing {
    use super::*;

    #[test]
    fn test_installments_document() {
        let schedule = schedule_from_json(INSTALLMENTS_REQUEST, None).unwrap();
        let amounts: Vec<i64> = schedule.iter().map(|p| p.amount_in_cents).collect();

        assert_eq!(amounts, vec![1050, 1050, 1052]);
    }

    #[test]
    fn test_start_override_replaces_document_date() {
        let start = Utc.with_ymd_and_hms(2022, 1, 12, 0, 0, 0).unwrap();
        let raw = r#"{"terms": "net", "amountInCents": 3000, "feePercentage": 5,
                      "durationDays": 45, "currency": "USD"}"#;

        let schedule = schedule_from_json(raw, Some(start)).unwrap();
        assert_eq!(
            schedule.final_payment().unwrap().date,
            Utc.with_ymd_and_hms(2022, 2, 28, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_start_date() {
        let raw = r#"{"terms": "net", "amountInCents": 3000}"#;
        let err = schedule_from_json(raw, None).unwrap_err();

        assert_eq!(err.downcast_ref::<DocumentError>(), Some(&DocumentError::MissingStartDate));
    }

    #[test]
    fn test_empty_document_rejected_by_validation() {
        let err = schedule_from_json(r#"{"startDate": "2022-01-10T00:00:00Z"}"#, None).unwrap_err();

        assert_eq!(err.downcast_ref::<ScheduleError>(), Some(&ScheduleError::MissingTermType));
    }

    #[test]
    fn test_absent_amount_defaults_to_zero() {
        let raw = r#"{"terms": "net", "startDate": "2022-01-10T00:00:00Z"}"#;
        let err = schedule_from_json(raw, None).unwrap_err();

        assert_eq!(err.to_string(), "amount to charge must be greater than 0");
    }

    #[test]
    fn test_absent_currency_rejected() {
        let raw = r#"{"terms": "net", "amountInCents": 100, "feePercentage": 1,
                      "durationDays": 3, "startDate": "2022-01-10T00:00:00Z"}"#;
        let err = schedule_from_json(raw, None).unwrap_err();

        assert_eq!(err.to_string(), "currency must be specified");
    }

    #[test]
    fn test_document_into_request() {
        let document: RequestDocument = serde_json::from_str(INSTALLMENTS_REQUEST).unwrap();
        let request = document.into_request(None).unwrap();

        assert_eq!(
            request,
            ScheduleRequest::new(
                TermType::Installments,
                3001,
                5,
                60,
                Utc.with_ymd_and_hms(2022, 1, 10, 0, 0, 0).unwrap(),
                Currency::USD,
            )
        );
    }

    #[test]
    fn test_unknown_terms_rejected_by_validation() {
        for terms in [r#""""#, r#""weekly""#, "null"] {
            let raw = format!(
                r#"{{"terms": {terms}, "amountInCents": 3000, "feePercentage": 5,
                    "durationDays": 60, "startDate": "2022-01-10T00:00:00Z", "currency": "USD"}}"#
            );
            let err = schedule_from_json(&raw, None).unwrap_err();

            assert_eq!(err.downcast_ref::<ScheduleError>(), Some(&ScheduleError::MissingTermType));
        }
    }

    #[test]
    fn test_absent_terms_field() {
        let raw = r#"{"amountInCents": 3000, "feePercentage": 5, "durationDays": 60,
                      "startDate": "2022-01-10T00:00:00Z", "currency": "USD"}"#;
        let document: RequestDocument = serde_json::from_str(raw).unwrap();

        assert_eq!(document.terms, None);
    }

    #[test]
    fn test_fee_beyond_32_bits_rejected_by_validation() {
        let raw = r#"{"terms": "net", "amountInCents": 3000, "feePercentage": 3000000000,
                      "durationDays": 60, "startDate": "2022-01-10T00:00:00Z", "currency": "USD"}"#;
        let err = schedule_from_json(raw, None).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ScheduleError>(),
            Some(&ScheduleError::FeeOutOfRange { fee_percentage: 3_000_000_000 })
        );
        assert_eq!(err.to_string(), "fee (in percent) must be an amount between 0 and 100");
    }

    #[test]
    fn test_malformed_json() {
        let err = schedule_from_json("{not json", None).unwrap_err();

        assert!(err.to_string().contains("Failed to parse schedule request"));
        assert!(err.downcast_ref::<ScheduleError>().is_none());
    }
}

mod rendering {
    use super::*;

    fn cells(table: &str) -> Vec<Vec<String>> {
        table
            .lines()
            .filter(|line| line.contains('|'))
            .map(|line| line.split('|').map(|cell| cell.trim().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_table_rows() {
        let schedule = schedule_from_json(INSTALLMENTS_REQUEST, None).unwrap();
        let rows = cells(&render_table(&schedule));

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["#", "DATE", "AMOUNT", "CURRENCY"]);
        assert_eq!(rows[1], vec!["1", "2022-01-10", "10.50", "USD"]);
        assert_eq!(rows[2], vec!["2", "2022-02-09", "10.50", "USD"]);
        assert_eq!(rows[3], vec!["3", "2022-03-11", "10.52", "USD"]);
    }

    #[test]
    fn test_table_has_no_trailing_newline() {
        let schedule = schedule_from_json(INSTALLMENTS_REQUEST, None).unwrap();
        let table = render(OutputFormat::Table, &schedule).unwrap();

        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_json_output_is_array() {
        let schedule = schedule_from_json(INSTALLMENTS_REQUEST, None).unwrap();
        let rendered = render(OutputFormat::Json, &schedule).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert_eq!(value[2]["amountInCents"], 1052);
        assert_eq!(value[2]["date"], "2022-03-11T00:00:00Z");
    }
}

mod command_line {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "payment-schedule",
            "--input",
            "request.json",
            "--output",
            "table",
            "--start-now",
        ])
        .unwrap();

        assert_eq!(args.input.as_deref(), Some(std::path::Path::new("request.json")));
        assert_eq!(args.output, Some(OutputFormat::Table));
        assert!(args.start_now);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["payment-schedule"]).unwrap();

        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(!args.start_now);
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        assert!(Args::try_parse_from(["payment-schedule", "--output", "xml"]).is_err());
    }

    #[test]
    fn test_run_reads_input_file() {
        let path = std::env::temp_dir().join(format!("schedule-request-{}.json", std::process::id()));
        std::fs::write(&path, INSTALLMENTS_REQUEST).unwrap();

        let args = Args {
            input: Some(path.clone()),
            output: Some(OutputFormat::Table),
            start_now: false,
        };
        let rendered = run(&args, &CliConfig::default()).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(rendered.contains("2022-03-11"));
        assert!(rendered.contains("10.52"));
    }

    #[test]
    fn test_missing_input_file() {
        let path = std::env::temp_dir().join("definitely-not-a-schedule-request.json");
        assert!(input::read_file(&path).is_err());
    }
}

mod configuration {
    use super::*;

    fn environment(vars: &[(&str, &str)]) -> config::Environment {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        config::Environment::with_prefix("SCHEDULE").source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_environment_overrides() {
        let config = CliConfig::from_environment(environment(&[
            ("SCHEDULE_LOG_LEVEL", "debug"),
            ("SCHEDULE_OUTPUT", "table"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn test_invalid_output_format() {
        let result = CliConfig::from_environment(environment(&[("SCHEDULE_OUTPUT", "xml")]));
        assert!(result.is_err());
    }
}
