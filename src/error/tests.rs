//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_rusqlite_error_becomes_data_unavailable() {
    let db_error = rusqlite::Error::InvalidColumnType(
        0,
        "Gls".to_string(),
        rusqlite::types::Type::Null,
    );
    let error = InsightsError::from(db_error);

    match error {
        InsightsError::DataUnavailable(_) => (),
        _ => panic!("Expected DataUnavailable error variant"),
    }
}

#[test]
fn test_unavailable_error_mentions_path() {
    let error = InsightsError::Unavailable {
        path: PathBuf::from("/nowhere/football.sqlite"),
        source: rusqlite::Error::InvalidQuery,
    };

    let error_string = error.to_string();
    assert!(error_string.contains("Database unavailable"));
    assert!(error_string.contains("/nowhere/football.sqlite"));
}

#[test]
fn test_missing_table_error() {
    let error = InsightsError::MissingTable {
        table: "match_result".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Database is missing required table: match_result"
    );
}

#[test]
fn test_missing_database_path_error() {
    let error = InsightsError::MissingDatabasePath {
        env_var: "PL_INSIGHTS_DB".to_string(),
    };
    assert!(error.to_string().contains("PL_INSIGHTS_DB"));
}

#[test]
fn test_invalid_limit_error() {
    let error = InsightsError::InvalidLimit {
        value: "ten".to_string(),
    };
    assert_eq!(error.to_string(), "Invalid row limit: ten");
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let error = InsightsError::from(io_error);

    match error {
        InsightsError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let error = InsightsError::from(json_error);

    match error {
        InsightsError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_error_source_chain() {
    let error = InsightsError::Unavailable {
        path: PathBuf::from("football.sqlite"),
        source: rusqlite::Error::InvalidQuery,
    };

    let error_trait: &dyn std::error::Error = &error;
    assert!(error_trait.source().is_some());
}
