mod common;

use common::row;
use foldergen::condition::{evaluate, is_truthy, Inclusion};
use foldergen::placeholder::Pattern;

#[test]
fn test_truthy_values() {
    for value in ["true", "TRUE", "True", "tRuE", "1"] {
        assert!(is_truthy(value), "'{value}' should be truthy");
    }
    for value in ["false", "FALSE", "0", "", "yes", "on", " true", "01"] {
        assert!(!is_truthy(value), "'{value}' should not be truthy");
    }
}

#[test]
fn test_no_condition_is_included() {
    assert_eq!(evaluate(None, &row(&[])).unwrap(), Inclusion::Included);
}

#[test]
fn test_condition_from_row() {
    let condition = Pattern::parse("$(condition=release)").unwrap();

    assert_eq!(
        evaluate(Some(&condition), &row(&[("release", "TRUE")])).unwrap(),
        Inclusion::Included
    );
    assert_eq!(
        evaluate(Some(&condition), &row(&[("release", "1")])).unwrap(),
        Inclusion::Included
    );
    assert_eq!(
        evaluate(Some(&condition), &row(&[("release", "false")])).unwrap(),
        Inclusion::Excluded("false".to_string())
    );
    assert_eq!(
        evaluate(Some(&condition), &row(&[("release", "")])).unwrap(),
        Inclusion::Excluded(String::new())
    );
}

#[test]
fn test_condition_with_missing_variable() {
    let condition = Pattern::parse("$(condition=release)").unwrap();

    assert_eq!(
        evaluate(Some(&condition), &row(&[("customer", "Acme")])).unwrap(),
        Inclusion::Missing(vec!["release".to_string()])
    );
}

#[test]
fn test_literal_condition() {
    let condition = Pattern::parse("True").unwrap();
    assert_eq!(evaluate(Some(&condition), &row(&[])).unwrap(), Inclusion::Included);
}
