mod common;

use common::{dirs_under, Recorded, RecordingReporter};
use foldergen::config::Settings;
use foldergen::constants::DEFAULT_TEMPLATE;
use foldergen::processor::run;
use std::time::{Duration, Instant};
use tempfile::TempDir;

fn settings_in(temp_dir: &TempDir) -> Settings {
    Settings {
        creation_directory: temp_dir.path().join("out"),
        template_path: temp_dir.path().join("conf").join("template.yml"),
        csv_path: temp_dir.path().join("conf").join("variables.csv"),
    }
}

#[test]
fn test_first_run_bootstraps_files() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);

    let reporter = RecordingReporter::default();
    let summary = run(&settings, &reporter, Instant::now()).unwrap();

    assert_eq!(summary.rows, 0);
    assert_eq!(summary.folders_created, 0);
    assert_eq!(
        reporter.events(),
        vec![Recorded::SchemaCreated(settings.csv_path.clone(), 2), Recorded::Finished(0)]
    );
    assert_eq!(std::fs::read_to_string(&settings.template_path).unwrap(), DEFAULT_TEMPLATE);
    assert_eq!(std::fs::read_to_string(&settings.csv_path).unwrap(), "customer,release\n");
}

#[test]
fn test_run_expands_every_row() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    std::fs::create_dir_all(temp_dir.path().join("conf")).unwrap();
    std::fs::write(&settings.template_path, DEFAULT_TEMPLATE).unwrap();
    std::fs::write(&settings.csv_path, "customer,release\nAcme,true\nGlobex,false\n").unwrap();

    let summary = run(&settings, &RecordingReporter::default(), Instant::now()).unwrap();

    assert_eq!(summary.rows, 2);
    assert_eq!(summary.folders_created, 7);
    assert!(settings.creation_directory.join("Acme").join("Releases").is_dir());
    assert!(!settings.creation_directory.join("Globex").join("Releases").exists());

    let again = run(&settings, &RecordingReporter::default(), Instant::now()).unwrap();
    assert_eq!(again.folders_created, 0);
}

#[test]
fn test_run_with_missing_column() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    std::fs::create_dir_all(temp_dir.path().join("conf")).unwrap();
    std::fs::write(&settings.template_path, DEFAULT_TEMPLATE).unwrap();
    std::fs::write(&settings.csv_path, "customer\nAcme\n").unwrap();
    let reporter = RecordingReporter::default();

    let summary = run(&settings, &reporter, Instant::now()).unwrap();

    assert_eq!(summary.folders_created, 3);
    assert_eq!(
        dirs_under(&settings.creation_directory),
        vec!["Acme", "Acme/Documentations", "Acme/Documentations/WIP"]
    );
    assert_eq!(reporter.missing(), vec![vec!["release".to_string()]]);

    let events = reporter.events();
    assert_eq!(events[0], Recorded::RowsLoaded(1, 1));
    assert_eq!(events[1], Recorded::MissingColumns(vec!["release".to_string()]));
    assert_eq!(events.last(), Some(&Recorded::Finished(3)));
}

#[test]
fn test_run_reports_extra_columns() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    std::fs::create_dir_all(temp_dir.path().join("conf")).unwrap();
    std::fs::write(&settings.template_path, DEFAULT_TEMPLATE).unwrap();
    std::fs::write(&settings.csv_path, "customer,release,region
Acme,0,EU
").unwrap();
    let reporter = RecordingReporter::default();

    run(&settings, &reporter, Instant::now()).unwrap();

    let events = reporter.events();
    assert!(events.contains(&Recorded::ExtraColumns(vec!["region".to_string()])));
    assert!(!events.iter().any(|event| matches!(event, Recorded::MissingColumns(_))));
}

#[test]
fn test_elapsed_counts_from_given_start() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    let started = Instant::now();
    std::thread::sleep(Duration::from_millis(20));

    let summary = run(&settings, &RecordingReporter::default(), started).unwrap();

    assert!(summary.elapsed >= Duration::from_millis(20));
}

#[test]
fn test_invalid_template_aborts_run() {
    let temp_dir = TempDir::new().unwrap();
    let settings = settings_in(&temp_dir);
    std::fs::create_dir_all(temp_dir.path().join("conf")).unwrap();
    std::fs::write(&settings.template_path, "folder1:\n  name: $(nope=customer)\n").unwrap();

    assert!(run(&settings, &RecordingReporter::default(), Instant::now()).is_err());
    assert!(!settings.creation_directory.exists());
}
