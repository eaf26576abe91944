//! Common constants used throughout the foldergen application.

/// Key prefix marking a template entry as a folder node
pub const FOLDER_PREFIX: &str = "folder";

/// Template field holding the folder name pattern
pub const NAME_FIELD: &str = "name";

/// Template field holding the inclusion condition pattern
pub const CONDITION_FIELD: &str = "condition";

/// Settings file read on startup
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Default root under which folder trees are created
pub const DEFAULT_CREATION_DIRECTORY: &str = "./Test/";

/// Default location of the folder template
pub const DEFAULT_TEMPLATE_PATH: &str = "./template.yml";

/// Default location of the variables table
pub const DEFAULT_CSV_PATH: &str = "./variables.csv";

/// Default directory for per-run log files
pub const DEFAULT_LOG_DIR: &str = "./.logs";

/// Template written when none exists yet
pub const DEFAULT_TEMPLATE: &str = r#"folder1:
  name: $(foldername=customer)
  folder1:
    name: Documentations
    folder1:
      name: WIP
  folder2:
    name: Releases
    condition: $(condition=release)
"#;
