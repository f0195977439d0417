pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use self::core::{
    array_list::CustomArrayList,
    linked_list::CustomLinkedList,
    report::{ReportFormat, ReportWriter, ScenarioReport},
    scenario::{cross_check, ScenarioPlan, ScenarioRunner},
};
pub use domain::model::{ErrorPolicy, Item, ListKind, Operation, OperationOutcome, SortOrder};
pub use domain::ports::{CustomList, Storage};
pub use utils::error::{ListError, Result};
