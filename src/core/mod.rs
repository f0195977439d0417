pub mod array_list;
pub mod linked_list;
pub mod report;
pub mod scenario;
