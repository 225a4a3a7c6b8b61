pub mod dispatch;
pub mod find_biomarker;
pub mod generate;
pub mod list;
pub mod serve;
pub mod shared;
pub mod show;
pub mod status;
