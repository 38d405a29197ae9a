pub mod bsn_file;
pub mod persons;

pub use bsn_file::BsnFileJob;
pub use persons::PersonsJob;
