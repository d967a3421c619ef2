pub mod field;
pub mod submission;
pub mod value;
