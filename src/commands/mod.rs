pub mod completions;
pub mod doctor;
pub mod list;
pub mod show;
pub mod sync;
pub mod validate;
