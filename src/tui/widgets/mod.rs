pub mod notes;
pub mod topics;
