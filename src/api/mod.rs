pub mod compare;
pub mod error;
pub mod history;
