pub mod access;
pub mod catalog;
pub mod executor;
pub mod inspect;
pub mod output;
pub mod predicate;
pub mod reader;
pub mod table;
