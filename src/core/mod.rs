//! Core data types and models

pub mod collection;
pub mod interval;
pub mod period;
pub mod predicates;
pub mod relation;
pub mod temporal;
pub mod timeline;

pub use collection::*;
pub use interval::*;
pub use period::*;
pub use relation::*;
pub use temporal::*;
pub use timeline::*;
