mod module;

pub use module::{Module, NewModule};
