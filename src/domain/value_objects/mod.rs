mod module_id;

pub use module_id::ModuleId;
