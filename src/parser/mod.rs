mod barrel;
mod imports;

pub use barrel::is_pure_reexport;
pub use imports::extract_import_paths;
