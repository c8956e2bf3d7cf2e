//! Tool definitions module.
//!
//! Static tool definitions live here, one file per tool. Template tools are
//! not defined here - they are synthesized at startup from loaded templates
//! in `router.rs`.

mod current_date;

pub use current_date::CurrentDateTool;
