pub mod rest;
pub mod state;

// Re-export the handlers so the binary that builds the router can reach
// them without digging through the module tree.
pub use rest::{
    enhance_handler, export_resume_handler, health_handler, import_handler,
    list_resumes_handler, save_resume_handler,
};
