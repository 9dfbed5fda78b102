pub mod auth_page;
pub mod forms;
pub mod live_table;
pub mod profile_page;
pub mod shell;
pub mod wasm_api;
