//! Browser-facing adapters: network, storage, console, DOM.

pub mod config;
pub mod http;
pub mod services;
pub mod storage;
pub mod ui;
pub mod websocket;
