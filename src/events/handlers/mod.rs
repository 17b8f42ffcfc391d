// src/events/handlers/mod.rs
//
// Event Handlers - INTERNAL MODULE
//
// Handlers use closure-based subscription via EventBus::subscribe; only
// the registration functions are exported, never handler internals.

pub mod session_handler;

pub use session_handler::register_session_handlers;
