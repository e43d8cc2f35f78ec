pub mod action;
pub mod config;
pub mod console;
pub mod error;
pub mod interpreter;
pub mod launcher;
pub mod platform;
pub mod runtime;
