//! Tagged, colored status lines.
//!
//! Color is dropped automatically when `NO_COLOR` is set or stdout is not a
//! terminal that supports it.

use colored::Colorize;

pub fn info(message: &str) {
    println!("{}", format!("[INFO] {}", message).cyan());
}

pub fn success(message: &str) {
    println!("{}", format!("[✓] {}", message).green());
}

pub fn hint(message: &str) {
    println!("{}", message.yellow());
}

pub fn warning(message: &str) {
    eprintln!("{}", format!("[WARNING] {}", message).yellow());
}

pub fn error(message: &str) {
    eprintln!("{}", format!("[ERROR] {}", message).red());
}
