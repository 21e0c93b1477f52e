// src/notify.rs
//! User-visible notifications. Informational only, never a contract.

use colored::Colorize;

pub fn info(message: &str) {
    println!("{} {}", "info:".blue().bold(), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
