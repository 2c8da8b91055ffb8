//! Line printers for human output

use crate::output::is_quiet;
use crate::service::Notice;
use crate::ui::{theme, Icons};
use crate::Entry;
use owo_colors::OwoColorize;

/// Title line above a listing or profile
pub fn header(text: &str) {
    println!("{} {}", Icons::MONKEY, text.style(theme().title.clone()));
}

/// Flash-style confirmation; suppressed by `MONKEY_QUIET`
pub fn success(message: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", Icons::CHECK, message.style(theme().ok.clone()));
}

pub fn error(message: &str) {
    eprintln!("{} {}", Icons::CROSS, message.style(theme().failure.clone()));
}

pub fn warn(message: &str) {
    eprintln!("{} {}", Icons::WARN, message.style(theme().caution.clone()));
}

pub fn notice(notice: &Notice) {
    warn(&notice.to_string());
}

/// `icon label: value`, e.g. the database path
pub fn field(icon: &str, label: &str, value: &str) {
    println!("{} {}: {}", icon, label.style(theme().label.clone()), value);
}

/// Indented `label: value` row under a profile header
pub fn detail(label: &str, value: impl std::fmt::Display) {
    let label = format!("{}:", label);
    println!("  {} {}", label.style(theme().label.clone()), value);
}

/// Titled rule with the number of monkeys below it
pub fn section(title: &str, count: usize) {
    println!();
    println!("━{} ({})━", title.style(theme().title.clone()), count);
}

/// One monkey in a profile list
pub fn member(icon: &str, entry: &Entry, highlight: bool) {
    if highlight {
        println!(
            "  {} {} {}",
            icon,
            entry.name.style(theme().best.clone()),
            faint(&entry.mail)
        );
    } else {
        println!("  {} {} {}", icon, entry.name, faint(&entry.mail));
    }
}

/// Indented placeholder for an empty list
pub fn empty(text: &str) {
    println!("  {}", faint(text));
}

pub fn faint(text: &str) -> String {
    text.style(theme().faint.clone()).to_string()
}
