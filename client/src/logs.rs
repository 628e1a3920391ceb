use std::fmt::Display;

use colored::{Color, Colorize};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    fn color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Warning => LogColor::Warning,
            Self::Error => LogColor::Error,
        }
    }
}

/// The palette shared by the log helpers and the pretty-printers.
#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Info,
    Warning,
    Error,
    Label,
    Value,
    Muted,
}

impl From<LogColor> for Color {
    fn from(value: LogColor) -> Color {
        match value {
            LogColor::Info => Color::TrueColor { r: 80, g: 160, b: 235 },
            LogColor::Warning => Color::TrueColor { r: 214, g: 143, b: 0 },
            LogColor::Error => Color::TrueColor { r: 224, g: 49, b: 63 },
            LogColor::Label => Color::TrueColor { r: 120, g: 170, b: 110 },
            LogColor::Value => Color::TrueColor { r: 205, g: 205, b: 205 },
            LogColor::Muted => Color::TrueColor { r: 110, g: 110, b: 110 },
        }
    }
}

fn log(level: Level, label: impl Display, msg: impl Display) {
    println!(
        "[{}] {}: {}",
        level.to_string().color(level.color()),
        label.to_string().color(LogColor::Label),
        msg.to_string().color(LogColor::Value)
    );
}

pub fn log_info(label: impl Display, msg: impl Display) {
    log(Level::Info, label, msg)
}

pub fn log_warning(label: impl Display, msg: impl Display) {
    log(Level::Warning, label, msg)
}

pub fn log_error(label: impl Display, msg: impl Display) {
    log(Level::Error, label, msg)
}
