//! Severity definitions
//!
//! Severities are totally ordered and drive filtering:
//! `Trace < Debug < Info < Notice < Warning < Error < Fatal`.
//! `Unknown` is the sentinel produced for unrecognized numeric values and
//! sorts below every named level.

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    Unknown = 0,
    Trace = 1,
    Debug = 2,
    #[default]
    Info = 3,
    Notice = 4,
    Warning = 5,
    Error = 6,
    Fatal = 7,
}

impl Severity {
    /// All named severities, lowest first.
    pub const ALL: [Severity; 7] = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Unknown => "unknown",
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warning => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Fixed-width label used in the line header.
    ///
    /// Named levels are right aligned to six columns so headers line up;
    /// the `Unknown` sentinel keeps its full spelling.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Unknown => "unknown",
            Severity::Trace => " trace",
            Severity::Debug => " debug",
            Severity::Info => "  info",
            Severity::Notice => "notice",
            Severity::Warning => "  warn",
            Severity::Error => " error",
            Severity::Fatal => " fatal",
        }
    }

    /// Color function for this severity's label.
    pub fn paint(&self) -> Paint {
        match self {
            Severity::Unknown => Paint::new(Color::BrightBlack),
            Severity::Trace => Paint::new(Color::White),
            Severity::Debug => Paint::new(Color::Blue),
            Severity::Info => Paint::new(Color::Green),
            Severity::Notice => Paint::new(Color::Magenta),
            Severity::Warning => Paint::new(Color::Yellow),
            Severity::Error => Paint::new(Color::Red),
            Severity::Fatal => Paint::new(Color::BrightWhite).on(Color::Red),
        }
    }

    /// The label, wrapped in this severity's color.
    pub fn colored_label(&self) -> String {
        self.paint().apply(self.label())
    }
}

impl From<u8> for Severity {
    fn from(value: u8) -> Self {
        match value {
            1 => Severity::Trace,
            2 => Severity::Debug,
            3 => Severity::Info,
            4 => Severity::Notice,
            5 => Severity::Warning,
            6 => Severity::Error,
            7 => Severity::Fatal,
            _ => Severity::Unknown,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "notice" => Ok(Severity::Notice),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "fatal" | "panic" => Ok(Severity::Fatal),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}

/// Terminal colors used by the header renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Blue,
    Green,
    Magenta,
    Yellow,
    Red,
    Cyan,
    BrightBlack,
    BrightWhite,
}

#[cfg(feature = "console")]
impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => colored::Color::White,
            Color::Blue => colored::Color::Blue,
            Color::Green => colored::Color::Green,
            Color::Magenta => colored::Color::Magenta,
            Color::Yellow => colored::Color::Yellow,
            Color::Red => colored::Color::Red,
            Color::Cyan => colored::Color::Cyan,
            Color::BrightBlack => colored::Color::BrightBlack,
            Color::BrightWhite => colored::Color::BrightWhite,
        }
    }
}

/// A foreground color with an optional background, applied to header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paint {
    fg: Color,
    bg: Option<Color>,
}

impl Paint {
    pub const fn new(fg: Color) -> Self {
        Self { fg, bg: None }
    }

    #[must_use]
    pub const fn on(self, bg: Color) -> Self {
        Self {
            fg: self.fg,
            bg: Some(bg),
        }
    }

    pub fn foreground(&self) -> Color {
        self.fg
    }

    pub fn background(&self) -> Option<Color> {
        self.bg
    }

    /// Wrap `text` in ANSI escape codes for this paint.
    ///
    /// Without the `console` feature the text is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        #[cfg(feature = "console")]
        {
            use colored::Colorize;

            let mut painted = text.color(colored::Color::from(self.fg));
            if let Some(bg) = self.bg {
                painted = painted.on_color(colored::Color::from(bg));
            }
            painted.to_string()
        }

        #[cfg(not(feature = "console"))]
        {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn test_ordering() {
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
        assert!(Severity::Unknown < Severity::Trace);
    }

    #[test]
    fn test_labels_are_fixed_width() {
        for severity in Severity::ALL {
            assert_eq!(severity.label().len(), 6, "label for {}", severity);
            assert_eq!(severity.label().trim(), severity.to_str());
        }
        assert_eq!(Severity::Unknown.label(), "unknown");
    }

    #[test]
    fn test_from_u8() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from(severity as u8), severity);
        }
        assert_eq!(Severity::from(0), Severity::Unknown);
        assert_eq!(Severity::from(8), Severity::Unknown);
        assert_eq!(Severity::from(u8::MAX), Severity::Unknown);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" notice ".parse::<Severity>().unwrap(), Severity::Notice);
        assert!(matches!(
            "verbose".parse::<Severity>(),
            Err(LoggerError::InvalidSeverity(_))
        ));
    }

    #[test]
    fn test_palette() {
        assert_eq!(Severity::Trace.paint().foreground(), Color::White);
        assert_eq!(Severity::Notice.paint().foreground(), Color::Magenta);
        assert_eq!(Severity::Fatal.paint().foreground(), Color::BrightWhite);
        assert_eq!(Severity::Fatal.paint().background(), Some(Color::Red));
        assert_eq!(Severity::Error.paint().background(), None);
        assert_eq!(Severity::Unknown.paint().foreground(), Color::BrightBlack);
    }

    #[cfg(feature = "console")]
    #[test]
    fn test_paint_applies_ansi_codes() {
        colored::control::set_override(true);
        let painted = Severity::Info.colored_label();
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("32"));
        assert!(painted.contains("  info"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Severity::Notice).expect("serialize");
        assert_eq!(json, "\"Notice\"");
        let parsed: Severity = serde_json::from_str("\"Warning\"").expect("deserialize");
        assert_eq!(parsed, Severity::Warning);
    }
}
