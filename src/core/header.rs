//! Line header rendering
//!
//! Every emitted line starts with a header. By default it is rendered from a
//! template over three parameters:
//!
//! - `{level}`: the severity label, painted in the severity color when colorized
//! - `{date}`: the local wall clock, formatted by the logger's [`TimestampFormat`]
//! - `{caller}`: `<file>:<line>` of the emit call, cyan when colorized
//!
//! A non-empty header override replaces the rendered header verbatim.
//!
//! # Template syntax
//!
//! `{name}` substitutes a parameter; `{{` and `}}` produce literal braces.
//!
//! ```
//! use leveled_logger::HeaderTemplate;
//!
//! let template = HeaderTemplate::parse("{date} {level} | ").unwrap();
//! assert_eq!(template.source(), "{date} {level} | ");
//! assert!(HeaderTemplate::parse("{thread}").is_err());
//! ```

use super::error::{LoggerError, Result};
use super::location::CallSite;
use super::logger::LoggerSettings;
use super::severity::{Color, Paint, Severity};
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;

/// Template used by every logger until another one is installed.
pub const DEFAULT_HEADER_TEMPLATE: &str = "[{level}] {date} ({caller}): ";

/// Text substituted for the caller when no source location is available.
pub const UNKNOWN_CALLER: &str = "unknown";

const CALLER_PAINT: Paint = Paint::new(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderParam {
    Level,
    Date,
    Caller,
}

impl HeaderParam {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "level" => Some(HeaderParam::Level),
            "date" => Some(HeaderParam::Date),
            "caller" => Some(HeaderParam::Caller),
            _ => None,
        }
    }
}

/// Values substituted into a [`HeaderTemplate`].
#[derive(Debug, Clone, Copy)]
pub struct HeaderParams<'a> {
    pub level: &'a str,
    pub date: &'a str,
    pub caller: &'a str,
}

impl<'a> HeaderParams<'a> {
    fn get(&self, param: HeaderParam) -> &'a str {
        match param {
            HeaderParam::Level => self.level,
            HeaderParam::Date => self.date,
            HeaderParam::Caller => self.caller,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(HeaderParam),
}

/// A header template, parsed once and rendered for every line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl HeaderTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(LoggerError::template(template, position, "unclosed '{'"));
                    }

                    let param = HeaderParam::from_name(name.trim()).ok_or_else(|| {
                        LoggerError::template(
                            template,
                            position,
                            format!("unknown parameter '{}'", name),
                        )
                    })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(param));
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(LoggerError::template(template, position, "unmatched '}'"));
                    }
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The built-in `[{level}] {date} ({caller}): ` template.
    ///
    /// # Panics
    ///
    /// Panics if the built-in template does not parse, which is a defect in
    /// this crate rather than a runtime condition.
    pub fn builtin() -> Self {
        match Self::parse(DEFAULT_HEADER_TEMPLATE) {
            Ok(template) => template,
            Err(e) => panic!("built-in header template is invalid: {}", e),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameters referenced by this template, in order of appearance.
    pub fn params(&self) -> impl Iterator<Item = HeaderParam> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(param) => Some(*param),
            Segment::Literal(_) => None,
        })
    }

    pub fn uses(&self, param: HeaderParam) -> bool {
        self.params().any(|p| p == param)
    }

    pub fn render(&self, params: &HeaderParams<'_>) -> String {
        let mut out = String::with_capacity(self.source.len() + 48);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(param) => out.push_str(params.get(*param)),
            }
        }
        out
    }
}

impl Default for HeaderTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromStr for HeaderTemplate {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for HeaderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Render the header for one line from a settings snapshot.
pub fn render(settings: &LoggerSettings, severity: Severity, call_site: &CallSite) -> String {
    if let Some(header) = settings.header_override() {
        return header.to_string();
    }
    render_at(settings, severity, call_site, &Local::now())
}

/// Render the computed header at a fixed instant, ignoring any override.
pub fn render_at(
    settings: &LoggerSettings,
    severity: Severity,
    call_site: &CallSite,
    now: &DateTime<Local>,
) -> String {
    let template = settings.header_template();

    let level = if settings.colorize() {
        severity.colored_label()
    } else {
        severity.label().to_string()
    };

    // Skip clock formatting and path handling the template never shows.
    let date = if template.uses(HeaderParam::Date) {
        format_date(settings.timestamp_format(), now)
    } else {
        String::new()
    };

    let caller = if template.uses(HeaderParam::Caller) {
        format_caller(call_site, settings.colorize())
    } else {
        String::new()
    };

    template.render(&HeaderParams {
        level: &level,
        date: &date,
        caller: &caller,
    })
}

fn format_date(format: &TimestampFormat, now: &DateTime<Local>) -> String {
    format.format(now)
}

fn format_caller(call_site: &CallSite, colorize: bool) -> String {
    match call_site.describe() {
        Some(text) if colorize => CALLER_PAINT.apply(&text),
        Some(text) => text,
        None => UNKNOWN_CALLER.to_string(),
    }
}
