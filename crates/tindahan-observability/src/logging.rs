//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tindahan_commerce::SessionId;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name such as "info" or "WARN".
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// Single-line human-readable output.
    #[default]
    Compact,
    /// Multi-line output for `tracing`; structured logs render it like `Compact`.
    Pretty,
}

/// One structured log record.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub session_id: String,
    /// Emitting component (e.g., "cart").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Extra fields, flattened into the JSON object.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
    /// Microseconds since the logger was created.
    pub elapsed_us: u64,
}

impl LogEntry {
    /// Render as a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Render in the given format.
    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Json => self.to_json(),
            LogFormat::Compact | LogFormat::Pretty => self.to_string(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.level)?;
        if let Some(component) = &self.component {
            write!(f, " {}:", component)?;
        }
        write!(f, " {} ({}us)", self.message, self.elapsed_us)?;

        let mut fields = self.fields.iter();
        if let Some((key, value)) = fields.next() {
            write!(f, " | {}={}", key, value)?;
            for (key, value) in fields {
                write!(f, " {}={}", key, value)?;
            }
        }
        Ok(())
    }
}

/// Where rendered log lines go.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    #[default]
    Stderr,
    /// Keep lines in memory.
    Memory(MemorySink),
}

impl LogSink {
    fn write(&self, line: String) {
        match self {
            LogSink::Stderr => eprintln!("{}", line),
            LogSink::Memory(sink) => sink.push(line),
        }
    }
}

/// Shared in-memory buffer of rendered log lines.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    /// Copy of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

/// Logger bound to one storefront session.
///
/// ```
/// use tindahan_observability::{LogFormat, LogSink, MemorySink, StructuredLogger};
/// use tindahan_commerce::SessionId;
///
/// let sink = MemorySink::new();
/// let logger = StructuredLogger::new(SessionId::new("sess_1"))
///     .with_format(LogFormat::Json)
///     .with_sink(LogSink::Memory(sink.clone()));
///
/// logger.info("cart opened").field("lines", 2).emit();
/// assert!(sink.lines()[0].contains("\"lines\":2"));
/// ```
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    created: Instant,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            created: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Drop entries below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Start an entry at `level`. Nothing is written until [`LogBuilder::emit`].
    pub fn entry(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn debug(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.entry(LogLevel::Error, message)
    }

    fn write(&self, level: LogLevel, message: String, fields: BTreeMap<String, Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message,
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            fields,
            elapsed_us: self.created.elapsed().as_micros() as u64,
        };
        self.sink.write(entry.render(self.format));
    }
}

/// A log entry under construction.
#[must_use = "log entries are only written by `emit`"]
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, Value>,
}

impl LogBuilder<'_> {
    /// Attach a field. Values that fail to serialize are recorded as `null`.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn emit(self) {
        self.logger.write(self.level, self.message, self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_logger(format: LogFormat) -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(SessionId::new("sess-test"))
            .with_component("cart")
            .with_format(format)
            .with_sink(LogSink::Memory(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_json_output() {
        let (logger, sink) = memory_logger(LogFormat::Json);
        logger
            .info("item added")
            .field("product", "Selecta Ice Cream")
            .field("quantity", 1u32)
            .emit();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let value: Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "item added");
        assert_eq!(value["session_id"], "sess-test");
        assert_eq!(value["component"], "cart");
        assert_eq!(value["product"], "Selecta Ice Cream");
        assert_eq!(value["quantity"], 1);
        assert!(value["elapsed_us"].is_u64());
    }

    #[test]
    fn test_human_output() {
        let (logger, sink) = memory_logger(LogFormat::Compact);
        logger.warn("checkout rejected").field("empty", true).emit();

        let line = &sink.lines()[0];
        assert!(line.starts_with("[WARN] cart: checkout rejected ("));
        assert!(line.ends_with("| empty=true"));
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, sink) = memory_logger(LogFormat::Json);
        let logger = logger.with_min_level(LogLevel::Warn);
        logger.info("ignored").emit();
        logger.debug("ignored too").emit();
        logger.error("kept").emit();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[test]
    fn test_level_from_name() {
        assert_eq!(LogLevel::from_name("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_name(" debug "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_name("loud"), None);
    }

    #[test]
    fn test_log_format_parses_lowercase() {
        let format: LogFormat = serde_json::from_str("\"pretty\"").unwrap();
        assert_eq!(format, LogFormat::Pretty);
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
