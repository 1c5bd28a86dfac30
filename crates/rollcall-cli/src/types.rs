use clap::ValueEnum;
use rollcall_engine::WindowStyle;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Page-number window style; widths come from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum WindowArg {
    Sliding,
    Ellipsis,
}

impl WindowArg {
    /// Switch style, keeping the configured parameter when the style already matches.
    pub fn apply(self, configured: WindowStyle) -> WindowStyle {
        match (self, configured) {
            (WindowArg::Sliding, WindowStyle::Sliding { .. })
            | (WindowArg::Ellipsis, WindowStyle::Ellipsis { .. }) => configured,
            (WindowArg::Sliding, _) => WindowStyle::sliding(),
            (WindowArg::Ellipsis, _) => WindowStyle::ellipsis(),
        }
    }
}

impl fmt::Display for WindowArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowArg::Sliding => write!(f, "sliding"),
            WindowArg::Ellipsis => write!(f, "ellipsis"),
        }
    }
}
