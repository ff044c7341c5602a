//! Cluster connection value object
//!
//! A connection string is the opaque argument fragment that selects a cluster
//! context and namespace, e.g. `--context dev --namespace default`. It is
//! forwarded verbatim to every cluster call made for an environment.

use std::fmt;

/// Validated cluster connection string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterConnection {
    raw: String,
    args: Vec<String>,
}

/// Why a connection string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Nothing but whitespace
    Empty,
    /// Could not be split into arguments (e.g. unbalanced quotes)
    Malformed(String),
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "connection string is empty"),
            Self::Malformed(msg) => write!(f, "connection string is malformed: {}", msg),
        }
    }
}

impl std::error::Error for ConnectionError {}

impl ClusterConnection {
    /// Parse a connection string into its argument list.
    ///
    /// Shell-style quoting is honoured so namespaces or contexts containing
    /// spaces survive the split.
    pub fn parse(raw: &str) -> Result<Self, ConnectionError> {
        if raw.trim().is_empty() {
            return Err(ConnectionError::Empty);
        }
        let args =
            shell_words::split(raw).map_err(|e| ConnectionError::Malformed(e.to_string()))?;
        if args.is_empty() {
            return Err(ConnectionError::Empty);
        }
        Ok(Self {
            raw: raw.to_string(),
            args,
        })
    }

    /// Original connection string, exactly as configured
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Arguments to prepend to every cluster command
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Value following `--context`, if present
    pub fn context(&self) -> Option<&str> {
        self.flag_value("--context")
    }

    /// Value following `--namespace` (or `-n`), if present
    pub fn namespace(&self) -> Option<&str> {
        self.flag_value("--namespace").or_else(|| self.flag_value("-n"))
    }

    fn flag_value(&self, flag: &str) -> Option<&str> {
        let prefix = format!("{}=", flag);
        let mut iter = self.args.iter();
        while let Some(arg) = iter.next() {
            if arg == flag {
                return iter.next().map(String::as_str);
            }
            if let Some(value) = arg.strip_prefix(&prefix) {
                return Some(value);
            }
        }
        None
    }
}

impl fmt::Display for ClusterConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
