//! JSON output.

use serde::Serialize;
use std::io::Write;

use crate::ChartError;

/// JSON writer for chart configurations and render results.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    /// Creates a compact writer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Writes `value` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write<T, W>(&self, value: &T, mut writer: W) -> Result<(), ChartError>
    where
        T: Serialize + ?Sized,
        W: Write,
    {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Serializes `value` to a string without the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_string<T>(&self, value: &T) -> Result<String, ChartError>
    where
        T: Serialize + ?Sized,
    {
        let out = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(out)
    }
}
