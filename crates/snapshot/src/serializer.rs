//! Incremental writer for the ledger document.
//!
//! The document is `{"ledger": ..., "transactions": ..., "state": [...]}`.
//! The outer object is assembled here by hand so that state entries can be
//! appended one at a time as pages arrive; each individual value is encoded
//! by `serde_json` through [`LayoutFormatter`], which knows the nesting depth
//! the value is written at.

use crate::error::SnapshotResult;
use crate::format::FormatConfig;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;
use std::io::{self, Write};

/// `serde_json` formatter that lays values out with a [`FormatConfig`],
/// starting `base_depth` indent units in.
///
/// Lines never come out blank or as bare indentation: every line break is
/// followed by indentation and then content.
#[derive(Debug, Clone)]
pub struct LayoutFormatter {
    format: FormatConfig,
    base_depth: usize,
    current_depth: usize,
    has_value: bool,
}

impl LayoutFormatter {
    pub fn new(format: FormatConfig, base_depth: usize) -> Self {
        Self {
            format,
            base_depth,
            current_depth: 0,
            has_value: false,
        }
    }

    fn newline<W: ?Sized + Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.format.eol().as_bytes())?;
        write_indent(writer, self.format, self.base_depth + self.current_depth)
    }

    fn open<W: ?Sized + Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
        self.current_depth += 1;
        self.has_value = false;
        writer.write_all(bracket)
    }

    fn close<W: ?Sized + Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
        self.current_depth -= 1;
        if self.has_value {
            self.newline(writer)?;
        }
        writer.write_all(bracket)
    }

    fn element<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        self.newline(writer)
    }
}

impl Formatter for LayoutFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"[")
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.element(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.open(writer, b"{")
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.element(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        write_key_separator(writer, self.format)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

fn write_indent<W: ?Sized + Write>(writer: &mut W, format: FormatConfig, depth: usize) -> io::Result<()> {
    for _ in 0..depth {
        writer.write_all(format.indent().as_bytes())?;
    }
    Ok(())
}

fn write_key_separator<W: ?Sized + Write>(writer: &mut W, format: FormatConfig) -> io::Result<()> {
    writer.write_all(format.space().as_bytes())?;
    writer.write_all(b":")?;
    writer.write_all(format.space().as_bytes())
}

/// Encodes one value at `depth`, prefixing its first line with the depth's
/// indentation. Nothing is written after the value.
pub fn write_value<W, T>(writer: &mut W, format: FormatConfig, depth: usize, value: &T) -> SnapshotResult<()>
where
    W: ?Sized + Write,
    T: ?Sized + Serialize,
{
    write_indent(writer, format, depth)?;
    let mut ser = Serializer::with_formatter(writer, LayoutFormatter::new(format, depth));
    value.serialize(&mut ser)?;
    Ok(())
}

/// Receives state entries in traversal order.
pub trait StateSink {
    /// Accepts the next entry.
    fn accept(&mut self, entry: &Value) -> SnapshotResult<()>;
}

impl StateSink for Vec<Value> {
    fn accept(&mut self, entry: &Value) -> SnapshotResult<()> {
        self.push(entry.clone());
        Ok(())
    }
}

/// Writes the top-level document fields in order.
#[derive(Debug)]
pub struct DocumentWriter<W: Write> {
    out: W,
    format: FormatConfig,
    fields: usize,
}

impl<W: Write> DocumentWriter<W> {
    /// Opens the document on `out`.
    pub fn begin(mut out: W, format: FormatConfig) -> SnapshotResult<Self> {
        out.write_all(b"{")?;
        out.write_all(format.eol().as_bytes())?;
        Ok(Self {
            out,
            format,
            fields: 0,
        })
    }

    /// Writes the `ledger` field.
    pub fn write_ledger<T: ?Sized + Serialize>(&mut self, header: &T) -> SnapshotResult<()> {
        self.begin_field("ledger")?;
        write_value(&mut self.out, self.format, 1, header)
    }

    /// Writes the `transactions` field.
    pub fn write_transactions(&mut self, transactions: &[Value]) -> SnapshotResult<()> {
        self.begin_field("transactions")?;
        write_value(&mut self.out, self.format, 1, transactions)
    }

    /// Opens the `state` array; entries are then appended one at a time.
    pub fn begin_state(mut self) -> SnapshotResult<StateWriter<W>> {
        self.begin_field("state")?;
        write_indent(&mut self.out, self.format, 1)?;
        self.out.write_all(b"[")?;
        self.out.write_all(self.format.eol().as_bytes())?;
        Ok(StateWriter {
            out: self.out,
            format: self.format,
            entries: 0,
        })
    }

    fn begin_field(&mut self, key: &str) -> io::Result<()> {
        let eol = self.format.eol().as_bytes();
        if self.fields > 0 {
            self.out.write_all(b",")?;
            self.out.write_all(eol)?;
        }
        self.fields += 1;

        write_indent(&mut self.out, self.format, 1)?;
        write!(self.out, "\"{key}\"{}:", self.format.space())?;
        self.out.write_all(eol)
    }
}

/// Streams entries into the document's `state` array and closes the document.
#[derive(Debug)]
pub struct StateWriter<W: Write> {
    out: W,
    format: FormatConfig,
    entries: u64,
}

impl<W: Write> StateWriter<W> {
    /// Appends one entry, separated from the previous one.
    pub fn push(&mut self, entry: &Value) -> SnapshotResult<()> {
        if self.entries > 0 {
            self.out.write_all(b",")?;
            self.out.write_all(self.format.eol().as_bytes())?;
        }
        write_value(&mut self.out, self.format, 2, entry)?;
        self.entries += 1;
        Ok(())
    }

    /// Number of entries written so far.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Closes the array and the document, flushes, and hands back the sink.
    pub fn finish(mut self) -> SnapshotResult<W> {
        let eol = self.format.eol().as_bytes();
        if self.entries > 0 {
            self.out.write_all(eol)?;
        }
        write_indent(&mut self.out, self.format, 1)?;
        self.out.write_all(b"]")?;
        self.out.write_all(eol)?;
        self.out.write_all(b"}")?;
        self.out.write_all(eol)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> StateSink for StateWriter<W> {
    fn accept(&mut self, entry: &Value) -> SnapshotResult<()> {
        self.push(entry)
    }
}
