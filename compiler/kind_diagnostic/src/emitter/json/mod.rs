//! JSON Emitter
//!
//! Writes one array per batch, one object per diagnostic. The layout is
//! fixed (two-space indentation, one field per line) so that build logs diff
//! cleanly.

use std::fmt::{self, Write as _};
use std::io::Write;

use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// JSON emitter for machine-readable output.
///
/// The array opens with the first diagnostic and closes in
/// [`DiagnosticEmitter::finish`]; an empty batch is `[]`.
pub struct JsonEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer, emitted: 0 }
    }
}

/// A JSON string literal, quotes included.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

/// `"key": [ .. ]` with pre-rendered entries, without a trailing comma.
fn field_array(out: &mut String, key: &str, entries: &[String]) {
    let _ = writeln!(out, "    {}: [", Quoted(key));
    if !entries.is_empty() {
        let _ = writeln!(out, "{}", entries.join(",\n"));
    }
    out.push_str("    ]");
}

fn label_entry(label: &Label) -> String {
    format!(
        "      {{\n        \"file\": {},\n        \"line\": {},\n        \"column\": {},\n        \"message\": {},\n        \"primary\": {}\n      }}",
        Quoted(&label.location.file),
        label.location.line,
        label.location.column,
        Quoted(&label.message),
        label.is_primary,
    )
}

fn text_entries(texts: &[String]) -> Vec<String> {
    texts
        .iter()
        .map(|text| format!("      {}", Quoted(text)))
        .collect()
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let mut out = String::from(if self.emitted == 0 { "[\n" } else { ",\n" });
        self.emitted += 1;

        out.push_str("  {\n");
        let _ = writeln!(out, "    \"code\": {},", Quoted(diagnostic.code.as_str()));
        let _ = writeln!(out, "    \"severity\": \"{}\",", diagnostic.severity);
        let _ = writeln!(out, "    \"message\": {},", Quoted(&diagnostic.message));
        let labels: Vec<String> = diagnostic.labels.iter().map(label_entry).collect();
        field_array(&mut out, "labels", &labels);
        out.push_str(",\n");
        field_array(&mut out, "notes", &text_entries(&diagnostic.notes));
        out.push_str(",\n");
        field_array(&mut out, "suggestions", &text_entries(&diagnostic.suggestions));
        out.push_str("\n  }");

        let _ = self.writer.write_all(out.as_bytes());
    }

    fn finish(&mut self, _error_count: usize, _warning_count: usize) {
        // The array already carries every diagnostic.
        let open = if self.emitted == 0 { "[" } else { "" };
        let _ = writeln!(self.writer, "{open}\n]");
        let _ = self.writer.flush();
    }
}
