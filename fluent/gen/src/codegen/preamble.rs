//! Fixed text surrounding the generated methods.

use std::io::{self, Write};

use crate::writer::CodeWriter;

/// Warning placed on the first line of the generated file.
pub const HEADER: &str = "// This file was auto-generated by fluent-gen. Do not edit directly.";

/// Namespaces imported by the generated file, in order.
pub const USINGS: [&str; 9] = [
    "System",
    "System.Collections.Generic",
    "System.IO",
    "System.Net",
    "System.Net.Http",
    "System.Threading",
    "System.Threading.Tasks",
    "Flurl.Http.Configuration",
    "Flurl.Http.Content",
];

pub const NAMESPACE: &str = "Flurl.Http";

pub const CLASS_NAME: &str = "GeneratedExtensions";

/// Writes everything up to and including the class's opening brace.
pub fn write_preamble<W: Write>(writer: &mut CodeWriter<W>) -> io::Result<()> {
    writer.line(HEADER)?;
    for using in USINGS {
        writer.emit_line("using @0;", &[&using])?;
    }
    writer
        .blank_line()?
        .emit_line("namespace @0", &[&NAMESPACE])?
        .line("{")?
        .line("/// <summary>")?
        .line("/// Auto-generated fluent extension methods on String, Url, and IFlurlRequest.")?
        .line("/// </summary>")?
        .emit_line("public static class @0", &[&CLASS_NAME])?
        .line("{")?;
    Ok(())
}

/// Closes the class and namespace opened by [`write_preamble`].
pub fn write_closing<W: Write>(writer: &mut CodeWriter<W>) -> io::Result<()> {
    writer.line("}")?.line("}")?;
    Ok(())
}
