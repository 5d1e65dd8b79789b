//! Rendering of fluent builder mirrors on URL-like receivers.

use std::io::{self, Write};

use fluent_define::{FluentMethod, Param, Receiver};

use crate::writer::CodeWriter;

fn declaration(param: &Param) -> String {
    match &param.default {
        Some(default) => format!("{} {} = {}", param.ty, param.name, default),
        None => format!("{} {}", param.ty, param.name),
    }
}

/// Writes one fluent method that wraps `receiver` in a new request and
/// forwards every parameter to the request's method of the same name.
pub fn write_fluent_method<W: Write>(
    writer: &mut CodeWriter<W>,
    receiver: Receiver,
    method: &FluentMethod,
) -> io::Result<()> {
    let this = receiver.param_name();

    writer
        .line("/// <summary>")?
        .emit_line("/// @0", &[&method.description])?
        .line("/// </summary>")?
        .emit_line("/// <param name=\"@0\">The URL.</param>", &[&this])?;
    for param in &method.params {
        writer.emit_line(
            "/// <param name=\"@0\">@1</param>",
            &[&param.name, &param.description],
        )?;
    }
    writer.line("/// <returns>The IFlurlRequest.</returns>")?;

    let declarations: Vec<String> = std::iter::once(format!("this {} {}", receiver.type_name(), this))
        .chain(method.params.iter().map(declaration))
        .collect();
    let forwarded: Vec<&str> = method.params.iter().map(|p| p.name.as_str()).collect();

    writer
        .emit_line(
            "public static IFlurlRequest @0(@1) {",
            &[&method.name, &declarations.join(", ")],
        )?
        .emit_line(
            "return new FlurlRequest(@0).@1(@2);",
            &[&this, &method.name, &forwarded.join(", ")],
        )?
        .line("}")?
        .blank_line()?;
    Ok(())
}
