//! Rendering of request-sending extension methods.
//!
//! Each [`RequestMethod`] becomes a doc block, a signature and a body.
//! Bodies branch once on the receiver:
//!
//! - `IFlurlRequest` methods build the verb and optional captured content,
//!   then make a single `SendAsync` call with an optional `Receive*` suffix.
//! - URL-like methods create a `FlurlRequest` from the URL and forward every
//!   parameter to the `IFlurlRequest` method of the same name.
//!
//! ## Generated Code Example
//!
//! ```text
//! public static Task<T> PostJsonReceiveJsonAsync<T>(this IFlurlRequest request, object data, ...) {
//!     var content = new CapturedJsonContent(request.Settings.JsonSerializer.Serialize(data));
//!     return request.SendAsync(HttpMethod.Post, content: content, ...).ReceiveJson<T>();
//! }
//! ```

use std::io::{self, Write};

use fluent_define::{BodyKind, Receiver, RequestMethod, ResponseKind, Verb};

use crate::writer::CodeWriter;

/// A parameter of a generated request method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Full declaration, including `this` and any default value.
    pub declaration: String,
    /// Identifier used when forwarding the argument.
    pub name: &'static str,
}

impl Parameter {
    fn new(declaration: impl Into<String>, name: &'static str) -> Self {
        Self {
            declaration: declaration.into(),
            name,
        }
    }
}

/// Returns the `Task<...>` type argument for a method.
pub fn task_arg(method: &RequestMethod) -> &'static str {
    match method.response {
        None => "HttpResponseMessage",
        Some(ResponseKind::Json) if method.is_generic => "T",
        Some(ResponseKind::Json) => "dynamic",
        Some(ResponseKind::String) => "string",
        Some(ResponseKind::Stream) => "Stream",
        Some(ResponseKind::Bytes) => "byte[]",
    }
}

/// Type parameter list appended to the method name, if any.
pub fn type_params(method: &RequestMethod) -> &'static str {
    if method.is_generic { "<T>" } else { "" }
}

/// Expression constructing the `HttpMethod` for a fixed verb.
///
/// `HttpMethod` has no `Patch` member, so PATCH is built from its name.
pub fn verb_expr(verb: Verb) -> String {
    match verb {
        Verb::Patch => format!("new HttpMethod(\"{}\")", verb.wire_name()),
        other => format!("HttpMethod.{other}"),
    }
}

/// Builds the ordered parameter list for a method.
///
/// Receiver, then the runtime verb (if absent from the name), then the body
/// (typed `data` or raw `content`), then the two optional trailing
/// parameters.
pub fn parameters(method: &RequestMethod) -> Vec<Parameter> {
    let receiver = method.receiver;
    let mut params = vec![Parameter::new(
        format!("this {} {}", receiver.type_name(), receiver.param_name()),
        receiver.param_name(),
    )];

    if method.verb.is_none() {
        params.push(Parameter::new("HttpMethod verb", "verb"));
    }

    match method.body {
        Some(BodyKind::String) => params.push(Parameter::new("string data", "data")),
        Some(BodyKind::Json) => params.push(Parameter::new("object data", "data")),
        None if method.has_body() => params.push(Parameter::new("HttpContent content", "content")),
        None => {}
    }

    params.push(Parameter::new(
        "CancellationToken cancellationToken = default(CancellationToken)",
        "cancellationToken",
    ));
    params.push(Parameter::new(
        "HttpCompletionOption completionOption = HttpCompletionOption.ResponseContentRead",
        "completionOption",
    ));
    params
}

/// Writes the doc block, signature and body of one request method.
pub fn write_request_method<W: Write>(
    writer: &mut CodeWriter<W>,
    method: &RequestMethod,
) -> io::Result<()> {
    let params = parameters(method);
    write_docs(writer, method)?;

    let declarations: Vec<&str> = params.iter().map(|p| p.declaration.as_str()).collect();
    writer.emit_line(
        "public static Task<@0> @1@2(@3) {",
        &[
            &task_arg(method),
            &method.name,
            &type_params(method),
            &declarations.join(", "),
        ],
    )?;

    match method.receiver {
        Receiver::Request => write_send_body(writer, method)?,
        Receiver::Url | Receiver::Str => {
            let forwarded: Vec<&str> = params.iter().skip(1).map(|p| p.name).collect();
            writer.emit_line(
                "return new FlurlRequest(@0).@1@2(@3);",
                &[
                    &method.receiver.param_name(),
                    &method.name,
                    &type_params(method),
                    &forwarded.join(", "),
                ],
            )?;
        }
    }

    writer.line("}")?.blank_line()?;
    Ok(())
}

fn write_docs<W: Write>(writer: &mut CodeWriter<W>, method: &RequestMethod) -> io::Result<()> {
    let summary_start = match method.receiver {
        Receiver::Request => "Sends",
        Receiver::Url | Receiver::Str => "Creates a FlurlRequest from the URL and sends",
    };

    writer.line("/// <summary>")?;
    match method.verb {
        Some(verb) => writer.emit_line(
            "/// @0 an asynchronous @1 request.",
            &[&summary_start, &verb.wire_name()],
        )?,
        None => writer.emit_line("/// @0 an asynchronous request.", &[&summary_start])?,
    };
    writer.line("/// </summary>")?;

    match method.receiver {
        Receiver::Request => writer.line("/// <param name=\"request\">The IFlurlRequest instance.</param>")?,
        Receiver::Url | Receiver::Str => writer.line("/// <param name=\"url\">The URL.</param>")?,
    };
    if method.verb.is_none() {
        writer.line("/// <param name=\"verb\">The HTTP method used to make the request.</param>")?;
    }
    if method.body.is_some() {
        writer.line("/// <param name=\"data\">Contents of the request body.</param>")?;
    } else if method.has_body() {
        writer.line("/// <param name=\"content\">Contents of the request body.</param>")?;
    }

    writer
        .line("/// <param name=\"cancellationToken\">A cancellation token that can be used by other objects or threads to receive notice of cancellation. Optional.</param>")?
        .line("/// <param name=\"completionOption\">The HttpCompletionOption used in the request. Optional.</param>")?
        .emit_line(
            "/// <returns>A Task whose result is @0.</returns>",
            &[&method.result_description],
        )?;
    Ok(())
}

fn write_send_body<W: Write>(writer: &mut CodeWriter<W>, method: &RequestMethod) -> io::Result<()> {
    if let Some(body) = method.body {
        let source = match body {
            BodyKind::String => "data".to_string(),
            BodyKind::Json => format!("request.Settings.{body}Serializer.Serialize(data)"),
        };
        writer.emit_line("var content = new Captured@0Content(@1);", &[&body, &source])?;
    }

    let mut args = vec![method.verb.map_or_else(|| "verb".to_string(), verb_expr)];
    if method.has_body() {
        args.push("content: content".to_string());
    }
    args.push("cancellationToken: cancellationToken".to_string());
    args.push("completionOption: completionOption".to_string());

    let receive = method
        .response
        .map(|response| format!(".Receive{response}{}()", type_params(method)))
        .unwrap_or_default();

    writer.emit_line(
        "return request.SendAsync(@0)@1;",
        &[&args.join(", "), &receive],
    )?;
    Ok(())
}
