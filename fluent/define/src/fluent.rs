//! Fluent builder method descriptors.
//!
//! These describe the convenience methods (headers, auth, cookies, settings)
//! that exist on `IFlurlRequest` and get mirrored onto every URL-like
//! receiver. Each mirror creates a request from the URL and forwards its
//! parameters unchanged.

use serde::{Deserialize, Serialize};

/// One declared parameter of a fluent method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// Target-language type, including modifiers such as `params`.
    pub ty: String,
    pub description: String,
    /// Default value literal, if the parameter is optional.
    pub default: Option<String>,
}

/// Description of one fluent convenience method.
///
/// Parameter order is both the declaration order and the order arguments
/// are forwarded in.
///
/// ## Examples
///
/// ```
/// use fluent_define::FluentMethod;
///
/// let method = FluentMethod::new("WithHeader", "Sets a request header.")
///     .param("name", "string", "The header name.")
///     .param("value", "object", "The header value.");
///
/// assert_eq!(method.params.len(), 2);
/// assert_eq!(method.params[1].name, "value");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FluentMethod {
    pub name: String,
    pub description: String,
    pub params: Vec<Param>,
}

impl FluentMethod {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Appends a required parameter.
    pub fn param(
        self,
        name: impl Into<String>,
        ty: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.push(name.into(), ty.into(), description.into(), None)
    }

    /// Appends an optional parameter with a default literal.
    pub fn param_with_default(
        self,
        name: impl Into<String>,
        ty: impl Into<String>,
        description: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        self.push(name.into(), ty.into(), description.into(), Some(default.into()))
    }

    fn push(mut self, name: String, ty: String, description: String, default: Option<String>) -> Self {
        self.params.push(Param {
            name,
            ty,
            description,
            default,
        });
        self
    }
}

/// Enumerates every fluent method in output order.
pub fn all_fluent_methods() -> Vec<FluentMethod> {
    vec![
        // headers
        FluentMethod::new(
            "WithHeader",
            "Creates a new FlurlRequest with the URL and sets a request header.",
        )
        .param("name", "string", "The header name.")
        .param("value", "object", "The header value."),
        FluentMethod::new(
            "WithHeaders",
            "Creates a new FlurlRequest with the URL and sets request headers based on property names/values of the provided object, or keys/values if object is a dictionary, to be sent.",
        )
        .param(
            "headers",
            "object",
            "Names/values of HTTP headers to set. Typically an anonymous object or IDictionary.",
        )
        .param_with_default(
            "replaceUnderscoreWithHyphen",
            "bool",
            "If true, underscores in property names will be replaced by hyphens. Default is true.",
            "true",
        ),
        // auth
        FluentMethod::new(
            "WithBasicAuth",
            "Creates a new FlurlRequest with the URL and sets the Authorization header according to Basic Authentication protocol.",
        )
        .param("username", "string", "Username of authenticating user.")
        .param("password", "string", "Password of authenticating user."),
        FluentMethod::new(
            "WithOAuthBearerToken",
            "Creates a new FlurlRequest with the URL and sets the Authorization header with a bearer token according to OAuth 2.0 specification.",
        )
        .param("token", "string", "The acquired oAuth bearer token."),
        // cookies
        FluentMethod::new(
            "WithCookie",
            "Creates a new FlurlRequest with the URL and sets an HTTP cookie to be sent.",
        )
        .param("cookie", "Cookie", "The cookie to set."),
        FluentMethod::new(
            "WithCookie",
            "Creates a new FlurlRequest with the URL and sets an HTTP cookie to be sent.",
        )
        .param("name", "string", "The cookie name.")
        .param("value", "object", "The cookie value.")
        .param_with_default(
            "expires",
            "DateTime?",
            "The cookie expiration (optional). If excluded, cookie only lives for duration of session.",
            "null",
        ),
        FluentMethod::new(
            "WithCookies",
            "Creates a new FlurlRequest with the URL and sets HTTP cookies to be sent, based on property names/values of the provided object, or keys/values if object is a dictionary.",
        )
        .param(
            "cookies",
            "object",
            "Names/values of HTTP cookies to set. Typically an anonymous object or IDictionary.",
        )
        .param_with_default(
            "expires",
            "DateTime?",
            "Expiration for all cookies (optional). If excluded, cookies only live for duration of session.",
            "null",
        ),
        // settings
        FluentMethod::new(
            "ConfigureRequest",
            "Creates a new FlurlRequest with the URL and allows changing its Settings inline.",
        )
        .param(
            "action",
            "Action<FlurlHttpSettings>",
            "A delegate defining the Settings changes.",
        ),
        FluentMethod::new(
            "WithTimeout",
            "Creates a new FlurlRequest with the URL and sets the request timeout.",
        )
        .param("timespan", "TimeSpan", "Time to wait before the request times out."),
        FluentMethod::new(
            "WithTimeout",
            "Creates a new FlurlRequest with the URL and sets the request timeout.",
        )
        .param("seconds", "int", "Seconds to wait before the request times out."),
        FluentMethod::new(
            "AllowHttpStatus",
            "Creates a new FlurlRequest with the URL and adds a pattern representing an HTTP status code or range of codes which (in addition to 2xx) will NOT result in a FlurlHttpException being thrown.",
        )
        .param(
            "pattern",
            "string",
            "Examples: \"3xx\", \"100,300,600\", \"100-299,6xx\"",
        ),
        FluentMethod::new(
            "AllowHttpStatus",
            "Creates a new FlurlRequest with the URL and adds an HttpStatusCode which (in addition to 2xx) will NOT result in a FlurlHttpException being thrown.",
        )
        .param("statusCodes", "params HttpStatusCode[]", "The HttpStatusCode(s) to allow."),
        FluentMethod::new(
            "AllowAnyHttpStatus",
            "Creates a new FlurlRequest with the URL and configures it to allow any returned HTTP status without throwing a FlurlHttpException.",
        ),
        FluentMethod::new(
            "WithAutoRedirect",
            "Creates a new FlurlRequest with the URL and configures whether redirects are automatically followed.",
        )
        .param(
            "enabled",
            "bool",
            "true if Flurl should automatically send a new request to the redirect URL, false if it should not.",
        ),
    ]
}
