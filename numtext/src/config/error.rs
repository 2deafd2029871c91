/// Configuration error variants.
#[derive(Debug, thiserror::Error)]
pub enum NumtextConfigError {
    /// The log filter directives were empty.
    #[error("[logging] The filter directives must not be empty")]
    EmptyLogDirectives,

    /// The log filter directives could not be parsed.
    #[error("[logging] Invalid filter directives '{0}': {1}")]
    InvalidLogDirectives(String, #[source] tracing_subscriber::filter::ParseError),
}
