/// Subscriber options, resolved from settings before anything logs.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Directive string applied when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl TracingConfig {
    /// Third-party crates stay at `warn`; this crate and the HTTP layer log at `level`.
    pub fn new(environment: impl Into<String>, level: &str, json_format: bool) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            default_filter: format!("warn,tvilling={level},tower_http={level}"),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new("local", "info", false)
    }
}
