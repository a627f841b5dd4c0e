//! Settings for `TypedDict` code generation.

/// Settings that control code generation behavior.
#[derive(Debug, Clone, Default)]
pub struct GenerateSettings {
    /// When true, validate the schema before code generation and fail on
    /// any invalid or unsupported JSON Schema feature. Collects all issues
    /// and returns them together.
    ///
    /// **Default: false (disabled).** This is the lenient default—consumers
    /// must opt in to strict validation. When false, only the keywords the
    /// generator interprets (`type`, `properties`, `items`, `anyOf`) drive
    /// the output and everything else is silently ignored.
    pub deny_unsupported_schema: bool,
}
