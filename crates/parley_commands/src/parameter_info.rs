//! Built parameter descriptor.

/// An immutable command parameter.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ParameterInfo {
    name: String,
    summary: Option<String>,
    default_value: Option<String>,
    is_optional: bool,
    is_remainder: bool,
    is_multiple: bool,
}

impl ParameterInfo {
    pub(crate) fn new(
        name: String,
        summary: Option<String>,
        default_value: Option<String>,
        is_optional: bool,
        is_remainder: bool,
        is_multiple: bool,
    ) -> Self {
        Self {
            name,
            summary,
            default_value,
            is_optional,
            is_remainder,
            is_multiple,
        }
    }
}
