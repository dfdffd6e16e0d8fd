use serde::{Deserialize, Serialize};

/// Bootstrap contextual alert styles (`alert-{kind}`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    #[default]
    Info,
    Light,
    Dark,
}

impl AlertKind {
    /// Suffix used in the `alert-{kind}` CSS class
    pub fn code(&self) -> &'static str {
        match self {
            AlertKind::Primary => "primary",
            AlertKind::Secondary => "secondary",
            AlertKind::Success => "success",
            AlertKind::Danger => "danger",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
            AlertKind::Light => "light",
            AlertKind::Dark => "dark",
        }
    }

    pub fn all() -> Vec<AlertKind> {
        vec![
            AlertKind::Primary,
            AlertKind::Secondary,
            AlertKind::Success,
            AlertKind::Danger,
            AlertKind::Warning,
            AlertKind::Info,
            AlertKind::Light,
            AlertKind::Dark,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|kind| kind.code() == code)
    }

    /// Unknown names fall back to `Info`, the default severity.
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code.trim()).unwrap_or_default()
    }

    /// Full class list of the banner element.
    pub fn banner_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.code())
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_code() {
        for kind in AlertKind::all() {
            assert_eq!(AlertKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_code_defaults_to_info() {
        assert_eq!(AlertKind::from_code_or_default("fatal"), AlertKind::Info);
        assert_eq!(AlertKind::from_code_or_default(""), AlertKind::Info);
        assert_eq!(AlertKind::from_code_or_default(" danger "), AlertKind::Danger);
    }

    #[test]
    fn test_banner_class() {
        assert_eq!(
            AlertKind::Success.banner_class(),
            "alert alert-success alert-dismissible fade show"
        );
    }
}
