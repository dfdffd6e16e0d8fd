use serde::{Deserialize, Serialize};

/// Currencies the books are kept in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Lbp,
}

impl Currency {
    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Lbp => "LBP",
        }
    }

    /// Symbol as printed by the `ar-LB` locale
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "US$",
            Currency::Lbp => "ل.ل.",
        }
    }

    /// Minor digits shown when formatting amounts
    pub fn fraction_digits(&self) -> usize {
        match self {
            Currency::Usd => 2,
            Currency::Lbp => 0,
        }
    }

    /// `LBP` selects the pound, anything else (including unknown codes) is USD.
    pub fn from_code(code: &str) -> Self {
        if code == "LBP" {
            Currency::Lbp
        } else {
            Currency::Usd
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
