//! Breach category enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The 10 breach categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachCategory {
    Hacking,
    Malware,
    Phishing,
    Ransomware,
    Insider,
    PhysicalTheft,
    PortableDevice,
    UnintendedDisclosure,
    ThirdParty,
    PaymentCard,
}

impl BreachCategory {
    pub fn all() -> &'static [BreachCategory] {
        &[
            Self::Hacking, Self::Malware, Self::Phishing, Self::Ransomware,
            Self::Insider, Self::PhysicalTheft, Self::PortableDevice,
            Self::UnintendedDisclosure, Self::ThirdParty, Self::PaymentCard,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hacking => "hacking",
            Self::Malware => "malware",
            Self::Phishing => "phishing",
            Self::Ransomware => "ransomware",
            Self::Insider => "insider",
            Self::PhysicalTheft => "physical_theft",
            Self::PortableDevice => "portable_device",
            Self::UnintendedDisclosure => "unintended_disclosure",
            Self::ThirdParty => "third_party",
            Self::PaymentCard => "payment_card",
        }
    }

    /// Position in the canonical category order. Stable across runs;
    /// used for flag indexing and output column order.
    pub fn index(&self) -> usize {
        match self {
            Self::Hacking => 0,
            Self::Malware => 1,
            Self::Phishing => 2,
            Self::Ransomware => 3,
            Self::Insider => 4,
            Self::PhysicalTheft => 5,
            Self::PortableDevice => 6,
            Self::UnintendedDisclosure => 7,
            Self::ThirdParty => 8,
            Self::PaymentCard => 9,
        }
    }

    /// Parse a category from its snake_case name.
    pub fn parse_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.name() == s)
    }
}

impl fmt::Display for BreachCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
