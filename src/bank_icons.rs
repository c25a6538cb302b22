//! Bank name -> icon lookup for payment method rows.
//!
//! Icons are styled badges (`bank-icon--<name>` in main.css) with a short glyph.

pub const DEFAULT_ICON_SIZE: u32 = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct BankIcon {
    pub name: &'static str,
    pub glyph: &'static str,
    pub size: u32,
}

impl BankIcon {
    pub fn class_name(&self) -> String {
        format!("bank-icon bank-icon--{}", self.name)
    }
}

// Matched by substring against the lowercased bank name, first hit wins
const KNOWN_BANKS: &[(&str, &str, &str)] = &[
    ("american express", "american-express", "AX"),
    ("amex", "american-express", "AX"),
    ("bank of america", "bank-of-america", "BA"),
    ("bbva", "bbva-compass", "BB"),
    ("capital one", "capital-one", "C1"),
    ("chase", "chase", "CH"),
    ("charles schwab", "charles-schwab", "CS"),
    ("schwab", "charles-schwab", "CS"),
    ("citizens", "citizens-bank", "CZ"),
    ("citi", "citibank", "CI"),
    ("discover", "discover", "DI"),
    ("fidelity", "fidelity", "FI"),
    ("huntington", "huntington-bank", "HB"),
    ("navy federal", "navy-federal-credit-union", "NF"),
    ("pnc", "pnc", "PN"),
    ("regions", "regions-bank", "RB"),
    ("suntrust", "suntrust", "ST"),
    ("td bank", "td-bank", "TD"),
    ("us bank", "us-bank", "US"),
    ("usaa", "usaa", "UA"),
];

const GENERIC_BANK: (&str, &str) = ("generic-bank", "🏦");

pub fn get_bank_icon(bank_name: &str) -> BankIcon {
    let lowered = bank_name.to_lowercase();
    let (name, glyph) = KNOWN_BANKS
        .iter()
        .find(|(needle, _, _)| !lowered.is_empty() && lowered.contains(needle))
        .map(|(_, name, glyph)| (*name, *glyph))
        .unwrap_or(GENERIC_BANK);

    BankIcon {
        name,
        glyph,
        size: DEFAULT_ICON_SIZE,
    }
}
