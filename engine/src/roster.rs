//! The fixed agency roster shown on the affiliation screen.

use operative_types::Agency;

/// Accent role for an agency's card. The TUI maps this onto the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Amber,
    Cyan,
    Crimson,
}

/// Static card copy for one agency.
#[derive(Debug, Clone, Copy)]
pub struct AgencyProfile {
    pub agency: Agency,
    pub codename: &'static str,
    pub doctrine: &'static str,
    pub bonus: &'static str,
    pub accent: Accent,
}

/// All selectable agencies, in presentation order.
pub const ROSTER: [AgencyProfile; 3] = [
    AgencyProfile {
        agency: Agency::Cia,
        codename: "THE COMPANY",
        doctrine: "Human Intelligence & Destabilization",
        bonus: "BONUS: Social Engineering +20%",
        accent: Accent::Amber,
    },
    AgencyProfile {
        agency: Agency::Nsa,
        codename: "THE FORT",
        doctrine: "Signals Intelligence & Surveillance",
        bonus: "BONUS: Satellite Uplink +20%",
        accent: Accent::Cyan,
    },
    AgencyProfile {
        agency: Agency::Mi6,
        codename: "THE CIRCUS",
        doctrine: "Tradecraft & Political Maneuvering",
        bonus: "BONUS: Subtlety +20%",
        accent: Accent::Crimson,
    },
];
