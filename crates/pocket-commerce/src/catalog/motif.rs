//! Themed motifs shown alongside catalog items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A decorative motif tag for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motif {
    Bell,
    Star,
    ChefHat,
    Zap,
    Gift,
    IceCream,
    Coffee,
    Utensils,
    AnywhereDoor,
    TakeKopter,
    SmallLight,
}

/// Display data for a motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotifInfo {
    /// Kebab-case tag, as written in config and JSON.
    pub tag: &'static str,
    /// Human readable label.
    pub label: &'static str,
    /// Single glyph for terminal rendering.
    pub glyph: &'static str,
}

/// Lookup table from motif to its display data.
const MOTIFS: &[(Motif, MotifInfo)] = &[
    (Motif::Bell, MotifInfo { tag: "bell", label: "Doraemon's Bell", glyph: "\u{1f514}" }),
    (Motif::Star, MotifInfo { tag: "star", label: "Star", glyph: "\u{2b50}" }),
    (Motif::ChefHat, MotifInfo { tag: "chef-hat", label: "Chef Hat", glyph: "\u{1f468}\u{200d}\u{1f373}" }),
    (Motif::Zap, MotifInfo { tag: "zap", label: "Zap", glyph: "\u{26a1}" }),
    (Motif::Gift, MotifInfo { tag: "gift", label: "Gift", glyph: "\u{1f381}" }),
    (Motif::IceCream, MotifInfo { tag: "ice-cream", label: "Ice Cream", glyph: "\u{1f368}" }),
    (Motif::Coffee, MotifInfo { tag: "coffee", label: "Coffee", glyph: "\u{2615}" }),
    (Motif::Utensils, MotifInfo { tag: "utensils", label: "Utensils", glyph: "\u{1f374}" }),
    (Motif::AnywhereDoor, MotifInfo { tag: "anywhere-door", label: "Anywhere Door", glyph: "\u{1f6aa}" }),
    (Motif::TakeKopter, MotifInfo { tag: "take-kopter", label: "Take-Kopter", glyph: "\u{1f681}" }),
    (Motif::SmallLight, MotifInfo { tag: "small-light", label: "Small Light", glyph: "\u{1f526}" }),
];

impl Motif {
    /// Motif used when an item has none.
    pub const FALLBACK: Motif = Motif::Utensils;

    /// All motifs in table order.
    pub fn all() -> impl Iterator<Item = Motif> {
        MOTIFS.iter().map(|(m, _)| *m)
    }

    /// Resolve display data through the lookup table.
    pub fn info(&self) -> MotifInfo {
        MOTIFS
            .iter()
            .find(|(m, _)| m == self)
            .map(|(_, info)| *info)
            .unwrap_or(MOTIFS[0].1)
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn glyph(&self) -> &'static str {
        self.info().glyph
    }
}

impl fmt::Display for Motif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().tag)
    }
}

impl FromStr for Motif {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MOTIFS
            .iter()
            .find(|(_, info)| info.tag.eq_ignore_ascii_case(s.trim()))
            .map(|(m, _)| *m)
            .ok_or_else(|| format!("unknown motif: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [Motif; 11] = [
        Motif::Bell,
        Motif::Star,
        Motif::ChefHat,
        Motif::Zap,
        Motif::Gift,
        Motif::IceCream,
        Motif::Coffee,
        Motif::Utensils,
        Motif::AnywhereDoor,
        Motif::TakeKopter,
        Motif::SmallLight,
    ];

    #[test]
    fn test_every_motif_has_an_entry() {
        assert_eq!(MOTIFS.len(), VARIANTS.len());
        for motif in VARIANTS {
            let rows = MOTIFS.iter().filter(|(m, _)| *m == motif).count();
            assert_eq!(rows, 1, "{motif:?} needs exactly one table row");

            let serde_tag = serde_json::to_value(motif).unwrap();
            assert_eq!(serde_tag, motif.info().tag);
            assert_eq!(motif.info().tag.parse::<Motif>(), Ok(motif));
        }
    }

    #[test]
    fn test_tags_match_serde() {
        let json = serde_json::to_string(&Motif::ChefHat).unwrap();
        assert_eq!(json, "\"chef-hat\"");
        assert_eq!(Motif::ChefHat.to_string(), "chef-hat");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Motif::TakeKopter.label(), "Take-Kopter");
        assert_eq!(Motif::FALLBACK, Motif::Utensils);
        assert!("flux-capacitor".parse::<Motif>().is_err());
    }
}
