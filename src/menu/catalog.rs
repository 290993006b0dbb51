use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::menu::constants::*;

/// A selectable option from one add-on catalog.
///
/// Implementors are plain enums whose discriminant indexes their static table
/// in `constants`.
pub trait CatalogOption: Copy + Sized + 'static {
    /// Add-on kind name used in messages ("milk", "syrup", ...).
    const KIND: &'static str;

    /// Every option, in catalog order.
    const ALL: &'static [Self];

    fn entry(&self) -> &'static CatalogEntry;

    fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Find an option by display name.
    ///
    /// Tries an exact case-insensitive match, then a prefix shared by exactly
    /// one option, then the closest Jaro-Winkler candidate above
    /// `FUZZY_MATCH_THRESHOLD`.
    fn find(name: &str) -> Option<Self> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        if let Some(exact) = Self::ALL
            .iter()
            .find(|o| o.name().to_lowercase() == query)
        {
            return Some(*exact);
        }

        let prefixed: Vec<Self> = Self::ALL
            .iter()
            .filter(|o| o.name().to_lowercase().starts_with(&query))
            .copied()
            .collect();
        if let [only] = prefixed.as_slice() {
            return Some(*only);
        }

        let mut candidates: Vec<(Self, f64)> = Self::ALL
            .iter()
            .map(|o| (*o, jaro_winkler(&o.name().to_lowercase(), &query)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.first().map(|(o, _)| *o)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilkKind {
    Whole,
    Skim,
    Almond,
    Soy,
    Oat,
    Coconut,
}

impl CatalogOption for MilkKind {
    const KIND: &'static str = "milk";
    const ALL: &'static [Self] = &[
        MilkKind::Whole,
        MilkKind::Skim,
        MilkKind::Almond,
        MilkKind::Soy,
        MilkKind::Oat,
        MilkKind::Coconut,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        &MILK_CATALOG[*self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SugarKind {
    White,
    Brown,
    Raw,
    Honey,
    Stevia,
    Agave,
}

impl CatalogOption for SugarKind {
    const KIND: &'static str = "sugar";
    const ALL: &'static [Self] = &[
        SugarKind::White,
        SugarKind::Brown,
        SugarKind::Raw,
        SugarKind::Honey,
        SugarKind::Stevia,
        SugarKind::Agave,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        &SUGAR_CATALOG[*self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlavorKind {
    Vanilla,
    Caramel,
    Hazelnut,
    Cinnamon,
    Mocha,
    Peppermint,
}

impl CatalogOption for FlavorKind {
    const KIND: &'static str = "flavor";
    const ALL: &'static [Self] = &[
        FlavorKind::Vanilla,
        FlavorKind::Caramel,
        FlavorKind::Hazelnut,
        FlavorKind::Cinnamon,
        FlavorKind::Mocha,
        FlavorKind::Peppermint,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        &FLAVOR_CATALOG[*self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyrupKind {
    Simple,
    Vanilla,
    Caramel,
    Chocolate,
    Maple,
    Lavender,
}

impl CatalogOption for SyrupKind {
    const KIND: &'static str = "syrup";
    const ALL: &'static [Self] = &[
        SyrupKind::Simple,
        SyrupKind::Vanilla,
        SyrupKind::Caramel,
        SyrupKind::Chocolate,
        SyrupKind::Maple,
        SyrupKind::Lavender,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        &SYRUP_CATALOG[*self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotKind {
    Regular,
    Ristretto,
    Lungo,
    Decaf,
    Blonde,
}

impl CatalogOption for ShotKind {
    const KIND: &'static str = "shot";
    const ALL: &'static [Self] = &[
        ShotKind::Regular,
        ShotKind::Ristretto,
        ShotKind::Lungo,
        ShotKind::Decaf,
        ShotKind::Blonde,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        &SHOT_CATALOG[*self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreamKind {
    Classic,
    LowFat,
    Vanilla,
    Chocolate,
    Coconut,
}

impl CatalogOption for CreamKind {
    const KIND: &'static str = "whipped cream";
    const ALL: &'static [Self] = &[
        CreamKind::Classic,
        CreamKind::LowFat,
        CreamKind::Vanilla,
        CreamKind::Chocolate,
        CreamKind::Coconut,
    ];

    fn entry(&self) -> &'static CatalogEntry {
        &CREAM_CATALOG[*self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_line_up_with_enums() {
        assert_eq!(MilkKind::ALL.len(), MILK_CATALOG.len());
        assert_eq!(SugarKind::ALL.len(), SUGAR_CATALOG.len());
        assert_eq!(FlavorKind::ALL.len(), FLAVOR_CATALOG.len());
        assert_eq!(SyrupKind::ALL.len(), SYRUP_CATALOG.len());
        assert_eq!(ShotKind::ALL.len(), SHOT_CATALOG.len());
        assert_eq!(CreamKind::ALL.len(), CREAM_CATALOG.len());

        assert_eq!(MilkKind::Almond.name(), "Almond");
        assert_eq!(SugarKind::Honey.name(), "Honey");
        assert_eq!(ShotKind::Ristretto.name(), "Ristretto");
        assert_eq!(CreamKind::LowFat.name(), "Low-Fat");
    }

    #[test]
    fn test_find_exact_case_insensitive() {
        assert_eq!(MilkKind::find("ALMOND"), Some(MilkKind::Almond));
        assert_eq!(SugarKind::find("brown sugar"), Some(SugarKind::Brown));
    }

    #[test]
    fn test_find_prefix() {
        assert_eq!(SugarKind::find("white"), Some(SugarKind::White));
        assert_eq!(FlavorKind::find("pepper"), Some(FlavorKind::Peppermint));
        assert_eq!(MilkKind::find("so"), Some(MilkKind::Soy));
        assert_eq!(CreamKind::find("co"), Some(CreamKind::Coconut));
    }

    #[test]
    fn test_find_ambiguous_prefix_is_not_guessed() {
        // Classic, Chocolate and Coconut all start with "c"
        assert_eq!(CreamKind::find("c"), None);
        assert_eq!(SyrupKind::find("ca"), Some(SyrupKind::Caramel));
        assert_eq!(SugarKind::find("r"), Some(SugarKind::Raw));
    }

    #[test]
    fn test_find_fuzzy() {
        assert_eq!(MilkKind::find("almnod"), Some(MilkKind::Almond));
        assert_eq!(FlavorKind::find("vanila"), Some(FlavorKind::Vanilla));
    }

    #[test]
    fn test_find_rejects_unrelated() {
        assert_eq!(MilkKind::find("espresso"), None);
        assert_eq!(ShotKind::find(""), None);
    }
}
