//! Display Classification Table
//!
//! Static mapping from groups of hardware identifiers to the physical pixel
//! density of the panel they share. Identifiers are grouped by density; the
//! marketing name is kept next to each identifier for diagnostics.

use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Table Types
// =============================================================================

/// One hardware identifier and the model it denotes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceModel {
    /// Raw identifier reported by the platform (e.g. `"iPhone14,5"`)
    pub identifier: &'static str,
    /// Marketing name of the model
    pub name: &'static str,
}

const fn model(identifier: &'static str, name: &'static str) -> DeviceModel {
    DeviceModel { identifier, name }
}

/// A group of identifiers sharing one panel density
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ClassificationEntry {
    /// Models using a panel of this density
    pub models: &'static [DeviceModel],
    /// Physical pixels per inch
    pub ppi: f64,
}

impl ClassificationEntry {
    /// Identifiers in this entry
    pub fn model_identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.models.iter().map(|m| m.identifier)
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, identifier: &str) -> bool {
        self.models.iter().any(|m| m.identifier == identifier)
    }
}

/// Ordered, immutable sequence of classification entries
#[derive(Debug, Clone, Copy)]
pub struct ClassificationTable {
    entries: &'static [ClassificationEntry],
}

impl ClassificationTable {
    /// Wrap a static entry list
    pub const fn new(entries: &'static [ClassificationEntry]) -> Self {
        Self { entries }
    }

    /// Entries in their defined order
    pub fn entries(&self) -> &'static [ClassificationEntry] {
        self.entries
    }

    /// Every model across all entries, in table order
    pub fn models(&self) -> impl Iterator<Item = (&'static DeviceModel, f64)> {
        self.entries
            .iter()
            .flat_map(|e| e.models.iter().map(move |m| (m, e.ppi)))
    }

    /// Total number of identifiers (duplicates counted)
    pub fn identifier_count(&self) -> usize {
        self.entries.iter().map(|e| e.models.len()).sum()
    }

    /// Distinct densities present, ascending
    pub fn distinct_densities(&self) -> Vec<f64> {
        let mut densities: Vec<f64> = self.entries.iter().map(|e| e.ppi).collect();
        densities.sort_by(|a, b| a.total_cmp(b));
        densities.dedup();
        densities
    }

    /// Identifiers that appear more than once (empty for a well-formed table)
    pub fn duplicates(&self) -> BTreeSet<&'static str> {
        let mut seen: HashMap<&'static str, usize> = HashMap::new();
        for (model, _) in self.models() {
            *seen.entry(model.identifier).or_default() += 1;
        }
        seen.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id)
            .collect()
    }

    /// First entry containing `identifier`, linear scan
    pub fn find(&self, identifier: &str) -> Option<&'static ClassificationEntry> {
        self.entries.iter().find(|e| e.contains(identifier))
    }
}

// =============================================================================
// Built-in Table
// =============================================================================

/// Built-in table of known devices
pub static CLASSIFICATION_TABLE: ClassificationTable = ClassificationTable::new(&[
    ClassificationEntry {
        models: &[
            model("iPhone14,4", "iPhone 13 mini"),
            model("iPhone13,1", "iPhone 12 mini"),
        ],
        ppi: 476.0,
    },
    ClassificationEntry {
        models: &[
            model("iPhone14,7", "iPhone 14"),
            model("iPhone15,2", "iPhone 14 Pro"),
            model("iPhone15,3", "iPhone 14 Pro Max"),
            model("iPhone14,5", "iPhone 13"),
            model("iPhone14,2", "iPhone 13 Pro"),
            model("iPhone13,2", "iPhone 12"),
            model("iPhone13,3", "iPhone 12 Pro"),
        ],
        ppi: 460.0,
    },
    ClassificationEntry {
        models: &[
            model("iPhone14,8", "iPhone 14 Plus"),
            model("iPhone14,3", "iPhone 13 Pro Max"),
            model("iPhone13,4", "iPhone 12 Pro Max"),
            model("iPhone12,3", "iPhone 11 Pro"),
            model("iPhone12,5", "iPhone 11 Pro Max"),
            model("iPhone11,2", "iPhone XS"),
            model("iPhone11,4", "iPhone XS Max"),
            model("iPhone11,6", "iPhone XS Max"),
            model("iPhone10,3", "iPhone X"),
            model("iPhone10,6", "iPhone X"),
        ],
        ppi: 458.0,
    },
    ClassificationEntry {
        models: &[
            model("iPhone10,2", "iPhone 8 Plus"),
            model("iPhone10,5", "iPhone 8 Plus"),
            model("iPhone9,2", "iPhone 7 Plus"),
            model("iPhone9,4", "iPhone 7 Plus"),
            model("iPhone8,2", "iPhone 6S Plus"),
            model("iPhone7,1", "iPhone 6 Plus"),
        ],
        ppi: 401.0,
    },
    ClassificationEntry {
        models: &[
            model("iPhone12,1", "iPhone 11"),
            model("iPhone11,8", "iPhone XR"),
            model("iPhone14,6", "iPhone SE (3rd generation)"),
            model("iPhone12,8", "iPhone SE (2nd generation)"),
            model("iPhone10,1", "iPhone 8"),
            model("iPhone10,4", "iPhone 8"),
            model("iPhone9,1", "iPhone 7"),
            model("iPhone9,3", "iPhone 7"),
            model("iPhone8,1", "iPhone 6S"),
            model("iPhone7,2", "iPhone 6"),
            model("iPhone8,4", "iPhone SE"),
            model("iPhone6,1", "iPhone 5S"),
            model("iPhone6,2", "iPhone 5S"),
            model("iPhone5,3", "iPhone 5C"),
            model("iPhone5,4", "iPhone 5C"),
            model("iPhone5,1", "iPhone 5"),
            model("iPhone5,2", "iPhone 5"),
            model("iPod9,1", "iPod touch (7th generation)"),
            model("iPod7,1", "iPod touch (6th generation)"),
            model("iPod5,1", "iPod touch (5th generation)"),
            model("iPhone4,1", "iPhone 4S"),
            model("iPad14,1", "iPad mini (6th generation)"),
            model("iPad14,2", "iPad mini (6th generation)"),
            model("iPad11,1", "iPad mini (5th generation)"),
            model("iPad11,2", "iPad mini (5th generation)"),
            model("iPad5,1", "iPad mini 4"),
            model("iPad5,2", "iPad mini 4"),
            model("iPad4,7", "iPad mini 3"),
            model("iPad4,8", "iPad mini 3"),
            model("iPad4,9", "iPad mini 3"),
            model("iPad4,4", "iPad mini 2"),
            model("iPad4,5", "iPad mini 2"),
            model("iPad4,6", "iPad mini 2"),
        ],
        ppi: 326.0,
    },
    ClassificationEntry {
        models: &[
            model("iPad13,16", "iPad Air (5th generation)"),
            model("iPad13,17", "iPad Air (5th generation)"),
            model("iPad12,1", "iPad (9th generation)"),
            model("iPad12,2", "iPad (9th generation)"),
            model("iPad13,8", "iPad Pro (12.9\", 5th generation)"),
            model("iPad13,9", "iPad Pro (12.9\", 5th generation)"),
            model("iPad13,10", "iPad Pro (12.9\", 5th generation)"),
            model("iPad13,11", "iPad Pro (12.9\", 5th generation)"),
            model("iPad13,4", "iPad Pro (11\", 3rd generation)"),
            model("iPad13,5", "iPad Pro (11\", 3rd generation)"),
            model("iPad13,6", "iPad Pro (11\", 3rd generation)"),
            model("iPad13,7", "iPad Pro (11\", 3rd generation)"),
            model("iPad13,1", "iPad Air (4th generation)"),
            model("iPad13,2", "iPad Air (4th generation)"),
            model("iPad11,6", "iPad (8th generation)"),
            model("iPad11,7", "iPad (8th generation)"),
            model("iPad8,11", "iPad Pro (12.9\", 4th generation)"),
            model("iPad8,12", "iPad Pro (12.9\", 4th generation)"),
            model("iPad8,9", "iPad Pro (11\", 2nd generation)"),
            model("iPad8,10", "iPad Pro (11\", 2nd generation)"),
            model("iPad7,11", "iPad (7th generation)"),
            model("iPad7,12", "iPad (7th generation)"),
            model("iPad11,3", "iPad Air (3rd generation)"),
            model("iPad11,4", "iPad Air (3rd generation)"),
            model("iPad8,5", "iPad Pro (12.9\", 3rd generation)"),
            model("iPad8,6", "iPad Pro (12.9\", 3rd generation)"),
            model("iPad8,7", "iPad Pro (12.9\", 3rd generation)"),
            model("iPad8,8", "iPad Pro (12.9\", 3rd generation)"),
            model("iPad8,1", "iPad Pro (11\")"),
            model("iPad8,2", "iPad Pro (11\")"),
            model("iPad8,3", "iPad Pro (11\")"),
            model("iPad8,4", "iPad Pro (11\")"),
            model("iPad7,5", "iPad (6th generation)"),
            model("iPad7,6", "iPad (6th generation)"),
            model("iPad7,3", "iPad Pro (10.5\")"),
            model("iPad7,4", "iPad Pro (10.5\")"),
            model("iPad7,1", "iPad Pro (12.9\", 2nd generation)"),
            model("iPad7,2", "iPad Pro (12.9\", 2nd generation)"),
            model("iPad6,11", "iPad (5th generation)"),
            model("iPad6,12", "iPad (5th generation)"),
            model("iPad6,7", "iPad Pro (12.9\")"),
            model("iPad6,8", "iPad Pro (12.9\")"),
            model("iPad6,3", "iPad Pro (9.7\")"),
            model("iPad6,4", "iPad Pro (9.7\")"),
            model("iPad5,3", "iPad Air 2"),
            model("iPad5,4", "iPad Air 2"),
            model("iPad4,1", "iPad Air"),
            model("iPad4,2", "iPad Air"),
            model("iPad4,3", "iPad Air"),
            model("iPad3,4", "iPad (4th generation)"),
            model("iPad3,5", "iPad (4th generation)"),
            model("iPad3,6", "iPad (4th generation)"),
            model("iPad3,1", "iPad (3rd generation)"),
            model("iPad3,2", "iPad (3rd generation)"),
            model("iPad3,3", "iPad (3rd generation)"),
        ],
        ppi: 264.0,
    },
    ClassificationEntry {
        models: &[
            model("iPad2,5", "iPad mini"),
            model("iPad2,6", "iPad mini"),
            model("iPad2,7", "iPad mini"),
        ],
        ppi: 163.0,
    },
    ClassificationEntry {
        models: &[
            model("iPad2,1", "iPad 2"),
            model("iPad2,2", "iPad 2"),
            model("iPad2,3", "iPad 2"),
            model("iPad2,4", "iPad 2"),
        ],
        ppi: 132.0,
    },
]);
