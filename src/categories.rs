use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};
use crate::filter::Side;
use crate::models::{Transaction, OTHER_LABEL};

/// Category lists shipped with the binary, used when no file is configured.
pub const DEFAULT_CATEGORIES_JSON: &str = include_str!("../data/categories.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub label: String,
    #[serde(default)]
    pub parties: Vec<String>,
}

/// On-disk form of the income and outgo lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default)]
    pub income: Vec<CategoryDef>,
    #[serde(default)]
    pub outgo: Vec<CategoryDef>,
}

impl CategoryConfig {
    pub fn builtin() -> Result<Self> {
        Ok(serde_json::from_str(DEFAULT_CATEGORIES_JSON)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        tracing::debug!("loaded category lists from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise fall back to the built-in lists.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Self::builtin(),
        }
    }

    pub fn defs(&self, side: Side) -> &[CategoryDef] {
        match side {
            Side::Income => &self.income,
            Side::Outgo => &self.outgo,
        }
    }

    pub fn build(&self, side: Side) -> Result<CategoryMap> {
        CategoryMap::new(side, self.defs(side))
    }

    pub fn build_all(&self) -> Result<CategorySet> {
        Ok(CategorySet {
            income: self.build(Side::Income)?,
            outgo: self.build(Side::Outgo)?,
        })
    }
}

/// Exact-match lookup from party name to category label for one side.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    side: Side,
    lookup: HashMap<String, String>,
    labels: Vec<String>,
}

impl CategoryMap {
    /// Fails if a party is listed under two different labels, or a label is defined twice.
    pub fn new(side: Side, defs: &[CategoryDef]) -> Result<Self> {
        let mut lookup: HashMap<String, String> = HashMap::new();
        let mut labels: Vec<String> = Vec::new();

        for def in defs {
            let label = def.label.trim().to_string();
            if labels.contains(&label) {
                return Err(BudgetError::DuplicateCategory(label));
            }
            for party in &def.parties {
                let party = party.trim().to_string();
                if let Some(first) = lookup.get(&party) {
                    if *first != label {
                        return Err(BudgetError::DuplicateParty {
                            party,
                            first: first.clone(),
                            second: label,
                        });
                    }
                    continue;
                }
                lookup.insert(party, label.clone());
            }
            labels.push(label);
        }

        Ok(Self {
            side,
            lookup,
            labels,
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn label_for(&self, party: &str) -> Option<&str> {
        self.lookup.get(party.trim()).map(String::as_str)
    }

    pub fn is_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Canonical labels in definition order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn party_count(&self) -> usize {
        self.lookup.len()
    }
}

#[derive(Debug, Clone)]
pub struct CategorySet {
    pub income: CategoryMap,
    pub outgo: CategoryMap,
}

impl CategorySet {
    pub fn for_side(&self, side: Side) -> &CategoryMap {
        match side {
            Side::Income => &self.income,
            Side::Outgo => &self.outgo,
        }
    }
}

/// Replace each party with its category label. With `collapse_others`, anything that is
/// not a label afterwards becomes OTHER. Dates and amounts pass through untouched.
pub fn categorize(txns: &[Transaction], map: &CategoryMap, collapse_others: bool) -> Vec<Transaction> {
    txns.iter()
        .map(|t| {
            let party = match map.label_for(&t.party) {
                Some(label) => label.to_string(),
                None if collapse_others && !map.is_label(&t.party) => OTHER_LABEL.to_string(),
                None => t.party.clone(),
            };
            Transaction::new(t.date, party, t.amount)
        })
        .collect()
}
