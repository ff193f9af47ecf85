use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Companies followed by the tracker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Company {
    Nvidia,
    Meta,
    Apple,
    Microsoft,
    Alphabet,
    Amazon,
    Tesla,
}

impl Company {
    pub const ALL: [Company; 7] = [
        Company::Nvidia,
        Company::Meta,
        Company::Apple,
        Company::Microsoft,
        Company::Alphabet,
        Company::Amazon,
        Company::Tesla,
    ];

    /// Key used by the matrix payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Company::Nvidia => "NVIDIA",
            Company::Meta => "META",
            Company::Apple => "APPLE",
            Company::Microsoft => "MICROSOFT",
            Company::Alphabet => "ALPHABET",
            Company::Amazon => "AMAZON",
            Company::Tesla => "TESLA",
        }
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update categories, in section order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackerCategory {
    Regulatory,
    Product,
    Investment,
    AiDevelopment,
    Partnerships,
    MarketImpact,
}

impl TrackerCategory {
    pub const ALL: [TrackerCategory; 6] = [
        TrackerCategory::Regulatory,
        TrackerCategory::Product,
        TrackerCategory::Investment,
        TrackerCategory::AiDevelopment,
        TrackerCategory::Partnerships,
        TrackerCategory::MarketImpact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerCategory::Regulatory => "REGULATORY",
            TrackerCategory::Product => "PRODUCT",
            TrackerCategory::Investment => "INVESTMENT",
            TrackerCategory::AiDevelopment => "AI_DEVELOPMENT",
            TrackerCategory::Partnerships => "PARTNERSHIPS",
            TrackerCategory::MarketImpact => "MARKET_IMPACT",
        }
    }

    /// Section heading, e.g. `AI DEVELOPMENT`.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for TrackerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest update for one company in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub source_url: String,
}

/// Company → category → latest update, keyed by the wire names.
///
/// Keys are kept as strings so that companies or categories the client does
/// not know about are carried along and simply never rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackerMatrix(pub BTreeMap<String, BTreeMap<String, CompanyUpdate>>);

impl TrackerMatrix {
    pub fn get(&self, company: Company, category: TrackerCategory) -> Option<&CompanyUpdate> {
        self.0
            .get(company.as_str())
            .and_then(|row| row.get(category.as_str()))
    }

    /// Cards for one category section: every company (in display order)
    /// that has an update there, restricted to `selected` when set.
    pub fn section(
        &self,
        category: TrackerCategory,
        selected: Option<Company>,
    ) -> Vec<(Company, CompanyUpdate)> {
        Company::ALL
            .iter()
            .filter(|c| selected.map_or(true, |s| s == **c))
            .filter_map(|c| self.get(*c, category).map(|u| (*c, u.clone())))
            .collect()
    }
}

/// Clicking the selected company clears the selection; any other selects it.
pub fn toggle_company(current: Option<Company>, clicked: Company) -> Option<Company> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}
