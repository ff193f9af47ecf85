use serde::{Deserialize, Serialize};

/// A row returned by `GET /api/companies/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub founded_year: Option<i32>,
}

impl CompanyProfile {
    /// Meta line under the name, e.g. `Semiconductors • Santa Clara • Founded 1993`.
    pub fn meta_line(&self) -> String {
        let mut parts: Vec<String> = [&self.industry, &self.location]
            .into_iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect();
        if let Some(year) = self.founded_year {
            parts.push(format!("Founded {year}"));
        }
        parts.join(" • ")
    }
}
