//! Team specific helpers: id preview, file listings, client-side filtering.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Record;

/// Preview the id the backend will derive from the three codes.
///
/// Returns `""` until all three codes are filled in.
pub fn generate_team_id_preview(company_code: &str, dept_code: &str, team_code: &str) -> String {
    let codes = [company_code.trim(), dept_code.trim(), team_code.trim()];
    if codes.iter().any(|code| code.is_empty()) {
        return String::new();
    }
    codes
        .iter()
        .map(|code| code.to_uppercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// A file attached to a team, as listed by the files sub-resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFile {
    /// Full storage key, used for download and delete.
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default, rename = "lastModified", alias = "last_modified")]
    pub last_modified: Option<DateTime<Utc>>,
}

impl TeamFile {
    /// Display name: the explicit name, else the last path segment of the key.
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            return &self.name;
        }
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// Lowercased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        let name = self.display_name();
        name.rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Client-side filter over an already fetched team list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFilter {
    /// Case-insensitive substring matched against name, id, company and department.
    pub search: String,
    /// Exact company name; empty matches every company.
    pub company: String,
}

impl TeamFilter {
    pub fn matches(&self, team: &Record) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_term = term.is_empty()
            || [
                team.text("team_name"),
                team.id.clone(),
                team.text("company"),
                team.text("department"),
            ]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&term));

        let matches_company = self.company.is_empty() || team.text("company") == self.company;

        matches_term && matches_company
    }

    pub fn apply<'a>(&self, teams: &'a [Record]) -> Vec<&'a Record> {
        teams.iter().filter(|team| self.matches(team)).collect()
    }
}

/// Distinct, sorted company names for the company filter.
pub fn company_names(teams: &[Record]) -> Vec<String> {
    teams
        .iter()
        .map(|team| team.text("company"))
        .filter(|company| !company.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use serde_json::json;

    use super::*;
    use crate::TEAMS;

    fn team(id: &str, company: &str, name: &str) -> Record {
        Record::from_value(
            json!({"team_id": id, "company": company, "team_name": name, "department": "Eng"}),
            &TEAMS,
        )
        .unwrap()
    }

    #[test]
    fn preview_needs_all_codes() {
        assert_eq!(generate_team_id_preview("ac", "en", "co"), "AC-EN-CO");
        assert_eq!(generate_team_id_preview("ac", "", "co"), "");
    }

    #[test]
    fn filter_by_term_and_company() {
        let teams = vec![
            team("AC-EN-CO", "Acme", "Core"),
            team("AC-EN-OP", "Acme", "Ops"),
            team("GL-EN-CO", "Globex", "Core Platform"),
        ];

        let filter = TeamFilter {
            search: "core".into(),
            company: String::new(),
        };
        assert_eq!(filter.apply(&teams).len(), 2);

        let filter = TeamFilter {
            search: "core".into(),
            company: "Globex".into(),
        };
        let hits = filter.apply(&teams);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "GL-EN-CO");

        let filter = TeamFilter {
            search: "ac-en".into(),
            company: String::new(),
        };
        assert_eq!(filter.apply(&teams).len(), 2);
    }

    #[test]
    fn companies_are_distinct_and_sorted() {
        let teams = vec![
            team("B-1-1", "Globex", "A"),
            team("A-1-1", "Acme", "B"),
            team("A-1-2", "Acme", "C"),
        ];
        assert_eq!(company_names(&teams), ["Acme", "Globex"]);
    }

    #[test]
    fn file_metadata_is_read_from_listing() {
        let file: TeamFile = serde_json::from_value(json!({
            "key": "team_docs/AC-EN-CO-handbook.PDF",
            "name": "",
            "size": 2048,
            "lastModified": "2025-06-12T10:00:00+00:00",
            "etag": "abc"
        }))
        .unwrap();
        assert_eq!(file.display_name(), "AC-EN-CO-handbook.PDF");
        assert_eq!(file.extension().as_deref(), Some("pdf"));
        assert!(file.last_modified.is_some());
    }
}
