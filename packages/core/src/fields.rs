//! Resolution of logical form fields across historical naming schemes.
//!
//! The same concept has been called `company_code`, `companyCode` and
//! `editCompanyCode` by different form layouts. Each logical field carries an
//! ordered candidate list and the first candidate the source knows about wins.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::Record;

/// A source of raw field values keyed by identifier, typically the presentation layer.
pub trait FieldLookup {
    /// The value for `id`, or `None` when no such field exists.
    fn lookup(&self, id: &str) -> Option<String>;
}

impl FieldLookup for BTreeMap<String, String> {
    fn lookup(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl FieldLookup for HashMap<String, String> {
    fn lookup(&self, id: &str) -> Option<String> {
        self.get(id).cloned()
    }
}

impl FieldLookup for Map<String, Value> {
    fn lookup(&self, id: &str) -> Option<String> {
        self.get(id).and_then(value_text)
    }
}

impl FieldLookup for Record {
    fn lookup(&self, id: &str) -> Option<String> {
        if id == "id" {
            return Some(self.id.clone());
        }
        self.fields.lookup(id)
    }
}

impl<L: FieldLookup + ?Sized> FieldLookup for &L {
    fn lookup(&self, id: &str) -> Option<String> {
        (**self).lookup(id)
    }
}

/// Resolve one logical field: the first candidate present in `source` wins, even
/// when its value is empty. Returns the trimmed value, or `""` if none resolve.
pub fn resolve_field<L: FieldLookup + ?Sized>(candidates: &[&str], source: &L) -> String {
    candidates
        .iter()
        .find_map(|id| source.lookup(id))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// A logical field and the identifiers it may appear under, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalField {
    pub name: &'static str,
    pub candidates: &'static [&'static str],
}

impl LogicalField {
    pub const fn new(name: &'static str, candidates: &'static [&'static str]) -> Self {
        Self { name, candidates }
    }

    pub fn resolve<L: FieldLookup + ?Sized>(&self, source: &L) -> String {
        resolve_field(self.candidates, source)
    }

    /// Whether `source` carries this field under any candidate, empty or not.
    pub fn is_present<L: FieldLookup + ?Sized>(&self, source: &L) -> bool {
        self.candidates.iter().any(|id| source.lookup(id).is_some())
    }
}

/// Resolve every logical field into a canonical name → value map.
pub fn resolve_form<L: FieldLookup + ?Sized>(
    fields: &[LogicalField],
    source: &L,
) -> BTreeMap<String, String> {
    fields
        .iter()
        .map(|field| (field.name.to_string(), field.resolve(source)))
        .collect()
}

pub const TEAM_FORM_FIELDS: &[LogicalField] = &[
    LogicalField::new("company", &["company", "editCompany"]),
    LogicalField::new(
        "company_code",
        &["company_code", "companyCode", "editCompanyCode"],
    ),
    LogicalField::new("department", &["department", "editDepartment"]),
    LogicalField::new("dept_code", &["dept_code", "deptCode", "editDeptCode"]),
    LogicalField::new("team_name", &["team_name", "teamName", "editTeamName"]),
    LogicalField::new("team_code", &["team_code", "teamCode", "editTeamCode"]),
    LogicalField::new(
        "team_description",
        &["team_description", "teamDescription", "editTeamDescription"],
    ),
];

pub const JOB_FORM_FIELDS: &[LogicalField] = &[
    LogicalField::new("team_id", &["team_id", "teamSelect", "teamId"]),
    LogicalField::new("job_title", &["job_title", "jobTitle"]),
    LogicalField::new("job_description", &["job_description", "jobDescription"]),
    LogicalField::new("employment_type", &["employment_type", "employmentType"]),
    LogicalField::new("experience_level", &["experience_level", "experienceLevel"]),
    LogicalField::new("salary_min", &["salary_min", "salaryMin"]),
    LogicalField::new("salary_max", &["salary_max", "salaryMax"]),
    LogicalField::new("location", &["location"]),
    LogicalField::new("remote_option", &["remote_option", "remoteOption"]),
    LogicalField::new(
        "education_required",
        &["education_required", "educationRequirement", "education_requirement"],
    ),
    LogicalField::new(
        "application_deadline",
        &["application_deadline", "applicationDeadline"],
    ),
    LogicalField::new("responsibilities", &["responsibilities"]),
    LogicalField::new("required_skills", &["required_skills", "requiredSkills"]),
    LogicalField::new("status", &["status", "jobStatus"]),
];

/// Render a JSON value as form text. Arrays are joined with `", "`; null is absent.
pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use serde_json::json;

    use super::*;

    fn source(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn later_alias_resolves_when_earlier_is_absent() {
        let lookup = source(&[("companyCode", "ABC")]);
        assert_eq!(resolve_field(&["company_code", "companyCode"], &lookup), "ABC");
    }

    #[test]
    fn first_present_candidate_wins_even_if_empty() {
        let lookup = source(&[("company_code", ""), ("companyCode", "ABC")]);
        assert_eq!(resolve_field(&["company_code", "companyCode"], &lookup), "");
    }

    #[test]
    fn unresolved_field_defaults_to_empty() {
        let lookup = source(&[("other", "x")]);
        assert_eq!(resolve_field(&["company_code", "companyCode"], &lookup), "");
    }

    #[test]
    fn values_are_trimmed() {
        let lookup = source(&[("editTeamName", "  Core  ")]);
        assert_eq!(resolve_field(&["team_name", "teamName", "editTeamName"], &lookup), "Core");
    }

    #[test]
    fn team_form_resolves_mixed_layouts() {
        let lookup = source(&[
            ("company", "Acme"),
            ("companyCode", "ac"),
            ("editDepartment", "Eng"),
            ("dept_code", "EN"),
            ("teamName", "Core"),
            ("team_code", "CO"),
        ]);
        let form = resolve_form(TEAM_FORM_FIELDS, &lookup);
        assert_eq!(form["company_code"], "ac");
        assert_eq!(form["department"], "Eng");
        assert_eq!(form["team_name"], "Core");
        assert_eq!(form["team_description"], "");
        assert_eq!(form.len(), TEAM_FORM_FIELDS.len());
    }

    #[test]
    fn presence_counts_empty_values() {
        let description = TEAM_FORM_FIELDS
            .iter()
            .find(|field| field.name == "team_description")
            .unwrap();
        assert!(description.is_present(&source(&[("editTeamDescription", "")])));
        assert!(!description.is_present(&source(&[("team_name", "Core")])));
    }

    #[test]
    fn json_sources_render_arrays_and_numbers() {
        let Value::Object(map) = json!({
            "required_skills": ["Rust", "SQL"],
            "salary_min": 50000,
            "note": null
        }) else {
            panic!("fixture is an object");
        };
        assert_eq!(map.lookup("required_skills").as_deref(), Some("Rust, SQL"));
        assert_eq!(map.lookup("salary_min").as_deref(), Some("50000"));
        assert_eq!(map.lookup("note"), None);
    }

    #[test]
    fn records_expose_their_id() {
        let record = Record::with_id("AC-EN-CO");
        assert_eq!(resolve_field(&["team_id", "id"], &record), "AC-EN-CO");
    }
}
