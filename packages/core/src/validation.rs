//! Pre-submit validation of form values.
//!
//! Missing required fields are errors and block submission. Format rule
//! violations are warnings only: the caller decides whether to ask the user for
//! confirmation before sending.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::FieldLookup;

/// A regex every non-empty value of `field` is expected to match.
#[derive(Debug, Clone)]
pub struct FormatRule {
    pub field: &'static str,
    pattern: Regex,
    pub message: String,
}

impl FormatRule {
    pub fn new(
        field: &'static str,
        pattern: &str,
        message: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            field,
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Result of validating one form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether submission may proceed (possibly after confirming warnings).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Check required fields and format rules against `fields`.
pub fn validate<L: FieldLookup + ?Sized>(
    fields: &L,
    required: &[&str],
    rules: &[FormatRule],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    for name in required {
        let present = fields
            .lookup(name)
            .is_some_and(|value| !value.trim().is_empty());
        if !present {
            report.errors.push(format!("{} 為必填欄位", field_label(name)));
        }
    }

    for rule in rules {
        let Some(value) = fields.lookup(rule.field) else {
            continue;
        };
        let value = value.trim();
        if !value.is_empty() && !rule.matches(value) {
            report.warnings.push(rule.message.clone());
        }
    }

    report
}

/// Localized display label for a backend field name.
pub fn field_label(field: &str) -> &str {
    match field {
        "company" => "公司名稱",
        "company_code" => "公司代碼",
        "department" => "部門名稱",
        "dept_code" => "部門代碼",
        "team_name" => "團隊名稱",
        "team_code" => "團隊代碼",
        "team_description" => "團隊描述",
        "team_id" => "所屬團隊",
        "job_title" => "職缺名稱",
        "employment_type" => "聘用類型",
        "location" => "工作地點",
        "responsibilities" => "工作內容",
        "required_skills" => "必備技能",
        "salary_min" => "最低薪資",
        "salary_max" => "最高薪資",
        other => other,
    }
}

pub const TEAM_REQUIRED_FIELDS: &[&str] = &[
    "company",
    "company_code",
    "department",
    "dept_code",
    "team_name",
    "team_code",
];

pub const JOB_REQUIRED_FIELDS: &[&str] = &[
    "team_id",
    "job_title",
    "employment_type",
    "location",
    "responsibilities",
    "required_skills",
];

static TEAM_RULES: LazyLock<Vec<FormatRule>> = LazyLock::new(|| {
    compile_rules(&[
        (
            "company_code",
            r"^[a-zA-Z0-9]{2,8}$",
            "公司代碼必須為 2-8 個英文字母或數字",
        ),
        (
            "dept_code",
            r"^[a-zA-Z0-9]{2,10}$",
            "部門代碼必須為 2-10 個英文字母或數字",
        ),
        (
            "team_code",
            r"^[a-zA-Z0-9]{2,8}$",
            "團隊代碼必須為 2-8 個英文字母或數字",
        ),
    ])
});

static JOB_RULES: LazyLock<Vec<FormatRule>> = LazyLock::new(|| {
    compile_rules(&[
        (
            "team_id",
            r"^[A-Z0-9]{2,8}-[A-Z0-9]{2,10}-[A-Z0-9]{2,8}$",
            "team_id 格式不正確，應為 {公司代碼}-{部門代碼}-{團隊代碼}",
        ),
        ("salary_min", r"^\d+$", "最低薪資必須為正整數"),
        ("salary_max", r"^\d+$", "最高薪資必須為正整數"),
    ])
});

fn compile_rules(specs: &[(&'static str, &str, &str)]) -> Vec<FormatRule> {
    specs
        .iter()
        .filter_map(|(field, pattern, message)| FormatRule::new(*field, pattern, *message).ok())
        .collect()
}

/// Format rules for the team form.
pub fn team_rules() -> &'static [FormatRule] {
    &TEAM_RULES
}

/// Format rules for the job form.
pub fn job_rules() -> &'static [FormatRule] {
    &JOB_RULES
}

/// Validate a team form.
pub fn validate_team<L: FieldLookup + ?Sized>(fields: &L) -> ValidationReport {
    validate(fields, TEAM_REQUIRED_FIELDS, team_rules())
}

/// Validate a job form, including the salary range check.
pub fn validate_job<L: FieldLookup + ?Sized>(fields: &L) -> ValidationReport {
    let mut report = validate(fields, JOB_REQUIRED_FIELDS, job_rules());

    let salary = |name: &str| {
        fields
            .lookup(name)
            .and_then(|v| v.trim().parse::<u64>().ok())
    };
    if let (Some(min), Some(max)) = (salary("salary_min"), salary("salary_max"))
        && min > max
    {
        report.errors.push("最低薪資不能高於最高薪資".to_string());
    }

    report
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn form(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn complete_team() -> BTreeMap<String, String> {
        form(&[
            ("company", "Acme"),
            ("company_code", "AC"),
            ("department", "Eng"),
            ("dept_code", "EN"),
            ("team_name", "Core"),
            ("team_code", "CO"),
        ])
    }

    #[test]
    fn preset_rules_all_compile() {
        assert_eq!(team_rules().len(), 3);
        assert_eq!(job_rules().len(), 3);
    }

    #[test]
    fn complete_team_is_clean() {
        let report = validate_team(&complete_team());
        assert_eq!(report, ValidationReport::default());
    }

    #[test]
    fn missing_team_name_is_the_only_error() {
        let mut fields = complete_team();
        fields.remove("team_name");
        let report = validate_team(&fields);
        assert_eq!(report.errors, vec!["團隊名稱 為必填欄位".to_string()]);
        assert!(!report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn blank_required_value_counts_as_missing() {
        let mut fields = complete_team();
        fields.insert("team_name".into(), "   ".into());
        assert_eq!(validate_team(&fields).errors.len(), 1);
    }

    #[test]
    fn short_company_code_only_warns() {
        let mut fields = complete_team();
        fields.insert("company_code".into(), "a".into());
        let report = validate_team(&fields);
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec!["公司代碼必須為 2-8 個英文字母或數字".to_string()]
        );
    }

    #[test]
    fn job_salary_range_is_checked() {
        let fields = form(&[
            ("team_id", "AC-EN-CO"),
            ("job_title", "Engineer"),
            ("employment_type", "全職"),
            ("location", "台北"),
            ("responsibilities", "Build"),
            ("required_skills", "Rust"),
            ("salary_min", "90000"),
            ("salary_max", "60000"),
        ]);
        let report = validate_job(&fields);
        assert_eq!(report.errors, vec!["最低薪資不能高於最高薪資".to_string()]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn lowercase_team_id_warns() {
        let fields = form(&[("team_id", "ac-en-co")]);
        let report = validate_job(&fields);
        assert_eq!(report.errors.len(), JOB_REQUIRED_FIELDS.len() - 1);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn labels_fall_back_to_field_name() {
        assert_eq!(field_label("team_name"), "團隊名稱");
        assert_eq!(field_label("nickname"), "nickname");
    }
}
