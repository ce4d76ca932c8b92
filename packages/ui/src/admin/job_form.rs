//! Create/edit form for job openings.

use std::collections::BTreeMap;

use admin_core::fields::JOB_FORM_FIELDS;
use admin_core::format::{employment_type, experience_level, remote_option};
use admin_core::validation::validate_job;
use admin_core::{JobStatus, Record, resolve_form};
use dioxus::prelude::*;

use crate::admin::notice::describe_error;
use crate::use_clients;

const EMPLOYMENT_TYPES: &[&str] = &["full-time", "part-time", "contract", "internship", "freelance"];
const EXPERIENCE_LEVELS: &[&str] = &["entry", "junior", "mid", "senior", "lead", "executive"];
const REMOTE_OPTIONS: &[&str] = &["onsite", "remote", "hybrid"];

/// Free-text inputs: field name, label, hint, multiline.
const TEXT_INPUTS: &[(&str, &str, &str, bool)] = &[
    ("job_title", "職缺名稱", "", false),
    ("location", "工作地點", "", false),
    ("salary_min", "最低薪資", "正整數，可留空", false),
    ("salary_max", "最高薪資", "正整數，可留空", false),
    ("education_required", "學歷要求", "", false),
    ("required_skills", "必備技能", "以逗號分隔，例如：Rust, SQL", false),
    ("responsibilities", "工作內容", "以逗號分隔多項職責", true),
    ("job_description", "職缺描述", "", true),
];

/// Props for JobForm component.
#[derive(Props, Clone, PartialEq)]
pub struct JobFormProps {
    /// Job being edited; `None` creates a new one.
    #[props(default)]
    pub job: Option<Record>,
    /// Teams offered in the team selector.
    pub teams: Vec<Record>,
    pub on_saved: EventHandler<Record>,
    pub on_cancel: EventHandler<()>,
}

/// Form component for creating or editing a job opening.
#[component]
pub fn JobForm(props: JobFormProps) -> Element {
    let clients = use_clients();
    let editing_id = props.job.as_ref().map(|job| job.id.clone());
    let initial = props.job.clone();

    let mut fields = use_signal(move || match &initial {
        Some(job) => resolve_form(JOB_FORM_FIELDS, job),
        None => BTreeMap::from([
            ("employment_type".to_string(), "full-time".to_string()),
            ("status".to_string(), JobStatus::Active.as_str().to_string()),
        ]),
    });
    let mut errors = use_signal(Vec::<String>::new);
    let mut warnings = use_signal(Vec::<String>::new);
    let mut submitting = use_signal(|| false);

    let value_of = move |name: &str| fields.read().get(name).cloned().unwrap_or_default();
    let on_saved = props.on_saved;
    let title = if editing_id.is_some() { "編輯職缺" } else { "新增職缺" };

    // `true` skips the warning confirmation step.
    let save = use_callback(move |confirmed: bool| {
        let form = fields();
        let report = validate_job(&form);
        if !report.is_valid() {
            errors.set(report.errors);
            warnings.set(Vec::new());
            return;
        }
        errors.set(Vec::new());
        if report.has_warnings() && !confirmed {
            warnings.set(report.warnings);
            return;
        }
        warnings.set(Vec::new());

        let jobs = clients.jobs.clone();
        let editing_id = editing_id.clone();
        spawn(async move {
            submitting.set(true);
            let result = match editing_id {
                Some(id) => jobs.update_job(&id, &form).await,
                None => jobs.create_job(&form).await,
            };
            submitting.set(false);

            match result {
                Ok(job) => on_saved.call(job),
                Err(e) => errors.set(vec![describe_error(&e)]),
            }
        });
    });

    rsx! {
        div { class: "job-form card",
            h3 { class: "card-title", "{title}" }

            if !errors().is_empty() {
                div { class: "error-message",
                    ul {
                        for error in errors() {
                            li { "{error}" }
                        }
                    }
                }
            }

            if !warnings().is_empty() {
                div { class: "warning-message",
                    p { "以下欄位格式可能有誤：" }
                    ul {
                        for warning in warnings() {
                            li { "{warning}" }
                        }
                    }
                    button {
                        class: "btn btn-small btn-warning",
                        disabled: submitting(),
                        onclick: move |_| save.call(true),
                        "仍要儲存"
                    }
                }
            }

            div { class: "form-grid",
                div { class: "form-group",
                    label { "所屬團隊" }
                    select {
                        value: value_of("team_id"),
                        onchange: move |e| {
                            fields.write().insert("team_id".to_string(), e.value());
                        },
                        option { value: "", "請選擇團隊" }
                        for team in props.teams.iter() {
                            option {
                                key: "{team.id}",
                                value: "{team.id}",
                                {format!("{} ({})", team.text("team_name"), team.id)}
                            }
                        }
                    }
                }

                {enum_select("employment_type", "聘用類型", EMPLOYMENT_TYPES, employment_type, value_of("employment_type"), fields)}
                {enum_select("experience_level", "經驗要求", EXPERIENCE_LEVELS, experience_level, value_of("experience_level"), fields)}
                {enum_select("remote_option", "遠端選項", REMOTE_OPTIONS, remote_option, value_of("remote_option"), fields)}

                div { class: "form-group",
                    label { "狀態" }
                    select {
                        value: value_of("status"),
                        onchange: move |e| {
                            fields.write().insert("status".to_string(), e.value());
                        },
                        for status in JobStatus::SETTABLE {
                            option { key: "{status}", value: "{status}", {status.label()} }
                        }
                    }
                }

                div { class: "form-group",
                    label { "截止日期" }
                    input {
                        r#type: "date",
                        value: value_of("application_deadline"),
                        oninput: move |e| {
                            fields.write().insert("application_deadline".to_string(), e.value());
                        },
                    }
                }

                for (name, label, hint, multiline) in TEXT_INPUTS.iter().copied() {
                    div { class: "form-group", key: "{name}",
                        label { "{label}" }
                        if multiline {
                            textarea {
                                rows: 4,
                                placeholder: hint,
                                value: value_of(name),
                                oninput: move |e| {
                                    fields.write().insert(name.to_string(), e.value());
                                },
                            }
                        } else {
                            input {
                                r#type: "text",
                                placeholder: hint,
                                value: value_of(name),
                                oninput: move |e| {
                                    fields.write().insert(name.to_string(), e.value());
                                },
                            }
                        }
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "btn btn-primary",
                    disabled: submitting(),
                    onclick: move |_| save.call(false),
                    if submitting() { "儲存中..." } else { "儲存" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| props.on_cancel.call(()),
                    "取消"
                }
            }
        }
    }
}

/// A select over a fixed set of backend codes shown with localized labels.
fn enum_select(
    name: &'static str,
    label: &str,
    codes: &'static [&'static str],
    display: fn(&str) -> &str,
    current: String,
    mut fields: Signal<BTreeMap<String, String>>,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { "{label}" }
            select {
                value: current,
                onchange: move |e| {
                    fields.write().insert(name.to_string(), e.value());
                },
                option { value: "", "未指定" }
                for code in codes.iter().copied() {
                    option { key: "{code}", value: "{code}", {display(code)} }
                }
            }
        }
    }
}
