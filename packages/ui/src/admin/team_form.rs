//! Create/edit form for teams.

use std::collections::BTreeMap;

use admin_core::fields::TEAM_FORM_FIELDS;
use admin_core::validation::validate_team;
use admin_core::{Record, generate_team_id_preview, resolve_form};
use dioxus::prelude::*;

use crate::admin::notice::describe_error;
use crate::use_clients;

/// Inputs in display order: field name, label, placeholder, multiline.
const INPUTS: &[(&str, &str, &str, bool)] = &[
    ("company", "公司名稱", "例如：Acme 股份有限公司", false),
    ("company_code", "公司代碼", "2-8 個英文字母或數字", false),
    ("department", "部門名稱", "例如：研發部", false),
    ("dept_code", "部門代碼", "2-10 個英文字母或數字", false),
    ("team_name", "團隊名稱", "例如：平台團隊", false),
    ("team_code", "團隊代碼", "2-8 個英文字母或數字", false),
    ("team_description", "團隊描述", "", true),
];

/// Props for TeamForm component.
#[derive(Props, Clone, PartialEq)]
pub struct TeamFormProps {
    /// Team being edited; `None` creates a new team.
    #[props(default)]
    pub team: Option<Record>,
    /// Callback with the saved team.
    pub on_saved: EventHandler<Record>,
    /// Callback when the form is cancelled.
    pub on_cancel: EventHandler<()>,
}

/// Form component for creating or editing a team.
///
/// Missing required fields block submission. Format problems are shown as
/// warnings the operator must confirm before the team is saved.
#[component]
pub fn TeamForm(props: TeamFormProps) -> Element {
    let clients = use_clients();
    let editing_id = props.team.as_ref().map(|team| team.id.clone());
    let initial = props.team.clone();

    let mut fields = use_signal(move || match &initial {
        Some(team) => resolve_form(TEAM_FORM_FIELDS, team),
        None => BTreeMap::new(),
    });
    let mut errors = use_signal(Vec::<String>::new);
    let mut warnings = use_signal(Vec::<String>::new);
    let mut submitting = use_signal(|| false);

    let value_of = move |name: &str| fields.read().get(name).cloned().unwrap_or_default();
    let id_preview = generate_team_id_preview(
        &value_of("company_code"),
        &value_of("dept_code"),
        &value_of("team_code"),
    );

    let on_saved = props.on_saved;
    let title = if editing_id.is_some() { "編輯團隊" } else { "新增團隊" };

    // `true` skips the warning confirmation step.
    let save = use_callback(move |confirmed: bool| {
        let form = fields();
        let report = validate_team(&form);
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

        let teams = clients.teams.clone();
        let editing_id = editing_id.clone();
        spawn(async move {
            submitting.set(true);
            let result = match editing_id {
                Some(id) => teams.update_team(&id, &form, None).await,
                None => teams.create_team(&form).await,
            };
            submitting.set(false);

            match result {
                Ok(team) => on_saved.call(team),
                Err(e) => errors.set(vec![describe_error(&e)]),
            }
        });
    });

    rsx! {
        div { class: "team-form card",
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
                for (name, label, placeholder, multiline) in INPUTS.iter().copied() {
                    div { class: "form-group", key: "{name}",
                        label { "{label}" }
                        if multiline {
                            textarea {
                                rows: 3,
                                placeholder,
                                value: value_of(name),
                                oninput: move |e| {
                                    fields.write().insert(name.to_string(), e.value());
                                },
                            }
                        } else {
                            input {
                                r#type: "text",
                                placeholder,
                                value: value_of(name),
                                oninput: move |e| {
                                    fields.write().insert(name.to_string(), e.value());
                                },
                            }
                        }
                    }
                }
            }

            div { class: "id-preview",
                span { class: "id-preview-label", "團隊 ID 預覽：" }
                if id_preview.is_empty() {
                    span { class: "hint", "填寫三個代碼後自動產生" }
                } else {
                    code { "{id_preview}" }
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
