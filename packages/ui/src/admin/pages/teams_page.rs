//! Teams page - lists teams with search, company filter, and CRUD actions.

use admin_core::format::relative_time;
use admin_core::{Record, TeamFilter, company_names};
use chrono::Utc;
use dioxus::prelude::*;

use crate::admin::notice::{Notice, NoticeBanner, describe_error, show_notice};
use crate::admin::{ConfirmDialog, TeamFiles, TeamForm};
use crate::use_clients;

/// What the form panel is showing.
#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Create,
    Edit(Record),
}

/// Teams page component.
#[component]
pub fn AdminTeamsPage() -> Element {
    let clients = use_clients();
    let mut search = use_signal(String::new);
    let mut company = use_signal(String::new);
    let mut form_mode = use_signal(|| None::<FormMode>);
    let mut files_team = use_signal(|| None::<String>);
    let mut pending_delete = use_signal(|| None::<Record>);
    let mut deleting = use_signal(|| false);
    let notice = use_signal(|| None::<Notice>);

    let list_clients = clients.clone();
    let mut teams = use_resource(move || {
        let teams = list_clients.teams.clone();
        async move { teams.list_teams().await }
    });

    let on_saved = move |team: Record| {
        let message = match form_mode() {
            Some(FormMode::Edit(_)) => "團隊已更新",
            _ => "團隊已建立",
        };
        tracing::info!(team_id = %team.id, "{message}");
        show_notice(notice, Notice::success(message));
        form_mode.set(None);
        teams.restart();
    };

    let on_confirm_delete = move |_: ()| {
        let Some(team) = pending_delete() else {
            return;
        };
        let client = clients.teams.clone();
        spawn(async move {
            deleting.set(true);
            match client.delete_team(&team.id).await {
                Ok(()) => {
                    show_notice(notice, Notice::success(format!("已刪除團隊 {}", team.id)));
                    if files_team.peek().as_deref() == Some(team.id.as_str()) {
                        files_team.set(None);
                    }
                    teams.restart();
                }
                Err(e) => show_notice(notice, Notice::failed("刪除團隊", &e)),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let all_teams = match &*teams.read() {
        Some(Ok(list)) => list.clone(),
        _ => Vec::new(),
    };
    let load_error = match &*teams.read() {
        Some(Err(e)) => Some(describe_error(e)),
        _ => None,
    };
    let loading = teams.read().is_none();
    let companies = company_names(&all_teams);
    let filter = TeamFilter {
        search: search(),
        company: company(),
    };
    let visible: Vec<Record> = filter.apply(&all_teams).into_iter().cloned().collect();
    let count = visible.len();
    let now = Utc::now();

    // Keyed by the team being edited so switching teams resets the form state.
    let form_panel = form_mode().map(|mode| {
        let key = mode_key(&mode);
        let team = match mode {
            FormMode::Edit(team) => Some(team),
            FormMode::Create => None,
        };
        rsx! {
            TeamForm {
                key: "{key}",
                team,
                on_saved,
                on_cancel: move |_| form_mode.set(None),
            }
        }
    });

    rsx! {
        div { class: "page-container",
            // Page header
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "團隊管理" }
                    p { class: "page-description", "管理公司、部門與團隊資料" }
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| form_mode.set(Some(FormMode::Create)),
                    "新增團隊"
                }
            }

            NoticeBanner { notice }

            if let Some(err) = load_error {
                div { class: "error-banner",
                    span { "無法載入團隊：{err}" }
                    button {
                        onclick: move |_| teams.restart(),
                        "重試"
                    }
                }
            }

            {form_panel}

            // Filters
            div { class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "搜尋團隊名稱、代碼、公司或部門",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                select {
                    value: "{company}",
                    onchange: move |e| company.set(e.value()),
                    option { value: "", "所有公司" }
                    for name in companies {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
            }

            // Teams table
            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "所有團隊" }
                    span { class: "hint", "共 {count} 個團隊" }
                }

                if loading {
                    div { class: "loading", "載入中..." }
                } else if visible.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-state-icon", "▦" }
                        p { "找不到符合條件的團隊" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th { "團隊 ID" }
                                    th { "團隊名稱" }
                                    th { "公司" }
                                    th { "部門" }
                                    th { "建立時間" }
                                    th { class: "text-right", "操作" }
                                }
                            }
                            tbody {
                                for team in visible {
                                    {
                                        let created = team
                                            .created_at
                                            .map(|at| relative_time(at, now))
                                            .unwrap_or_default();
                                        let team_id = team.id.clone();
                                        let for_files = team.id.clone();
                                        let for_edit = team.clone();
                                        let for_delete = team.clone();

                                        rsx! {
                                            tr { class: "data-row", key: "{team_id}",
                                                td { code { "{team_id}" } }
                                                td { {team.text("team_name")} }
                                                td { {team.text("company")} }
                                                td { {team.text("department")} }
                                                td { "{created}" }
                                                td { class: "text-right",
                                                    button {
                                                        class: "btn btn-small",
                                                        onclick: move |_| files_team.set(Some(for_files.clone())),
                                                        "檔案"
                                                    }
                                                    button {
                                                        class: "btn btn-small",
                                                        onclick: move |_| form_mode.set(Some(FormMode::Edit(for_edit.clone()))),
                                                        "編輯"
                                                    }
                                                    button {
                                                        class: "btn btn-small btn-danger",
                                                        onclick: move |_| pending_delete.set(Some(for_delete.clone())),
                                                        "刪除"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(team_id) = files_team() {
                TeamFiles {
                    key: "{team_id}",
                    team_id: team_id.clone(),
                    on_close: move |_| files_team.set(None),
                }
            }

            if let Some(team) = pending_delete() {
                ConfirmDialog {
                    title: "刪除團隊",
                    message: format!(
                        "確定要刪除團隊「{}」({}) 嗎？此操作無法復原。",
                        team.text("team_name"),
                        team.id
                    ),
                    confirm_label: "刪除",
                    busy: deleting(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

fn mode_key(mode: &FormMode) -> String {
    match mode {
        FormMode::Create => "new".to_string(),
        FormMode::Edit(team) => team.id.clone(),
    }
}
