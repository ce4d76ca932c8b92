//! Jobs page - paginated job list with filters, stats, and batch actions.

use std::collections::BTreeSet;

use admin_core::format::{employment_type, relative_time, salary_range, truncate};
use admin_core::{JobStatus, ListQuery, Record, jobs_csv};
use chrono::Utc;
use dioxus::prelude::*;

use crate::admin::notice::{Notice, NoticeBanner, describe_error, show_notice};
use crate::admin::{ConfirmDialog, JobForm, JobStatsCards, JobStatusBadge};
use crate::use_clients;

/// Jobs per page.
const PAGE_SIZE: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Create,
    Edit(Record),
}

/// Jobs page component.
#[component]
pub fn AdminJobsPage() -> Element {
    let clients = use_clients();
    let mut status_filter = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut page = use_signal(|| 1u64);
    let mut selected = use_signal(BTreeSet::<String>::new);
    let mut batch_status = use_signal(String::new);
    let mut form_mode = use_signal(|| None::<FormMode>);
    let mut pending_delete = use_signal(|| None::<Record>);
    let mut busy = use_signal(|| false);
    let notice = use_signal(|| None::<Notice>);

    // Re-runs whenever a filter or the page changes.
    let list_clients = clients.clone();
    let mut jobs = use_resource(move || {
        let client = list_clients.jobs.clone();
        let term = search();
        let filters = ListQuery::new()
            .param("status", status_filter())
            .param("page", page().to_string())
            .param("limit", PAGE_SIZE.to_string());
        async move {
            if term.trim().is_empty() {
                client.list_jobs(&filters).await
            } else {
                client.search(term.trim(), filters).await
            }
        }
    });

    let stats_clients = clients.clone();
    let mut stats = use_resource(move || {
        let client = stats_clients.jobs.clone();
        async move { client.stats().await }
    });

    let teams_clients = clients.clone();
    let teams = use_resource(move || {
        let client = teams_clients.jobs.clone();
        async move { client.list_teams().await.unwrap_or_default() }
    });

    let mut refresh = move || {
        selected.write().clear();
        jobs.restart();
        stats.restart();
    };

    let on_saved = move |job: Record| {
        let message = match form_mode() {
            Some(FormMode::Edit(_)) => "職缺已更新",
            _ => "職缺已建立",
        };
        tracing::info!(job_id = %job.id, "{message}");
        show_notice(notice, Notice::success(message));
        form_mode.set(None);
        refresh();
    };

    let batch_clients = clients.clone();
    let on_batch_apply = move |_| {
        let Some(status) = JobStatus::parse(&batch_status()) else {
            show_notice(notice, Notice::error("請選擇要套用的狀態"));
            return;
        };
        let ids: Vec<String> = selected().into_iter().collect();
        if ids.is_empty() {
            return;
        }
        let client = batch_clients.jobs.clone();
        spawn(async move {
            busy.set(true);
            let outcomes = client.batch_update_status(&ids, status).await;
            busy.set(false);

            let failed: Vec<_> = outcomes.iter().filter(|o| !o.success).collect();
            if failed.is_empty() {
                show_notice(
                    notice,
                    Notice::success(format!("已將 {} 筆職缺設為「{}」", outcomes.len(), status.label())),
                );
            } else {
                let ids = failed.iter().map(|o| o.id.as_str()).collect::<Vec<_>>().join(", ");
                show_notice(
                    notice,
                    Notice::error(format!("{} 筆更新失敗：{ids}", failed.len())),
                );
            }
            refresh();
        });
    };

    let duplicate_clients = clients.clone();
    let on_duplicate = use_callback(move |id: String| {
        let client = duplicate_clients.jobs.clone();
        spawn(async move {
            match client.duplicate(&id).await {
                Ok(copy) => {
                    show_notice(notice, Notice::success(format!("已複製職缺，新職缺 {}", copy.id)));
                    refresh();
                }
                Err(e) => show_notice(notice, Notice::failed("複製職缺", &e)),
            }
        });
    });

    let export_clients = clients.clone();
    let on_export = move |_| {
        let ids: Vec<String> = selected().into_iter().collect();
        let client = export_clients.jobs.clone();
        spawn(async move {
            match client.export(&ids).await {
                Ok(records) => {
                    download_csv("職缺資料.csv", &jobs_csv(&records));
                    show_notice(notice, Notice::success(format!("已匯出 {} 筆職缺", records.len())));
                }
                Err(e) => show_notice(notice, Notice::failed("匯出職缺", &e)),
            }
        });
    };

    let on_confirm_delete = move |_: ()| {
        let Some(job) = pending_delete() else {
            return;
        };
        let client = clients.jobs.clone();
        spawn(async move {
            busy.set(true);
            match client.delete_job(&job.id).await {
                Ok(()) => {
                    show_notice(notice, Notice::success(format!("已刪除職缺 {}", job.text("job_title"))));
                    refresh();
                }
                Err(e) => show_notice(notice, Notice::failed("刪除職缺", &e)),
            }
            busy.set(false);
            pending_delete.set(None);
        });
    };

    let (rows, pagination, load_error) = match &*jobs.read() {
        Some(Ok(list)) => (list.items.clone(), list.pagination, None),
        Some(Err(e)) => (Vec::new(), None, Some(describe_error(e))),
        None => (Vec::new(), None, None),
    };
    let loading = jobs.read().is_none();
    let current_stats = match &*stats.read() {
        Some(Ok(s)) => Some(*s),
        _ => None,
    };
    let team_list = teams.read().as_ref().cloned().unwrap_or_default();
    let has_previous = pagination.is_some_and(|p| p.has_previous());
    let has_next = pagination.is_some_and(|p| p.has_next());
    let page_label = match pagination {
        Some(p) if p.total_pages > 0 => format!("第 {} / {} 頁，共 {} 筆", p.current_page, p.total_pages, p.total_items),
        _ => format!("第 {} 頁", page()),
    };
    let selected_count = selected.read().len();
    let all_selected = !rows.is_empty() && rows.iter().all(|r| selected.read().contains(&r.id));
    let page_ids: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
    let now = Utc::now();

    let form_panel = form_mode().map(|mode| {
        let key = match &mode {
            FormMode::Create => "new".to_string(),
            FormMode::Edit(job) => job.id.clone(),
        };
        let job = match mode {
            FormMode::Edit(job) => Some(job),
            FormMode::Create => None,
        };
        rsx! {
            JobForm {
                key: "{key}",
                job,
                teams: team_list.clone(),
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
                    h1 { class: "page-title", "職缺管理" }
                    p { class: "page-description", "管理職缺內容、狀態與曝光" }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: on_export,
                        if selected_count > 0 { "匯出所選" } else { "匯出全部" }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| form_mode.set(Some(FormMode::Create)),
                        "新增職缺"
                    }
                }
            }

            NoticeBanner { notice }

            if let Some(s) = current_stats {
                JobStatsCards { stats: s }
            }

            {form_panel}

            // Filters
            div { class: "filter-bar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "搜尋職缺名稱、描述或技能",
                    value: "{search}",
                    oninput: move |e| {
                        search.set(e.value());
                        page.set(1);
                    },
                }
                select {
                    value: "{status_filter}",
                    onchange: move |e| {
                        status_filter.set(e.value());
                        page.set(1);
                    },
                    option { value: "", "所有狀態" }
                    for status in JobStatus::SETTABLE {
                        option { key: "{status}", value: "{status}", {status.label()} }
                    }
                }
            }

            // Batch actions
            if selected_count > 0 {
                div { class: "batch-bar",
                    span { "已選取 {selected_count} 筆" }
                    select {
                        value: "{batch_status}",
                        onchange: move |e| batch_status.set(e.value()),
                        option { value: "", "變更狀態為..." }
                        for status in JobStatus::SETTABLE {
                            option { key: "{status}", value: "{status}", {status.label()} }
                        }
                    }
                    button {
                        class: "btn btn-small btn-primary",
                        disabled: busy(),
                        onclick: on_batch_apply,
                        "套用"
                    }
                    button {
                        class: "btn btn-small btn-secondary",
                        onclick: move |_| selected.write().clear(),
                        "取消選取"
                    }
                }
            }

            if let Some(err) = load_error {
                div { class: "error-banner",
                    span { "無法載入職缺：{err}" }
                    button {
                        onclick: move |_| jobs.restart(),
                        "重試"
                    }
                }
            }

            // Jobs table
            div { class: "card",
                if loading {
                    div { class: "loading", "載入中..." }
                } else if rows.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-state-icon", "▦" }
                        p { "找不到符合條件的職缺" }
                    }
                } else {
                    div { class: "table-container",
                        table { class: "data-table",
                            thead {
                                tr {
                                    th {
                                        input {
                                            r#type: "checkbox",
                                            checked: all_selected,
                                            onchange: move |e| {
                                                let mut set = selected.write();
                                                if e.checked() {
                                                    set.extend(page_ids.iter().cloned());
                                                } else {
                                                    for id in &page_ids {
                                                        set.remove(id);
                                                    }
                                                }
                                            },
                                        }
                                    }
                                    th { "職缺名稱" }
                                    th { "團隊" }
                                    th { "薪資" }
                                    th { "聘用類型" }
                                    th { "狀態" }
                                    th { "更新時間" }
                                    th { class: "text-right", "操作" }
                                }
                            }
                            tbody {
                                for job in rows {
                                    {
                                        let job_id = job.id.clone();
                                        let is_selected = selected.read().contains(&job_id);
                                        let title = truncate(&job.text("job_title"), 40);
                                        let salary = salary_range(
                                            job.number("salary_min").map(|v| v as u64),
                                            job.number("salary_max").map(|v| v as u64),
                                        );
                                        let kind = employment_type(&job.text("employment_type")).to_string();
                                        let updated = job
                                            .updated_at
                                            .or(job.created_at)
                                            .map(|at| relative_time(at, now))
                                            .unwrap_or_default();
                                        let for_select = job_id.clone();
                                        let for_duplicate = job_id.clone();
                                        let for_edit = job.clone();
                                        let for_delete = job.clone();

                                        rsx! {
                                            tr { class: "data-row", key: "{job_id}",
                                                td {
                                                    input {
                                                        r#type: "checkbox",
                                                        checked: is_selected,
                                                        onchange: move |e| {
                                                            if e.checked() {
                                                                selected.write().insert(for_select.clone());
                                                            } else {
                                                                selected.write().remove(&for_select);
                                                            }
                                                        },
                                                    }
                                                }
                                                td {
                                                    div { class: "job-title", "{title}" }
                                                    code { class: "job-id", "{job_id}" }
                                                }
                                                td { {job.text("team_id")} }
                                                td { class: "tabular-nums", "{salary}" }
                                                td { "{kind}" }
                                                td { JobStatusBadge { status: job.text("status") } }
                                                td { "{updated}" }
                                                td { class: "text-right",
                                                    button {
                                                        class: "btn btn-small",
                                                        onclick: move |_| form_mode.set(Some(FormMode::Edit(for_edit.clone()))),
                                                        "編輯"
                                                    }
                                                    button {
                                                        class: "btn btn-small",
                                                        onclick: move |_| on_duplicate.call(for_duplicate.clone()),
                                                        "複製"
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

                // Pagination
                div { class: "pagination",
                    button {
                        class: "btn btn-small btn-secondary",
                        disabled: !has_previous,
                        onclick: move |_| {
                            let current = page();
                            page.set(current.saturating_sub(1).max(1));
                        },
                        "上一頁"
                    }
                    span { class: "pagination-label", "{page_label}" }
                    button {
                        class: "btn btn-small btn-secondary",
                        disabled: !has_next,
                        onclick: move |_| {
                            let current = page();
                            page.set(current + 1);
                        },
                        "下一頁"
                    }
                }
            }

            if let Some(job) = pending_delete() {
                ConfirmDialog {
                    title: "刪除職缺",
                    message: format!("確定要刪除職缺「{}」嗎？此操作無法復原。", job.text("job_title")),
                    confirm_label: "刪除",
                    busy: busy(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

/// Offer `content` to the browser as a downloaded CSV file.
fn download_csv(file_name: &str, content: &str) {
    let (Ok(payload), Ok(file_name)) = (
        serde_json::to_string(content),
        serde_json::to_string(file_name),
    ) else {
        return;
    };

    let script = format!(
        "const blob = new Blob([{payload}], {{ type: 'text/csv;charset=utf-8;' }});\
         const link = document.createElement('a');\
         link.href = URL.createObjectURL(blob);\
         link.download = {file_name};\
         link.click();\
         URL.revokeObjectURL(link.href);"
    );
    let _ = document::eval(&script);
}
