//! Files attached to a team.

use admin_core::TeamFile;
use admin_core::format::file_size;
use api::{Attachments, BinaryFile};
use dioxus::prelude::*;

use crate::admin::ConfirmDialog;
use crate::admin::notice::{Notice, NoticeBanner, describe_error, show_notice};
use crate::use_clients;

/// Props for TeamFiles component.
#[derive(Props, Clone, PartialEq)]
pub struct TeamFilesProps {
    pub team_id: String,
    pub on_close: EventHandler<()>,
}

/// File list for one team with upload, download and delete actions.
#[component]
pub fn TeamFiles(props: TeamFilesProps) -> Element {
    let clients = use_clients();
    let notice = use_signal(|| None::<Notice>);
    let mut pending_delete = use_signal(|| None::<TeamFile>);
    let mut deleting = use_signal(|| false);
    let mut uploading = use_signal(|| false);

    let team_id = props.team_id.clone();
    let list_clients = clients.clone();
    let mut files = use_resource(move || {
        let teams = list_clients.teams.clone();
        let team_id = team_id.clone();
        async move { teams.list_files(&team_id).await }
    });

    let upload_clients = clients.clone();
    let upload_team = props.team_id.clone();
    let on_upload = move |evt: FormEvent| {
        let teams = upload_clients.teams.clone();
        let team_id = upload_team.clone();
        let picked = evt.files();
        spawn(async move {
            uploading.set(true);
            let mut attachments = Attachments::default();
            for file in picked {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        let content_type = file
                            .content_type()
                            .unwrap_or_else(|| "application/octet-stream".to_string());
                        attachments =
                            attachments.add(BinaryFile::new(name, content_type, bytes.to_vec()));
                    }
                    Err(error) => tracing::warn!(file = %name, %error, "unreadable upload"),
                }
            }

            if !attachments.is_empty() {
                let count = attachments.to_add.len();
                match teams.upload_files(&team_id, &attachments).await {
                    Ok(_) => {
                        show_notice(notice, Notice::success(format!("已上傳 {count} 個檔案")));
                        files.restart();
                    }
                    Err(e) => show_notice(notice, Notice::failed("上傳檔案", &e)),
                }
            }
            uploading.set(false);
        });
    };

    let download_clients = clients.clone();
    let on_download = use_callback(move |file: TeamFile| {
        let teams = download_clients.teams.clone();
        spawn(async move {
            match teams.download_url(&file.key).await {
                Ok(url) => {
                    let quoted = serde_json::to_string(&url).unwrap_or_default();
                    let _ = document::eval(&format!("window.open({quoted}, '_blank')"));
                }
                Err(e) => show_notice(notice, Notice::failed("取得下載連結", &e)),
            }
        });
    });

    let team_id = props.team_id.clone();
    let on_confirm_delete = move |_: ()| {
        let Some(file) = pending_delete() else {
            return;
        };
        let teams = clients.teams.clone();
        let team_id = team_id.clone();
        spawn(async move {
            deleting.set(true);
            match teams.delete_file(&team_id, &file.key).await {
                Ok(()) => {
                    show_notice(notice, Notice::success(format!("已刪除 {}", file.display_name())));
                    files.restart();
                }
                Err(e) => show_notice(notice, Notice::error(describe_error(&e))),
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let body = match &*files.read() {
        None => rsx! {
            div { class: "loading", "載入檔案中..." }
        },
        Some(Err(e)) => {
            let message = describe_error(e);
            rsx! {
                div { class: "error-message", "無法載入檔案：{message}" }
            }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            div { class: "empty-state",
                p { "此團隊尚未上傳任何檔案" }
            }
        },
        Some(Ok(list)) => rsx! {
            table { class: "data-table",
                thead {
                    tr {
                        th { "檔案名稱" }
                        th { class: "text-right", "大小" }
                        th { "上傳時間" }
                        th { class: "text-right", "操作" }
                    }
                }
                tbody {
                    for file in list.iter().cloned() {
                        {
                            let name = file.display_name().to_string();
                            let ext = file.extension().unwrap_or_default();
                            let for_download = file.clone();
                            let for_delete = file.clone();
                            let size = file.size.map(file_size).unwrap_or_default();
                            let uploaded = file
                                .last_modified
                                .map(|at| at.format("%Y/%m/%d").to_string())
                                .unwrap_or_default();

                            rsx! {
                                tr { class: "data-row", key: "{file.key}",
                                    td { class: "file-name",
                                        span { class: "file-ext", "{ext}" }
                                        "{name}"
                                    }
                                    td { class: "text-right tabular-nums", "{size}" }
                                    td { "{uploaded}" }
                                    td { class: "text-right",
                                        button {
                                            class: "btn btn-small",
                                            onclick: move |_| on_download.call(for_download.clone()),
                                            "下載"
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
        },
    };

    rsx! {
        div { class: "card team-files",
            div { class: "card-header",
                h2 { class: "card-title", "團隊檔案：{props.team_id}" }
                label { class: "btn btn-small btn-primary file-upload",
                    if uploading() { "上傳中..." } else { "上傳檔案" }
                    input {
                        r#type: "file",
                        multiple: true,
                        disabled: uploading(),
                        onchange: on_upload,
                    }
                }
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: move |_| props.on_close.call(()),
                    "關閉"
                }
            }

            NoticeBanner { notice }
            {body}

            if let Some(file) = pending_delete() {
                ConfirmDialog {
                    title: "刪除檔案",
                    message: format!("確定要刪除「{}」嗎？此操作無法復原。", file.display_name()),
                    confirm_label: "刪除",
                    busy: deleting(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
