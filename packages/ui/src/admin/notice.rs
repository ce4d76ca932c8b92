//! Transient notices shown at the top of admin pages.

use admin_core::format::status_message;
use api::ApiError;
use dioxus::prelude::*;

/// How long a notice stays visible (4 seconds).
const NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// An error notice for a failed operation, prefixed with what was attempted.
    pub fn failed(action: &str, error: &ApiError) -> Self {
        Self::error(format!("{action}失敗：{}", describe_error(error)))
    }
}

/// Operator-facing text for a client error. Backend messages are shown as-is;
/// bare status codes are replaced with a localized explanation.
pub fn describe_error(error: &ApiError) -> String {
    match error {
        ApiError::Http { status, message } if message.starts_with("HTTP error") => {
            status_message(*status).to_string()
        }
        ApiError::Transport(_) => "無法連線到伺服器，請檢查網路連線".to_string(),
        other => other.to_string(),
    }
}

/// Show `notice` in `slot`, clearing it after a few seconds unless it was
/// replaced in the meantime.
pub fn show_notice(mut slot: Signal<Option<Notice>>, notice: Notice) {
    slot.set(Some(notice.clone()));
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;

        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(std::time::Duration::from_millis(NOTICE_TIMEOUT_MS as u64)).await;

        if slot.peek().as_ref() == Some(&notice) {
            slot.set(None);
        }
    });
}

/// Banner for the current notice, if any.
#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>) -> Element {
    let mut notice = notice;
    let Some(current) = notice() else {
        return rsx! {};
    };
    let class = current.kind.class();

    rsx! {
        div { class: "notice {class}",
            span { "{current.message}" }
            button {
                class: "notice-close",
                onclick: move |_| notice.set(None),
                "×"
            }
        }
    }
}
