//! Modal confirmation for destructive actions.

use dioxus::prelude::*;

/// Props for ConfirmDialog component.
#[derive(Props, Clone, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    #[props(default = "確認".to_string())]
    pub confirm_label: String,
    /// Disable the buttons while the action runs.
    #[props(default = false)]
    pub busy: bool,
    pub on_confirm: EventHandler<()>,
    pub on_cancel: EventHandler<()>,
}

#[component]
pub fn ConfirmDialog(props: ConfirmDialogProps) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal",
                h3 { class: "modal-title", "{props.title}" }
                p { class: "modal-message", "{props.message}" }
                div { class: "form-actions",
                    button {
                        class: "btn btn-danger",
                        disabled: props.busy,
                        onclick: move |_| props.on_confirm.call(()),
                        "{props.confirm_label}"
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: props.busy,
                        onclick: move |_| props.on_cancel.call(()),
                        "取消"
                    }
                }
            }
        }
    }
}
