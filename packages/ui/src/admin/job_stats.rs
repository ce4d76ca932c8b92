//! Job statistics summary cards.

use admin_core::JobStats;
use admin_core::format::thousands;
use dioxus::prelude::*;

#[component]
pub fn JobStatsCards(stats: JobStats) -> Element {
    let views = thousands(stats.total_views);

    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                div { class: "stat-card-value", "{stats.total_jobs}" }
                div { class: "stat-card-label", "職缺總數" }
            }
            div { class: "stat-card",
                div { class: "stat-card-value", "{stats.active_jobs}" }
                div { class: "stat-card-label", "招募中" }
            }
            div { class: "stat-card",
                div { class: "stat-card-value", "{stats.paused_jobs}" }
                div { class: "stat-card-label", "暫停" }
            }
            div { class: "stat-card",
                div { class: "stat-card-value", "{stats.closed_jobs}" }
                div { class: "stat-card-label", "已關閉" }
            }
            div { class: "stat-card stat-card-accent",
                div { class: "stat-card-value", "{views}" }
                div { class: "stat-card-label", "總瀏覽次數" }
            }
        }
    }
}
