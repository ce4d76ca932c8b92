// Dioxus `rsx!` macro expands to unwraps internally; allow to avoid false positives.
#![allow(clippy::disallowed_methods)]

use api::ClientConfig;
use dioxus::prelude::*;

use ui::AdminClients;
use ui::admin::{AdminJobsPage, AdminTeamsPage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::AdminTeams {})]

    // Admin routes with sidebar navigation
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminRedirect {},
        #[route("/admin/teams")]
        AdminTeams {},
        #[route("/admin/jobs")]
        AdminJobs {},
}

const ADMIN_CSS: Asset = asset!("/assets/admin.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Built once; every page reads the clients from context.
    use_context_provider(|| {
        let config = ClientConfig::from_env().unwrap_or_else(|error| {
            tracing::error!(%error, "invalid API configuration, using the default base URL");
            ClientConfig::default()
        });
        tracing::info!(base_url = config.base_url(), "admin console starting");
        AdminClients::new(&config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ADMIN_CSS }

        Router::<Route> {}
    }
}

/// Layout for admin routes with sidebar navigation.
#[component]
fn AdminLayout() -> Element {
    rsx! {
        div { class: "admin-layout",
            // Sidebar navigation
            aside { class: "admin-sidebar",
                div { class: "sidebar-header",
                    h1 { class: "sidebar-logo", "招募管理後台" }
                }
                nav { class: "sidebar-nav",
                    div { class: "nav-section",
                        span { class: "nav-section-title", "管理" }
                        Link {
                            to: Route::AdminTeams {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "▦" }
                            span { "團隊" }
                        }
                        Link {
                            to: Route::AdminJobs {},
                            class: "nav-link",
                            active_class: "active",
                            span { class: "nav-icon", "☰" }
                            span { "職缺" }
                        }
                    }
                }
            }

            // Main content area
            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect /admin to /admin/teams.
#[component]
fn AdminRedirect() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.push(Route::AdminTeams {});
    });
    rsx! {}
}

/// Teams page.
#[component]
fn AdminTeams() -> Element {
    rsx! {
        AdminTeamsPage {}
    }
}

/// Jobs page.
#[component]
fn AdminJobs() -> Element {
    rsx! {
        AdminJobsPage {}
    }
}
