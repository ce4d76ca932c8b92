//! Client handles shared with every admin component through Dioxus context.

use std::rc::Rc;

use api::{ClientConfig, JobsClient, TeamsClient};
use dioxus::prelude::*;

/// The resource clients the admin pages talk to.
///
/// Provided once at the root with `use_context_provider` and read with
/// [`use_clients`]; components never build their own.
#[derive(Clone)]
pub struct AdminClients {
    pub teams: Rc<TeamsClient>,
    pub jobs: Rc<JobsClient>,
}

impl AdminClients {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            teams: Rc::new(TeamsClient::new(config)),
            jobs: Rc::new(JobsClient::new(config)),
        }
    }
}

/// Read the clients provided by an ancestor.
pub fn use_clients() -> AdminClients {
    use_context::<AdminClients>()
}
