//! Descriptors for the backend collections the console talks to.

/// A backend collection of entities of one kind, addressed by a path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resource {
    /// Collection path segment, e.g. `/teams`.
    pub path: &'static str,
    /// Key a single entity may be wrapped under in responses, e.g. `team`.
    pub singular: &'static str,
    /// Backend name of the identifier field, e.g. `team_id`.
    pub id_field: &'static str,
}

impl Resource {
    pub const fn new(path: &'static str, singular: &'static str, id_field: &'static str) -> Self {
        Self {
            path,
            singular,
            id_field,
        }
    }

    /// Keys whose values identify or timestamp an entity. The client never forwards
    /// these on update.
    pub fn server_owned_keys(&self) -> [&'static str; 6] {
        [
            "id",
            self.id_field,
            "created_at",
            "createdAt",
            "updated_at",
            "updatedAt",
        ]
    }
}

/// The teams collection.
pub const TEAMS: Resource = Resource::new("/teams", "team", "team_id");

/// The job openings collection.
pub const JOBS: Resource = Resource::new("/jobs", "job", "job_id");
