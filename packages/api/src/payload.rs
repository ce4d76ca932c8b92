//! Selection of resolved form fields for create and update bodies.

use admin_core::{FieldLookup, LogicalField};

/// Which request a form payload is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PayloadMode {
    /// Blank fields are left out and the backend applies its defaults.
    Create,
    /// Blank fields the form carries are sent so the stored value is cleared.
    Update,
}

/// Resolved `(name, value)` pairs to send for `mode`.
///
/// On update a field absent from the form is never sent, so a partial form
/// cannot clear values it does not show.
pub(crate) fn form_entries<L: FieldLookup + ?Sized>(
    fields: &[LogicalField],
    form: &L,
    mode: PayloadMode,
) -> Vec<(&'static str, String)> {
    fields
        .iter()
        .filter_map(|field| {
            let value = field.resolve(form);
            let keep = match mode {
                PayloadMode::Create => !value.is_empty(),
                PayloadMode::Update => !value.is_empty() || field.is_present(form),
            };
            keep.then_some((field.name, value))
        })
        .collect()
}
