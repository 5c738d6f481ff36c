/// Malformed-input errors: a value that cannot be an entity at all.
/// Per-field anomalies (missing fields, unparsable dates) are not errors —
/// they degrade to the documented defaults.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("expected a JSON object for an entity, got {kind}")]
    NotAnObject { kind: &'static str },
}
