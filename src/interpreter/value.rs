/// Runtime value representation.
///
/// Defines the `Value` enum together with type names for error messages,
/// numeric promotion and the textual rendering used by `print`.
pub mod core;
