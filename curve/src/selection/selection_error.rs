///
/// Errors that the selection state machine can report to its caller
///
/// These are always local and synchronous: there is no background recomputation in
/// the engine, so every error surfaces from the call that caused it.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SelectionError {
    /// A point was added when the selection already holds the maximum number of
    /// control points. The selection is left unchanged.
    CapacityExceeded,
}
