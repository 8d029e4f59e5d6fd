/// Control actions an observer can request from the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ask the engine to stop the search at its next safe interruption point.
    ///
    /// This is a request, not a guarantee: the engine may deliver further
    /// progress events before it actually stops.
    Terminate,
}
