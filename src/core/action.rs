//! Actions that modules can return to communicate with the app

/// Actions returned by modules to communicate state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action needed
    None,

    /// Follow a route path, e.g. `/recs`
    Navigate(&'static str),
}
