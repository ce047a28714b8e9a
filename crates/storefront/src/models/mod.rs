//! Session-related types.

/// Session keys for visitor data.
pub mod session_keys {
    /// Key for the visitor's serialized `StoreState`.
    pub const STORE_STATE: &str = "store_state";
}
