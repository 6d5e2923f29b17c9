//! One module per endpoint.
//!
//! Each module exposes `build_request`, plus `send` / `send_detailed`
//! (async) and `blocking` / `blocking_detailed`. The plain variants return
//! only the parsed body; the detailed ones keep status, headers and raw
//! content so callers can tell failure kinds apart.

pub mod discovery;
pub mod nodes;
pub mod search;
