/// Monotonic clock that works on both native and wasm targets.
///
/// `std::time::Instant` panics on `wasm32-unknown-unknown`; `web-time` falls
/// back to `performance.now()` there and is a re-export of std elsewhere.
pub use web_time::Instant as AppInstant;
