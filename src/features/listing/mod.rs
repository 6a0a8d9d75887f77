//! Shared list/search/pagination machinery for the directory screens. The
//! pure state machine and endpoint selection live here alongside the reactive
//! controller that drives them in the browser.

#[cfg(target_arch = "wasm32")]
pub(crate) mod controller;
#[cfg(target_arch = "wasm32")]
pub(crate) mod debounce;
pub(crate) mod endpoint;
pub(crate) mod envelope;
pub(crate) mod state;
