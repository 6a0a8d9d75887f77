//! Domain-level frontend features (auth, listing, users, trusts) and their
//! shared logic. Routes import these modules to keep view code focused while
//! session handling and fetch reconciliation live in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod listing;
pub(crate) mod trusts;
pub(crate) mod users;
