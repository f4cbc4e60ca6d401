//! Fixed copy and mock data rendered by the pages.
//!
//! Nothing here is fetched or persisted; every table is a `const`.

pub mod inspection;
pub mod snippets;
pub mod tiles;
