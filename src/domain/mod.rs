//! Domain values shared by the lookup service and the Notion repository.

pub mod profile;
pub mod types;
