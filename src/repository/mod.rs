use std::future::Future;

use crate::{domain::profile::ProfileUrl, repository::errors::RepositoryResult};

pub mod errors;
pub mod notion;

pub use notion::NotionRepository;

/// Looks up profile pages whose filter property contains a search term.
pub trait ProfileReader {
    /// Returns matching profile urls in the order the backend reports them.
    ///
    /// An empty vector means "no matches"; failing to query is always an error.
    fn find_profile_urls(
        &self,
        term: &str,
    ) -> impl Future<Output = RepositoryResult<Vec<ProfileUrl>>>;
}
