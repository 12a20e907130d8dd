use super::FacadeError;
use crate::engine::{CollectionRef, DirectoryRef};
use crate::types::{self, IndexDescriptor, IndexLocator};
use log::{debug, trace};

/// Facade resolving index handles against live collections.
///
/// Index lists are fetched from the collection on every call, nothing is cached.
pub struct FacadeIndex {
    directory: DirectoryRef,
}

impl FacadeIndex {
    pub fn new(directory: DirectoryRef) -> Self {
        Self { directory }
    }

    /// Finds the index designated by `locator`.
    ///
    /// Returns `Ok(None)` if the collection exists but has no index whose id is
    /// the full handle or whose name is the local part of the handle.
    pub fn resolve(
        &self,
        locator: &IndexLocator,
    ) -> Result<Option<IndexDescriptor>, FacadeError> {
        let (handle, collection) = self.collection_for(locator)?;

        let found = collection
            .indexes()?
            .into_iter()
            .find(|index| index.is_addressed_by(handle.as_str(), &handle.index));

        match &found {
            Some(index) => trace!("index `{}` resolved to `{}`", handle, index.id),
            None => debug!("no index matching `{}`", handle),
        }

        Ok(found)
    }

    /// Drops the index designated by `locator`, reporting whatever the
    /// collection reports.
    pub fn drop(&self, locator: &IndexLocator) -> Result<bool, FacadeError> {
        let (handle, collection) = self.collection_for(locator)?;

        trace!("dropping index `{}`", handle);
        Ok(collection.drop_index(handle.as_str())?)
    }

    fn collection_for(
        &self,
        locator: &IndexLocator,
    ) -> Result<(types::IndexHandle, CollectionRef), FacadeError> {
        let handle = match locator.handle() {
            Some(handle) => types::IndexHandle::parse(handle)?,
            None => {
                return Err(types::HandleError::BadIndexHandle(locator.to_string()).into());
            }
        };

        let collection = self
            .directory
            .collection(&handle.collection)?
            .ok_or_else(|| FacadeError::CollectionNotFound(handle.collection.clone()))?;

        Ok((handle, collection))
    }
}
