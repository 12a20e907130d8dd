use super::FacadeError;
use crate::engine::{CollectionRef, DirectoryRef};
use crate::types::{CollectionLocator, DropOptions, LifecycleOutcome};
use log::{info, trace, warn};

/// Facade for collection lifecycle calls.
///
/// Dropping or truncating a collection that does not exist is not an error,
/// the call reports [`LifecycleOutcome::Absent`] and does nothing.
pub struct FacadeCollection {
    directory: DirectoryRef,
}

impl FacadeCollection {
    pub fn new(directory: DirectoryRef) -> Self {
        Self { directory }
    }

    /// Resolves a locator to a live collection, handles are taken as they are.
    pub fn resolve(&self, locator: &CollectionLocator) -> Result<Option<CollectionRef>, FacadeError> {
        match locator {
            CollectionLocator::Handle(col) => Ok(Some(col.clone())),
            CollectionLocator::Name(name) => Ok(self.directory.collection(name)?),
        }
    }

    /// Drops a collection.
    ///
    /// A collection that cannot be found, either while resolving it or because
    /// it vanished before the engine dropped it, counts as already dropped. Any
    /// other engine failure is returned.
    pub fn drop(
        &self,
        locator: &CollectionLocator,
        options: &DropOptions,
    ) -> Result<LifecycleOutcome, FacadeError> {
        let Some(collection) = self.resolve(locator)? else {
            trace!("collection `{}` not found, nothing to drop", locator);
            return Ok(LifecycleOutcome::Absent);
        };

        warn!("dropping collection `{}`", collection.name());

        match collection.drop_collection(options) {
            Ok(()) => {
                info!("collection `{}` dropped", collection.name());
                Ok(LifecycleOutcome::Applied)
            }
            Err(e) if e.is_data_source_not_found() => {
                trace!("collection `{}` vanished before drop ({})", collection.name(), e);
                Ok(LifecycleOutcome::Absent)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Truncates a collection. Engine failures are returned unchanged.
    pub fn truncate(&self, locator: &CollectionLocator) -> Result<LifecycleOutcome, FacadeError> {
        let Some(collection) = self.resolve(locator)? else {
            trace!("collection `{}` not found, nothing to truncate", locator);
            return Ok(LifecycleOutcome::Absent);
        };

        warn!("truncating collection `{}`", collection.name());
        collection.truncate()?;

        Ok(LifecycleOutcome::Applied)
    }
}
