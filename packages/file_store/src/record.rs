use serde::de::DeserializeOwned;
use serde::Serialize;

/// A serializable unit of persisted data.
///
/// Records are identified by a caller-supplied id that lives in the file name,
/// never inside the payload. Anything that can round-trip through serde is a
/// record.
pub trait Record: Serialize + DeserializeOwned {}

impl<T: Serialize + DeserializeOwned> Record for T {}
