mod handle;
pub use handle::*;

mod index;
pub use index::*;

mod cursor;
pub use cursor::*;

mod locator;
pub use locator::*;

mod transaction;
pub use transaction::*;
