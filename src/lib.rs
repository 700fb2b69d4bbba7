//! Route log messages to date dependent files
//!
//! Monday to Friday, messages go to a daily `log<YYYYMMDD>.txt` file. On
//! weekends they all go to `weekend.txt`, which is renamed to
//! `weekend-<YYYYMMDD>.txt` when the first write of a new weekend finds its
//! content is from an earlier weekend.

// Binary only dependencies
use clap as _;
#[cfg(feature = "generate-extras")]
use clap_complete as _;
#[cfg(feature = "generate-extras")]
use clap_mangen as _;
use simple_logger as _;

pub mod calendar;
pub mod clock;
pub mod log_file;
pub mod router;
pub mod store;

pub use calendar::{ArchiveNaming, DayKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use log_file::LogFile;
pub use router::LogRouter;
pub use store::{DirStore, FileStore, MemoryStore, StoreError};
