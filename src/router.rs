//! Message routing to date dependent log files

use chrono::NaiveDate;

use crate::{
    calendar::{self, ArchiveNaming, DayKind},
    clock::Clock,
    log_file::{LogFile, WEEKEND_FILE_NAME},
    store::{FileStore, StoreError},
};

/// Routes each message to the log file for the current date
///
/// Weekday messages go to a daily file, weekend messages to a single weekend
/// file, which is archived under a dated name when a write finds it stale.
///
/// No locking is done: several routers writing to the same files from
/// different threads or processes may race on file creation or archiving.
#[expect(clippy::module_name_repetitions, reason = "re-exported at crate root")]
pub struct LogRouter<C, S> {
    /// Current date source
    clock: C,
    /// Log file storage
    store: S,
    /// Archive dating scheme
    naming: ArchiveNaming,
}

impl<C, S> LogRouter<C, S>
where
    C: Clock,
    S: FileStore,
{
    /// Build a router naming archives after the boundary Sunday
    pub fn new(clock: C, store: S) -> Self {
        Self {
            clock,
            store,
            naming: ArchiveNaming::default(),
        }
    }

    /// Set archive dating scheme
    #[must_use]
    pub fn with_archive_naming(mut self, naming: ArchiveNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Log file storage
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume router, returning its clock and store
    pub fn into_parts(self) -> (C, S) {
        (self.clock, self.store)
    }

    /// Append message to today's log file, creating or archiving files as needed
    ///
    /// # Errors
    ///
    /// Store errors are returned unchanged, possibly after some files were already
    /// created or renamed. If the weekend file was archived but could not be recreated,
    /// the next call creates it.
    pub fn log(&mut self, message: &str) -> Result<(), StoreError> {
        let today = self.clock.today();
        let name = LogFile::for_date(today).name();
        log::debug!("Routing message for {today} to {name:?}");
        match calendar::classify(today) {
            DayKind::Weekend => self.prepare_weekend_file(today)?,
            DayKind::Weekday => {
                if !self.store.exists(&name) {
                    log::info!("Creating log file {name:?}");
                    self.store.create(&name)?;
                }
            }
        }
        self.store.append(&name, message)
    }

    /// Ensure the weekend file exists and holds no stale content
    fn prepare_weekend_file(&mut self, today: NaiveDate) -> Result<(), StoreError> {
        let last_write = match self.store.last_write_time(WEEKEND_FILE_NAME) {
            Ok(t) => t,
            Err(StoreError::NotFound(_)) => {
                log::info!("Creating log file {WEEKEND_FILE_NAME:?}");
                return self.store.create(WEEKEND_FILE_NAME);
            }
            Err(e) => return Err(e),
        };
        log::debug!("{WEEKEND_FILE_NAME:?} last written at {last_write}");
        if let Some(archive_date) = calendar::archive_date(self.naming, today, last_write) {
            let archive = LogFile::Archive(archive_date).name();
            log::info!("Archiving stale {WEEKEND_FILE_NAME:?} to {archive:?}");
            self.store.rename(WEEKEND_FILE_NAME, &archive)?;
            self.store.create(WEEKEND_FILE_NAME)?;
        }
        Ok(())
    }
}
