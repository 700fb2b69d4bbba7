//! Log file names

use std::{fmt, str::FromStr};

use chrono::NaiveDate;

use crate::calendar::{self, DayKind};

/// Name of the file shared by all entries of the current weekend
pub const WEEKEND_FILE_NAME: &str = "weekend.txt";

/// Date format embedded in file names
const DATE_FORMAT: &str = "%Y%m%d";

/// Prefix of weekday files
const WEEKDAY_PREFIX: &str = "log";

/// Prefix of archived weekend files
const ARCHIVE_PREFIX: &str = "weekend-";

/// Extension of all log files
const EXTENSION: &str = ".txt";

/// A log file, identified by its name
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogFile {
    /// Daily file, `log<YYYYMMDD>.txt`
    Weekday(NaiveDate),
    /// Active weekend file, `weekend.txt`
    Weekend,
    /// Archived weekend file, `weekend-<YYYYMMDD>.txt`
    Archive(NaiveDate),
}

impl LogFile {
    /// File messages logged on `date` go to
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        match calendar::classify(date) {
            DayKind::Weekday => Self::Weekday(date),
            DayKind::Weekend => Self::Weekend,
        }
    }

    /// File name as stored on disk
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFile::Weekday(date) => write!(
                f,
                "{WEEKDAY_PREFIX}{}{EXTENSION}",
                date.format(DATE_FORMAT)
            ),
            LogFile::Weekend => write!(f, "{WEEKEND_FILE_NAME}"),
            LogFile::Archive(date) => write!(
                f,
                "{ARCHIVE_PREFIX}{}{EXTENSION}",
                date.format(DATE_FORMAT)
            ),
        }
    }
}

/// File name is not one of the log file forms
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[expect(clippy::module_name_repetitions, reason = "error of `LogFile` parsing")]
#[error("Not a log file name: {0:?}")]
pub struct LogFileParseError(String);

/// Parse the `YYYYMMDD` part of a file name
fn parse_stamp(stamp: &str) -> Option<NaiveDate> {
    // chrono accepts shorter fields, file names always carry exactly 8 digits
    if stamp.len() != 8 || !stamp.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(stamp, DATE_FORMAT).ok()
}

impl FromStr for LogFile {
    type Err = LogFileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == WEEKEND_FILE_NAME {
            return Ok(Self::Weekend);
        }
        let stem = s
            .strip_suffix(EXTENSION)
            .ok_or_else(|| LogFileParseError(s.to_owned()))?;
        stem.strip_prefix(ARCHIVE_PREFIX)
            .and_then(parse_stamp)
            .map(Self::Archive)
            .or_else(|| {
                stem.strip_prefix(WEEKDAY_PREFIX)
                    .and_then(parse_stamp)
                    .map(Self::Weekday)
            })
            .ok_or_else(|| LogFileParseError(s.to_owned()))
    }
}
