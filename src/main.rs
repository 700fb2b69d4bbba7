//! Route log messages to date dependent files

use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use anyhow::Context as _;
use clap::Parser as _;
use datelog::{ArchiveNaming, Clock, DirStore, FixedClock, LogFile, LogRouter, SystemClock};
// Library only dependencies
use strum as _;
use thiserror as _;

mod cl;
#[cfg(feature = "generate-extras")]
mod extras;

/// Route messages with the given clock, from arguments or, if there are none, from `input` lines
fn log_messages<C, R>(
    clock: C,
    dir: &Path,
    archive_naming: ArchiveNaming,
    message: &[String],
    input: R,
) -> anyhow::Result<()>
where
    C: Clock,
    R: BufRead,
{
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {dir:?}"))?;
    let store = DirStore::new(dir)?;
    let mut router = LogRouter::new(clock, store).with_archive_naming(archive_naming);
    if message.is_empty() {
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            router
                .log(&format!("{line}\n"))
                .with_context(|| format!("Failed to log message in {dir:?}"))?;
        }
    } else {
        router
            .log(&format!("{}\n", message.join(" ")))
            .with_context(|| format!("Failed to log message in {dir:?}"))?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Parse cl args
    let args = cl::Args::parse();

    // Init logger
    simple_logger::init_with_level(args.verbosity).context("Failed to init logger")?;

    match args.command {
        cl::Command::Log {
            dir,
            date,
            archive_naming,
            message,
        } => {
            if let Some(date) = date {
                log::info!("Logging as of {date}");
                log_messages(
                    FixedClock(date),
                    &dir,
                    archive_naming,
                    &message,
                    io::stdin().lock(),
                )?;
            } else {
                log_messages(
                    SystemClock,
                    &dir,
                    archive_naming,
                    &message,
                    io::stdin().lock(),
                )?;
            }
        }
        cl::Command::Target { date } => {
            let date = date.unwrap_or_else(|| SystemClock.today());
            println!(
                "{date} ({}): {}",
                datelog::calendar::classify(date),
                LogFile::for_date(date)
            );
        }
        cl::Command::List { dir } => {
            let store = DirStore::new(&dir)?;
            for file in store
                .log_files()
                .with_context(|| format!("Failed to list log files in {dir:?}"))?
            {
                println!("{file}");
            }
        }
        #[cfg(feature = "generate-extras")]
        cl::Command::GenManPages { dir } => {
            extras::generate_man_pages(&dir).context("Failed to generate man pages")?;
        }
        #[cfg(feature = "generate-extras")]
        cl::Command::GenShellCompletions { shell, dir } => {
            extras::generate_shell_completions(shell, dir.as_deref())
                .context("Failed to generate shell completions")?;
        }
    }

    Ok(())
}
