//! Man page and shell completion generation

use std::{io, path::Path};

use clap::{CommandFactory as _, ValueEnum as _};
use clap_complete::Shell;

use crate::cl;

/// Binary name used in generated files
const BIN_NAME: &str = env!("CARGO_BIN_NAME");

/// Generate man pages for the command and each subcommand into `dir`
pub(crate) fn generate_man_pages(dir: &Path) -> anyhow::Result<()> {
    clap_mangen::generate_to(cl::Args::command().name(BIN_NAME), dir)?;
    Ok(())
}

/// Generate shell completions, for `shell` on stdout, or for all shells into `dir`
pub(crate) fn generate_shell_completions(
    shell: Option<Shell>,
    dir: Option<&Path>,
) -> anyhow::Result<()> {
    let mut cmd = cl::Args::command().name(BIN_NAME);
    match (shell, dir) {
        (Some(shell), _) => clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut io::stdout()),
        (None, Some(dir)) => {
            for shell in Shell::value_variants() {
                let path = clap_complete::generate_to(*shell, &mut cmd, BIN_NAME, dir)?;
                log::debug!("Generated {shell} completions in {path:?}");
            }
        }
        (None, None) => anyhow::bail!("Missing shell or output directory"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Read all man page content from a directory
    fn read_all_man_pages(dir: &Path) -> String {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| fs::read_to_string(e.unwrap().path()).unwrap())
            .collect()
    }

    #[test]
    fn man_pages_generated() {
        let dir = tempfile::tempdir().unwrap();
        generate_man_pages(dir.path()).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert!(!entries.is_empty());
        for entry in entries {
            let path = entry.unwrap().path();
            assert!(path.extension().is_some_and(|e| e == "1"));
            let content = fs::read_to_string(&path).unwrap();
            assert!(!content.is_empty());
        }
    }

    #[test]
    fn shell_completions_generated() {
        let dir = tempfile::tempdir().unwrap();
        generate_shell_completions(None, Some(dir.path())).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert!(!entries.is_empty());
        for entry in entries {
            let content = fs::read_to_string(entry.unwrap().path()).unwrap();
            assert!(!content.is_empty());
        }
    }

    #[test]
    fn man_pages_include_log_options() {
        let dir = tempfile::tempdir().unwrap();
        generate_man_pages(dir.path()).unwrap();
        let all_content = read_all_man_pages(dir.path());
        // roff escapes hyphens as \-
        assert!(all_content.contains("archive\\-naming"));
        assert!(all_content.contains("\\-\\-date"));
    }

    #[test]
    fn shell_completions_include_options() {
        let dir = tempfile::tempdir().unwrap();
        generate_shell_completions(None, Some(dir.path())).unwrap();
        let mut all_content = String::new();
        for entry in fs::read_dir(dir.path()).unwrap() {
            all_content.push_str(&fs::read_to_string(entry.unwrap().path()).unwrap());
        }
        assert!(all_content.contains("archive-naming"));
        assert!(all_content.contains("--date"));
    }

    #[test]
    fn shell_completions_need_target() {
        assert!(generate_shell_completions(None, None).is_err());
    }
}
