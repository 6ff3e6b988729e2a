//! Check command implementation.
//!
//! Runs legacy conversion (when enabled) and the frontmatter checker over
//! every page without classifying. Fails when any problem is found; a page
//! that cannot be loaded at all counts as one problem.

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::cli::CheckArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::plugin::{FrontmatterDiagnostic, check_frontmatter, convert_frontmatter};
use crate::utils::plural_count;

use super::common::{collect_content_files, describe_failure, load_pages};

/// Execute check command
pub fn run_check(args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    let files = collect_content_files(&args.paths, config.content_dir())?;
    let (mut pages, failures) = load_pages(&files, config);
    let unreadable = failures.len();
    for failure in failures {
        log!("error"; "{}", describe_failure(failure));
    }
    let legacy = config.build.legacy;
    let is_debug = config.build.debug;

    let diagnostics: Vec<FrontmatterDiagnostic> = pages
        .par_iter_mut()
        .flat_map_iter(|page| {
            if legacy {
                let path = page.file_path_relative.clone().unwrap_or_default();
                convert_frontmatter(&mut page.frontmatter, &path);
            }
            check_frontmatter(page, is_debug)
        })
        .collect();

    if diagnostics.is_empty() && unreadable == 0 {
        log!("check"; "{} checked, no problems found", plural_count(pages.len(), "page"));
        return Ok(());
    }

    let mut affected: Vec<&str> = diagnostics.iter().map(|d| d.page.as_str()).collect();
    affected.sort_unstable();
    affected.dedup();

    bail!(
        "found {} in {}",
        plural_count(diagnostics.len() + unreadable, "problem"),
        plural_count(affected.len() + unreadable, "page")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &std::path::Path) -> SiteConfig {
        let mut config = crate::config::test_parse_config("");
        config.build.content = dir.to_path_buf();
        config
    }

    #[test]
    fn test_check_clean_content() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntitle: A\ntags: [x]\n---\n").unwrap();

        let args = CheckArgs { paths: Vec::new(), verbose: false };
        assert!(run_check(&args, &config_for(dir.path())).is_ok());
    }

    #[test]
    fn test_check_reports_problems() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\norder: first\nhome: yes\n---\n").unwrap();
        fs::write(dir.path().join("b.md"), "---\ndate: someday\n---\n").unwrap();

        let args = CheckArgs { paths: Vec::new(), verbose: false };
        let err = run_check(&args, &config_for(dir.path())).unwrap_err();
        assert_eq!(err.to_string(), "found 3 problems in 2 pages");
    }

    #[test]
    fn test_unparseable_page_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntitle: [unclosed\n---\n").unwrap();
        fs::write(dir.path().join("b.md"), "---\ntitle: B\n---\n").unwrap();

        let args = CheckArgs { paths: Vec::new(), verbose: false };
        let err = run_check(&args, &config_for(dir.path())).unwrap_err();
        assert_eq!(err.to_string(), "found 1 problem in 1 page");
    }

    #[test]
    fn test_unparseable_and_ill_typed_counted_together() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "+++\ntitle = \n+++\n").unwrap();
        fs::write(dir.path().join("b.md"), "---\n- a list\n---\n").unwrap();
        fs::write(dir.path().join("c.md"), "---\nicon: 3\n---\n").unwrap();

        let args = CheckArgs { paths: Vec::new(), verbose: false };
        let err = run_check(&args, &config_for(dir.path())).unwrap_err();
        assert_eq!(err.to_string(), "found 3 problems in 3 pages");
    }

    #[test]
    fn test_legacy_keys_checked_after_rename() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "---\ntime: someday\n---\n").unwrap();

        let args = CheckArgs { paths: Vec::new(), verbose: false };
        let mut config = config_for(dir.path());
        assert!(run_check(&args, &config).is_err());

        config.build.legacy = false;
        assert!(run_check(&args, &config).is_ok());
    }
}
