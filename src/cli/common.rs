//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Result;
use jwalk::WalkDir;
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::log;
use crate::page::{Page, SourceError, load_page, source::is_markdown};
use crate::plugin::{App, AppEnv, ExtendsPagePlugin};
use crate::utils::path::resolve_path;

const IGNORED_DIRS: &[&str] = &["node_modules", ".vuepress", ".git"];

/// Collect Markdown files from CLI paths, or all content when none are given.
///
/// The result is sorted so output order does not depend on walk order.
pub fn collect_content_files(paths: &[PathBuf], content_dir: &Path) -> Result<Vec<PathBuf>> {
    let paths: Vec<PathBuf> = if paths.len() == 1 && paths[0].as_os_str() == "-" {
        read_paths_from_stdin()?
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    if paths.is_empty() {
        files = collect_markdown_files(content_dir);
    }

    for path in &paths {
        let resolved = resolve_path(path, content_dir);

        if resolved.is_file() {
            if !is_markdown(&resolved) {
                anyhow::bail!("Not a Markdown file: {}", path.display());
            }
            files.push(resolved);
        } else if resolved.is_dir() {
            files.extend(collect_markdown_files(&resolved));
        } else {
            anyhow::bail!(
                "Path not found: {}\n  Tried:\n    - {}\n    - {}",
                path.display(),
                path.display(),
                content_dir.join(path).display()
            );
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// All Markdown files under `dir`, skipping tool and VCS directories.
pub fn collect_markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .process_read_dir(|_, _, _, children| {
            children.retain(|entry| {
                entry.as_ref().map_or(true, |e| {
                    let name = e.file_name().to_str().unwrap_or_default();
                    !(e.file_type().is_dir() && IGNORED_DIRS.contains(&name))
                })
            });
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| is_markdown(p))
        .collect()
}

/// Read paths from stdin (one per line)
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }

    Ok(paths)
}

/// A source file that could not be turned into a page.
pub type LoadFailure = (PathBuf, SourceError);

/// Load pages in parallel, keeping input order.
///
/// Files that fail to load are returned separately; callers decide whether
/// that is fatal.
pub fn load_pages(files: &[PathBuf], config: &SiteConfig) -> (Vec<Page>, Vec<LoadFailure>) {
    let content_dir = config.content_dir();
    let lang = config.site.lang.as_str();

    let results: Vec<_> = files
        .par_iter()
        .map(|file| load_page(file, content_dir, lang).map_err(|e| (file.clone(), e)))
        .collect();

    let mut pages = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for result in results {
        match result {
            Ok(page) => pages.push(page),
            Err(failure) => failures.push(failure),
        }
    }
    (pages, failures)
}

/// `docs/a.md: Invalid YAML frontmatter: <cause>`
pub fn describe_failure((file, error): LoadFailure) -> String {
    format!("{}: {:#}", file.display(), anyhow::Error::from(error))
}

/// App with the page-info plugin configured from `[build]`.
pub fn build_app(config: &SiteConfig) -> App {
    let mut app = App::new(AppEnv {
        is_debug: config.build.debug,
    });
    app.use_plugin(ExtendsPagePlugin::new(config.build.legacy, config.build.check));
    app
}
