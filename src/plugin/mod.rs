//! Page-extension plugins.
//!
//! A plugin hooks into the "extend page" phase: after frontmatter has been
//! parsed and before anything is rendered, every registered plugin gets each
//! page once, mutably.
//!
//! | Module    | Purpose                                           |
//! |-----------|---------------------------------------------------|
//! | `extends` | The page-info plugin (legacy → check → classify)  |
//! | `legacy`  | Deprecated frontmatter key conversion             |
//! | `check`   | Frontmatter type checking                         |
//! | `date`    | Localized date injection                          |

mod check;
mod date;
mod extends;
mod legacy;

pub use check::{FrontmatterDiagnostic, check_frontmatter};
pub use date::inject_localized_date;
pub use extends::{EXTENDS_PAGE_PLUGIN, ExtendsPagePlugin};
pub use legacy::convert_frontmatter;

use rayon::prelude::*;

use crate::page::Page;

/// Environment shared by all hooks of one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppEnv {
    /// Log extra detail (e.g., full frontmatter of pages with problems).
    pub is_debug: bool,
}

/// A hook run once per page during the extend-page phase.
///
/// Pages are independent: implementations only touch the page they are given,
/// so the phase may run pages in any order and in parallel.
pub trait PagePlugin: Send + Sync {
    fn name(&self) -> &str;

    fn extends_page(&self, page: &mut Page, env: &AppEnv);
}

/// Registered plugins plus the run environment.
#[derive(Default)]
pub struct App {
    pub env: AppEnv,
    plugins: Vec<Box<dyn PagePlugin>>,
}

impl App {
    pub fn new(env: AppEnv) -> Self {
        Self {
            env,
            plugins: Vec::new(),
        }
    }

    /// Register a plugin. Plugins run in registration order.
    pub fn use_plugin(&mut self, plugin: impl PagePlugin + 'static) -> &mut Self {
        crate::debug!("plugin"; "using {}", plugin.name());
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn plugin_names(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Run every plugin over one page.
    pub fn extend_page(&self, page: &mut Page) {
        for plugin in &self.plugins {
            plugin.extends_page(page, &self.env);
        }
    }

    /// Run every plugin over all pages in parallel.
    pub fn extend_pages(&self, pages: &mut [Page]) {
        pages.par_iter_mut().for_each(|page| self.extend_page(page));
    }
}
