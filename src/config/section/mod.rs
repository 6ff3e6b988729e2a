//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pageinfo.toml`:
//!
//! | Module  | TOML Section | Purpose                                 |
//! |---------|--------------|-----------------------------------------|
//! | `build` | `[build]`    | Content directory and hook switches     |
//! | `site`  | `[site]`     | Site language                           |

mod build;
mod site;

pub use build::BuildSectionConfig;
pub use site::SiteSectionConfig;
