//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module     | TOML Section   | Purpose                                |
//! |------------|----------------|----------------------------------------|
//! | `site`     | `[site]`       | Site root directory                    |
//! | `serve`    | `[serve]`      | Admin server (interface, port, index)  |
//! | `render`   | `[render]`     | Work page output and backup set        |
//! | `generate` | `[generate]`   | Site config file and pages to patch    |
//! | `commit`   | `[commit]`     | Remote, branch fallback, push toggle   |

mod commit;
mod generate;
mod render;
mod serve;
mod site;

pub use commit::CommitConfig;
pub use generate::GenerateConfig;
pub use render::RenderConfig;
pub use serve::ServeConfig;
pub use site::SiteConfig;

use super::ConfigDiagnostics;

/// Check that a configured name is a bare file name inside the site root.
pub(crate) fn check_file_name(field: &str, name: &str, diag: &mut ConfigDiagnostics) {
    if name.trim().is_empty() {
        diag.error(field, "must not be empty");
    } else if !crate::utils::path::is_plain_file_name(name) {
        diag.error_with_hint(
            field,
            format!("`{name}` is not a plain file name"),
            "files are resolved against the site root; drop any directory part",
        );
    }
}
