//! Page skeletons compiled into the binary.
//!
//! # Usage
//!
//! ```ignore
//! use embed::work::{WORK_HTML, WorkPageVars};
//!
//! let html = WORK_HTML.render(&WorkPageVars { title, description, entries });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod work {
    use super::{Template, TemplateVars};
    use std::borrow::Cow;

    /// Variables for work.html.
    pub struct WorkPageVars<'a> {
        pub title: &'a str,
        pub description: &'a str,
        pub entries: &'a str,
    }

    impl TemplateVars for WorkPageVars<'_> {
        fn slot(&self, name: &str) -> Option<Cow<'_, str>> {
            let value = match name {
                "PAGE_TITLE" => self.title,
                "PAGE_DESCRIPTION" => self.description,
                "ENTRIES" => self.entries,
                _ => return None,
            };
            Some(Cow::Borrowed(value))
        }
    }

    /// Build-log page skeleton.
    pub const WORK_HTML: Template<WorkPageVars<'static>> =
        Template::new(include_str!("work.html"));
}

pub mod serve {
    use super::{Template, TemplateVars};
    use std::borrow::Cow;

    /// Variables for the server's HTML error page.
    pub struct ErrorVars<'a> {
        pub status: u16,
        pub message: &'a str,
    }

    impl TemplateVars for ErrorVars<'_> {
        fn slot(&self, name: &str) -> Option<Cow<'_, str>> {
            match name {
                "STATUS" => Some(Cow::Owned(self.status.to_string())),
                "MESSAGE" => Some(crate::utils::html::escape(self.message)),
                _ => None,
            }
        }
    }

    /// Error page returned for failed requests.
    pub const ERROR_HTML: Template<ErrorVars<'static>> =
        Template::new(include_str!("error.html"));
}
