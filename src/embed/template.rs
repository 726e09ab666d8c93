//! Template types for typed slot injection.
//!
//! A template is a static string with `__SLOT_NAME__` markers. Rendering is a
//! single left-to-right pass, so text injected into one slot is never
//! rescanned for other markers.

use regex::{Captures, Regex};
use std::{borrow::Cow, marker::PhantomData, sync::OnceLock};

/// Trait for template variable sets
pub trait TemplateVars {
    /// Value for the slot `name` (without the surrounding underscores).
    fn slot(&self, name: &str) -> Option<Cow<'_, str>>;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

fn slot_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"__([A-Z][A-Z0-9_]*[A-Z0-9])__").unwrap())
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    /// Slot names referenced by the template, in order of appearance.
    #[cfg(test)]
    pub fn slots(&self) -> Vec<&'static str> {
        slot_pattern()
            .captures_iter(self.content)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .collect()
    }
}

impl<V: TemplateVars> Template<V> {
    /// Fill every known slot; unknown markers are left in place.
    pub fn render(&self, vars: &V) -> String {
        slot_pattern()
            .replace_all(self.content, |caps: &Captures<'_>| match vars.slot(&caps[1]) {
                Some(value) => value.into_owned(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
