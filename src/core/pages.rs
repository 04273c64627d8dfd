// Single-selection state over the site's in-page "pages".

use super::constants::PAGE_ID_SUFFIX;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SwitchError {
    #[error("navigation trigger has no target page")]
    MissingTarget,
    #[error("no page section with id `{0}`")]
    UnknownPage(String),
}

/// DOM id of the section for page `key`: `"about"` -> `"about-page"`.
#[inline]
pub fn page_element_id(key: &str) -> String {
    format!("{key}{PAGE_ID_SUFFIX}")
}

/// Page key for a section id, if it follows the `<key>-page` convention.
#[inline]
pub fn page_key(element_id: &str) -> Option<&str> {
    element_id
        .strip_suffix(PAGE_ID_SUFFIX)
        .filter(|k| !k.is_empty())
}

/// Target page of a nav trigger's `data-section` attribute.
#[inline]
pub fn trigger_target(data_section: Option<&str>) -> Result<&str, SwitchError> {
    match data_section.map(str::trim) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(SwitchError::MissingTarget),
    }
}

/// Result of a successful switch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTransition {
    pub from: Option<usize>,
    pub to: usize,
}

#[derive(Clone, Debug, Default)]
pub struct PageSwitcher {
    element_ids: Vec<String>,
    active: Option<usize>,
}

impl PageSwitcher {
    /// Build from the page section ids found in markup and the index the
    /// markup marks active.
    pub fn new(element_ids: Vec<String>, active: Option<usize>) -> Self {
        let active = active.filter(|&i| i < element_ids.len());
        Self {
            element_ids,
            active,
        }
    }

    pub fn len(&self) -> usize {
        self.element_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_ids.is_empty()
    }

    pub fn element_ids(&self) -> &[String] {
        &self.element_ids
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn active_element_id(&self) -> Option<&str> {
        self.active.map(|i| self.element_ids[i].as_str())
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_element_id().and_then(page_key)
    }

    pub fn is_active(&self, element_id: &str) -> bool {
        self.active_element_id() == Some(element_id)
    }

    /// Make page `key` the only active one. Unknown keys leave the state as
    /// it was. Switching to the already active page is allowed and replays
    /// its entrance.
    pub fn switch_to(&mut self, key: &str) -> Result<PageTransition, SwitchError> {
        let wanted = page_element_id(key);
        let to = self
            .element_ids
            .iter()
            .position(|id| *id == wanted)
            .ok_or_else(|| SwitchError::UnknownPage(wanted))?;
        let from = self.active.replace(to);
        Ok(PageTransition { from, to })
    }
}
