use std::collections::BTreeMap;

use log::debug;

use crate::element::{find_element, find_element_mut, Element};

/// Errors from document lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No container was mounted under the given id.
    #[error("no mount with id {0:?}")]
    NotMounted(String),

    /// No element with the given id exists under the mount.
    #[error("no element {id:?} under mount {mount:?}")]
    NotFound { mount: String, id: String },
}

/// A headless document: a set of mounted root containers, each an
/// independent element tree.
///
/// Every query is scoped to one mount, so widgets attached to different
/// containers never observe each other's elements even when ids repeat.
#[derive(Debug, Default)]
pub struct Document {
    mounts: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty container under the given id, replacing any
    /// previous tree mounted there.
    pub fn mount(&mut self, id: impl Into<String>) {
        let id = id.into();
        let root = Element::div().id(id.clone());
        self.mounts.insert(id, root);
    }

    pub fn is_mounted(&self, id: &str) -> bool {
        self.mounts.contains_key(id)
    }

    pub fn unmount(&mut self, id: &str) -> bool {
        self.mounts.remove(id).is_some()
    }

    /// The root container for a mount.
    pub fn root(&self, mount: &str) -> Option<&Element> {
        self.mounts.get(mount)
    }

    /// Look up an element by id within one mount's tree.
    pub fn element_in(&self, mount: &str, id: &str) -> Result<&Element, DomError> {
        let root = self
            .mounts
            .get(mount)
            .ok_or_else(|| DomError::NotMounted(mount.to_string()))?;
        find_element(root, id).ok_or_else(|| DomError::NotFound {
            mount: mount.to_string(),
            id: id.to_string(),
        })
    }

    /// Mutate an element in place within one mount's tree.
    pub fn with_element_mut<R>(
        &mut self,
        mount: &str,
        id: &str,
        f: impl FnOnce(&mut Element) -> R,
    ) -> Result<R, DomError> {
        let root = self
            .mounts
            .get_mut(mount)
            .ok_or_else(|| DomError::NotMounted(mount.to_string()))?;
        let element = find_element_mut(root, id).ok_or_else(|| DomError::NotFound {
            mount: mount.to_string(),
            id: id.to_string(),
        })?;
        Ok(f(element))
    }

    /// Replace the children of an element within one mount's tree.
    pub fn set_children_in(
        &mut self,
        mount: &str,
        id: &str,
        children: Vec<Element>,
    ) -> Result<(), DomError> {
        debug!("replacing children of {id:?} under mount {mount:?}");
        self.with_element_mut(mount, id, |el| el.set_children(children))
    }

    /// Read the `value` attribute of an input-like element.
    pub fn value_in(&self, mount: &str, id: &str) -> Result<String, DomError> {
        Ok(self
            .element_in(mount, id)?
            .get_attr("value")
            .unwrap_or_default()
            .to_string())
    }

    /// Set the `value` attribute of an input-like element, as a host
    /// environment would after the user types into it.
    pub fn set_value_in(
        &mut self,
        mount: &str,
        id: &str,
        value: impl Into<String>,
    ) -> Result<(), DomError> {
        let value = value.into();
        self.with_element_mut(mount, id, |el| el.set_attr("value", value))
    }
}
