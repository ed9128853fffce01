//! Resource definitions uploaded by deploy and update calls.
//!
//! A definition read from a user's file is forwarded to the server as the
//! document the user wrote. The typed bean is decoded alongside it so
//! callers can read identifiers, but it never replaces the document on the
//! wire: fields the bean does not model survive, and no bean defaults are
//! injected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Definition<T> {
    bean: T,
    document: Option<Value>,
}

impl<T: DeserializeOwned> Definition<T> {
    /// Parse a JSON document and decode its typed view.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let document: Value = serde_json::from_str(raw)?;
        let bean = T::deserialize(&document)?;
        Ok(Self {
            bean,
            document: Some(document),
        })
    }
}

impl<T> Definition<T> {
    pub fn bean(&self) -> &T {
        &self.bean
    }

    /// The document as read, if this definition came from JSON.
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }
}

/// A bean built in code is sent as its own serialization.
impl<T> From<T> for Definition<T> {
    fn from(bean: T) -> Self {
        Self {
            bean,
            document: None,
        }
    }
}

impl<T: Serialize> Serialize for Definition<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.document {
            Some(document) => document.serialize(serializer),
            None => self.bean.serialize(serializer),
        }
    }
}
