//! Blob object
//!
//! Blobs store file content. Unlike git, no `blob <size>\0` header is hashed or
//! stored: the object ID is the SHA-1 of the exact file bytes, and the object file
//! holds those bytes unframed.

use crate::artifacts::objects::object::{Object, Packable};
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Object for Blob {}
