//! `Contents.json` data model and writer.
//!
//! Xcode writes asset catalog manifests with two-space indentation and a
//! space on both sides of every key/value colon. [`Manifest::to_json`]
//! reproduces that layout so generated files diff cleanly against ones
//! Xcode wrote itself.

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

use crate::error::RenderError;
use crate::models::config::IconsetConfig;
use crate::models::variant::VariantKey;

/// One entry of the `images` array. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl ManifestRecord {
    pub fn new(config: &IconsetConfig, key: VariantKey) -> Self {
        Self {
            filename: config.filename(key),
            idiom: config.idiom.clone(),
            scale: format!("{}x", key.scale),
            size: format!("{}x{}", key.width, key.height()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub images: Vec<ManifestRecord>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// Build a manifest from records that are already in output order.
    pub fn new(config: &IconsetConfig, images: Vec<ManifestRecord>) -> Self {
        Self {
            images,
            info: ManifestInfo {
                author: config.author.clone(),
                version: config.version,
            },
        }
    }

    /// Serialize in Xcode's layout, terminated by a newline.
    pub fn to_json(&self) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, XcodeFormatter::new());
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        Ok(String::from_utf8(buf)?)
    }
}

/// Pretty printer with `" : "` between keys and values.
struct XcodeFormatter {
    inner: PrettyFormatter<'static>,
}

impl XcodeFormatter {
    fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Formatter for XcodeFormatter {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b" : ")
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }
}
