// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::gallery;

/// Top-level messages consumed by `App::update`. The variants forward the
/// gallery widget's messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Path of the gallery document to open.
    pub document_path: Option<String>,
    /// Optional settings file override (for tests and custom setups).
    pub config_path: Option<String>,
}
