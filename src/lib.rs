// SPDX-License-Identifier: MPL-2.0
//! `iced_lightbox` is a modal lightbox gallery widget built with the Iced
//! GUI framework.
//!
//! A gallery is declared in a small markup document: links matched by a
//! configurable selector open in a dimmed overlay with keyboard and pointer
//! navigation. Images, panoramas, and video embeds are supported, with
//! asynchronous loading and latest-wins cancellation of superseded loads.

pub mod app;
pub mod config;
pub mod content;
pub mod document;
pub mod error;
pub mod gallery;
pub mod selector;
