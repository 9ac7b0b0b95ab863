// SPDX-License-Identifier: MPL-2.0
//! The lightbox gallery widget.
//!
//! A `Gallery` is either closed (no selection, overlay hidden) or open at a
//! valid link index with exactly one content node mounted or pending. All
//! state transitions funnel through [`Gallery::update`], which reports a
//! host-visible [`Event`] and any follow-up [`Task`] to run.
//!
//! Content loads are governed by a latest-operation token: every `show`
//! issues a fresh token, and a completing load may commit only while its
//! token is still current. A slow load superseded by later navigation is
//! discarded when it resolves.

pub mod navigation;
mod view;

pub use navigation::KeyTarget;

use crate::config::Config;
use crate::content::{self, ContentKind, ContentNode, VideoEmbed};
use crate::document::{Document, Link};
use crate::error::LoadError;
use iced::keyboard::Key;
use iced::{Size, Task};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

/// Messages consumed by [`Gallery::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A link tile on the page was activated.
    LinkActivated(usize),
    /// The previous-item control was pressed.
    PreviousPressed,
    /// The next-item control was pressed.
    NextPressed,
    /// The overlay backdrop (outside the content) was pressed.
    BackdropPressed,
    /// A key was pressed while the overlay is open.
    KeyPressed(Key),
    /// The window was resized.
    WindowResized(Size),
    /// An asynchronous load finished.
    ContentLoaded { token: u64, node: ContentNode },
    /// An asynchronous load failed or timed out.
    ContentFailed { token: u64, error: LoadError },
}

/// Host-visible notifications. No payload; hosts read [`Gallery::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Navigation succeeded; the current index changed or was re-shown.
    Changed,
    /// The overlay was dismissed.
    Closed,
}

#[derive(Debug, Clone)]
struct PendingLoad {
    token: u64,
    kind: ContentKind,
}

/// The gallery widget state.
#[derive(Debug)]
pub struct Gallery {
    document: Document,
    index: Option<usize>,
    open: bool,
    current: Option<ContentNode>,
    pending: Option<PendingLoad>,
    error: Option<LoadError>,
    /// Latest-operation token source. Monotonic; the live load is the one
    /// whose token equals `pending.token`.
    generation: u64,
    viewport: Size,
    scale_factor: f64,
    retain_index_on_close: bool,
    load_timeout: Option<Duration>,
}

impl Gallery {
    pub fn new(document: Document, config: &Config) -> Self {
        Self {
            document,
            index: None,
            open: false,
            current: None,
            pending: None,
            error: None,
            generation: 0,
            viewport: Size::new(1280.0, 720.0),
            scale_factor: 1.0,
            retain_index_on_close: config.retains_index(),
            load_timeout: config.load_timeout(),
        }
    }

    /// Current link index; `None` while nothing has been selected.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The mounted content node, if any.
    pub fn current(&self) -> Option<&ContentNode> {
        self.current.as_ref()
    }

    /// The surfaced failure of the latest load, if any.
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Links as currently matched by the document selector.
    pub fn links(&self) -> Vec<Link> {
        self.document.links()
    }

    /// Updates the device scale factor used for panorama sizing.
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
        self.resync_pano();
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::LinkActivated(index) => self.show(index as isize),
            Message::PreviousPressed => self.step(-1),
            Message::NextPressed => self.step(1),
            Message::BackdropPressed => self.close(),
            Message::KeyPressed(key) => self.handle_key(&key),
            Message::WindowResized(size) => {
                self.viewport = size;
                self.resync_pano();
                (Event::None, Task::none())
            }
            Message::ContentLoaded { token, node } => {
                if self.is_live(token) {
                    self.current = Some(node);
                    self.pending = None;
                }
                (Event::None, Task::none())
            }
            Message::ContentFailed { token, error } => {
                if self.is_live(token) {
                    log::warn!("content load failed: {error}");
                    self.error = Some(error);
                    self.pending = None;
                }
                (Event::None, Task::none())
            }
        }
    }

    /// Navigates to `target`.
    ///
    /// With the document's `loop` attribute the target wraps modulo the
    /// link count; a target still outside the list is a strict no-op. On
    /// success the previous pending load is superseded, the overlay opens
    /// if needed, and `Event::Changed` is reported.
    pub fn show(&mut self, target: isize) -> (Event, Task<Message>) {
        let links = self.document.links();
        let Some(index) =
            navigation::resolve_index(target, links.len(), self.document.loop_enabled())
        else {
            return (Event::None, Task::none());
        };

        let link = links[index].clone();
        self.generation += 1;
        let token = self.generation;

        self.open = true;
        self.index = Some(index);
        self.error = None;
        self.pending = Some(PendingLoad {
            token,
            kind: link.kind,
        });

        let task = self.dispatch(token, link);
        (Event::Changed, task)
    }

    /// Dismisses the overlay. No-op when already closed.
    pub fn close(&mut self) -> (Event, Task<Message>) {
        if !self.open {
            return (Event::None, Task::none());
        }

        self.generation += 1;
        self.open = false;
        self.current = None;
        self.pending = None;
        self.error = None;
        if !self.retain_index_on_close {
            self.index = None;
        }
        (Event::Closed, Task::none())
    }

    /// Visibility of the previous/next controls for the current state.
    pub fn controls_visible(&self) -> (bool, bool) {
        match self.index {
            Some(index) if self.open => navigation::controls_visible(
                index,
                self.document.links().len(),
                self.document.loop_enabled(),
            ),
            _ => (false, false),
        }
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        view::view(self)
    }

    fn step(&mut self, delta: isize) -> (Event, Task<Message>) {
        let Some(index) = self.index.filter(|_| self.open) else {
            return (Event::None, Task::none());
        };
        self.show(index as isize + delta)
    }

    fn handle_key(&mut self, key: &Key) -> (Event, Task<Message>) {
        if !self.open {
            return (Event::None, Task::none());
        }
        let Some(target) = navigation::key_target(key) else {
            return (Event::None, Task::none());
        };
        let Some(current) = self.index else {
            return (Event::None, Task::none());
        };

        match navigation::target_index(target, current, self.document.links().len()) {
            Some(requested) => self.show(requested),
            None => self.close(),
        }
    }

    fn dispatch(&self, token: u64, link: Link) -> Task<Message> {
        match link.kind {
            ContentKind::Image => {
                let future = bounded(
                    self.load_timeout,
                    content::image::load(PathBuf::from(link.href)),
                );
                Task::perform(future, move |result| {
                    completion(token, result.map(ContentNode::Image))
                })
            }
            ContentKind::Pano => {
                let (width, height) = content::pano::physical_size(self.viewport, self.scale_factor);
                let future = bounded(
                    self.load_timeout,
                    content::pano::load(link.href, width, height),
                );
                Task::perform(future, move |result| {
                    completion(token, result.map(ContentNode::Pano))
                })
            }
            // Embeds display immediately; there is no load to wait for.
            ContentKind::Youtube => {
                let node = ContentNode::Video(VideoEmbed::from_url(&link.href));
                Task::done(Message::ContentLoaded { token, node })
            }
        }
    }

    /// Whether a completing load with `token` may still commit.
    fn is_live(&self, token: u64) -> bool {
        self.open
            && self
                .pending
                .as_ref()
                .is_some_and(|pending| pending.token == token)
    }

    fn resync_pano(&mut self) {
        if !self.open {
            return;
        }
        if let Some(ContentNode::Pano(pano)) = &mut self.current {
            let (width, height) = content::pano::physical_size(self.viewport, self.scale_factor);
            pano.set_size(width, height);
        }
    }
}

fn completion(token: u64, result: Result<ContentNode, LoadError>) -> Message {
    match result {
        Ok(node) => Message::ContentLoaded { token, node },
        Err(error) => Message::ContentFailed { token, error },
    }
}

/// Applies the configured load bound to a loader future.
async fn bounded<T, F>(timeout: Option<Duration>, future: F) -> Result<T, LoadError>
where
    F: Future<Output = Result<T, LoadError>>,
{
    match timeout {
        Some(limit) => match tokio::time::timeout(limit, future).await {
            Ok(result) => result,
            Err(_) => Err(LoadError::TimedOut {
                secs: limit.as_secs(),
            }),
        },
        None => future.await,
    }
}
