// SPDX-License-Identifier: MPL-2.0
//! Demo application shell around the gallery widget.
//!
//! The `App` struct loads the gallery document and settings at boot, routes
//! window events to the widget, and logs the widget's change/close
//! notifications. Policy decisions (window sizing, where settings come
//! from) stay in this file so user-facing behavior is easy to audit.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::document::Document;
use crate::error::Error;
use crate::gallery::{Event, Gallery};
use iced::widget::{center, Column, Text};
use iced::{window, Element, Subscription, Task};
use std::path::Path;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;

/// Root application state: the gallery widget, or the reason it could not
/// be created.
pub struct App {
    gallery: Option<Gallery>,
    boot_error: Option<Error>,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = load_config(flags.config_path.as_deref());

        let (gallery, boot_error) = match flags.document_path.as_deref() {
            Some(path) => match Document::load(Path::new(path)) {
                Ok(document) => (Some(Gallery::new(document, &config)), None),
                Err(err) => {
                    log::error!("failed to load gallery document {path}: {err}");
                    (None, Some(err))
                }
            },
            None => (None, None),
        };

        (
            Self {
                gallery,
                boot_error,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        String::from("Iced Lightbox")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => {
                let Some(gallery) = &mut self.gallery else {
                    return Task::none();
                };
                let (event, task) = gallery.update(msg);
                match event {
                    Event::Changed => {
                        log::debug!("gallery changed, index {:?}", gallery.index());
                    }
                    Event::Closed => log::debug!("gallery closed"),
                    Event::None => {}
                }
                task.map(Message::Gallery)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        if let Some(gallery) = &self.gallery {
            return gallery.view().map(Message::Gallery);
        }

        let explanation = match &self.boot_error {
            Some(err) => format!("{err}"),
            None => String::from("Pass a gallery document path on the command line"),
        };

        center(
            Column::new()
                .spacing(8)
                .push(Text::new("No gallery loaded").size(24))
                .push(Text::new(explanation)),
        )
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let overlay_open = self
            .gallery
            .as_ref()
            .is_some_and(Gallery::is_open);
        subscription::create_event_subscription(overlay_open)
    }
}

fn load_config(override_path: Option<&str>) -> Config {
    let result = match override_path {
        Some(path) => config::load_from_path(Path::new(path)),
        None => config::load(),
    };
    result.unwrap_or_else(|err| {
        log::warn!("failed to load settings: {err}");
        Config::default()
    })
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}
