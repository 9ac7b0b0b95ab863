// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Keyboard input is only routed while the overlay is open, so a page with
//! the overlay dismissed never reacts to gallery keys. Window resizes are
//! always routed; the widget ignores them unless a panorama is mounted.

use super::Message;
use crate::gallery;
use iced::{event, Subscription};

/// Creates the event subscription for the current overlay state.
pub fn create_event_subscription(overlay_open: bool) -> Subscription<Message> {
    if overlay_open {
        event::listen_with(|event, status, _window_id| match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                match status {
                    event::Status::Ignored => {
                        Some(Message::Gallery(gallery::Message::KeyPressed(key)))
                    }
                    event::Status::Captured => None,
                }
            }
            event::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::Gallery(gallery::Message::WindowResized(size)))
            }
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::Gallery(gallery::Message::WindowResized(size)))
            }
            _ => None,
        })
    }
}
