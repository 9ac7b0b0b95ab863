// SPDX-License-Identifier: MPL-2.0
//! Overlay and page rendering for the gallery widget.
//!
//! The page is a grid of link tiles. While the overlay is open it stacks on
//! top: a dimmed backdrop that closes on press, the mounted content (or a
//! loading/error panel), and the previous/next controls at the edges.

use super::{Gallery, Message};
use crate::content::ContentNode;
use crate::document::Link;
use iced::widget::{button, center, container, mouse_area, opaque, Column, Image, Row, Space, Stack, Text};
use iced::{Color, Element, Length};

const TILES_PER_ROW: usize = 4;
const TILE_WIDTH: f32 = 200.0;

pub(super) fn view(gallery: &Gallery) -> Element<'_, Message> {
    let page = link_grid(&gallery.links());

    if !gallery.is_open() {
        return page;
    }

    let mut stack = Stack::new().push(page).push(overlay(gallery));

    let (prev_visible, next_visible) = gallery.controls_visible();
    if prev_visible || next_visible {
        stack = stack.push(controls(prev_visible, next_visible));
    }

    stack.into()
}

fn link_grid(links: &[Link]) -> Element<'static, Message> {
    if links.is_empty() {
        return center(Text::new("This gallery has no links")).into();
    }

    let mut grid = Column::new().spacing(12).padding(16);
    for (row_index, chunk) in links.chunks(TILES_PER_ROW).enumerate() {
        let mut row = Row::new().spacing(12);
        for (col_index, link) in chunk.iter().enumerate() {
            let index = row_index * TILES_PER_ROW + col_index;
            let caption = link.label.clone().unwrap_or_else(|| link.href.clone());
            row = row.push(
                button(Text::new(caption))
                    .on_press(Message::LinkActivated(index))
                    .padding(12)
                    .width(Length::Fixed(TILE_WIDTH)),
            );
        }
        grid = grid.push(row);
    }

    container(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn overlay(gallery: &Gallery) -> Element<'_, Message> {
    let panel: Element<'_, Message> = if let Some(error) = gallery.error() {
        error_panel(&error.to_string())
    } else if let Some(node) = gallery.current() {
        content_view(node)
    } else {
        // First open with the load still in flight.
        Text::new("Loading…").size(20).into()
    };

    let backdrop = mouse_area(center(opaque(panel)).style(|_theme| {
        container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
            ..container::Style::default()
        }
    }))
    .on_press(Message::BackdropPressed);

    opaque(backdrop)
}

fn content_view(node: &ContentNode) -> Element<'_, Message> {
    match node {
        ContentNode::Image(image) => Image::new(image.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ContentNode::Pano(pano) => Image::new(pano.handle().clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ContentNode::Video(embed) => container(
            Column::new()
                .spacing(8)
                .push(Text::new("Video").size(18))
                .push(Text::new(embed.embed_url())),
        )
        .padding(24)
        .width(Length::Fixed(640.0))
        .height(Length::Fixed(360.0))
        .style(container::rounded_box)
        .into(),
    }
}

fn error_panel(message: &str) -> Element<'static, Message> {
    container(
        Column::new()
            .spacing(8)
            .push(Text::new("Could not load this item").size(18))
            .push(Text::new(message.to_string())),
    )
    .padding(24)
    .style(container::rounded_box)
    .into()
}

fn controls(prev_visible: bool, next_visible: bool) -> Element<'static, Message> {
    let mut row = Row::new().width(Length::Fill).padding(8);

    if prev_visible {
        row = row.push(button(Text::new("<")).on_press(Message::PreviousPressed).padding(16));
    }
    row = row.push(Space::new().width(Length::Fill).height(Length::Shrink));
    if next_visible {
        row = row.push(button(Text::new(">")).on_press(Message::NextPressed).padding(16));
    }

    container(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
