// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid.

use crate::config::{GRID_COLUMNS, GRID_ROWS};
use crate::gallery::{placeholder_handle, Gallery};
use crate::ui::design_tokens::{border, sizing};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{image, Column, Container, Row};
use iced::{Element, Length};

/// Handles in row-major order; empty slots get the placeholder tile.
#[must_use]
pub fn cell_handles(gallery: &Gallery) -> Vec<Handle> {
    gallery
        .slots()
        .map(|artwork| artwork.map_or_else(placeholder_handle, |a| a.handle.clone()))
        .collect()
}

pub fn view<'a, Message: 'a>(gallery: &Gallery) -> Element<'a, Message> {
    let cell_side = sizing::THUMBNAIL + 2.0 * border::WIDTH_SM;
    let handles = cell_handles(gallery);

    let rows = handles.chunks(GRID_COLUMNS).take(GRID_ROWS).map(|row| {
        let cells = row.iter().map(|handle| {
            Container::new(
                image(handle.clone())
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL)),
            )
            .padding(border::WIDTH_SM)
            .width(Length::Fixed(cell_side))
            .height(Length::Fixed(cell_side))
            .style(styles::container::grid_cell)
            .into()
        });
        Row::with_children(cells).into()
    });

    Column::with_children(rows).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SLOT_COUNT;
    use crate::gallery::Artwork;

    #[test]
    fn empty_gallery_shows_placeholders_everywhere() {
        let handles = cell_handles(&Gallery::new());
        assert_eq!(handles.len(), SLOT_COUNT);
        let placeholder = placeholder_handle();
        assert!(handles.iter().all(|h| h.id() == placeholder.id()));
    }

    #[test]
    fn populated_gallery_uses_artwork_handles() {
        let mut gallery = Gallery::new();
        let artworks: Vec<Artwork> = (0..21)
            .map(|i| {
                Artwork::loaded(
                    format!("https://img.test/{i}.jpg"),
                    Handle::from_rgba(1, 1, vec![i as u8, 0, 0, 255]),
                )
            })
            .collect();
        let first_id = artworks[0].handle.id();
        gallery.populate(artworks).expect("enough candidates");

        let handles = cell_handles(&gallery);
        assert_eq!(handles.len(), SLOT_COUNT);
        assert_eq!(handles[0].id(), first_id);
    }
}
