// SPDX-License-Identifier: MPL-2.0
//! Featured paintings grid and the lightbox dialog.
//!
//! The section owns two pieces of state: the currently opened painting (or
//! none) and a zoom flag for the enlarged presentation. Dialog visibility is
//! never tracked separately: the dialog is visible exactly when a selection
//! exists, which is why [`lightbox`] returns an `Option`.

use crate::catalog::Painting;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Image, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    mouse, ContentFit, Element, Length,
};

/// Scale applied to the lightbox image in the enlarged presentation.
pub const ZOOM_FACTOR: f32 = 1.5;

/// Number of cards per grid row.
const GRID_COLUMNS: usize = 2;

/// Local state of the gallery section.
#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<Painting>,
    zoomed: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the dialog on the given painting. Opening always starts from
    /// the fitted presentation, even when another painting was already open
    /// in the enlarged one.
    pub fn open(&mut self, painting: Painting) {
        self.selected = Some(painting);
        self.zoomed = false;
    }

    /// Closes the dialog by clearing the selection.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Flips between the fitted and enlarged presentations. Without a
    /// selection there is no image to present, so the flag stays untouched.
    pub fn toggle_zoom(&mut self) {
        if self.selected.is_some() {
            self.zoomed = !self.zoomed;
        }
    }

    pub fn selection(&self) -> Option<&Painting> {
        self.selected.as_ref()
    }

    /// Dialog visibility, derived from the selection.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }
}

/// Messages emitted by the gallery section.
#[derive(Debug, Clone)]
pub enum Message {
    /// A grid card was clicked.
    CardPressed(Painting),
    /// The dialog was dismissed (close button or backdrop click).
    DialogClosed,
    /// The image inside the dialog was clicked.
    ImagePressed,
}

/// Process a gallery message against the section state.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::CardPressed(painting) => state.open(painting),
        Message::DialogClosed => state.close(),
        Message::ImagePressed => state.toggle_zoom(),
    }
}

/// Contextual data needed to render the grid.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub paintings: &'a [Painting],
}

/// Render the section heading and the card grid. An empty painting list
/// yields an empty grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center);

    for chunk in ctx.paintings.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::MD);
        for painting in chunk {
            row = row.push(card(painting));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

/// Build one clickable painting card.
fn card(painting: &Painting) -> Element<'_, Message> {
    let picture = Image::new(painting.handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT));

    let caption = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(Text::new(painting.title.clone()).size(typography::BODY_LG))
        .push(Text::new(painting.description.clone()).size(typography::BODY_SM));

    button(Column::new().push(picture).push(caption))
        .on_press(Message::CardPressed(painting.clone()))
        .style(styles::button::card)
        .padding(0.0)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .into()
}

/// Display size of the lightbox image: the painting scaled to fit the
/// dialog frame, multiplied by [`ZOOM_FACTOR`] in the enlarged presentation.
fn lightbox_image_size(painting: &Painting, zoomed: bool) -> (f32, f32) {
    let frame_width = sizing::LIGHTBOX_WIDTH - 2.0 * spacing::LG;
    let frame_height = sizing::LIGHTBOX_IMAGE_HEIGHT;

    let fit_scale = (frame_width / painting.width.max(1) as f32)
        .min(frame_height / painting.height.max(1) as f32);
    let scale = if zoomed {
        fit_scale * ZOOM_FACTOR
    } else {
        fit_scale
    };

    (
        (painting.width as f32 * scale).max(1.0),
        (painting.height as f32 * scale).max(1.0),
    )
}

/// Contextual data needed to render the lightbox overlay.
pub struct LightboxContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the lightbox overlay, or `None` while no painting is selected.
/// The caller stacks the returned element over the whole page.
pub fn lightbox<'a>(ctx: LightboxContext<'a>) -> Option<Element<'a, Message>> {
    let painting = ctx.state.selection()?;
    let zoomed = ctx.state.is_zoomed();

    let (width, height) = lightbox_image_size(painting, zoomed);
    let picture = mouse_area(
        Image::new(painting.handle.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height)),
    )
    .on_press(Message::ImagePressed)
    .interaction(if zoomed {
        mouse::Interaction::ZoomOut
    } else {
        mouse::Interaction::ZoomIn
    });

    // The frame keeps its fitted footprint; the enlarged image overflows
    // into it and is clipped instead of growing the dialog.
    let picture_frame = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true);

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(Text::new(painting.title.clone()).size(typography::TITLE_MD))
            .push(picture_frame)
            .push(Text::new(painting.description.clone()).size(typography::BODY))
            .push(
                button(Text::new(ctx.i18n.tr("lightbox-close-button")).size(typography::BODY))
                    .on_press(Message::DialogClosed)
                    .style(styles::button::primary)
                    .padding([spacing::XS, spacing::LG]),
            ),
    )
    .width(Length::Fixed(sizing::LIGHTBOX_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::dialog);

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::DialogClosed);

    let overlay = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(
            Container::new(dialog)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );

    Some(overlay.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::i18n::fluent::I18n;

    fn sample_paintings() -> Vec<Painting> {
        catalog::paintings()
    }

    #[test]
    fn opening_a_card_selects_it_with_zoom_reset() {
        let paintings = sample_paintings();
        let mut state = State::new();

        update(&mut state, Message::CardPressed(paintings[0].clone()));

        assert_eq!(state.selection().map(|p| p.id), Some(1));
        assert!(!state.is_zoomed());
        assert!(state.is_open());
    }

    #[test]
    fn opening_another_painting_replaces_selection_and_resets_zoom() {
        let paintings = sample_paintings();
        let mut state = State::new();

        update(&mut state, Message::CardPressed(paintings[0].clone()));
        update(&mut state, Message::ImagePressed);
        assert!(state.is_zoomed());

        // Open Q directly, without closing P first.
        update(&mut state, Message::CardPressed(paintings[1].clone()));

        assert_eq!(state.selection().map(|p| p.id), Some(2));
        assert!(!state.is_zoomed(), "zoom must reset on every open");
    }

    #[test]
    fn double_toggle_returns_zoom_to_original_value() {
        let paintings = sample_paintings();
        let mut state = State::new();
        update(&mut state, Message::CardPressed(paintings[2].clone()));

        update(&mut state, Message::ImagePressed);
        update(&mut state, Message::ImagePressed);

        assert!(!state.is_zoomed());
    }

    #[test]
    fn closing_clears_selection_regardless_of_zoom() {
        let paintings = sample_paintings();
        let mut state = State::new();
        update(&mut state, Message::CardPressed(paintings[0].clone()));
        update(&mut state, Message::ImagePressed);

        update(&mut state, Message::DialogClosed);

        assert!(state.selection().is_none());
        assert!(!state.is_open());

        // Reopening any painting thereafter starts fitted again.
        update(&mut state, Message::CardPressed(paintings[3].clone()));
        assert!(!state.is_zoomed());
    }

    #[test]
    fn zoom_toggle_without_selection_is_ignored() {
        let mut state = State::new();
        update(&mut state, Message::ImagePressed);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn dialog_visibility_is_derived_from_selection() {
        let paintings = sample_paintings();
        let i18n = I18n::default();
        let mut state = State::new();

        assert!(lightbox(LightboxContext {
            i18n: &i18n,
            state: &state
        })
        .is_none());

        update(&mut state, Message::CardPressed(paintings[0].clone()));
        assert!(lightbox(LightboxContext {
            i18n: &i18n,
            state: &state
        })
        .is_some());
    }

    #[test]
    fn enlarged_presentation_scales_by_the_zoom_factor() {
        let paintings = sample_paintings();
        let painting = &paintings[0];

        let (fit_w, fit_h) = lightbox_image_size(painting, false);
        let (zoom_w, zoom_h) = lightbox_image_size(painting, true);

        assert!((zoom_w - fit_w * ZOOM_FACTOR).abs() < 0.001);
        assert!((zoom_h - fit_h * ZOOM_FACTOR).abs() < 0.001);
    }

    #[test]
    fn grid_renders_with_and_without_paintings() {
        let i18n = I18n::default();
        let paintings = sample_paintings();

        let _four_cards = view(ViewContext {
            i18n: &i18n,
            paintings: &paintings,
        });
        let _empty_grid = view(ViewContext {
            i18n: &i18n,
            paintings: &[],
        });
    }
}
