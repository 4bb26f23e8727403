// SPDX-License-Identifier: MPL-2.0
//! Rendering of the avatar selector: preview, category switcher, gallery and
//! apply control.

use super::{Message, Picture, State};
use crate::avatar::{catalog, Category, Preset};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, scrollable, text, Column, Container, Image, Row, Svg, Text,
};
use iced::{Element, Length};

/// Contextual data needed to render the selector.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let active = catalog().category(self.selection.active_category());

        let mut content = Column::new()
            .width(Length::Fixed(sizing::PICKER_WIDTH))
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("picker-title")).size(typography::TITLE_MD))
            .push(self.preview_section(&ctx))
            .push(category_switcher(active))
            .push(
                Text::new(active.description())
                    .size(typography::BODY_SM)
                    .shaping(text::Shaping::Advanced),
            )
            .push(self.gallery(active, &ctx));

        // The apply control only exists while there is something to apply
        if self.can_confirm() {
            let label = Text::new(format!("✓ {}", ctx.i18n.tr("picker-apply-button")))
                .shaping(text::Shaping::Advanced);
            content = content.push(
                button(label)
                    .on_press(Message::ApplyPressed)
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::confirm),
            );
        }

        scrollable(
            Container::new(content)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding(spacing::LG),
        )
        .into()
    }

    fn preview_section<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let inner: Element<'a, Message> = match self.preview() {
            Picture::Svg(handle) => preview_svg(handle.clone()),
            Picture::Raster(handle) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Picture::Loading => placeholder_text(ctx.i18n.tr("picker-preview-loading")),
            Picture::Label(label) => placeholder_text(label.to_string()),
            Picture::Unavailable => placeholder_text(ctx.i18n.tr("picker-preview-unavailable")),
            Picture::Empty => placeholder_text(ctx.i18n.tr("picker-no-avatar")),
        };

        let frame = Container::new(inner)
            .width(Length::Fixed(sizing::AVATAR_PREVIEW))
            .height(Length::Fixed(sizing::AVATAR_PREVIEW))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .clip(true)
            .style(styles::container::preview_frame);

        let upload_label = if self.is_decoding() {
            ctx.i18n.tr("picker-upload-decoding")
        } else {
            ctx.i18n.tr("picker-upload-button")
        };

        let upload_button = button(
            Text::new(format!("📷 {upload_label}"))
                .size(typography::BODY)
                .shaping(text::Shaping::Advanced),
        )
        .on_press(Message::UploadPressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(frame)
            .push(upload_button)
            .into()
    }

    fn gallery<'a>(&'a self, category: &'a Category, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let selected = self.selection.selected_preset();
        let columns = usize::from(self.columns.max(1));

        let mut grid = Column::new().spacing(spacing::MD);
        for chunk in category.presets().chunks(columns) {
            let mut row = Row::new().spacing(spacing::MD);
            for preset in chunk {
                let is_selected = selected == Some(preset.image_reference());
                row = row.push(self.tile(preset, is_selected, ctx));
            }
            // Pad the last row so tiles keep their width
            for _ in chunk.len()..columns {
                row = row.push(Container::new(text("")).width(Length::Fill));
            }
            grid = grid.push(row);
        }
        grid.into()
    }

    fn tile<'a>(
        &'a self,
        preset: &'a Preset,
        is_selected: bool,
        ctx: &ViewContext<'a>,
    ) -> Element<'a, Message> {
        let image: Element<'a, Message> = match self.preset_picture(preset.image_reference()) {
            Picture::Svg(handle) => Svg::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::THUMBNAIL))
                .into(),
            Picture::Loading => tile_placeholder(ctx.i18n.tr("picker-preview-loading")),
            _ => tile_placeholder(preset.label().to_string()),
        };

        let content = Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .push(image)
            .push(Text::new(preset.label()).size(typography::BODY_SM));

        button(content)
            .on_press(Message::PresetSelected(preset.image_reference().to_string()))
            .width(Length::Fill)
            .padding(spacing::XXS)
            .style(styles::button::preset_tile(is_selected))
            .into()
    }
}

fn category_switcher<'a>(active: &Category) -> Element<'a, Message> {
    let active_key = active.key();
    let pills = catalog().categories().iter().map(|category| -> Element<'a, Message> {
        let label = Text::new(format!("{} {}", category.icon_glyph(), category.display_name()))
            .size(typography::BODY_SM)
            .shaping(text::Shaping::Advanced);

        button(label)
            .on_press(Message::CategorySelected(category.key()))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::category_pill(category.key() == active_key))
            .into()
    });

    Row::with_children(pills).spacing(spacing::MD).into()
}

fn preview_svg<'a>(handle: iced::widget::svg::Handle) -> Element<'a, Message> {
    Svg::new(handle)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn placeholder_text<'a>(label: String) -> Element<'a, Message> {
    Text::new(label).size(typography::BODY_SM).into()
}

fn tile_placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::THUMBNAIL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::tile_placeholder)
        .into()
}
