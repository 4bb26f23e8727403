// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The selector fills the window; toasts are layered above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::avatar_selector::{self, ViewContext as SelectorViewContext};
use crate::ui::notifications::{self, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub selector: &'a avatar_selector::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selector = ctx
        .selector
        .view(SelectorViewContext { i18n: ctx.i18n })
        .map(Message::Selector);

    let base = Container::new(selector)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
