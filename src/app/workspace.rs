//! Workspace - Paints the Composed Tree
//!
//! Runs one composition pass per frame and maps every node to a GPUI element
//! by identity. The composer decides the structure; the workspace only styles
//! each region.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                 Home                     │
//! ├──────────────────────────────────────────┤
//! │                Topbar                    │
//! ├────────┬─────────────────────────────────┤
//! │ Side   │                                 │
//! │ bar    │                                 │
//! └────────┴─────────────────────────────────┘
//! ```

use gpui::{AnyElement, Context, FontWeight, IntoElement, Render, Window, div, prelude::*, px};
use gpui_component::{h_flex, label::Label, v_flex};

use crate::app::composer::RootComposer;
use crate::constants::{BANNER_HEIGHT, SIDEBAR_WIDTH, TOPBAR_HEIGHT};
use crate::domain::view_node::{ViewId, ViewNode};
use crate::theme::colors::ShellColors;
use crate::theme::typography::Typography;

/// Main window view
pub struct Workspace {
    composer: RootComposer,
}

impl Workspace {
    pub fn new(composer: RootComposer, _cx: &mut Context<Self>) -> Self {
        Self { composer }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let tree = self.composer.compose();
        paint_node(&tree)
    }
}

fn paint_node(node: &ViewNode) -> AnyElement {
    let children: Vec<AnyElement> = node.children().iter().map(paint_node).collect();
    let label = node.label().map(str::to_string);

    match node.id() {
        ViewId::App => v_flex()
            .size_full()
            .bg(ShellColors::background())
            .children(children)
            .into_any_element(),
        ViewId::Container => v_flex()
            .flex_1()
            .w_full()
            .overflow_hidden()
            .children(children)
            .into_any_element(),
        ViewId::Home => h_flex()
            .h(px(BANNER_HEIGHT))
            .w_full()
            .px_6()
            .items_center()
            .bg(ShellColors::banner_bg())
            .text_color(ShellColors::text_banner())
            .text_size(px(Typography::TEXT_2XL))
            .font_weight(FontWeight::SEMIBOLD)
            .children(label)
            .into_any_element(),
        ViewId::Topbar => h_flex()
            .h(px(TOPBAR_HEIGHT))
            .w_full()
            .px_4()
            .items_center()
            .bg(ShellColors::topbar_bg())
            .border_b_1()
            .border_color(ShellColors::border())
            .text_color(ShellColors::text_primary())
            .text_size(px(Typography::TEXT_LG))
            .children(label)
            .into_any_element(),
        ViewId::Sidebar => div()
            .w(px(SIDEBAR_WIDTH))
            .flex_1()
            .pt_4()
            .px_4()
            .bg(ShellColors::sidebar_bg())
            .border_r_1()
            .border_color(ShellColors::border())
            .text_color(ShellColors::text_secondary())
            .children(label.map(|text| Label::new(text).text_size(px(Typography::TEXT_SM))))
            .into_any_element(),
    }
}
