//! Application - App Initialization and Window Management
//!
//! Opens the main window around a [`Workspace`] that paints the composed tree.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::composer::RootComposer;
use crate::app::workspace::Workspace;
use crate::domain::config::ShellConfig;

actions!(app_shell, [Quit]);

/// Run the shell application
pub fn run_app(config: ShellConfig, composer: RootComposer) {
    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(config.window.width), px(config.window.height)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(config.window.title.clone())),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, move |_window, cx| {
            cx.new(|cx| Workspace::new(composer, cx))
        });
        if let Err(err) = opened {
            tracing::error!(error = %err, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
