use anyhow::Context as _;
use gpui::*;
use gpui_component::Root;
use gridsmith::app::GridEditor;
use gridsmith::constants::APP_TITLE;
use gridsmith::settings::Settings;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridsmith=info")),
        )
        .init();

    let settings = Settings::load();

    Application::new().run(move |cx: &mut App| {
        gpui_component::init(cx);

        if let Err(e) = open_editor_window(&settings, cx) {
            tracing::error!("{:#}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });
}

fn open_editor_window(settings: &Settings, cx: &mut App) -> anyhow::Result<()> {
    let bounds = Bounds::centered(
        None,
        size(px(settings.window_width), px(settings.window_height)),
        cx,
    );
    let settings = settings.clone();

    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(APP_TITLE.into()),
                ..Default::default()
            }),
            ..Default::default()
        },
        move |window, cx| {
            let editor = cx.new(|cx| GridEditor::new(&settings, window, cx));
            cx.new(|cx| Root::new(AnyView::from(editor), window, cx))
        },
    )
    .context("failed to open editor window")?;

    Ok(())
}
