use super::*;
use clap::Parser;
use pf_site::Location;
use pf_site::MIN_WINDOW_HEIGHT;
use pf_site::MIN_WINDOW_WIDTH;
use std::path::PathBuf;

/// Desktop viewer for the portfolio site.
#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about)]
struct Cli {
    /// TOML site configuration; defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial route, e.g. `/projets/kora-pay` or `/#contact`.
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,
}

pub(crate) fn run() -> Result<(), eframe::Error> {
    init_logging();
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match SiteConfig::load(path) {
            Ok(config) => config,
            Err(error) => {
                tracing::error!(%error, "portfolio startup failed");
                return Ok(());
            }
        },
        None => SiteConfig::default(),
    };
    let location = Location::parse(&cli.route);
    tracing::info!(route = %location.route.path(), anchor = ?location.anchor, "starting portfolio");

    eframe::run_native(
        APP_TITLE,
        native_options(&config),
        Box::new(move |cc| {
            install_theme(&cc.egui_ctx);
            Ok(Box::new(PortfolioApp::new(&config, location)?))
        }),
    )
}

pub(super) fn native_options(config: &SiteConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn install_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = SURFACE;
    visuals.extreme_bg_color = egui::Color32::from_rgb(18, 18, 20);
    visuals.hyperlink_color = PRIMARY;
    visuals.selection.bg_fill = PRIMARY.gamma_multiply(0.6);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    ctx.set_style(style);
}
