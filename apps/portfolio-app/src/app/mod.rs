use eframe::egui;
use pf_content::Catalog;
use pf_site::ContactForm;
use pf_site::NavbarState;
use pf_site::ProjectsSection;
use pf_site::Route;
use pf_site::SiteConfig;
use std::time::Duration;
use std::time::Instant;

mod orbit;
mod startup;
mod surface;
mod ui;
mod views;

#[cfg(test)]
mod tests;

pub(crate) use startup::run;

use surface::EguiSurface;

const APP_TITLE: &str = "Jul | Full Stack Developer";
const DEFAULT_LOG_FILTER: &str = "info";
const MOBILE_BREAKPOINT: f32 = 768.0;
const CONTENT_MAX_WIDTH: f32 = 1120.0;
const SECTION_SPACING: f32 = 96.0;
const ORBIT_FRAME_INTERVAL: Duration = Duration::from_millis(33);
const SCROLL_EPSILON: f32 = 0.5;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(9, 9, 11);
const SURFACE: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);
const PRIMARY: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const FOREGROUND: egui::Color32 = egui::Color32::from_rgb(244, 244, 245);
const MUTED: egui::Color32 = egui::Color32::from_rgb(161, 161, 170);
const BORDER: egui::Color32 = egui::Color32::from_rgb(39, 39, 42);
const WARNING: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
const ERROR: egui::Color32 = egui::Color32::from_rgb(200, 65, 65);
const WHATSAPP: egui::Color32 = egui::Color32::from_rgb(37, 211, 102);

/// User intents collected while drawing a frame, applied once drawing is done.
#[derive(Debug, Default)]
struct UiActions {
    scroll_to: Option<String>,
    open_route: Option<Route>,
    toggle_mobile_menu: bool,
}

impl UiActions {
    fn scroll_to(&mut self, anchor_id: &str) {
        self.scroll_to = Some(anchor_id.to_owned());
    }

    fn open(&mut self, route: Route) {
        self.open_route = Some(route);
    }
}

struct PortfolioApp {
    catalog: Catalog,
    route: Route,
    surface: EguiSurface,
    navbar: Option<NavbarState>,
    projects: ProjectsSection,
    contact: ContactForm,
    deferred_anchor: Option<String>,
    year: i32,
}
