use super::EguiSurface;
use super::PortfolioApp;
use super::UiActions;
use super::startup::native_options;
use eframe::egui;
use pf_site::Location;
use pf_site::MIN_WINDOW_HEIGHT;
use pf_site::MIN_WINDOW_WIDTH;
use pf_site::Route;
use pf_site::SiteConfig;
use pf_tracker::ScrollSurface;
use pf_tracker::SectionBounds;
use pf_tracker::TrackerConfig;
use std::collections::HashSet;
use std::time::Instant;

const FRAME_SECONDS: f64 = 1.0 / 60.0;

fn rect(top: f32, bottom: f32) -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, top), egui::pos2(800.0, bottom))
}

fn app_at(route: &str) -> PortfolioApp {
    PortfolioApp::new(&SiteConfig::default(), Location::parse(route)).expect("default config mounts")
}

fn lay_out_home(surface: &mut EguiSurface) {
    let mut top = 0.0;
    for anchor_id in ["hero", "about", "skills", "projects", "process", "contact"] {
        surface.record_section(anchor_id, rect(top, top + 600.0), 0.0);
        top += 700.0;
    }
}

#[test]
fn records_bounds_relative_to_viewport() {
    let mut surface = EguiSurface::default();
    surface.record_section("about", rect(300.0, 700.0), 100.0);
    assert_eq!(surface.bounds_for("about"), Some(SectionBounds::new(200.0, 600.0)));

    surface.record_section("about", rect(50.0, 450.0), 100.0);
    assert_eq!(surface.bounds_for("about"), Some(SectionBounds::new(-50.0, 350.0)));
}

#[test]
fn scroll_request_needs_a_drawn_section_and_fires_once() {
    let mut surface = EguiSurface::default();
    assert!(!surface.smooth_scroll_into_view("contact"));

    surface.record_section("contact", rect(2000.0, 2600.0), 0.0);
    assert!(surface.smooth_scroll_into_view("contact"));
    assert!(!surface.take_scroll_request("about"));
    assert!(surface.take_scroll_request("contact"));
    assert!(!surface.take_scroll_request("contact"));
}

#[test]
fn publishes_only_when_offset_moves() {
    let mut surface = EguiSurface::default();
    let subscription = surface.subscribe_to_scroll();

    assert!(surface.finish_frame(0.0));
    assert!(!surface.finish_frame(0.2));
    assert!(surface.finish_frame(120.0));
    assert_eq!(surface.scroll_offset_y(), 120.0);

    let offsets: Vec<f32> = std::iter::from_fn(|| subscription.try_next())
        .map(|notification| notification.offset_y)
        .collect();
    assert_eq!(offsets, vec![0.0, 120.0]);
}

#[test]
fn publishes_when_layout_moves_under_a_still_offset() {
    let mut surface = EguiSurface::default();
    let subscription = surface.subscribe_to_scroll();
    lay_out_home(&mut surface);
    assert!(surface.finish_frame(300.0));
    assert!(subscription.try_next().is_some());

    // Same layout, same offset: nothing to report.
    lay_out_home(&mut surface);
    assert!(!surface.finish_frame(300.0));

    // Bounds drawn one frame later at the offset already reported.
    surface.record_section("about", rect(100.0, 700.0), 0.0);
    assert!(surface.finish_frame(300.0));
    assert_eq!(subscription.try_next().map(|notification| notification.offset_y), Some(300.0));
    assert!(subscription.try_next().is_none());
}

#[test]
fn clearing_layout_drops_pending_scroll() {
    let mut surface = EguiSurface::default();
    lay_out_home(&mut surface);
    assert!(surface.smooth_scroll_into_view("skills"));

    surface.clear_layout();
    assert!(!surface.has_layout());
    assert!(!surface.take_scroll_request("skills"));
}

#[test]
fn initial_anchor_waits_for_layout() {
    let mut app = app_at("/#contact");
    assert_eq!(app.route, Route::Home);

    app.apply_deferred_navigation();
    assert_eq!(app.deferred_anchor.as_deref(), Some("contact"));

    lay_out_home(&mut app.surface);
    app.apply_deferred_navigation();
    assert_eq!(app.deferred_anchor, None);
    assert!(app.surface.take_scroll_request("contact"));
}

#[test]
fn section_link_from_project_page_returns_home_first() {
    let mut app = app_at("/projets/kora-pay");
    assert_eq!(app.route, Route::Project("kora-pay".to_owned()));

    let mut actions = UiActions::default();
    actions.scroll_to("about");
    app.handle_actions(actions, Instant::now());

    assert_eq!(app.route, Route::Home);
    assert_eq!(app.deferred_anchor.as_deref(), Some("about"));
}

#[test]
fn leaving_home_forgets_layout() {
    let mut app = app_at("/");
    lay_out_home(&mut app.surface);

    let mut actions = UiActions::default();
    actions.open(Route::Project("edutrack".to_owned()));
    app.handle_actions(actions, Instant::now());

    assert_eq!(app.route, Route::Project("edutrack".to_owned()));
    assert!(!app.surface.has_layout());
}

#[test]
fn unknown_project_resolves_to_not_found() {
    let mut app = app_at("/");
    let mut actions = UiActions::default();
    actions.open(Route::Project("does-not-exist".to_owned()));
    app.handle_actions(actions, Instant::now());
    assert_eq!(app.route, Route::NotFound);
}

#[test]
fn opening_a_project_page_closes_the_modal() {
    let mut app = app_at("/");
    app.projects.open_details("atlas-immo");

    let mut actions = UiActions::default();
    actions.open(Route::Project("atlas-immo".to_owned()));
    app.handle_actions(actions, Instant::now());

    assert!(!app.projects.is_modal_open());
}

#[test]
fn navigating_on_home_closes_mobile_menu() {
    let mut app = app_at("/");
    lay_out_home(&mut app.surface);
    let navbar = app.navbar.as_mut().expect("navbar mounted");
    navbar.toggle_mobile_menu();
    assert!(navbar.mobile_menu_open());

    let mut actions = UiActions::default();
    actions.scroll_to("process");
    app.handle_actions(actions, Instant::now());

    let navbar = app.navbar.as_ref().expect("navbar mounted");
    assert!(!navbar.mobile_menu_open());
    assert!(app.surface.take_scroll_request("process"));
}

#[test]
fn scroll_notifications_drive_the_navbar() {
    let mut app = app_at("/");
    lay_out_home(&mut app.surface);

    // Sections are recorded relative to the viewport, so re-record them as
    // they would appear after scrolling 1400px down.
    let mut top = -1400.0;
    for anchor_id in ["hero", "about", "skills", "projects", "process", "contact"] {
        app.surface.record_section(anchor_id, rect(top, top + 600.0), 0.0);
        top += 700.0;
    }
    app.surface.finish_frame(1400.0);

    let navbar = app.navbar.as_mut().expect("navbar mounted");
    assert_eq!(navbar.pump(&app.surface), 1);
    assert_eq!(navbar.active_section_id(), "skills");
    assert!(navbar.is_scrolled());
}

#[test]
fn unmounting_releases_the_navbar() {
    let mut app = app_at("/");
    app.unmount_navbar();
    assert!(app.navbar.is_none());
    app.unmount_navbar();
}

#[test]
fn window_minimum_matches_validated_minimum() {
    let options = native_options(&SiteConfig::default());
    assert_eq!(
        options.viewport.min_inner_size,
        Some(egui::vec2(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
    );
}

fn home_frame(ctx: &egui::Context, app: &mut PortfolioApp, time: f64, events: Vec<egui::Event>) {
    let input = egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 860.0))),
        time: Some(time),
        events,
        ..Default::default()
    };
    let mut actions = UiActions::default();
    let _ = ctx.run(input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| app.render_home(ui, Instant::now(), &mut actions));
    });
    if let Some(navbar) = app.navbar.as_mut() {
        navbar.pump(&app.surface);
    }
}

/// Last nav section whose drawn extent contains the reference line.
fn section_on_line(app: &PortfolioApp) -> Option<String> {
    let line = TrackerConfig::default().reference_line;
    let navbar = app.navbar.as_ref()?;
    navbar
        .sections()
        .iter()
        .filter(|section| {
            app.surface
                .bounds_for(&section.anchor_id)
                .is_some_and(|bounds| bounds.straddles(line))
        })
        .last()
        .map(|section| section.anchor_id.clone())
}

#[test]
fn navbar_follows_wheel_scrolling() {
    let ctx = egui::Context::default();
    let mut app = app_at("/");
    let pointer = egui::pos2(640.0, 430.0);
    let mut time = 0.0;
    home_frame(&ctx, &mut app, time, vec![egui::Event::PointerMoved(pointer)]);
    home_frame(&ctx, &mut app, time + FRAME_SECONDS, vec![egui::Event::PointerMoved(pointer)]);
    time += FRAME_SECONDS;

    let mut visited = HashSet::new();
    let mut mismatches = Vec::new();
    for _ in 0..40 {
        time += FRAME_SECONDS;
        let wheel = egui::Event::MouseWheel {
            unit: egui::MouseWheelUnit::Point,
            delta: egui::vec2(0.0, -120.0),
            modifiers: egui::Modifiers::NONE,
        };
        home_frame(&ctx, &mut app, time, vec![egui::Event::PointerMoved(pointer), wheel]);

        for _ in 0..30 {
            time += FRAME_SECONDS;
            home_frame(&ctx, &mut app, time, Vec::new());
        }

        let active = app.navbar.as_ref().expect("navbar mounted").active_section_id().to_owned();
        if let Some(expected) = section_on_line(&app) {
            if expected != active {
                mismatches.push(format!(
                    "offset={} tracker={active} on-screen={expected}",
                    app.surface.scroll_offset_y()
                ));
            }
        }
        visited.insert(active);
    }

    assert!(mismatches.is_empty(), "{mismatches:?}");
    assert!(visited.len() > 2, "wheel never crossed sections: {visited:?}");
}
