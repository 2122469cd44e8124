use super::views;
use super::*;
use chrono::Datelike;
use pf_core::SiteResult;
use pf_site::Location;

impl PortfolioApp {
    pub(super) fn new(config: &SiteConfig, location: Location) -> SiteResult<Self> {
        config.validate()?;

        let catalog = Catalog::builtin();
        let mut surface = EguiSurface::default();
        let navbar = NavbarState::mount(&catalog, config.tracker, &mut surface)?;
        let route = location.route.resolve(&catalog);

        Ok(Self {
            catalog,
            route,
            surface,
            navbar: Some(navbar),
            projects: ProjectsSection::default(),
            contact: ContactForm::new(config.contact),
            deferred_anchor: location.anchor,
            year: chrono::Local::now().year(),
        })
    }

    pub(super) fn handle_actions(&mut self, actions: UiActions, now: Instant) {
        if let Some(route) = actions.open_route {
            self.open_route(route, now);
        }
        if let Some(anchor_id) = actions.scroll_to {
            self.scroll_to_section(anchor_id, now);
        }
    }

    fn open_route(&mut self, route: Route, now: Instant) {
        let route = route.resolve(&self.catalog);
        if route == self.route {
            return;
        }

        if self.route == Route::Home {
            self.surface.clear_layout();
        }
        self.projects.close_details(now);
        tracing::info!(from = %self.route.path(), to = %route.path(), "route changed");
        self.route = route;
    }

    fn scroll_to_section(&mut self, anchor_id: String, now: Instant) {
        if self.route != Route::Home {
            // Sections only exist on the home page; scroll once it is laid out.
            self.open_route(Route::Home, now);
            if let Some(navbar) = self.navbar.as_mut() {
                navbar.close_mobile_menu();
            }
            self.deferred_anchor = Some(anchor_id);
            return;
        }

        if let Some(navbar) = self.navbar.as_mut() {
            navbar.navigate_to(&mut self.surface, &anchor_id);
        }
    }

    pub(super) fn apply_deferred_navigation(&mut self) {
        if self.route != Route::Home || !self.surface.has_layout() {
            return;
        }
        let Some(anchor_id) = self.deferred_anchor.take() else {
            return;
        };
        if let Some(navbar) = self.navbar.as_mut() {
            navbar.navigate_to(&mut self.surface, &anchor_id);
        }
    }

    pub(super) fn unmount_navbar(&mut self) {
        let Some(navbar) = self.navbar.take() else {
            return;
        };
        let tracker = navbar.unmount();
        tracing::debug!(active = tracker.active_section_id(), "navbar unmounted");
    }

    pub(super) fn render_home(&mut self, ui: &mut egui::Ui, now: Instant, actions: &mut UiActions) {
        let time = ui.input(|input| input.time);
        let catalog = self.catalog;
        let year = self.year;
        let surface = &mut self.surface;
        let projects = &mut self.projects;
        let contact = &mut self.contact;

        // egui applies wheel and drag input after the content is drawn, so the
        // offset in the output may already be ahead of the recorded bounds.
        // Publish the offset the sections were laid out at instead.
        let output = egui::ScrollArea::vertical()
            .id_salt("home_scroll")
            .auto_shrink([false, false])
            .show_viewport(ui, |ui, viewport| {
                let laid_out_offset = viewport.top();
                let viewport_top = ui.max_rect().top() + laid_out_offset;
                ui.add_space(SECTION_SPACING / 2.0);

                for &anchor_id in catalog.page_sections() {
                    section_block(ui, surface, viewport_top, anchor_id, |ui| match anchor_id {
                        "hero" => views::hero(ui, &catalog, time, actions),
                        "about" => views::about(ui, &catalog),
                        "skills" => views::skills(ui, &catalog),
                        "projects" => views::projects(ui, &catalog, projects, actions),
                        "process" => views::process(ui, &catalog),
                        "contact" => views::contact(ui, &catalog, contact, now),
                        _ => {}
                    });
                    ui.add_space(SECTION_SPACING);
                }

                views::footer(ui, &catalog, year, actions);
                laid_out_offset
            });

        surface.finish_frame(output.inner);
        ui.ctx().request_repaint_after(ORBIT_FRAME_INTERVAL);
    }
}

/// Draws one page section, records its extent on the surface and performs a
/// pending scroll request aimed at it.
fn section_block(
    ui: &mut egui::Ui,
    surface: &mut EguiSurface,
    viewport_top: f32,
    anchor_id: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let response = ui
        .vertical_centered(|ui| {
            ui.set_max_width(CONTENT_MAX_WIDTH);
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents);
        })
        .response;

    surface.record_section(anchor_id, response.rect, viewport_top);
    if surface.take_scroll_request(anchor_id) {
        ui.scroll_to_rect(response.rect, Some(egui::Align::TOP));
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.unmount_navbar();
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.projects.tick(now);
        self.contact.tick(now);
        if let Some(wait) = self.contact.next_deadline(now) {
            ctx.request_repaint_after(wait);
        }

        let narrow = ctx.screen_rect().width() < MOBILE_BREAKPOINT;
        let mut actions = UiActions::default();

        if let Some(navbar) = self.navbar.as_ref() {
            views::navbar_panel(ctx, navbar, narrow, &mut actions);
        }
        if actions.toggle_mobile_menu {
            if let Some(navbar) = self.navbar.as_mut() {
                navbar.toggle_mobile_menu();
            }
        }

        let route = self.route.clone();
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(BACKGROUND))
            .show(ctx, |ui| match &route {
                Route::Home => self.render_home(ui, now, &mut actions),
                Route::Project(id) => match self.catalog.project(id) {
                    Some(project) => views::project_page(ui, project, &self.catalog, self.year, &mut actions),
                    None => views::not_found(ui, &mut actions),
                },
                Route::NotFound => views::not_found(ui, &mut actions),
            });

        if self.projects.is_modal_open() {
            if let Some(project) = self.projects.selected_project(&self.catalog) {
                let mut open = true;
                views::project_modal(ctx, project, &mut open, &mut actions);
                if !open {
                    self.projects.close_details(now);
                }
            }
        }

        views::whatsapp_button(ctx, &self.catalog);

        self.handle_actions(actions, now);
        self.apply_deferred_navigation();
        if let Some(navbar) = self.navbar.as_mut() {
            if navbar.pump(&self.surface) > 0 {
                ctx.request_repaint();
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.unmount_navbar();
    }
}
