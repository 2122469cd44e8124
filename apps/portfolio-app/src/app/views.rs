use super::orbit;
use super::*;
use pf_content::Project;
use pf_content::copyright_line;
use pf_site::CardAction;
use pf_tracker::Section;

const HERO_ORBIT_SIZE: f32 = 360.0;
const ORBIT_LABEL_COUNT: usize = 9;

pub(super) fn navbar_panel(
    ctx: &egui::Context,
    navbar: &NavbarState,
    narrow: bool,
    actions: &mut UiActions,
) {
    let scrolled = navbar.is_scrolled();
    let (fill, stroke, vertical_margin): (_, _, i8) = if scrolled {
        (SURFACE, egui::Stroke::new(1.0, BORDER), 10)
    } else {
        (BACKGROUND, egui::Stroke::NONE, 18)
    };

    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::default()
                .fill(fill)
                .stroke(stroke)
                .inner_margin(egui::Margin::symmetric(24, vertical_margin)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if logo(ui).clicked() {
                    actions.scroll_to("hero");
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if narrow {
                        let label = if navbar.mobile_menu_open() { "Fermer" } else { "Menu" };
                        if ui.button(label).clicked() {
                            actions.toggle_mobile_menu = true;
                        }
                        return;
                    }

                    // Right-to-left layout, so walk the links backwards.
                    for section in navbar.sections().iter().rev() {
                        ui.add_space(12.0);
                        nav_link(ui, navbar, section, 15.0, actions);
                    }
                });
            });

            if narrow && navbar.mobile_menu_open() {
                ui.add_space(8.0);
                ui.separator();
                for section in navbar.sections() {
                    nav_link(ui, navbar, section, 18.0, actions);
                    ui.add_space(6.0);
                }
            }
        });
}

fn logo(ui: &mut egui::Ui) -> egui::Response {
    ui.add(
        egui::Label::new(egui::RichText::new("Jul.").size(24.0).strong().color(FOREGROUND))
            .sense(egui::Sense::click()),
    )
    .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn nav_link(
    ui: &mut egui::Ui,
    navbar: &NavbarState,
    section: &Section,
    size: f32,
    actions: &mut UiActions,
) {
    let active = navbar.is_active(&section.anchor_id);
    let color = if active { PRIMARY } else { MUTED };
    let response = ui
        .add(
            egui::Label::new(egui::RichText::new(&section.label).size(size).color(color))
                .sense(egui::Sense::click()),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    if active {
        let rect = response.rect;
        ui.painter().line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            egui::Stroke::new(2.0, PRIMARY),
        );
    }
    if response.clicked() {
        actions.scroll_to(&section.anchor_id);
    }
}

pub(super) fn hero(ui: &mut egui::Ui, catalog: &Catalog, time: f64, actions: &mut UiActions) {
    let labels: Vec<&str> = catalog
        .skills()
        .iter()
        .flat_map(|category| category.skills.iter().copied())
        .take(ORBIT_LABEL_COUNT)
        .collect();

    if ui.available_width() < MOBILE_BREAKPOINT {
        hero_text(ui, actions);
        ui.add_space(32.0);
        ui.vertical_centered(|ui| orbit::paint(ui, time, &labels, HERO_ORBIT_SIZE * 0.75));
        return;
    }

    ui.columns(2, |columns| {
        hero_text(&mut columns[0], actions);
        columns[1].vertical_centered(|ui| orbit::paint(ui, time, &labels, HERO_ORBIT_SIZE));
    });
}

fn hero_text(ui: &mut egui::Ui, actions: &mut UiActions) {
    ui.add_space(48.0);
    chip(ui, "Bienvenue sur mon portfolio");
    ui.add_space(16.0);
    ui.label(egui::RichText::new("Développeur").size(56.0).strong().color(FOREGROUND));
    ui.label(egui::RichText::new("Full Stack").size(56.0).strong().color(PRIMARY));
    ui.add_space(16.0);
    paragraph(
        ui,
        "Je conçois et développe des applications web modernes, performantes et \
         centrées sur l'utilisateur, de l'interface jusqu'au serveur.",
    );
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        if primary_button(ui, "Voir mes projets →").clicked() {
            actions.scroll_to("projects");
        }
        if outline_button(ui, "Me contacter").clicked() {
            actions.scroll_to("contact");
        }
    });
}

pub(super) fn about(ui: &mut egui::Ui, catalog: &Catalog) {
    section_heading(ui, "À propos");
    ui.label(egui::RichText::new("Plus qu'un développeur,").size(32.0).strong().color(FOREGROUND));
    ui.label(egui::RichText::new("un artisan du numérique.").size(32.0).strong().color(PRIMARY));
    ui.add_space(16.0);
    paragraph(
        ui,
        "Passionné par le code propre et les architectures robustes, j'accompagne \
         entreprises et porteurs de projets dans la réalisation de produits web \
         fiables et évolutifs.",
    );
    ui.add_space(8.0);
    paragraph(
        ui,
        "Mon approche allie rigueur technique et sens du design pour livrer des \
         expériences fluides qui servent de vrais objectifs métier.",
    );
    ui.add_space(24.0);

    ui.horizontal_wrapped(|ui| {
        for stat in catalog.stats() {
            card(ui, |ui| {
                ui.set_min_width(160.0);
                ui.label(egui::RichText::new(stat.value).size(32.0).strong().color(PRIMARY));
                ui.label(egui::RichText::new(stat.label).color(MUTED));
            });
        }
    });
}

pub(super) fn skills(ui: &mut egui::Ui, catalog: &Catalog) {
    section_heading(ui, "Expertise Technique");
    paragraph(ui, "Les technologies et outils que j'utilise au quotidien.");
    ui.add_space(24.0);

    for category in catalog.skills() {
        card(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(egui::RichText::new(category.title).size(20.0).strong().color(FOREGROUND));
            ui.label(egui::RichText::new(category.description).color(MUTED));
            ui.add_space(12.0);
            ui.horizontal_wrapped(|ui| {
                for skill in category.skills {
                    chip(ui, skill);
                }
            });
        });
        ui.add_space(16.0);
    }
}

pub(super) fn projects(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    section: &mut ProjectsSection,
    actions: &mut UiActions,
) {
    section_heading(ui, "Projets Sélectionnés");
    paragraph(ui, "Une sélection de réalisations récentes, du prototype à la production.");
    ui.add_space(24.0);

    for project in section.visible(catalog) {
        project_card(ui, project, section, actions);
        ui.add_space(20.0);
    }

    if catalog.has_hidden_projects() {
        ui.vertical_centered(|ui| {
            if outline_button(ui, section.toggle_label()).clicked() {
                section.toggle_show_all();
            }
        });
    }
}

fn project_card(
    ui: &mut egui::Ui,
    project: &'static Project,
    section: &mut ProjectsSection,
    actions: &mut UiActions,
) {
    card(ui, |ui| {
        ui.set_min_width(ui.available_width());
        image_placeholder(ui, project.image, project.title, 180.0);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(project.title).size(22.0).strong().color(FOREGROUND));
            if project.is_in_development() {
                ui.label(egui::RichText::new("En développement").size(12.0).color(WARNING));
            }
        });
        ui.label(egui::RichText::new(project.subtitle).color(PRIMARY));
        ui.add_space(6.0);
        paragraph(ui, project.description);
        ui.add_space(8.0);
        tags(ui, project.tags);
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let action = CardAction::for_project(project);
            if primary_button(ui, action.label()).clicked() {
                match action {
                    CardAction::Visit(url) => ui.ctx().open_url(egui::OpenUrl::new_tab(url)),
                    CardAction::Details(id) => section.open_details(id),
                }
            }
            if let Some(repo) = project.repo_url() {
                if outline_button(ui, "Code").clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(repo));
                }
            }
            if ui.link("Étude de cas").clicked() {
                actions.open(Route::Project(project.id.to_owned()));
            }
        });
    });
}

pub(super) fn process(ui: &mut egui::Ui, catalog: &Catalog) {
    section_heading(ui, "Mon Processus");
    paragraph(ui, "Une méthode éprouvée pour transformer une idée en produit.");
    ui.add_space(24.0);

    for (index, step) in catalog.process_steps().iter().enumerate() {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(44.0, 44.0), egui::Sense::hover());
            ui.painter().circle_filled(rect.center(), 20.0, PRIMARY);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{:02}", index + 1),
                egui::FontId::proportional(16.0),
                egui::Color32::WHITE,
            );
            ui.add_space(12.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(step.title).size(20.0).strong().color(FOREGROUND));
                paragraph(ui, step.description);
            });
        });
        ui.add_space(20.0);
    }
}

pub(super) fn contact(ui: &mut egui::Ui, catalog: &Catalog, form: &mut ContactForm, now: Instant) {
    section_heading(ui, "Contact");

    if ui.available_width() < MOBILE_BREAKPOINT {
        contact_details(ui, catalog);
        ui.add_space(24.0);
        contact_form(ui, form, now);
        return;
    }

    ui.columns(2, |columns| {
        contact_details(&mut columns[0], catalog);
        contact_form(&mut columns[1], form, now);
    });
}

fn contact_details(ui: &mut egui::Ui, catalog: &Catalog) {
    let details = catalog.contact();
    ui.label(egui::RichText::new("Parlons de votre").size(32.0).strong().color(FOREGROUND));
    ui.label(egui::RichText::new("prochain projet.").size(32.0).strong().color(PRIMARY));
    ui.add_space(12.0);
    paragraph(
        ui,
        "Une idée, une mission ou simplement une question ? Écrivez-moi, je réponds \
         généralement sous 24 heures.",
    );
    ui.add_space(16.0);

    ui.label(egui::RichText::new("Email").color(MUTED));
    ui.hyperlink_to(details.email, details.mailto_url());
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Localisation").color(MUTED));
    ui.label(egui::RichText::new(details.location).color(FOREGROUND));
    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for social in details.socials {
            ui.hyperlink_to(social.name, social.url);
        }
    });
}

fn contact_form(ui: &mut egui::Ui, form: &mut ContactForm, now: Instant) {
    card(ui, |ui| {
        ui.set_min_width(ui.available_width());
        let editable = form.can_submit();
        let draft = form.draft_mut();

        for (label, hint, value) in [
            ("Nom", "John Doe", &mut draft.name),
            ("Email", "john@example.com", &mut draft.email),
            ("Sujet", "Proposition de projet", &mut draft.subject),
        ] {
            ui.label(egui::RichText::new(label).color(MUTED));
            ui.add_enabled(
                editable,
                egui::TextEdit::singleline(value)
                    .hint_text(hint)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
        }

        ui.label(egui::RichText::new("Message").color(MUTED));
        ui.add_enabled(
            editable,
            egui::TextEdit::multiline(&mut draft.message)
                .hint_text("Parlez-moi de votre projet...")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);

        if let Some(error) = form.last_error() {
            ui.label(egui::RichText::new(&error.message).color(ERROR));
            ui.add_space(6.0);
        }

        let button = egui::Button::new(
            egui::RichText::new(form.button_label()).strong().color(egui::Color32::WHITE),
        )
        .fill(PRIMARY)
        .min_size(egui::vec2(ui.available_width(), 40.0));
        if ui.add_enabled(form.can_submit(), button).clicked() {
            if let Err(error) = form.submit(now) {
                tracing::debug!(%error, "contact form rejected");
            }
        }
    });
}

pub(super) fn footer(ui: &mut egui::Ui, catalog: &Catalog, year: i32, actions: &mut UiActions) {
    let details = catalog.contact();
    ui.separator();
    ui.add_space(24.0);

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_MAX_WIDTH);
        ui.columns(3, |columns| {
            let ui = &mut columns[0];
            ui.label(egui::RichText::new("Jul.").size(24.0).strong().color(FOREGROUND));
            paragraph(ui, "Développeur Full Stack. Des produits web soignés, du concept au déploiement.");
            ui.horizontal_wrapped(|ui| {
                for social in details.socials {
                    ui.hyperlink_to(social.name, social.url);
                }
            });

            let ui = &mut columns[1];
            ui.label(egui::RichText::new("Navigation").strong().color(FOREGROUND));
            for link in catalog.nav_links() {
                if ui.link(link.label).clicked() {
                    actions.scroll_to(link.anchor_id);
                }
            }

            let ui = &mut columns[2];
            ui.label(egui::RichText::new("Infos").strong().color(FOREGROUND));
            ui.label(egui::RichText::new("Disponible pour freelance").color(MUTED));
            ui.hyperlink_to(details.email, details.mailto_url());
            ui.label(egui::RichText::new(details.location).color(MUTED));
        });

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(copyright_line(details.owner, year)).size(12.0).color(MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.link("Retour en haut ↑").clicked() {
                    actions.scroll_to("hero");
                }
            });
        });
        ui.add_space(24.0);
    });
}

pub(super) fn project_page(
    ui: &mut egui::Ui,
    project: &'static Project,
    catalog: &Catalog,
    year: i32,
    actions: &mut UiActions,
) {
    egui::ScrollArea::vertical()
        .id_salt(("project_page", project.id))
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CONTENT_MAX_WIDTH);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    ui.add_space(32.0);
                    if ui.link("← Retour aux projets").clicked() {
                        actions.scroll_to("projects");
                    }
                    ui.add_space(16.0);
                    tags(ui, project.tags);
                    ui.label(egui::RichText::new(project.title).size(48.0).strong().color(FOREGROUND));
                    ui.label(egui::RichText::new(project.subtitle).size(20.0).color(MUTED));
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        let live = project.live_url();
                        let clicked = ui
                            .add_enabled(live.is_some(), primary_button_widget("Voir le site live"))
                            .clicked();
                        if let Some(url) = live.filter(|_| clicked) {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                        }

                        let repo = project.repo_url();
                        let clicked = ui
                            .add_enabled(repo.is_some(), outline_button_widget("Code source"))
                            .clicked();
                        if let Some(url) = repo.filter(|_| clicked) {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(url));
                        }
                    });
                    ui.add_space(24.0);
                    image_placeholder(ui, project.image, project.title, 320.0);
                    ui.add_space(32.0);

                    ui.columns(2, |columns| {
                        let ui = &mut columns[0];
                        case_study_block(ui, "Le Contexte", project.context);
                        paragraph(ui, project.description);
                        ui.add_space(16.0);
                        case_study_block(ui, "La Solution Technique", project.solution);
                        ui.add_space(16.0);
                        case_study_block(ui, "Les Résultats", project.results);

                        card(&mut columns[1], |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.label(egui::RichText::new("Informations").size(20.0).strong().color(FOREGROUND));
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new("Client").color(MUTED));
                            ui.label(egui::RichText::new(project.client).color(FOREGROUND));
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new("Année").color(MUTED));
                            ui.label(egui::RichText::new(project.year.to_string()).color(FOREGROUND));
                            ui.add_space(8.0);
                            ui.label(egui::RichText::new("Technologies").color(MUTED));
                            tags(ui, project.tags);
                        });
                    });

                    if !project.screenshots.is_empty() {
                        ui.add_space(32.0);
                        ui.label(egui::RichText::new("Galerie").size(28.0).strong().color(FOREGROUND));
                        ui.add_space(12.0);
                        for screenshot in project.screenshots {
                            image_placeholder(ui, screenshot, project.title, 240.0);
                            ui.add_space(12.0);
                        }
                    }
                    ui.add_space(SECTION_SPACING);
                });
            });
            footer(ui, catalog, year, actions);
        });
}

fn case_study_block(ui: &mut egui::Ui, title: &str, body: &str) {
    ui.label(egui::RichText::new(title).size(24.0).strong().color(FOREGROUND));
    ui.add_space(6.0);
    paragraph(ui, body);
}

pub(super) fn not_found(ui: &mut egui::Ui, actions: &mut UiActions) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(egui::RichText::new("404").size(72.0).strong().color(PRIMARY));
        ui.label(egui::RichText::new("Page introuvable").size(24.0).color(FOREGROUND));
        ui.add_space(24.0);
        if primary_button(ui, "Retour à l'accueil").clicked() {
            actions.open(Route::Home);
        }
    });
}

pub(super) fn project_modal(
    ctx: &egui::Context,
    project: &'static Project,
    open: &mut bool,
    actions: &mut UiActions,
) {
    let mut view_page = false;
    let mut close = false;

    egui::Window::new(project.title)
        .id(egui::Id::new("project_modal"))
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(560.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(project.subtitle).color(PRIMARY));
            ui.add_space(8.0);
            image_placeholder(ui, project.image, project.title, 200.0);
            ui.add_space(12.0);
            paragraph(ui, project.description);
            ui.add_space(8.0);
            case_study_block(ui, "Le Contexte", project.context);
            ui.add_space(8.0);
            case_study_block(ui, "La Solution", project.solution);
            ui.add_space(8.0);
            tags(ui, project.tags);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                view_page = primary_button(ui, "Voir l'étude de cas complète").clicked();
                close = outline_button(ui, "Fermer").clicked();
            });
        });

    if close || view_page {
        *open = false;
    }
    if view_page {
        actions.open(Route::Project(project.id.to_owned()));
    }
}

pub(super) fn whatsapp_button(ctx: &egui::Context, catalog: &Catalog) {
    egui::Area::new(egui::Id::new("whatsapp_button"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-24.0, -24.0])
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new("WhatsApp").strong().color(egui::Color32::WHITE),
            )
            .fill(WHATSAPP)
            .min_size(egui::vec2(120.0, 44.0));

            let response = ui.add(button).on_hover_text("Discutons sur WhatsApp");
            if !response.clicked() {
                return;
            }

            let details = catalog.contact();
            match details.whatsapp_url(details.whatsapp_greeting) {
                Ok(url) => ctx.open_url(egui::OpenUrl::new_tab(url)),
                Err(error) => tracing::warn!(%error, "cannot open WhatsApp chat"),
            }
        });
}

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.label(egui::RichText::new(title).size(40.0).strong().color(FOREGROUND));
    let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 4.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, PRIMARY);
    ui.add_space(16.0);
}

fn paragraph(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).size(16.0).color(MUTED));
}

fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::default()
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .inner_margin(egui::Margin::same(20))
        .show(ui, add_contents)
        .inner
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::default()
        .fill(SURFACE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(PRIMARY));
        });
}

fn tags(ui: &mut egui::Ui, tags: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for tag in tags {
            chip(ui, tag);
        }
    });
}

/// Stand-in for project artwork: a tinted panel carrying the title, with the
/// asset path on hover.
fn image_placeholder(ui: &mut egui::Ui, path: &str, title: &str, height: f32) {
    let size = egui::vec2(ui.available_width(), height);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 8.0, BORDER);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        title,
        egui::FontId::proportional(28.0),
        MUTED,
    );
    response.on_hover_text(path);
}

fn primary_button_widget(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label).strong().color(egui::Color32::WHITE))
        .fill(PRIMARY)
        .min_size(egui::vec2(0.0, 40.0))
}

fn outline_button_widget(label: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(label).color(FOREGROUND))
        .fill(egui::Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .min_size(egui::vec2(0.0, 40.0))
}

fn primary_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(primary_button_widget(label))
}

fn outline_button(ui: &mut egui::Ui, label: &str) -> egui::Response {
    ui.add(outline_button_widget(label))
}
