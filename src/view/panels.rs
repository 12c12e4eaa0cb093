// Toolbar, listing table and status bar

use crate::app::Explorer;
use crate::io::{format_modified, format_size};
use crate::message::Message;
use crate::platform::Platform;
use crate::style;
use eframe::egui;

impl<P: Platform> Explorer<P> {
    pub(crate) fn render_toolbar(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New Folder").clicked() {
                    messages.push(Message::BeginNewFolder);
                    ui.close();
                }
                if ui.button("Refresh").clicked() {
                    messages.push(Message::Refresh);
                    ui.close();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    messages.push(Message::Quit);
                    ui.close();
                }
            });
            ui.menu_button("Edit", |ui| {
                let has_selection = self.selected_index.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete"))
                    .clicked()
                {
                    messages.push(Message::BeginDelete);
                    ui.close();
                }
            });
        });
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("⬆ Up").clicked() {
                messages.push(Message::NavigateUp);
            }
            if ui
                .button("🏠 Home")
                .on_hover_text(self.navigator.home_path().display().to_string())
                .clicked()
            {
                messages.push(Message::NavigateHome);
            }
            if ui.button("⟳ Refresh").clicked() {
                messages.push(Message::Refresh);
            }

            let width = (ui.available_width() - style::PATH_INPUT_RESERVE).max(100.0);
            let height = ui.spacing().interact_size.y;
            let response = ui.add_sized(
                [width, height],
                egui::TextEdit::singleline(&mut self.path_input),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                messages.push(Message::SubmitPath);
            }

            let current = self.navigator.current_path().to_path_buf();
            let selected_text = self
                .volumes
                .iter()
                .find(|v| current.starts_with(v))
                .map(|v| v.display().to_string())
                .unwrap_or_default();
            egui::ComboBox::from_id_salt("volume_select")
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for volume in &self.volumes {
                        let label = volume.display().to_string();
                        if ui.selectable_label(current == *volume, label).clicked() {
                            messages.push(Message::ChangeRoot(volume.clone()));
                        }
                    }
                });
        });
        ui.add_space(4.0);
    }

    pub(crate) fn render_listing(&mut self, ui: &mut egui::Ui, messages: &mut Vec<Message>) {
        let scroll_target = if std::mem::take(&mut self.scroll_to_selected) {
            self.selected_index
        } else {
            None
        };
        let Some(listing) = &self.listing else {
            ui.centered_and_justified(|ui| {
                ui.label("Nothing to show");
            });
            return;
        };

        use egui_extras::{Column, TableBuilder};
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(style::ICON_COL_WIDTH))
            .column(Column::remainder().at_least(120.0).clip(true))
            .column(Column::initial(style::SIZE_COL_WIDTH))
            .column(Column::initial(style::DATE_COL_WIDTH));

        if let Some(idx) = scroll_target {
            table = table.scroll_to_row(idx, None);
        }

        table
            .header(style::HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.label("");
                });
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.strong("Size");
                    });
                });
                header.col(|ui| {
                    ui.strong("Date Modified");
                });
            })
            .body(|body| {
                body.rows(style::ROW_HEIGHT, listing.entries.len(), |mut row| {
                    let row_index = row.index();
                    let entry = &listing.entries[row_index];
                    row.set_selected(self.selected_index == Some(row_index));

                    row.col(|ui| {
                        ui.label(entry.get_icon());
                    });
                    row.col(|ui| {
                        let mut text = egui::RichText::new(&entry.name);
                        if entry.is_dir() {
                            text = text.color(style::DIR_COLOR);
                        }
                        let response =
                            style::truncated_label_with_sense(ui, text, egui::Sense::click());
                        if response.clicked() {
                            messages.push(Message::Select(row_index));
                        }
                        if response.double_clicked() {
                            messages.push(Message::Enter(entry.name.clone()));
                        }
                    });
                    row.col(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if !entry.is_dir() {
                                ui.label(format_size(entry.size_bytes));
                            }
                        });
                    });
                    row.col(|ui| {
                        ui.label(format_modified(entry.modified_at, &self.date_format));
                    });
                });
            });
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.status_text());
            if let Some(listing) = &self.listing {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format!(
                        "{} as of {}",
                        listing.path.display(),
                        listing.taken_at.format("%H:%M:%S")
                    ));
                });
            }
        });
    }
}
