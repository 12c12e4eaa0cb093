// Modal dialogs: New Folder input, delete confirmation, error report

use crate::app::Explorer;
use crate::message::Message;
use crate::platform::Platform;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

impl<P: Platform> Explorer<P> {
    pub(crate) fn render_new_folder_modal(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        if self.mode != AppMode::NewFolder {
            return;
        }
        egui::Window::new("New Folder")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label("Enter folder name:");
                let response = ui.text_edit_singleline(&mut self.input_buffer);
                if self.focus_input {
                    response.request_focus();
                    self.focus_input = false;
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    messages.push(Message::CreateFolder);
                }

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Create").clicked() {
                        messages.push(Message::CreateFolder);
                    }
                    if ui.button("Cancel").clicked() {
                        messages.push(Message::Cancel);
                    }
                });
            });
    }

    pub(crate) fn render_delete_confirm_modal(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let AppMode::DeleteConfirm { name } = &self.mode else {
            return;
        };
        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                ui.label(format!("Are you sure you want to delete {}?", name));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        messages.push(Message::ConfirmDelete);
                    }
                    if ui.button("No").clicked() {
                        messages.push(Message::Cancel);
                    }
                });
            });
    }

    pub(crate) fn render_error_modal(&self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        let Some(error) = &self.error_message else {
            return;
        };
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                let color = ui.visuals().error_fg_color;
                ui.colored_label(color, error.as_str());
                ui.add_space(10.0);
                if ui.button("OK").clicked() {
                    messages.push(Message::DismissError);
                }
            });
    }
}
