// Keyboard handling for the listing and the dialogs

use crate::app::Explorer;
use crate::message::Message;
use crate::platform::Platform;
use crate::state::AppMode;
use eframe::egui;

impl<P: Platform> Explorer<P> {
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        if self.error_message.is_some() {
            if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
                messages.push(Message::DismissError);
            }
            return;
        }

        match self.mode {
            AppMode::NewFolder => {
                if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                    messages.push(Message::Cancel);
                }
                return;
            }
            AppMode::DeleteConfirm { .. } => {
                if ctx.input(|i| i.key_pressed(egui::Key::Y) || i.key_pressed(egui::Key::Enter)) {
                    messages.push(Message::ConfirmDelete);
                }
                if ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::Escape)) {
                    messages.push(Message::Cancel);
                }
                return;
            }
            AppMode::Normal => {}
        }

        // The path box owns the keyboard while it has focus
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowDown) {
                messages.push(Message::SelectDelta(1));
            }
            if i.key_pressed(egui::Key::ArrowUp) {
                messages.push(Message::SelectDelta(-1));
            }
            if i.key_pressed(egui::Key::Enter) {
                messages.push(Message::EnterSelected);
            }
            if i.key_pressed(egui::Key::Backspace) {
                messages.push(Message::NavigateUp);
            }
            if i.key_pressed(egui::Key::Delete) {
                messages.push(Message::BeginDelete);
            }
            if i.key_pressed(egui::Key::F5) {
                messages.push(Message::Refresh);
            }
            if i.modifiers.ctrl && i.modifiers.shift && i.key_pressed(egui::Key::N) {
                messages.push(Message::BeginNewFolder);
            }
        });
    }
}
