use crate::config::Config;
use crate::error::Result;
use crate::io::Listing;
use crate::message::Message;
use crate::platform::{NativePlatform, Platform};
use crate::state::{AppMode, EnterOutcome, Navigator};
use eframe::egui;
use std::path::PathBuf;

pub struct Explorer<P: Platform = NativePlatform> {
    // Navigation
    pub(crate) navigator: Navigator<P>,
    pub(crate) volumes: Vec<PathBuf>,

    // Entries
    pub(crate) listing: Option<Listing>,
    pub(crate) selected_index: Option<usize>,
    pub(crate) scroll_to_selected: bool,

    // Mode & Input
    pub(crate) mode: AppMode,
    pub(crate) path_input: String,
    pub(crate) input_buffer: String,
    pub(crate) focus_input: bool,

    // UI State
    pub(crate) error_message: Option<String>,
    pub(crate) date_format: String,
    pub(crate) should_close: bool,
}

impl<P: Platform> Explorer<P> {
    pub fn new(platform: P, config: &Config) -> Self {
        let navigator = Navigator::new(platform)
            .with_rollback(config.navigation.rollback_on_failed_listing);
        let volumes = navigator.volumes();

        let mut app = Self {
            navigator,
            volumes,
            listing: None,
            selected_index: None,
            scroll_to_selected: false,
            mode: AppMode::Normal,
            path_input: String::new(),
            input_buffer: String::new(),
            focus_input: false,
            error_message: None,
            date_format: config.display.date_format.clone(),
            should_close: false,
        };
        let initial = app.navigator.refresh();
        app.apply_listing(initial);
        app
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::NavigateUp => {
                let result = self.navigator.up();
                self.apply_listing(result);
            }
            Message::NavigateHome => {
                let result = self.navigator.home();
                self.apply_listing(result);
            }
            Message::Refresh => {
                let result = self.navigator.refresh();
                self.apply_listing(result);
            }
            Message::SubmitPath => {
                let path = PathBuf::from(&self.path_input);
                let result = self.navigator.set_path(path);
                self.apply_listing(result);
            }
            Message::ChangeRoot(root) => {
                let result = self.navigator.change_root(root);
                self.apply_listing(result);
            }
            Message::Enter(name) => self.enter(&name),
            Message::EnterSelected => {
                if let Some(name) = self.selected_name() {
                    self.enter(&name);
                }
            }
            Message::Select(index) => {
                if index < self.entry_count() {
                    self.selected_index = Some(index);
                }
            }
            Message::SelectDelta(delta) => self.select_delta(delta),
            Message::BeginNewFolder => {
                self.mode = AppMode::NewFolder;
                self.input_buffer.clear();
                self.focus_input = true;
            }
            Message::CreateFolder => {
                self.mode = AppMode::Normal;
                let name = std::mem::take(&mut self.input_buffer);
                if !name.trim().is_empty() {
                    let result = self.navigator.create_folder(&name);
                    self.apply_mutation(result);
                }
            }
            Message::BeginDelete => {
                if let Some(name) = self.selected_name() {
                    self.mode = AppMode::DeleteConfirm { name };
                }
            }
            Message::ConfirmDelete => {
                if let AppMode::DeleteConfirm { name } = std::mem::take(&mut self.mode) {
                    let result = self.navigator.delete(&name);
                    self.apply_mutation(result);
                }
            }
            Message::Cancel => {
                self.mode = AppMode::Normal;
                self.input_buffer.clear();
            }
            Message::DismissError => self.error_message = None,
            Message::Quit => self.should_close = true,
        }
    }

    fn enter(&mut self, name: &str) {
        match self.navigator.enter(name) {
            Ok(EnterOutcome::Listed(listing)) => self.apply_listing(Ok(listing)),
            Ok(EnterOutcome::Opened(path)) => {
                tracing::debug!(path = %path.display(), "handed file to default handler");
            }
            Err(e) => self.apply_listing(Err(e)),
        }
    }

    /// Shows the outcome of a navigation. A failure clears the table.
    fn apply_listing(&mut self, result: Result<Listing>) {
        self.path_input = self.navigator.current_path().display().to_string();
        match result {
            Ok(listing) => {
                self.selected_index = (!listing.entries.is_empty()).then_some(0);
                self.scroll_to_selected = true;
                self.listing = Some(listing);
            }
            Err(e) => {
                self.listing = None;
                self.selected_index = None;
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Shows the outcome of create/delete. A failure keeps the current table.
    fn apply_mutation(&mut self, result: Result<Listing>) {
        match result {
            Ok(listing) => {
                let previous = self.selected_index.unwrap_or(0);
                self.selected_index = listing
                    .entries
                    .len()
                    .checked_sub(1)
                    .map(|last| previous.min(last));
                self.listing = Some(listing);
            }
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    fn select_delta(&mut self, delta: i32) {
        let count = self.entry_count();
        if count == 0 {
            return;
        }
        let current = self.selected_index.unwrap_or(0) as i64;
        let next = (current + delta as i64).clamp(0, count as i64 - 1);
        self.selected_index = Some(next as usize);
        self.scroll_to_selected = true;
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.listing.as_ref().map_or(0, |l| l.entries.len())
    }

    pub(crate) fn selected_name(&self) -> Option<String> {
        let listing = self.listing.as_ref()?;
        let entry = listing.entries.get(self.selected_index?)?;
        Some(entry.name.clone())
    }

    pub(crate) fn status_text(&self) -> String {
        self.listing
            .as_ref()
            .map(Listing::summary)
            .unwrap_or_default()
    }
}

impl<P: Platform> eframe::App for Explorer<P> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut messages = Vec::new();

        self.handle_input(ctx, &mut messages);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_toolbar(ui, &mut messages);
        });
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.render_status_bar(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_listing(ui, &mut messages);
        });

        self.render_new_folder_modal(ctx, &mut messages);
        self.render_delete_confirm_modal(ctx, &mut messages);
        self.render_error_modal(ctx, &mut messages);

        for message in messages {
            self.handle_message(message);
        }

        if self.should_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::fake::FakePlatform;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn explorer_at(dir: &TempDir) -> Explorer<FakePlatform> {
        let platform = FakePlatform {
            home: Some(dir.path().to_path_buf()),
            roots: vec![dir.path().to_path_buf()],
            ..Default::default()
        };
        Explorer::new(platform, &Config::default())
    }

    #[test]
    fn test_starts_with_home_listing() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let app = explorer_at(&dir);
        assert_eq!(app.path_input, dir.path().display().to_string());
        assert_eq!(app.selected_name().as_deref(), Some("docs"));
        assert_eq!(app.status_text(), "1 folders, 1 files");
        assert_eq!(app.volumes, vec![dir.path().to_path_buf()]);
    }

    #[test]
    fn test_invalid_path_keeps_text_and_shows_error() {
        let dir = tempdir().unwrap();
        let mut app = explorer_at(&dir);
        let missing = dir.path().join("nowhere");

        app.path_input = missing.display().to_string();
        app.handle_message(Message::SubmitPath);

        assert_eq!(app.path_input, missing.display().to_string());
        assert!(app.listing.is_none());
        assert!(app.error_message.as_deref().unwrap().starts_with("Directory not found"));

        app.handle_message(Message::DismissError);
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_new_folder_flow() {
        let dir = tempdir().unwrap();
        let mut app = explorer_at(&dir);

        app.handle_message(Message::BeginNewFolder);
        assert_eq!(app.mode, AppMode::NewFolder);
        app.input_buffer = "reports".into();
        app.handle_message(Message::CreateFolder);

        assert_eq!(app.mode, AppMode::Normal);
        assert!(dir.path().join("reports").is_dir());
        assert!(app.listing.as_ref().unwrap().get("reports").is_some());
    }

    #[test]
    fn test_folder_name_is_taken_verbatim() {
        let dir = tempdir().unwrap();
        let mut app = explorer_at(&dir);

        app.handle_message(Message::BeginNewFolder);
        app.input_buffer = " notes".into();
        app.handle_message(Message::CreateFolder);

        assert!(dir.path().join(" notes").is_dir());
        assert!(!dir.path().join("notes").exists());
    }

    #[test]
    fn test_submitted_path_is_not_trimmed() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("spaced ")).unwrap();
        let mut app = explorer_at(&dir);

        app.path_input = dir.path().join("spaced ").display().to_string();
        app.handle_message(Message::SubmitPath);

        assert_eq!(app.navigator.current_path(), dir.path().join("spaced "));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn test_empty_folder_name_is_ignored() {
        let dir = tempdir().unwrap();
        let mut app = explorer_at(&dir);

        app.handle_message(Message::BeginNewFolder);
        app.input_buffer = "   ".into();
        app.handle_message(Message::CreateFolder);
        assert!(app.error_message.is_none());
        assert_eq!(app.entry_count(), 0);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("victim.txt"), "x").unwrap();
        let mut app = explorer_at(&dir);

        app.handle_message(Message::BeginDelete);
        assert_eq!(
            app.mode,
            AppMode::DeleteConfirm {
                name: "victim.txt".into()
            }
        );
        app.handle_message(Message::Cancel);
        assert!(dir.path().join("victim.txt").exists());

        app.handle_message(Message::BeginDelete);
        app.handle_message(Message::ConfirmDelete);
        assert!(!dir.path().join("victim.txt").exists());
        assert_eq!(app.entry_count(), 0);
        assert_eq!(app.selected_index, None);
    }

    #[test]
    fn test_failed_delete_keeps_table() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("full")).unwrap();
        fs::write(dir.path().join("full").join("inner"), "x").unwrap();
        let mut app = explorer_at(&dir);

        app.handle_message(Message::BeginDelete);
        app.handle_message(Message::ConfirmDelete);
        assert!(app.error_message.as_deref().unwrap().starts_with("Failed to delete"));
        assert_eq!(app.entry_count(), 1);
    }

    #[test]
    fn test_selection_and_enter() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b").join("inside"), "").unwrap();
        let mut app = explorer_at(&dir);

        app.handle_message(Message::SelectDelta(5));
        assert_eq!(app.selected_index, Some(1));
        app.handle_message(Message::SelectDelta(-9));
        assert_eq!(app.selected_index, Some(0));
        app.handle_message(Message::Select(1));
        app.handle_message(Message::EnterSelected);

        assert_eq!(app.navigator.current_path(), dir.path().join("b"));
        assert_eq!(app.selected_name().as_deref(), Some("inside"));

        app.handle_message(Message::NavigateUp);
        assert_eq!(app.navigator.current_path(), dir.path());
    }

    #[test]
    fn test_quit_flag() {
        let dir = tempdir().unwrap();
        let mut app = explorer_at(&dir);
        app.handle_message(Message::Quit);
        assert!(app.should_close);
    }
}
