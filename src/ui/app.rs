use std::path::{Path, PathBuf};

use eframe::egui;
use rfd::FileDialog;

use crate::commands::Histogram;
use crate::formats::{is_supported_path, supported_formats};
use crate::runtime::{
    AppContext, AppError, CommandEffect, CommandGroup, CommandReport, CommandStep,
    PendingCommand, PreconditionError, Slot, StoreState,
};

use super::histogram::show_histogram_window;
use super::panels::PanelTextures;

#[derive(Debug)]
enum UiAction {
    Open,
    OpenPath(PathBuf),
    OpenSecond,
    Save,
    Reset,
    Clear,
    Command(&'static str),
    SubmitPrompt,
    CancelPrompt,
    DismissMessage,
}

struct Prompt {
    pending: PendingCommand,
    text: String,
}

struct Message {
    title: &'static str,
    text: String,
}

pub(super) struct CitraApp {
    context: AppContext,
    panels: PanelTextures,
    status: String,
    prompt: Option<Prompt>,
    message: Option<Message>,
    histogram: Option<Histogram>,
    startup: Option<PathBuf>,
}

impl CitraApp {
    pub(super) fn new(startup: Option<PathBuf>) -> Self {
        Self {
            context: AppContext::new(),
            panels: PanelTextures::default(),
            status: "Open an image to begin".to_string(),
            prompt: None,
            message: None,
            histogram: None,
            startup,
        }
    }

    fn draw_toolbar(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal_wrapped(|ui| {
            let file_buttons = [
                ("Open", UiAction::Open),
                ("Open Second", UiAction::OpenSecond),
                ("Save", UiAction::Save),
                ("Reset", UiAction::Reset),
                ("Clear", UiAction::Clear),
            ];
            for (caption, action) in file_buttons {
                if ui.button(caption).clicked() {
                    actions.push(action);
                }
            }

            let commands = self.context.dispatcher().commands();
            for group in CommandGroup::ALL {
                ui.separator();
                ui.weak(group.label());
                for command in commands.iter().filter(|command| command.group == group) {
                    if ui.button(command.label).clicked() {
                        actions.push(UiAction::Command(command.id));
                    }
                }
            }
        });
    }

    fn draw_prompt(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(prompt) = &mut self.prompt else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("parameter-prompt")).show(ctx, |ui| {
            ui.heading(prompt.pending.command().label);
            ui.label(prompt.pending.prompt_text());
            let edit = ui.text_edit_singleline(&mut prompt.text);
            edit.request_focus();
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    actions.push(UiAction::SubmitPrompt);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CancelPrompt);
                }
            });
        });
        if response.should_close() {
            actions.push(UiAction::CancelPrompt);
        }
    }

    fn draw_message(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(message) = &self.message else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("message-dialog")).show(ctx, |ui| {
            ui.heading(message.title);
            ui.label(&message.text);
            if ui.button("OK").clicked() {
                actions.push(UiAction::DismissMessage);
            }
        });
        if response.should_close() {
            actions.push(UiAction::DismissMessage);
        }
    }

    fn apply_actions(&mut self, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Open => {
                    if let Some(path) = pick_image("Open Image") {
                        self.open_primary(&path);
                    } else {
                        self.status = "Open cancelled".to_string();
                    }
                }
                UiAction::OpenPath(path) => self.open_primary(&path),
                UiAction::OpenSecond => self.open_second(),
                UiAction::Save => self.save(),
                UiAction::Reset => match self.context.store_mut().reset() {
                    Ok(image) => {
                        self.status = format!("Reset to original ({})", image.shape());
                        self.histogram = None;
                    }
                    Err(error) => self.report_error(error),
                },
                UiAction::Clear => {
                    self.context.store_mut().clear_all();
                    self.histogram = None;
                    self.status = "Cleared all images".to_string();
                }
                UiAction::Command(id) => self.start_command(id),
                UiAction::SubmitPrompt => {
                    if let Some(Prompt { pending, text }) = self.prompt.take() {
                        let result = self.context.resume_command(pending, Some(&text));
                        self.finish_command(result);
                    }
                }
                UiAction::CancelPrompt => {
                    if let Some(Prompt { pending, .. }) = self.prompt.take() {
                        let result = self.context.resume_command(pending, None);
                        self.finish_command(result);
                    }
                }
                UiAction::DismissMessage => self.message = None,
            }
        }
    }

    fn open_primary(&mut self, path: &Path) {
        match self.context.open(path) {
            Ok(image) => {
                self.status = format!("Loaded {} ({})", path.display(), image.shape());
                self.histogram = None;
            }
            Err(error) => self.report_error(error),
        }
    }

    fn open_second(&mut self) {
        if self.context.store().state() == StoreState::Empty {
            self.report_error(PreconditionError::NoPrimaryImage.into());
            return;
        }
        let Some(path) = pick_image("Open Second Image") else {
            self.status = "Open cancelled".to_string();
            return;
        };
        match self.context.open_second(&path) {
            Ok(image) => {
                self.status = format!("Loaded second image {} ({})", path.display(), image.shape());
            }
            Err(error) => self.report_error(error),
        }
    }

    fn save(&mut self) {
        if self.context.store().processed().is_none() {
            self.report_error(PreconditionError::NoProcessedImage.into());
            return;
        }
        let Some(path) = FileDialog::new()
            .add_filter("Images", supported_formats())
            .set_title("Save Result")
            .set_file_name("result.png")
            .save_file()
        else {
            self.status = "Save cancelled".to_string();
            return;
        };
        match self.context.store().save_processed(&path) {
            Ok(()) => self.status = format!("Saved {}", path.display()),
            Err(error) => self.report_error(error),
        }
    }

    fn start_command(&mut self, id: &str) {
        match self.context.start_command(id) {
            Ok(CommandStep::NeedsParameter(pending)) => {
                let text = pending.param().default.to_string();
                self.prompt = Some(Prompt { pending, text });
            }
            Ok(CommandStep::Finished(report)) => self.finish_command(Ok(report)),
            Err(error) => self.report_error(error),
        }
    }

    fn finish_command(&mut self, result: crate::runtime::Result<CommandReport>) {
        let report = match result {
            Ok(report) => report,
            Err(error) => return self.report_error(error),
        };

        if !report.warnings.is_empty() {
            let text = report
                .warnings
                .iter()
                .map(|warning| warning.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            self.message = Some(Message {
                title: "Invalid parameter",
                text,
            });
        }
        if let CommandEffect::Histogram(histogram) = report.effect {
            self.histogram = Some(histogram);
        }
        self.status = report.status;
    }

    fn report_error(&mut self, error: AppError) {
        log::error!("{error}");
        let title = match &error {
            AppError::Decode { .. } => "Cannot open image",
            AppError::Encode { .. } => "Cannot save image",
            AppError::Precondition(_) => "Notice",
            AppError::Operation(_) | AppError::UnknownCommand(_) => "Operation failed",
        };
        self.status = error.to_string();
        self.message = Some(Message {
            title,
            text: error.to_string(),
        });
    }
}

impl eframe::App for CitraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        if let Some(path) = self.startup.take() {
            actions.push(UiAction::OpenPath(path));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(2.0);
            self.draw_toolbar(ui, &mut actions);
            ui.add_space(2.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let store = self.context.store();
            let config = self.context.display_config();
            ui.columns(Slot::ALL.len(), |columns| {
                for (column, slot) in columns.iter_mut().zip(Slot::ALL) {
                    self.panels.show(column, store, config, slot);
                }
            });
        });

        self.draw_prompt(ctx, &mut actions);
        self.draw_message(ctx, &mut actions);

        if let Some(histogram) = &self.histogram {
            if !show_histogram_window(ctx, histogram) {
                self.histogram = None;
            }
        }

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped
            .into_iter()
            .filter_map(|file| file.path)
            .find(|path| is_supported_path(path))
        {
            actions.push(UiAction::OpenPath(path));
        }

        self.apply_actions(actions);
    }
}

fn pick_image(title: &str) -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("Images", supported_formats())
        .set_title(title)
        .pick_file()
}
