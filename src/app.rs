use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};

use crate::assets::{PlantArt, load_plant_art};
use crate::config::{TICK_RATE, WATER_INCREMENTS};
use crate::cycle::evaluate_day;
use crate::event::{AppEvent, poll_event};
use crate::models::{Plant, TrackerState};
use crate::scheduler::SchedulerEvent;
use crate::store::StateStore;
use crate::ui::{render_confirm_modal, render_notice_modal, render_settings_modal, render_tracker};
use crate::validation::validate_weight;

/// The modal dialog currently open, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    ConfirmReset,
    Settings,
}

/// Which field is focused in the settings modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    Plant,
    Weight,
}

impl SettingsField {
    pub fn next(&self) -> Self {
        match self {
            SettingsField::Plant => SettingsField::Weight,
            SettingsField::Weight => SettingsField::Plant,
        }
    }
}

/// Editing buffer for the settings modal
#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub field: SettingsField,
    pub plant: Plant,
    pub weight_input: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A message shown to the user in a dismissable dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub message: String,
    pub level: NoticeLevel,
}

const REMINDER_TITLE: &str = "Reminder";

impl Notice {
    fn reminder(remaining: u32) -> Self {
        Self {
            title: REMINDER_TITLE,
            message: format!("{} mL of water left to drink today", remaining),
            level: NoticeLevel::Info,
        }
    }
}

/// The main application state
pub struct App {
    pub running: bool,
    pub modal: ModalState,
    pub tracker: TrackerState,
    pub settings: SettingsForm,
    /// Pending notices, shown one at a time from the front
    pub notices: VecDeque<Notice>,
    pub plant_art: PlantArt,
    assets_dir: PathBuf,
    store: Box<dyn StateStore>,
}

impl App {
    /// Create the application around a loaded record
    pub fn new(tracker: TrackerState, store: Box<dyn StateStore>, assets_dir: PathBuf) -> Self {
        let plant_art = load_plant_art(&assets_dir, tracker.plant, tracker.stage());
        let mut app = Self {
            running: false,
            modal: ModalState::None,
            tracker,
            settings: SettingsForm::default(),
            notices: VecDeque::new(),
            plant_art,
            assets_dir,
            store,
        };

        if !app.tracker.goal_met() {
            app.remind();
        }

        app
    }

    /// Run the application's main loop
    pub fn run(
        mut self,
        mut terminal: DefaultTerminal,
        scheduler: Receiver<SchedulerEvent>,
    ) -> color_eyre::Result<()> {
        self.running = true;

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(event) = poll_event(TICK_RATE, &scheduler)? {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Scheduler(message) => self.handle_scheduler_event(message),
                }
            }
        }

        Ok(())
    }

    /// Render the tracker and whatever dialog is on top of it
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        render_tracker(frame, area, self);

        match self.modal {
            ModalState::None => {}
            ModalState::ConfirmReset => render_confirm_modal(frame, area),
            ModalState::Settings => render_settings_modal(frame, area, self),
        }

        // Notices stack above everything, including open modals
        if let Some(notice) = self.current_notice() {
            render_notice_modal(frame, area, notice);
        }
    }

    /// Handle a key event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if !self.notices.is_empty() {
            self.handle_notice_key(key);
            return;
        }

        match self.modal {
            ModalState::ConfirmReset => self.handle_confirm_key(key),
            ModalState::Settings => self.handle_settings_modal_key(key),
            ModalState::None => self.handle_tracker_key(key),
        }
    }

    /// Handle keys on the main tracker view
    fn handle_tracker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('1') => self.add_water(WATER_INCREMENTS[0]),
            KeyCode::Char('2') => self.add_water(WATER_INCREMENTS[1]),
            KeyCode::Char('3') => self.add_water(WATER_INCREMENTS[2]),
            KeyCode::Char('r') => self.modal = ModalState::ConfirmReset,
            KeyCode::Char('s') => self.open_settings(),
            _ => {}
        }
    }

    fn handle_notice_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.notices.pop_front();
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.modal = ModalState::None;
                self.reset_daily_progress();
            }
            KeyCode::Char('n') | KeyCode::Esc => self.modal = ModalState::None,
            _ => {}
        }
    }

    /// Handle settings modal keys
    fn handle_settings_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.modal = ModalState::None;
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.settings.field = self.settings.field.next();
            }
            KeyCode::Enter => self.save_settings(),
            KeyCode::Left if self.settings.field == SettingsField::Plant => {
                self.settings.plant = self.settings.plant.prev();
            }
            KeyCode::Right if self.settings.field == SettingsField::Plant => {
                self.settings.plant = self.settings.plant.next();
            }
            KeyCode::Backspace if self.settings.field == SettingsField::Weight => {
                self.settings.weight_input.pop();
            }
            KeyCode::Char(c) if self.settings.field == SettingsField::Weight => {
                self.settings.weight_input.push(c);
            }
            _ => {}
        }
    }

    /// Record a drink, persist it and congratulate if the goal is met
    pub fn add_water(&mut self, amount: u32) {
        let goal_met = self.tracker.add_water(amount);
        log::info!(
            "Added {} mL ({} / {} mL)",
            amount,
            self.tracker.current_intake,
            self.tracker.daily_goal
        );
        self.persist();
        self.refresh_art();

        if goal_met {
            self.notify(Notice {
                title: "Hooray!",
                message: "You reached your daily goal!".to_string(),
                level: NoticeLevel::Success,
            });
        }
    }

    /// Zero today's intake. Callers confirm with the user first.
    pub fn reset_daily_progress(&mut self) {
        self.tracker.reset_intake();
        log::info!("Daily progress reset");
        self.persist();
        self.refresh_art();
        self.notify(Notice {
            title: "Reset",
            message: "Daily progress has been reset".to_string(),
            level: NoticeLevel::Success,
        });
    }

    /// Open the settings modal with the current values
    pub fn open_settings(&mut self) {
        self.settings = SettingsForm {
            field: SettingsField::Plant,
            plant: self.tracker.plant,
            weight_input: self.tracker.weight.to_string(),
            error: None,
        };
        self.modal = ModalState::Settings;
    }

    /// Validate and apply the settings form.
    ///
    /// An invalid weight leaves the record untouched and the modal open.
    pub fn save_settings(&mut self) {
        let weight = match validate_weight(&self.settings.weight_input) {
            Ok(weight) => weight,
            Err(message) => {
                self.settings.error = Some(message);
                return;
            }
        };

        self.tracker.set_weight(weight);
        self.tracker.plant = self.settings.plant;
        log::info!(
            "Settings saved: weight {} kg, goal {} mL, plant {}",
            weight,
            self.tracker.daily_goal,
            self.tracker.plant
        );
        self.persist();
        self.refresh_art();
        self.modal = ModalState::None;
        self.notify(Notice {
            title: "Saved",
            message: "Settings saved".to_string(),
            level: NoticeLevel::Success,
        });
    }

    /// Apply a message from the background scheduler
    pub fn handle_scheduler_event(&mut self, message: SchedulerEvent) {
        match message {
            SchedulerEvent::DayCheck(today) => {
                let outcome = evaluate_day(&mut self.tracker, today);
                if outcome.changed() {
                    log::info!("New day {}: {:?}", today, outcome);
                    self.persist();
                    self.refresh_art();
                }
            }
            SchedulerEvent::Reminder => {
                if !self.tracker.goal_met() {
                    self.remind();
                }
            }
        }
    }

    /// The notice currently on screen
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Queue a reminder, refreshing one that is still waiting to be seen
    fn remind(&mut self) {
        let notice = Notice::reminder(self.tracker.remaining());
        match self.notices.iter_mut().find(|n| n.title == REMINDER_TITLE) {
            Some(queued) => *queued = notice,
            None => self.notify(notice),
        }
    }

    /// Save the record, surfacing failures without losing the change in memory
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.tracker) {
            log::error!("Failed to save tracker record: {}", e);
            self.notify(Notice {
                title: "Error",
                message: format!("Could not save progress: {}", e),
                level: NoticeLevel::Error,
            });
        }
    }

    fn refresh_art(&mut self) {
        self.plant_art = load_plant_art(&self.assets_dir, self.tracker.plant, self.tracker.stage());
    }

    /// Quit the application
    fn quit(&mut self) {
        self.running = false;
    }
}
