//! Root application component.
//!
//! Owns the shared state (channel and reminder lists), composes the child
//! components, and runs the action pump: key events become [`Action`]s, write
//! operations are spawned on the [`TaskManager`], and background results are
//! drained back in on every tick.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::api::{Channel, Reminder};
use crate::config::Config;
use crate::constants::{
    ERROR_CHANNEL_DELETE_FAILED, ERROR_REFRESH_FAILED, ERROR_REMINDER_CREATE_FAILED,
    ERROR_REMINDER_DELETE_FAILED, SUCCESS_CHANNEL_DELETED, SUCCESS_CHANNEL_VERIFIED,
    SUCCESS_REMINDER_CREATED, SUCCESS_REMINDER_DELETED,
};
use crate::logger::Logger;
use crate::service::DataService;
use crate::ui::components::{
    ChannelListComponent, DialogComponent, ReminderListComponent, SidebarComponent, StatusBar,
};
use crate::ui::core::{Action, Component, DialogType, EventType, SidebarSelection, TaskManager};
use crate::ui::layout::LayoutManager;

pub struct AppComponent {
    service: DataService,
    logger: Logger,
    config: Config,
    task_manager: TaskManager,
    action_receiver: mpsc::UnboundedReceiver<Action>,

    sidebar: SidebarComponent,
    reminder_list: ReminderListComponent,
    channel_list: ChannelListComponent,
    dialog: DialogComponent,
    status_bar: StatusBar,

    channels: Vec<Channel>,
    reminders: Vec<Reminder>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: DataService, logger: Logger, config: Config) -> Self {
        let (task_manager, action_receiver) = TaskManager::new();

        let mut sidebar = SidebarComponent::new();
        sidebar.selection = Self::view_from_name(&config.ui.default_view);

        let mut reminder_list = ReminderListComponent::new();
        reminder_list.set_show_channel_badges(config.display.show_channel_badges);

        Self {
            service,
            logger,
            config,
            task_manager,
            action_receiver,
            sidebar,
            reminder_list,
            channel_list: ChannelListComponent::new(),
            dialog: DialogComponent::new(),
            status_bar: StatusBar::new(),
            channels: Vec::new(),
            reminders: Vec::new(),
            should_quit: false,
        }
    }

    fn view_from_name(name: &str) -> SidebarSelection {
        match name {
            "upcoming" => SidebarSelection::Upcoming,
            "all" => SidebarSelection::All,
            "channels" => SidebarSelection::Channels,
            _ => SidebarSelection::Today,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off the initial data load.
    pub async fn init(&mut self) {
        self.handle_app_action(Action::StartRefresh).await;
    }

    /// Handle one terminal event. Ticks drain the background action channel.
    pub async fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => {
                let action = self.action_for_key(key);
                self.handle_app_action(action).await;
            }
            EventType::Tick => {
                self.process_background_actions().await;
                self.task_manager.cleanup_finished_tasks();
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
    }

    fn action_for_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // A dialog captures all input while open
        if self.dialog.is_open() {
            return self.dialog.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('r') => Action::StartRefresh,
            KeyCode::Char('a') => Action::ShowDialog(DialogType::ReminderCreation),
            KeyCode::Char('c') => Action::ShowDialog(DialogType::ChannelVerification { existing: None }),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => {
                let action = self.sidebar.handle_key_events(key);
                if !matches!(action, Action::None) {
                    return action;
                }
                if self.sidebar.selection == SidebarSelection::Channels {
                    self.channel_list.handle_key_events(key)
                } else {
                    self.reminder_list.handle_key_events(key)
                }
            }
        }
    }

    async fn process_background_actions(&mut self) {
        while let Ok(action) = self.action_receiver.try_recv() {
            self.handle_app_action(action).await;
        }
    }

    /// Apply an action, following chained follow-up actions until the chain
    /// settles.
    async fn handle_app_action(&mut self, action: Action) {
        let mut current = action;
        loop {
            match current {
                Action::NavigateToSidebar(view) => {
                    self.sidebar.selection = view;
                    self.reminder_list.update_data(self.reminders.clone(), view);
                    break;
                }
                Action::NextItem => {
                    if self.sidebar.selection == SidebarSelection::Channels {
                        self.channel_list.select_next();
                    } else {
                        self.reminder_list.select_next();
                    }
                    break;
                }
                Action::PreviousItem => {
                    if self.sidebar.selection == SidebarSelection::Channels {
                        self.channel_list.select_previous();
                    } else {
                        self.reminder_list.select_previous();
                    }
                    break;
                }

                Action::CreateReminder(request) => {
                    let service = self.service.clone();
                    self.task_manager.spawn_operation(
                        ERROR_REMINDER_CREATE_FAILED.to_string(),
                        SUCCESS_REMINDER_CREATED.to_string(),
                        move || async move { service.create_reminder(request).await.map(|_| ()) },
                    );
                    current = Action::HideDialog;
                }
                Action::DeleteReminder(reminder_id) => {
                    let service = self.service.clone();
                    self.task_manager.spawn_operation(
                        ERROR_REMINDER_DELETE_FAILED.to_string(),
                        SUCCESS_REMINDER_DELETED.to_string(),
                        move || async move { service.delete_reminder(&reminder_id).await },
                    );
                    current = Action::HideDialog;
                }
                Action::DeleteChannel(channel_ref) => {
                    let service = self.service.clone();
                    self.task_manager.spawn_operation(
                        ERROR_CHANNEL_DELETE_FAILED.to_string(),
                        SUCCESS_CHANNEL_DELETED.to_string(),
                        move || async move { service.delete_channel(&channel_ref).await },
                    );
                    current = Action::HideDialog;
                }

                Action::RunVerification { session_id, command } => {
                    self.task_manager
                        .spawn_verification(self.service.clone(), session_id, command);
                    break;
                }
                Action::VerificationOutcome { session_id, result } => {
                    current = self.dialog.apply_verification_outcome(session_id, result);
                }
                Action::ChannelListStale => {
                    self.service.invalidate_channels().await;
                    self.dialog.close();
                    self.status_bar.info_message = Some(SUCCESS_CHANNEL_VERIFIED.to_string());
                    self.logger.log("Channel verified, refetching channel list".to_string());
                    current = Action::StartRefresh;
                }

                Action::StartRefresh | Action::RefreshData => {
                    self.status_bar.loading = true;
                    self.task_manager.spawn_refresh(self.service.clone());
                    break;
                }
                Action::DataLoaded { channels, reminders } => {
                    self.channels = channels;
                    self.reminders = reminders;
                    self.status_bar.loading = false;
                    self.status_bar.error_message = None;
                    self.sidebar
                        .update_data(self.channels.clone(), self.reminders.clone());
                    self.reminder_list
                        .update_data(self.reminders.clone(), self.sidebar.selection);
                    self.channel_list.update_data(self.channels.clone());
                    break;
                }
                Action::RefreshFailed(message) => {
                    self.status_bar.loading = false;
                    self.status_bar.error_message = Some(format!("{ERROR_REFRESH_FAILED}: {message}"));
                    self.logger.log(format!("Refresh failed: {message}"));
                    break;
                }
                Action::OperationCompleted(message) => {
                    self.status_bar.error_message = None;
                    self.status_bar.info_message = Some(message);
                    break;
                }

                Action::ShowDialog(dialog_type) => {
                    self.dialog.show(dialog_type, &self.channels, &self.logger);
                    break;
                }
                Action::HideDialog => {
                    self.dialog.close();
                    break;
                }

                Action::Quit => {
                    self.should_quit = true;
                    break;
                }
                Action::None => break,
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let main_areas = LayoutManager::main_layout(area);
        let panes = LayoutManager::top_pane_layout(main_areas[0], self.config.ui.sidebar_width);

        self.sidebar.render(f, panes[0]);
        if self.sidebar.selection == SidebarSelection::Channels {
            self.channel_list.render(f, panes[1]);
        } else {
            self.reminder_list.render(f, panes[1]);
        }
        self.status_bar.render(f, main_areas[1]);

        // Dialogs render on top of everything
        self.dialog.render(f, area);
    }
}
