//! Main application UI.

use chrono::{DateTime, Local};
use eframe::egui::{self, Align, Layout};
use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::models::{CreateEmployeeRole, EmployeeRole, PageMeta, RoleDraft, RolePage, UpdateEmployeeRole};

use super::components::colors;
use super::{consent_panel, create_panel, edit_panel, home, login_panel, roles_panel, show_panel};

/// Current screen being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Roles,
    RoleCreate,
    RoleEdit(i64),
    RoleShow(i64),
    Consent,
    Login,
}

/// API server connection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Checking,
    Connected,
    Error,
}

/// Messages from async tasks to UI.
pub enum UiMessage {
    // List loading; `seq` identifies the request that produced the response
    RolesLoaded { seq: u64, page: RolePage },
    RolesLoadFailed { seq: u64, message: String },

    // Single-record loading (edit and show screens)
    RoleLoaded(EmployeeRole),
    RoleLoadFailed(String),

    // CRUD outcomes
    RoleCreated(EmployeeRole),
    RoleUpdated(EmployeeRole),
    RoleDeleted(i64),
    OperationFailed(String),

    // Connection test
    ApiTestResult(bool),
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Main application state.
pub struct App {
    // Runtime and API client
    pub rt: tokio::runtime::Runtime,
    pub client: ApiClient,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub current_screen: Screen,

    // List screen state
    pub search: String,
    pub page: u32,
    pub roles: Vec<EmployeeRole>,
    pub meta: Option<PageMeta>,
    pub is_loading: bool,
    list_seq: u64,

    // Form state (create and edit screens)
    pub draft: RoleDraft,
    pub edit_loading: bool,

    // Show screen state
    pub detail: Option<EmployeeRole>,
    pub detail_loading: bool,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<i64>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Activity log
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
    config_path: PathBuf,

    // API server dialog
    pub api_dialog_open: bool,
    pub api_url_input: String,
    pub api_status: ApiStatus,
}

impl App {
    pub fn new(client: ApiClient, config: AppConfig, config_path: PathBuf, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let api_url_input = config.api.base_url.clone();

        Self {
            rt,
            client,
            tx,
            rx,
            current_screen: Screen::default(),
            search: String::new(),
            page: 1,
            roles: Vec::new(),
            meta: None,
            is_loading: false,
            list_seq: 0,
            draft: RoleDraft::default(),
            edit_loading: false,
            detail: None,
            detail_loading: false,
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
            log_messages: Vec::new(),
            config,
            config_path,
            api_dialog_open: false,
            api_url_input,
            api_status: ApiStatus::Unknown,
        }
    }

    /// Log a message to the UI activity log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Switch screens, triggering the loads the target screen needs.
    pub fn navigate(&mut self, screen: Screen) {
        match screen {
            Screen::Roles => self.load_roles(),
            Screen::RoleCreate => {
                self.draft = RoleDraft::default();
            }
            Screen::RoleEdit(id) => {
                self.draft = RoleDraft::default();
                self.edit_loading = true;
                self.load_role(id);
            }
            Screen::RoleShow(id) => {
                self.detail = None;
                self.detail_loading = true;
                self.load_role(id);
            }
            Screen::Home | Screen::Consent | Screen::Login => {}
        }
        self.current_screen = screen;
    }

    /// Reload the current page of role assignments.
    ///
    /// Every reload gets a fresh sequence number; responses from requests
    /// that are no longer the latest are discarded on arrival.
    pub fn load_roles(&mut self) {
        self.list_seq += 1;
        let seq = self.list_seq;
        self.is_loading = true;

        let client = self.client.clone();
        let search = self.search.clone();
        let page = self.page;
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.list(&search, page).await {
                Ok(page) => {
                    let _ = tx.send(UiMessage::RolesLoaded { seq, page });
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::RolesLoadFailed {
                        seq,
                        message: e.to_string(),
                    });
                }
            }
        });
    }

    /// Fetch a single role assignment for the edit or show screen.
    fn load_role(&mut self, id: i64) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.get(id).await {
                Ok(role) => {
                    let _ = tx.send(UiMessage::RoleLoaded(role));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::RoleLoadFailed(e.to_string()));
                }
            }
        });
    }

    /// Create a new role assignment.
    pub fn create_role(&mut self, data: CreateEmployeeRole) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.create(&data).await {
                Ok(role) => {
                    let _ = tx.send(UiMessage::RoleCreated(role));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Update an existing role assignment.
    pub fn update_role(&mut self, id: i64, data: UpdateEmployeeRole) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.update(id, &data).await {
                Ok(role) => {
                    let _ = tx.send(UiMessage::RoleUpdated(role));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Delete a role assignment.
    pub fn delete_role(&mut self, id: i64) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.delete(id).await {
                Ok(_) => {
                    let _ = tx.send(UiMessage::RoleDeleted(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Test the connection to the URL currently in the dialog input.
    pub fn test_api_connection(&mut self) {
        self.api_status = ApiStatus::Checking;
        self.log_info("Test de connexion au serveur...");

        let client = ApiClient::new(&crate::config::ApiConfig {
            base_url: self.api_url_input.clone(),
            timeout_secs: 5,
        });
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            let ok = client.test_connection().await.unwrap_or(false);
            let _ = tx.send(UiMessage::ApiTestResult(ok));
        });
    }

    /// Save the API server configuration and rebuild the client.
    fn save_api_config(&mut self) {
        self.config.api.base_url = self.api_url_input.trim().trim_end_matches('/').to_string();
        self.client = ApiClient::new(&self.config.api);

        if let Err(e) = self.config.save(&self.config_path) {
            tracing::error!("Failed to save config: {}", e);
            self.error_message = Some(format!("Impossible d'enregistrer la configuration: {e}"));
        } else {
            tracing::info!("Config saved: {}", self.config_path.display());
        }
    }

    /// Apply a list response if it is still the latest request.
    fn apply_roles_page(&mut self, seq: u64, page: RolePage) {
        if seq != self.list_seq {
            // Stale response from an earlier search/page
            return;
        }
        self.roles = page.data;
        self.meta = Some(page.meta);
        self.is_loading = false;
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::RolesLoaded { seq, page } => {
                    self.apply_roles_page(seq, page);
                }
                UiMessage::RolesLoadFailed { seq, message } => {
                    if seq == self.list_seq {
                        self.is_loading = false;
                        self.error_message = Some(message.clone());
                        self.log_error(message);
                    }
                }
                UiMessage::RoleLoaded(record) => match self.current_screen {
                    Screen::RoleEdit(id) if record.id == id => {
                        self.draft = RoleDraft::from_record(&record);
                        self.edit_loading = false;
                    }
                    Screen::RoleShow(id) if record.id == id => {
                        self.detail = Some(record);
                        self.detail_loading = false;
                    }
                    _ => {}
                },
                UiMessage::RoleLoadFailed(message) => {
                    self.edit_loading = false;
                    self.detail_loading = false;
                    self.error_message = Some(message.clone());
                    self.log_error(message);
                }
                UiMessage::RoleCreated(role) => {
                    self.success_message = Some(format!("Rôle employé #{} créé", role.id));
                    self.log_success(format!(
                        "Rôle {} attribué à l'employé {}",
                        role.role_id, role.employee_id
                    ));
                    self.navigate(Screen::Roles);
                }
                UiMessage::RoleUpdated(role) => {
                    self.success_message = Some(format!("Rôle employé #{} mis à jour", role.id));
                    self.log_success(format!("Rôle employé #{} mis à jour", role.id));
                    self.navigate(Screen::Roles);
                }
                UiMessage::RoleDeleted(id) => {
                    self.log_success(format!("Rôle employé #{id} supprimé"));
                    // No optimistic removal, the list is reloaded wholesale
                    self.load_roles();
                }
                UiMessage::OperationFailed(message) => {
                    self.error_message = Some(message.clone());
                    self.log_error(message);
                }
                UiMessage::ApiTestResult(ok) => {
                    if ok {
                        self.api_status = ApiStatus::Connected;
                        self.log_success("Serveur accessible");
                    } else {
                        self.api_status = ApiStatus::Error;
                        self.log_error("Serveur inaccessible");
                    }
                }
            }
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Outils", |ui| {
                    if ui.button("Serveur API").clicked() {
                        self.api_dialog_open = true;
                        self.api_url_input = self.config.api.base_url.clone();
                        ui.close();
                    }
                    ui.separator();
                    let test_enabled = !matches!(self.api_status, ApiStatus::Checking);
                    if ui
                        .add_enabled(test_enabled, egui::Button::new("Tester la connexion"))
                        .clicked()
                    {
                        self.api_url_input = self.config.api.base_url.clone();
                        self.test_api_connection();
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    let (color, text) = match self.api_status {
                        ApiStatus::Unknown => (colors::NEUTRAL, "Inconnu"),
                        ApiStatus::Checking => (colors::WARNING, "Vérification..."),
                        ApiStatus::Connected => (colors::SUCCESS, "Connecté"),
                        ApiStatus::Error => (colors::ERROR, "Erreur de connexion"),
                    };

                    if matches!(self.api_status, ApiStatus::Checking) {
                        ui.spinner();
                    }
                    ui.colored_label(color, format!("Serveur: {}", text));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if self.is_loading || self.edit_loading || self.detail_loading {
                            ui.spinner();
                            ui.label("Chargement...");
                        }
                    });
                });
            });
    }

    /// Render API server configuration dialog.
    fn show_api_dialog(&mut self, ctx: &egui::Context) {
        if !self.api_dialog_open {
            return;
        }

        let mut open = true;
        egui::Window::new("Serveur API")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.add_space(10.0);

                egui::Grid::new("api_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("URL du serveur:");
                        ui.add(egui::TextEdit::singleline(&mut self.api_url_input).desired_width(260.0));
                        ui.end_row();
                    });

                ui.add_space(15.0);

                ui.horizontal(|ui| {
                    let testing = matches!(self.api_status, ApiStatus::Checking);
                    if ui
                        .add_enabled(!testing, egui::Button::new("Tester la connexion"))
                        .clicked()
                    {
                        self.test_api_connection();
                    }

                    ui.add_space(10.0);

                    match self.api_status {
                        ApiStatus::Checking => {
                            ui.spinner();
                            ui.label("Test en cours...");
                        }
                        ApiStatus::Connected => {
                            ui.colored_label(colors::SUCCESS, "Connexion réussie");
                        }
                        ApiStatus::Error => {
                            ui.colored_label(colors::ERROR, "Échec de la connexion");
                        }
                        ApiStatus::Unknown => {}
                    }
                });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    if ui.button("Annuler").clicked() {
                        self.api_dialog_open = false;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Enregistrer").clicked() {
                            self.save_api_config();
                            self.api_dialog_open = false;
                        }
                    });
                });
            });

        if !open {
            self.api_dialog_open = false;
        }
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Erreur")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Succès")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(id) = self.delete_target
        {
            egui::Window::new("Supprimer le rôle employé")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(format!("Supprimer le rôle employé #{id} ?"));
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Annuler").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Supprimer").clicked() {
                            self.log_info(format!("Suppression du rôle employé #{id}"));
                            self.delete_role(id);
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if matches!(self.api_status, ApiStatus::Checking)
            || self.is_loading
            || self.edit_loading
            || self.detail_loading
        {
            ctx.request_repaint();
        }

        // Menu bar
        self.show_menu_bar(ctx);

        // Status bar
        self.show_status_bar(ctx);

        // API server dialog
        self.show_api_dialog(ctx);

        // Modal dialogs (error, success, delete confirmation)
        self.show_dialogs(ctx);

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| {
            let next = match self.current_screen {
                Screen::Home => home::show(self, ui),
                Screen::Roles => roles_panel::show(self, ui),
                Screen::RoleCreate => create_panel::show(self, ui),
                Screen::RoleEdit(id) => edit_panel::show(self, ui, id),
                Screen::RoleShow(_) => show_panel::show(self, ui),
                Screen::Consent => consent_panel::show(ui),
                Screen::Login => login_panel::show(ui),
            };

            if let Some(screen) = next {
                self.navigate(screen);
            }
        });
    }
}
