//! # App State Module
//!
//! This module defines the central application state structure and
//! initialization logic for the console.
//!
//! ## Key Types:
//! - `ConsoleTab` - Enum defining the main tabs (Dashboard, Tours, Bookings, Calendar)
//! - `Toast` - A transient notification with its display timestamp
//! - `TrekConsoleApp` - Main application state struct
//!
//! ## Purpose:
//! The `TrekConsoleApp` struct holds all application state in a single
//! location: the authenticated session, the domain services with their cached
//! collections, and every piece of UI state (current tab, calendar cursor,
//! open editors, pending confirmations). All rendering code lives in
//! `components/` as `impl TrekConsoleApp` blocks over this struct.

use std::time::{Duration, Instant};

use chrono::Datelike;
use eframe::egui;
use log::info;
use shared::{BookingStatus, Notice, Severity, TourInput};

use crate::domain::bookings::BookingService;
use crate::domain::calendar;
use crate::domain::forms::TourForm;
use crate::domain::tours::TourService;
use crate::services::{ApiClient, Session};

/// How long a toast stays on screen before it is dropped.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Tabs available in the main interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTab {
    Dashboard,
    Tours,
    Bookings,
    Calendar,
}

impl ConsoleTab {
    pub const ALL: [ConsoleTab; 4] = [
        ConsoleTab::Dashboard,
        ConsoleTab::Tours,
        ConsoleTab::Bookings,
        ConsoleTab::Calendar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConsoleTab::Dashboard => "Dashboard",
            ConsoleTab::Tours => "Tours",
            ConsoleTab::Bookings => "Bookings",
            ConsoleTab::Calendar => "Calendar",
        }
    }
}

/// A notice currently on screen, stamped when it appeared.
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Main application struct for the console
pub struct TrekConsoleApp {
    // Domain services (each owns its cached collection)
    pub bookings: BookingService<ApiClient>,
    pub tours: TourService<ApiClient>,
    pub session: Session,

    // Login state
    pub token_input: String,
    pub login_error: Option<String>,

    // UI state
    pub current_tab: ConsoleTab,
    pub toasts: Vec<Toast>,
    pub window_focused: bool,

    // Calendar state (month is 0-based, January = 0)
    pub selected_year: i32,
    pub selected_month: u32,

    // Bookings table state
    pub bookings_filter: Option<BookingStatus>,

    // Tour editor state (editing_tour_id is None when creating)
    pub show_tour_editor: bool,
    pub editing_tour_id: Option<i64>,
    pub tour_form: TourForm,

    // Pending delete confirmations
    pub confirm_delete_tour: Option<i64>,
    pub confirm_delete_booking: Option<i64>,
}

impl TrekConsoleApp {
    /// Create a new TrekConsoleApp with default values
    pub fn new(cc: &eframe::CreationContext<'_>, api: ApiClient) -> Self {
        info!("🚀 Initializing console against {}", api.base_url());

        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let now = chrono::Local::now();

        Self {
            // Domain services
            bookings: BookingService::new(api.clone()),
            tours: TourService::new(api),
            session: Session::new(),

            // Login state
            token_input: String::new(),
            login_error: None,

            // UI state
            current_tab: ConsoleTab::Dashboard,
            toasts: Vec::new(),
            window_focused: true,

            // Calendar state
            selected_year: now.year(),
            selected_month: now.month0(),

            // Bookings table state
            bookings_filter: None,

            // Tour editor state
            show_tour_editor: false,
            editing_tour_id: None,
            tour_form: TourForm::default(),

            // Pending delete confirmations
            confirm_delete_tour: None,
            confirm_delete_booking: None,
        }
    }

    /// Verify the entered token against the remote API and, if it holds,
    /// start the session and load the initial data.
    pub fn submit_login(&mut self) {
        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            self.login_error = Some("Enter an access token".to_string());
            return;
        }

        if self.tours.store().verify_token(&token) {
            info!("🔑 Token accepted, opening session");
            self.session.login(token);
            self.token_input.clear();
            self.login_error = None;
            self.load_tab_data();
        } else {
            log::warn!("token verification failed");
            self.login_error = Some("Token rejected by the server".to_string());
        }
    }

    /// Drop the session and every cached collection with it.
    pub fn logout(&mut self) {
        info!("🔒 Logging out");
        self.session.logout();
        let api = self.tours.store().clone();
        self.bookings = BookingService::new(api.clone());
        self.tours = TourService::new(api);
        self.toasts.clear();
        self.close_tour_editor();
        self.confirm_delete_tour = None;
        self.confirm_delete_booking = None;
        self.current_tab = ConsoleTab::Dashboard;
    }

    /// Load whatever the current tab displays. Dashboard and calendar always
    /// fetch the unfiltered collection; the bookings tab applies its own
    /// status filter.
    pub fn load_tab_data(&mut self) {
        if !self.session.is_authenticated() {
            return;
        }
        match self.current_tab {
            ConsoleTab::Dashboard => {
                self.tours.load_tours(&self.session);
                self.bookings.load_bookings(&self.session, None);
            }
            ConsoleTab::Tours => {
                self.tours.load_tours(&self.session);
            }
            ConsoleTab::Bookings => {
                // Tours are needed for the tour column labels
                self.tours.load_tours(&self.session);
                self.bookings.load_bookings(&self.session, self.bookings_filter);
            }
            ConsoleTab::Calendar => {
                self.tours.load_tours(&self.session);
                self.bookings.load_bookings(&self.session, None);
            }
        }
    }

    /// Switch tabs, re-fetching the data the new tab shows.
    pub fn switch_tab(&mut self, tab: ConsoleTab) {
        if self.current_tab == tab {
            return;
        }
        info!("📑 Switching to {} tab", tab.label());
        self.current_tab = tab;
        self.load_tab_data();
    }

    /// Navigate to the previous calendar month
    pub fn navigate_to_previous_month(&mut self) {
        let (year, month) = calendar::change_month(self.selected_year, self.selected_month, -1);
        self.selected_year = year;
        self.selected_month = month;
        info!("📅 Navigated to {} {}", self.current_month_name(), year);
    }

    /// Navigate to the next calendar month
    pub fn navigate_to_next_month(&mut self) {
        let (year, month) = calendar::change_month(self.selected_year, self.selected_month, 1);
        self.selected_year = year;
        self.selected_month = month;
        info!("📅 Navigated to {} {}", self.current_month_name(), year);
    }

    /// Get the current month name as a string
    pub fn current_month_name(&self) -> &'static str {
        calendar::month_name(self.selected_month)
    }

    /// Move the notices both services accumulated onto the toast stack.
    pub fn collect_notices(&mut self) {
        let now = Instant::now();
        for notice in self
            .bookings
            .take_notices()
            .into_iter()
            .chain(self.tours.take_notices())
        {
            self.toasts.push(Toast {
                notice,
                shown_at: now,
            });
        }
    }

    /// Drop toasts that have been on screen long enough.
    pub fn prune_toasts(&mut self) {
        let now = Instant::now();
        self.toasts
            .retain(|toast| now.duration_since(toast.shown_at) < TOAST_TTL);
    }

    /// Open the tour editor empty, for creating a new tour.
    pub fn open_tour_creator(&mut self) {
        self.editing_tour_id = None;
        self.tour_form = TourForm::default();
        self.show_tour_editor = true;
    }

    /// Open the tour editor prefilled from an existing tour.
    pub fn open_tour_editor(&mut self, tour_id: i64) {
        if let Some(tour) = self.tours.tours().iter().find(|t| t.id == tour_id) {
            self.tour_form = TourForm::from_tour(tour);
            self.editing_tour_id = Some(tour_id);
            self.show_tour_editor = true;
        }
    }

    pub fn close_tour_editor(&mut self) {
        self.show_tour_editor = false;
        self.editing_tour_id = None;
        self.tour_form.clear();
    }

    /// Persist the open tour editor, creating or updating depending on how it
    /// was opened. The editor closes only when the store accepts the write.
    pub fn submit_tour_editor(&mut self) {
        let input: TourInput = self.tour_form.to_input();
        let saved = match self.editing_tour_id {
            Some(id) => self.tours.update_tour(&self.session, id, &input),
            None => self.tours.create_tour(&self.session, &input),
        };
        if saved {
            self.close_tour_editor();
        }
    }

    /// Delete a tour after its confirmation dialog. Bookings that pointed at
    /// it become unpaired on the server, so the booking cache is re-fetched.
    pub fn delete_tour_confirmed(&mut self, tour_id: i64) {
        self.confirm_delete_tour = None;
        if self.tours.delete_tour(&self.session, tour_id) {
            self.bookings.reload(&self.session);
        }
    }

    /// Severity color shared by toasts and status text.
    pub fn severity_color(severity: Severity) -> egui::Color32 {
        match severity {
            Severity::Success => egui::Color32::from_rgb(34, 139, 34),
            Severity::Error => egui::Color32::from_rgb(220, 53, 69),
        }
    }

    /// Status colors used by the table, the calendar chips, and the dialog.
    pub fn status_color(status: BookingStatus) -> egui::Color32 {
        match status {
            BookingStatus::Pending => egui::Color32::from_rgb(255, 140, 0),
            BookingStatus::Confirmed => egui::Color32::from_rgb(34, 139, 34),
            BookingStatus::Canceled => egui::Color32::from_rgb(220, 53, 69),
            BookingStatus::Unpaired => egui::Color32::from_rgb(120, 120, 120),
        }
    }
}
