//! App module - contains the main application state and logic

mod images;
mod input;
mod summary;
mod views;

use crate::controller::{SwipeController, SwipeEvent};
use crate::settings::Settings;
use crate::source::SystemSource;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Session
    pub(crate) controller: SwipeController,
    pub(crate) events: VecDeque<SwipeEvent>,
    pub(crate) dealt: bool,
    pub(crate) image_generation: u64,
    // Image pipeline
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) client: reqwest::Client,
    pub(crate) fetch_limit: Arc<tokio::sync::Semaphore>,
    pub(crate) image_state: Arc<Mutex<ImageState>>,
    pub(crate) textures: HashMap<String, egui::TextureHandle>,
    pub(crate) cancel_token: CancellationToken,
    pub(crate) drag: input::DragTracker,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
    ) -> std::io::Result<Self> {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let runtime = tokio::runtime::Runtime::new()?;
        let controller = SwipeController::new(
            settings.image_base_url.clone(),
            Box::new(SystemSource::new()),
        );

        debug!(
            base_url = %settings.image_base_url,
            parallel = settings.max_parallel_fetches,
            "App state created"
        );

        Ok(Self {
            controller,
            events: VecDeque::new(),
            dealt: false,
            image_generation: 0,
            runtime,
            client: reqwest::Client::new(),
            fetch_limit: Arc::new(tokio::sync::Semaphore::new(settings.max_parallel_fetches)),
            image_state: Arc::new(Mutex::new(ImageState::default())),
            textures: HashMap::new(),
            cancel_token: CancellationToken::new(),
            drag: input::DragTracker::default(),
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
            needs_center: false,
        })
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }

    pub fn push_event(&mut self, event: SwipeEvent) {
        self.events.push_back(event);
    }

    /// Deal the first deck on the first frame, and drop the previous deck's
    /// images whenever a restart has dealt a new one.
    pub fn sync_session(&mut self) {
        if !self.dealt {
            self.dealt = true;
            self.controller.deal();
        }

        let generation = self.controller.deck().generation();
        if generation != self.image_generation {
            if self.image_generation != 0 {
                info!(generation, "New deck dealt, discarding previous cats");
            }
            self.reset_images();
            self.image_generation = generation;
        }
    }

    /// Kick off fetches for the cat on screen and tell the controller when
    /// its texture is ready.
    pub fn pump_images(&mut self, ctx: &egui::Context) {
        self.upload_ready_images(ctx);

        let deck = self.controller.deck();
        let Some(url) = deck.current().map(|c| c.url().to_string()) else {
            return;
        };
        let token = deck.token();

        self.ensure_image(ctx, &url);
        if self.controller.card_load() == CardLoad::Loading && self.texture_for(&url).is_some() {
            self.push_event(SwipeEvent::CardLoaded(token));
        }
    }

    /// Apply queued events and due settle decisions, then schedule the next wake-up.
    pub fn process_events(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let had_events = !self.events.is_empty();
        while let Some(event) = self.events.pop_front() {
            self.controller.dispatch(event, now);
        }

        let before = self.controller.deck().token();
        self.controller.tick(now);

        if had_events || before != self.controller.deck().token() {
            ctx.request_repaint();
        }
        if let Some(wait) = self.controller.next_wake(now) {
            ctx.request_repaint_after(wait);
        }
    }

    pub fn title(&self) -> &'static str {
        if self.controller.deck().is_finished() {
            "Cat Summary"
        } else {
            "Paws & Preferences"
        }
    }
}
