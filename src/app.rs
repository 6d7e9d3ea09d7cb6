use crate::config::CanvasConfig;
use crate::input::{Action, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::Session;

/// We derive Deserialize/Serialize so we can persist the canvas settings on
/// shutdown. Shapes and the clipping window are never persisted.
#[derive(serde::Deserialize, serde::Serialize, Debug)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ClipApp {
    config: CanvasConfig,
    #[serde(skip)]
    session: Session,
    #[serde(skip)]
    renderer: Renderer,
    #[serde(skip)]
    input: InputHandler,
    /// Why the most recent command was ignored, shown in the info panel.
    #[serde(skip)]
    last_ignored: Option<String>,
}

impl Default for ClipApp {
    fn default() -> Self {
        Self::with_config(CanvasConfig::default())
    }
}

impl ClipApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous settings (if any). The session always starts empty.
        let restored: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let config = restored.config;
        log::info!("canvas {}x{}", config.width, config.height);
        Self::with_config(config)
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            session: Session::new(&config),
            renderer: Renderer::default(),
            input: InputHandler::default(),
            last_ignored: None,
            config,
        }
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn last_ignored(&self) -> Option<&str> {
        self.last_ignored.as_deref()
    }

    /// Applies one input action to the app.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Session(command) => match self.session.try_apply(command) {
                Ok(()) => self.last_ignored = None,
                Err(reason) => {
                    log::debug!("ignored {}: {}", command.name(), reason);
                    self.last_ignored = Some(format!("{}: {}", command.name(), reason));
                }
            },
            Action::ToggleGrid => self.config.show_grid = !self.config.show_grid,
        }
    }

    /// Reads this frame's pointer and keyboard input over `canvas_rect`.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input.set_canvas_rect(canvas_rect);
        for action in self.input.process_input(ctx, &self.session) {
            self.dispatch(action);
        }
    }
}

impl eframe::App for ClipApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::info_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
