//! Application state and event loop
//!
//! One `App` owns every piece of TUI state. All transitions happen
//! synchronously on the main task in response to input events, the
//! frame tick, and the splash timer; rendering recomputes the frame
//! from current state.

use std::io::Stdout;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use reef_core::{config, Portfolio, SectionId, VisibilityController};
use tokio::time::MissedTickBehavior;

use crate::tui::effects::{self, Background, LoadingScreen, Typewriter};
use crate::tui::sections::{self, BioBlock, HeroBlock, SectionBlock, SectionCtx};
use crate::tui::state::{
    LayoutState, PopupState, RevealTransitions, ScrollState, UiState, View,
};
use crate::tui::themes::ThemeRegistry;

/// Frame tick rate; animations and scroll recomputation are throttled
/// to this cadence.
pub const TICK_RATE: Duration = Duration::from_millis(33);

/// How long the splash stays up before the portfolio appears.
pub const LOADING_DURATION: Duration = Duration::from_millis(2500);

pub struct App {
    /// Portfolio content, immutable after startup
    pub portfolio: Portfolio,
    /// Accordion + reveal state machine
    pub visibility: VisibilityController,
    /// Scroll offset and metrics
    pub scroll: ScrollState,
    /// Cached layout areas for hit testing
    pub layout: LayoutState,
    /// View, popup, and theme state
    pub ui: UiState,
    /// Popup controller states
    pub popups: PopupState,
    /// Built-in themes
    pub registry: ThemeRegistry,
    /// Settings persisted back on change
    pub settings: config::Settings,
    /// Hero strip widget
    pub hero: HeroBlock,
    /// Bio strip widget
    pub bio: BioBlock,
    /// Accordion panels in display order
    pub panels: Vec<Box<dyn SectionBlock>>,
    /// Hero typewriter effect
    pub typewriter: Typewriter,
    /// Decorative backdrop for the active theme
    pub background: Box<dyn Background>,
    /// Splash screen animation
    pub loading: LoadingScreen,
    /// Running reveal transitions
    pub reveal: RevealTransitions,
    /// Keyboard cursor over the accordion panels
    pub selected: usize,
    /// Accordion header under the mouse
    pub hovered: Option<SectionId>,
    /// Section to scroll to once the next layout pass has run
    pub pending_jump: Option<SectionId>,
    /// Redraw requested
    pub dirty: bool,
    /// Exit requested
    pub should_quit: bool,
}

impl App {
    pub fn new(
        content: Option<&Path>,
        theme_flag: Option<&str>,
        no_animations: bool,
    ) -> Result<Self> {
        let portfolio = match content {
            Some(path) => config::read_portfolio(path)?,
            None => config::load_portfolio(),
        };

        let mut settings = config::load_settings();
        let registry = ThemeRegistry::new();
        if let Some(name) = theme_flag {
            if registry.get(name).is_none() {
                tracing::warn!("unknown theme `{name}`, keeping `{}`", settings.theme);
            } else {
                settings.theme = name.to_string();
            }
        }
        if no_animations {
            settings.animations = false;
        }

        let theme = Arc::new(registry.get_or_default(&settings.theme).clone());
        let background = effects::for_backdrop(theme.backdrop);
        let mut typewriter = Typewriter::new([
            portfolio.header.name.clone(),
            portfolio.header.title.clone(),
        ]);
        if !settings.animations {
            typewriter.skip();
        }

        Ok(Self {
            visibility: VisibilityController::new(),
            scroll: ScrollState::new(),
            layout: LayoutState::new(),
            ui: UiState::new(theme, settings.theme.clone(), settings.animations),
            popups: PopupState::new(),
            registry,
            hero: HeroBlock::new(&portfolio),
            bio: BioBlock::new(&portfolio),
            panels: sections::build_panels(&portfolio),
            typewriter,
            background,
            loading: LoadingScreen::new(),
            reveal: RevealTransitions::new(),
            selected: 0,
            hovered: None,
            pending_jump: None,
            dirty: true,
            should_quit: false,
            settings,
            portfolio,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut events = EventStream::new();
        let mut ticks = tokio::time::interval(TICK_RATE);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let splash = tokio::time::sleep(LOADING_DURATION);
        tokio::pin!(splash);

        while !self.should_quit {
            if self.dirty {
                terminal.draw(|frame| self.render(frame))?;
                self.dirty = false;
            }
            tokio::select! {
                _ = &mut splash, if self.ui.view == View::Loading => self.finish_loading(),
                _ = ticks.tick() => self.on_tick(),
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            // Geometry is recomputed from scratch on the next draw
            Event::Resize(_, _) => self.dirty = true,
            _ => {}
        }
    }

    /// Advance animation state on the frame tick
    pub fn on_tick(&mut self) {
        let animate = self.ui.animations;
        match self.ui.view {
            View::Loading => {
                if animate && self.loading.tick() {
                    self.dirty = true;
                }
            }
            View::Portfolio => {
                if self.typewriter.tick() {
                    self.dirty = true;
                }
                if self.reveal.tick() {
                    self.dirty = true;
                }
            }
        }
        if animate && self.background.tick() {
            self.dirty = true;
        }
    }

    /// Leave the splash and show the portfolio
    pub fn finish_loading(&mut self) {
        self.ui.view = View::Portfolio;
        self.dirty = true;
    }

    /// Scroll a section to the top of the viewport, expanding it first
    /// when it is a collapsed accordion panel
    pub fn jump_to(&mut self, id: SectionId) {
        if id.is_accordion() {
            if let Some(idx) = SectionId::ACCORDION.iter().position(|s| *s == id) {
                self.selected = idx;
            }
            if self.visibility.open() != Some(id) {
                self.visibility.toggle(id);
            }
        }
        self.pending_jump = Some(id);
        self.dirty = true;
    }

    /// Switch the active theme, swapping the backdrop when it differs
    pub fn apply_theme(&mut self, name: &str) {
        let theme = self.registry.get_or_default(name).clone();
        if theme.backdrop != self.ui.theme.backdrop {
            self.background = effects::for_backdrop(theme.backdrop);
        }
        self.ui.theme_name = theme.name.clone();
        self.ui.theme = Arc::new(theme);
        self.dirty = true;
    }

    /// Flip decorative animations and persist the choice
    pub fn toggle_animations(&mut self) {
        self.ui.animations = !self.ui.animations;
        self.settings.animations = self.ui.animations;
        if let Err(err) = config::save_settings(&self.settings) {
            tracing::warn!("failed to save settings: {err}");
        }
        self.dirty = true;
    }

    /// Hand a URI to the platform opener, detached; failures only cost
    /// the cosmetic action and are logged
    pub fn open_link(&self, uri: &str) {
        tracing::info!("opening {uri}");
        let uri = uri.to_string();
        tokio::task::spawn_blocking(move || {
            if let Err(err) = open::that(&uri) {
                tracing::warn!("failed to open {uri}: {err}");
            }
        });
    }

    /// Render context for the accordion panel at `idx`
    pub(crate) fn panel_ctx(&self, idx: usize) -> SectionCtx {
        let id = SectionId::ACCORDION[idx];
        SectionCtx {
            expanded: self.visibility.open() == Some(id),
            selected: self.selected == idx,
            hovered: self.hovered == Some(id),
            reveal: self.reveal.progress(id, self.visibility.is_revealed(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        // No content file and no theme flag: built-in data, defaults
        let mut app = App::new(None, Some("ocean"), true).unwrap();
        app.finish_loading();
        app
    }

    #[test]
    fn test_toggle_round_trip_through_app() {
        let mut app = app();
        assert_eq!(app.visibility.open(), None);
        app.visibility.toggle(SectionId::Skills);
        assert_eq!(app.visibility.open(), Some(SectionId::Skills));
        app.visibility.toggle(SectionId::Skills);
        assert_eq!(app.visibility.open(), None);
    }

    #[test]
    fn test_jump_to_expands_collapsed_panels() {
        let mut app = app();
        app.jump_to(SectionId::Contact);
        assert_eq!(app.visibility.open(), Some(SectionId::Contact));
        assert_eq!(app.pending_jump, Some(SectionId::Contact));
        // Jumping again must not collapse it
        app.jump_to(SectionId::Contact);
        assert_eq!(app.visibility.open(), Some(SectionId::Contact));
    }

    #[test]
    fn test_jump_to_header_leaves_accordion_alone() {
        let mut app = app();
        app.visibility.toggle(SectionId::About);
        app.jump_to(SectionId::Header);
        assert_eq!(app.visibility.open(), Some(SectionId::About));
    }

    #[test]
    fn test_apply_theme_swaps_backdrop() {
        let mut app = app();
        assert_eq!(app.ui.theme_name, "ocean");
        app.apply_theme("circuit");
        assert_eq!(app.ui.theme_name, "circuit");
        app.apply_theme("lagoon");
        // Unknown names fall back to the default
        assert_eq!(app.ui.theme_name, "ocean");
    }

    #[test]
    fn test_no_animations_skips_the_typewriter() {
        let app = app();
        assert!(app.typewriter.is_done());
    }

    #[test]
    fn test_panel_ctx_tracks_selection() {
        let mut app = app();
        app.selected = 2;
        assert!(app.panel_ctx(2).selected);
        assert!(!app.panel_ctx(0).selected);
        assert!(!app.panel_ctx(2).expanded);
        app.visibility.toggle(SectionId::ACCORDION[2]);
        assert!(app.panel_ctx(2).expanded);
    }
}
