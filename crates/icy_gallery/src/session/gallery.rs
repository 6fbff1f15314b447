use tokio_util::sync::CancellationToken;

use crate::{Options, Phase, PipelineSettings, SearchEvent, SearchJob, SearchSession, Tile, detail_page_url, hit_test, words::random_keyword};

/// User input, independent of the toolkit that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(String),
    RandomKeyword,
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    Click { x: f32, y: f32 },
}

/// Work the caller has to carry out after a command
#[derive(Debug)]
pub enum Effect {
    None,
    /// Spawn this job; its events go back into `Gallery::apply`
    StartSearch(SearchJob),
    /// Open the page in the system browser
    OpenUrl(String),
}

/// Session state machine.
///
/// Owns the committed `SearchSession` and is its only writer. Every search gets
/// a new generation; events of older generations are dropped, and starting a
/// search cancels the previous one.
pub struct Gallery {
    session: SearchSession,
    settings: PipelineSettings,
    web_url: String,
    keywords: Vec<String>,
    rng: fastrand::Rng,
    generation: u64,
    cancel_token: Option<CancellationToken>,
    pointer: Option<(f32, f32)>,
}

impl Gallery {
    pub fn new(options: &Options) -> Self {
        Self::with_rng(options, fastrand::Rng::new())
    }

    pub fn with_rng(options: &Options, rng: fastrand::Rng) -> Self {
        Self {
            session: SearchSession::new(),
            settings: PipelineSettings::from(options),
            web_url: options.web_url.clone(),
            keywords: options.keywords.clone(),
            rng,
            generation: 0,
            cancel_token: None,
            pointer: None,
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    /// Tile under the pointer, if any
    pub fn hovered(&self) -> Option<&Tile> {
        let (x, y) = self.pointer?;
        hit_test(&self.session.tiles, x, y)
    }

    pub fn dispatch(&mut self, command: Command) -> Effect {
        match command {
            Command::Search(query) => self.start_search(&query),
            Command::RandomKeyword => {
                let keyword = random_keyword(&mut self.rng, &self.keywords);
                log::info!("random keyword: {}", keyword);
                self.start_search(&keyword)
            }
            Command::PointerMoved { x, y } => {
                self.pointer = Some((x, y));
                Effect::None
            }
            Command::PointerLeft => {
                self.pointer = None;
                Effect::None
            }
            Command::Click { x, y } => {
                self.pointer = Some((x, y));
                match hit_test(&self.session.tiles, x, y) {
                    Some(tile) => Effect::OpenUrl(detail_page_url(&self.web_url, tile.id())),
                    None => Effect::None,
                }
            }
        }
    }

    fn start_search(&mut self, query: &str) -> Effect {
        let query = query.trim();
        if query.is_empty() {
            return Effect::None;
        }

        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }
        self.generation += 1;
        let cancel_token = CancellationToken::new();
        self.cancel_token = Some(cancel_token.clone());

        log::info!("search #{} for '{}'", self.generation, query);

        // previous tiles stay visible while loading
        self.session.query = query.to_string();
        self.session.phase = Phase::Loading;
        self.session.status_text = format!("searching for \"{}\"...", query);
        self.session.error_message = None;
        self.session.generation = self.generation;

        Effect::StartSearch(SearchJob {
            generation: self.generation,
            query: query.to_string(),
            settings: self.settings.clone(),
            cancel_token,
        })
    }

    /// Apply an event from a running search. Returns true if the session changed.
    pub fn apply(&mut self, event: SearchEvent) -> bool {
        if event.generation() != self.generation || !self.session.is_loading() {
            log::debug!("dropping event of stale search #{}", event.generation());
            return false;
        }

        match event {
            SearchEvent::Status { text, .. } => {
                self.session.status_text = text;
            }
            SearchEvent::Finished { result, .. } => {
                self.cancel_token = None;
                match result {
                    Ok(outcome) => {
                        let query = self.session.query.clone();
                        let status_text = if outcome.candidates == 0 {
                            format!("no matches for \"{}\"", query)
                        } else if outcome.tiles.is_empty() {
                            format!("no images found for \"{}\"", query)
                        } else {
                            format!("showing {} images for \"{}\"", outcome.tiles.len(), query)
                        };
                        self.session = SearchSession {
                            query,
                            phase: Phase::Ready,
                            status_text,
                            error_message: None,
                            tiles: outcome.tiles,
                            generation: self.generation,
                        };
                    }
                    Err(err) => {
                        let message = err.to_string();
                        self.session.phase = Phase::Error;
                        self.session.status_text = format!("error: {}", message);
                        self.session.error_message = Some(message);
                    }
                }
            }
        }
        true
    }
}
