use async_trait::async_trait;
use disco_core::{Album, AlbumSource, ArtistId, FetchError};
use disco_ui::{ErrorDisplay, ListDataSource, ScreenSurface};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Surface that records what the screen asked it to show
#[derive(Default)]
pub struct RecordingSurface {
    pub title: Option<String>,
    pub refreshing: bool,
    pub rows: Vec<String>,
    pub presented: Vec<ErrorDisplay>,
    pub visible_error: Option<ErrorDisplay>,
}

impl ScreenSurface for RecordingSurface {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_refreshing(&mut self, refreshing: bool) {
        self.refreshing = refreshing;
    }

    fn reload_list(&mut self, rows: &dyn ListDataSource) {
        self.rows = (0..rows.count())
            .map(|i| rows.record_at(i).title.clone())
            .collect();
    }

    fn present_error(&mut self, error: &ErrorDisplay) {
        self.presented.push(error.clone());
        self.visible_error = Some(error.clone());
    }

    fn dismiss_error(&mut self) {
        self.visible_error = None;
    }
}

type Scripted = (Duration, Result<Vec<Album>, FetchError>);

/// Source answering each call with the next scripted response, after its delay
#[derive(Default)]
pub struct ScriptedSource {
    responses: Mutex<VecDeque<Scripted>>,
    requested: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_albums(self, delay_ms: u64, titles: &[&str]) -> Self {
        let albums = titles.iter().map(|t| Album::new(*t)).collect();
        self.push(Duration::from_millis(delay_ms), Ok(albums))
    }

    pub fn then_error(self, delay_ms: u64, error: FetchError) -> Self {
        self.push(Duration::from_millis(delay_ms), Err(error))
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn push(self, delay: Duration, result: Result<Vec<Album>, FetchError>) -> Self {
        self.responses.lock().unwrap().push_back((delay, result));
        self
    }
}

#[async_trait]
impl AlbumSource for ScriptedSource {
    async fn albums_for_artist(&self, artist_id: &ArtistId) -> Result<Vec<Album>, FetchError> {
        self.requested
            .lock()
            .unwrap()
            .push(artist_id.as_str().to_string());
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some((delay, result)) => {
                tokio::time::sleep(delay).await;
                result
            }
            None => Err(FetchError::Unavailable),
        }
    }
}
