// Per-page fetch lifecycle with a stale-response guard.

/// Lifecycle of one page's view-model. There is no stale-but-showing
/// state: a new fetch replaces the prior view-model only on success.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<V> {
    Idle,
    Loading,
    Ready(V),
    Failed(String),
}

/// Holds a page's current state plus a fetch epoch. Each `begin` bumps
/// the epoch; a completion carrying an older token is discarded, so a
/// late response for a superseded fetch can never overwrite a newer one.
#[derive(Debug)]
pub struct PageSlot<V> {
    state: PageState<V>,
    epoch: u64,
}

impl<V> PageSlot<V> {
    pub fn new() -> Self {
        Self {
            state: PageState::Idle,
            epoch: 0,
        }
    }

    /// Enters `Loading` and returns the token the eventual completion
    /// must present.
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.state = PageState::Loading;
        self.epoch
    }

    /// Applies a fetch-transform outcome. Returns false when the token is
    /// stale and the result was dropped.
    pub fn complete(&mut self, token: u64, result: Result<V, String>) -> bool {
        if token != self.epoch {
            return false;
        }
        self.state = match result {
            Ok(view) => PageState::Ready(view),
            Err(message) => PageState::Failed(message),
        };
        true
    }

    pub fn state(&self) -> &PageState<V> {
        &self.state
    }

    pub fn view(&self) -> Option<&V> {
        match &self.state {
            PageState::Ready(view) => Some(view),
            _ => None,
        }
    }
}

impl<V> Default for PageSlot<V> {
    fn default() -> Self {
        Self::new()
    }
}
