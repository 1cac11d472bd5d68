//! Last-write-wins bookkeeping for asynchronous image loads.
//!
//! Every URL change takes a new ticket; a completion is applied only if its
//! ticket is still the latest one. Nothing is cancelled, stale completions
//! are simply dropped.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default, Clone)]
pub struct ImageLoadTracker {
    generation: u64,
    url: Option<String>,
    pending: bool,
}

impl ImageLoadTracker {
    pub fn request(&mut self, url: &str) -> LoadTicket {
        self.generation += 1;
        self.url = Some(url.to_string());
        self.pending = true;
        log::debug!("image load #{} requested: {url}", self.generation);
        LoadTicket(self.generation)
    }

    /// Supersedes any pending load without starting a new one.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.url = None;
        self.pending = false;
    }

    pub fn current_url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True if the completion for `ticket` should be applied.
    pub fn complete(&mut self, ticket: LoadTicket) -> bool {
        if ticket.0 != self.generation {
            log::debug!("discarding stale image load #{} (latest #{})", ticket.0, self.generation);
            return false;
        }
        if !self.pending {
            return false;
        }
        self.pending = false;
        true
    }
}
