//! The rendered file list.
//!
//! A [`ListView`] is the single rendering target a refresh writes into. It is
//! passed explicitly to every operation, so several independent views can
//! coexist (one per window, one per test).
//!
//! Each refresh takes a [`Ticket`] before it goes to the network. When the
//! response comes back the view only accepts it if no newer ticket has been
//! applied in the meantime, so a slow response can never overwrite fresher
//! data.

use crate::fs::FileName;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One rendered link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Link text
    pub name: FileName,
    /// Link target (download endpoint for `name`)
    pub href: String,
}

/// What the view currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing applied yet.
    #[default]
    Empty,
    /// Entries from the latest applied listing, in server order.
    Listed(Vec<Entry>),
    /// The latest applied refresh failed.
    Failed(String),
}

/// Sequence number of one refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: ViewState,
    issued: u64,
    applied: u64,
}

/// Shared handle to a rendered file list.
///
/// Clones refer to the same view.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    inner: Arc<Mutex<Inner>>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issue the ticket for a refresh that is about to start.
    pub fn begin_refresh(&self) -> Ticket {
        let mut inner = self.lock();
        inner.issued += 1;
        Ticket(inner.issued)
    }

    /// Replace the whole list with `entries`.
    ///
    /// Returns `false` (and changes nothing) when a newer ticket was already
    /// applied.
    pub fn apply(&self, ticket: Ticket, entries: Vec<Entry>) -> bool {
        self.commit(ticket, ViewState::Listed(entries))
    }

    /// Replace the list with a visible error.
    ///
    /// Subject to the same ticket ordering as [`ListView::apply`].
    pub fn fail(&self, ticket: Ticket, message: impl Into<String>) -> bool {
        self.commit(ticket, ViewState::Failed(message.into()))
    }

    fn commit(&self, ticket: Ticket, state: ViewState) -> bool {
        let mut inner = self.lock();
        if ticket.0 <= inner.applied {
            return false;
        }
        inner.applied = ticket.0;
        inner.state = state;
        true
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.lock().state.clone()
    }

    /// Entries currently shown; empty unless the state is `Listed`.
    pub fn entries(&self) -> Vec<Entry> {
        match &self.lock().state {
            ViewState::Listed(entries) => entries.clone(),
            _ => Vec::new(),
        }
    }

    /// Error currently shown, if any.
    pub fn error(&self) -> Option<String> {
        match &self.lock().state {
            ViewState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    /// Latest applied ticket, if any refresh has landed.
    pub fn applied(&self) -> Option<Ticket> {
        let applied = self.lock().applied;
        (applied > 0).then_some(Ticket(applied))
    }

    /// Render as an HTML list of download links.
    pub fn render_html(&self) -> String {
        let mut html = String::from("<ul id=\"fileList\">\n");
        match self.state() {
            ViewState::Empty => {}
            ViewState::Listed(entries) => {
                for entry in entries {
                    let _ = writeln!(
                        html,
                        "  <li><a href=\"{}\">{}</a></li>",
                        escape_html(&entry.href),
                        escape_html(entry.name.as_str())
                    );
                }
            }
            ViewState::Failed(message) => {
                let _ = writeln!(html, "  <li class=\"error\">{}</li>", escape_html(&message));
            }
        }
        html.push_str("</ul>\n");
        html
    }

    /// Render as plain text, one `name<TAB>href` line per entry.
    pub fn render_text(&self) -> String {
        match self.state() {
            ViewState::Empty => String::new(),
            ViewState::Listed(entries) => entries
                .iter()
                .map(|e| format!("{}\t{}\n", e.name, e.href))
                .collect(),
            ViewState::Failed(message) => format!("error: {}\n", message),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
