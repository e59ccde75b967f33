//! # Refresh
//!
//! Scheduling of stylesheet `<link>` updates in a live document.
//!
//! Rendering a page typically registers many font usages in quick succession.
//! Updating the `<link>` element after every change would start a new stylesheet request each time, so updates are delayed and coalesced:
//! every change calls [`Refresh::request`] which returns a [`Ticket`].
//! The caller sets a timer for the ticket's delay and, when the timer fires, passes the ticket to [`Refresh::fire`].
//! Only the most recent ticket is honored; older tickets are stale.
//!
//! The `<link>` element may not exist yet when the timer fires (e.g. while the document is still loading).
//! In that case `fire` returns a new ticket with twice the delay.
//! Retries continue until the element appears or [`Context::refresh_max_attempts`] is reached.
//!
//! This module owns no timers and never touches a document; it only decides what to do next.
//!
//! ```text
//! Idle ──request──▶ Waiting ──fire, element──▶ Applied
//!                     │
//!                     └──fire, no element──▶ Attempted ──fire, element──▶ Applied
//!                                              │
//!                                              ├──fire, no element──▶ Attempted
//!                                              └──fire, no attempts left──▶ Abandoned
//! ```
//!
//! `request` moves any state back to `Waiting`.
//!
//! # Example
//!
//! ```
//! # use gfont::ctx::Context;
//! # use gfont::refresh::{Fired, Refresh, State};
//! let ctx = Context::default();
//! let mut refresh = Refresh::new(&ctx);
//! let first = refresh.request();
//! let second = refresh.request();
//! assert_eq!(refresh.fire(first, true), Fired::Stale);
//! assert_eq!(refresh.fire(second, true), Fired::Apply);
//! assert_eq!(refresh.state(), State::Applied);
//! ```

use crate::ctx::Context;
use std::time::Duration;

/// The state of a [`Refresh`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum State {
    /// No update has been requested.
    Idle,
    /// An update has been requested and its timer is pending.
    Waiting,
    /// The `<link>` element was missing at least once; a retry is pending.
    Attempted,
    /// The latest URL has been applied to the `<link>` element.
    Applied,
    /// The `<link>` element did not appear within the allowed number of attempts.
    Abandoned,
}

/// A pending timer.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Ticket {
    /// The request this ticket belongs to.
    generation: u64,
    /// The attempt number, starting at `1`.
    attempt: u32,
    /// The time to wait before calling [`Refresh::fire`].
    pub delay: Duration,
}

/// The outcome of [`Refresh::fire`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Fired {
    /// The ticket has been superseded by a later request; nothing is to be done.
    Stale,
    /// The current stylesheet URL should be applied to the `<link>` element now.
    Apply,
    /// The `<link>` element is missing; fire the returned ticket after its delay.
    Retry(Ticket),
    /// The `<link>` element is missing and no attempts remain.
    GiveUp,
}

/// Coalesces stylesheet updates and retries them with exponential backoff.
#[derive(Debug, Clone)]
pub struct Refresh {
    state: State,
    generation: u64,
    initial_delay: Duration,
    max_attempts: Option<u32>,
}

impl Refresh {
    /// Creates an idle refresh using the delay and attempt limit of `ctx`.
    pub fn new(ctx: &Context) -> Self {
        Refresh {
            state: State::Idle,
            generation: 0,
            initial_delay: Duration::from_millis(ctx.refresh_delay_ms),
            max_attempts: ctx.refresh_max_attempts,
        }
    }

    /// The current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Requests an update, superseding all earlier tickets.
    pub fn request(&mut self) -> Ticket {
        self.generation += 1;
        self.state = State::Waiting;

        Ticket {
            generation: self.generation,
            attempt: 1,
            delay: self.initial_delay,
        }
    }

    /// Handles the timer of `ticket` firing.
    ///
    /// `element_exists` tells whether the `<link>` element is present in the document.
    pub fn fire(&mut self, ticket: Ticket, element_exists: bool) -> Fired {
        if ticket.generation != self.generation {
            log::trace!("ignore stale refresh ticket {}", ticket.generation);
            return Fired::Stale;
        }

        if element_exists {
            self.state = State::Applied;
            return Fired::Apply;
        }

        if self.max_attempts.map_or(false, |x| ticket.attempt >= x) {
            log::warn!(
                "stylesheet link element missing after {} attempts; giving up",
                ticket.attempt
            );
            self.state = State::Abandoned;
            return Fired::GiveUp;
        }

        log::debug!(
            "stylesheet link element missing (attempt {}); retrying",
            ticket.attempt
        );
        self.state = State::Attempted;

        Fired::Retry(Ticket {
            generation: ticket.generation,
            attempt: ticket.attempt + 1,
            delay: ticket.delay.checked_mul(2).unwrap_or(Duration::MAX),
        })
    }
}
