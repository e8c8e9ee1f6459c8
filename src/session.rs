//! Sessions and campaign progression
//!
//! A session is one flight at one landing site. When the flight becomes
//! terminal the session hands the host a [`DelayedFinalization`]; the host
//! advances it with frame time and passes the ticket back to
//! [`Campaign::finalize`]. Tickets from an older session are ignored, so a
//! late timer can never disturb a newer flight.

use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::error::ConfigError;
use crate::settings::Settings;
use crate::sim::{
    CatchZoneGeometry, FlightEvent, FlightOutcome, FlightState, InputFlags, ProfileKey, TickResult,
};

/// Identifies one started session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Proof that a session reached a terminal outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinalizeTicket {
    pub session: SessionId,
    pub outcome: FlightOutcome,
    pub landing_speed: f32,
}

/// One-shot countdown the host runs between verdict and finalization
#[derive(Debug, Clone)]
pub struct DelayedFinalization {
    ticket: FinalizeTicket,
    remaining: f32,
    fired: bool,
}

impl DelayedFinalization {
    pub fn new(ticket: FinalizeTicket, delay: f32) -> Self {
        Self {
            ticket,
            remaining: delay.max(0.0),
            fired: false,
        }
    }

    pub fn ticket(&self) -> &FinalizeTicket {
        &self.ticket
    }

    /// Seconds left before the ticket is released
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Count down by `dt`; yields the ticket once, when the delay elapses
    pub fn advance(&mut self, dt: f32) -> Option<FinalizeTicket> {
        if self.fired {
            return None;
        }
        if dt.is_finite() && dt > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
        if self.remaining <= 0.0 {
            self.fired = true;
            Some(self.ticket)
        } else {
            None
        }
    }
}

/// Final record of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionSummary {
    pub session: SessionId,
    pub profile: ProfileKey,
    pub outcome: FlightOutcome,
    pub landing_speed: f32,
    /// Harder site unlocked by a success; `None` ends the chain
    pub next_profile: Option<ProfileKey>,
}

impl SessionSummary {
    /// Site the player continues at: the unlocked one, else the first
    pub fn continue_profile(&self) -> ProfileKey {
        self.next_profile.unwrap_or_default()
    }
}

/// Result of ticking the active session
#[derive(Debug, Clone)]
pub struct SessionTick {
    pub result: TickResult,
    /// Set on the terminal tick only
    pub finalization: Option<DelayedFinalization>,
}

/// One flight at one site
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    profile: ProfileKey,
    flight: FlightState,
    finalized: bool,
}

impl Session {
    fn new(id: SessionId, profile: ProfileKey, settings: &Settings) -> Self {
        Self {
            id,
            profile,
            flight: FlightState::new(profile.profile(), settings),
            finalized: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn profile(&self) -> ProfileKey {
        self.profile
    }

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    /// Respawn the vehicle for practice runs. Refused once the flight is over.
    pub fn place_vehicle(&mut self, position: Vec2, velocity: Vec2) -> bool {
        if self.flight.is_terminal() {
            log::debug!("Session {} has ended; vehicle stays put", self.id);
            return false;
        }
        self.flight.vehicle.position = position;
        self.flight.vehicle.velocity = velocity;
        true
    }

    /// Catch zone for positioning visuals; fixed for the session
    pub fn catch_zone(&self) -> CatchZoneGeometry {
        self.flight.catch_zone
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn tick(&mut self, input: &InputFlags, dt: f32) -> SessionTick {
        let result = self.flight.tick(input, dt);
        let finalization = result.event.map(|event| self.schedule(&event));
        SessionTick {
            result,
            finalization,
        }
    }

    fn schedule(&self, event: &FlightEvent) -> DelayedFinalization {
        let ticket = FinalizeTicket {
            session: self.id,
            outcome: event.outcome,
            landing_speed: event.landing_speed,
        };
        DelayedFinalization::new(ticket, event.finalize_after)
    }
}

/// Owns the active session and routes outcomes between sites
#[derive(Debug)]
pub struct Campaign {
    settings: Settings,
    session: Option<Session>,
    next_id: u64,
}

impl Campaign {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            settings,
            session: None,
            next_id: 1,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn catch_zone(&self) -> Option<CatchZoneGeometry> {
        self.session.as_ref().map(Session::catch_zone)
    }

    /// Start a session by profile name. Unknown names leave the current
    /// session untouched.
    pub fn start_session(&mut self, key: &str) -> Result<&Session, ConfigError> {
        let profile: ProfileKey = key.parse()?;
        Ok(self.start_profile(profile))
    }

    /// Start a session at a known site, replacing any active one
    pub fn start_profile(&mut self, profile: ProfileKey) -> &Session {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        if let Some(old) = self.session.as_ref().filter(|s| !s.finalized) {
            log::debug!("Session {} replaced before finalization", old.id);
        }
        log::info!(
            "Session {id} started at {} (gravity {})",
            profile.profile().name,
            profile.profile().gravity
        );
        self.session.insert(Session::new(id, profile, &self.settings))
    }

    /// Tick the active session; `None` when no session has been started
    pub fn tick(&mut self, input: &InputFlags, dt: f32) -> Option<SessionTick> {
        self.session.as_mut().map(|s| s.tick(input, dt))
    }

    /// Finalize the session a ticket belongs to.
    ///
    /// Returns `None` for tickets from a replaced session or a session that
    /// was already finalized.
    pub fn finalize(&mut self, ticket: FinalizeTicket) -> Option<SessionSummary> {
        let Some(session) = self.session.as_mut() else {
            log::debug!(
                "Ignoring finalization for {}: no active session",
                ticket.session
            );
            return None;
        };
        if session.id != ticket.session {
            log::debug!(
                "Ignoring stale finalization for {} (active {})",
                ticket.session,
                session.id
            );
            return None;
        }
        if session.finalized {
            log::debug!("Session {} already finalized", session.id);
            return None;
        }
        session.finalized = true;

        let next_profile = if ticket.outcome.is_success() {
            session.profile.next()
        } else {
            None
        };
        let summary = SessionSummary {
            session: session.id,
            profile: session.profile,
            outcome: ticket.outcome,
            landing_speed: ticket.landing_speed,
            next_profile,
        };
        log::info!(
            "Session {} finalized: {} (next: {})",
            summary.session,
            summary.outcome.message(),
            summary.next_profile.map(|p| p.as_str()).unwrap_or("none")
        );
        Some(summary)
    }
}
