//! User lookup state machine.
//!
//! DESIGN
//! ======
//! `begin` decides whether a submit triggers a fetch; `resolve` applies the
//! fetch result. Overlapping lookups are not sequenced: whichever result
//! arrives last owns the banner and detail panel.
//!
//! TRADE-OFFS
//! ==========
//! Transport and parse failures are logged and otherwise leave the display
//! untouched. Users get no banner for them.

#[cfg(test)]
#[path = "lookup_test.rs"]
mod lookup_test;

use crate::net::api::ApiError;
use crate::net::types::{UserDirectory, UserRecord};
use crate::util::validate::trim_input;

pub const NOT_REGISTERED: &str = "El usuario no está registrado en el sistema";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LookupPhase {
    #[default]
    Idle,
    Fetching,
    Found,
    NotFound,
    Failed,
}

/// Color scheme of the result banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Failure,
}

impl BannerTone {
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#c8e6c9",
            Self::Failure => "#ffcdd2",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#2e7d32",
            Self::Failure => "#c62828",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub tone: BannerTone,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupState {
    /// Current content of the identifier input.
    pub input: String,
    phase: LookupPhase,
    banner: Option<Banner>,
    detail: Option<UserRecord>,
}

impl LookupState {
    pub fn phase(&self) -> LookupPhase {
        self.phase
    }

    /// A fetch has been started and no result has been applied since.
    pub fn is_searching(&self) -> bool {
        self.phase == LookupPhase::Fetching
    }

    /// Submit handler. Returns the trimmed identifier to fetch, clearing the
    /// input, or `None` when the identifier is blank (nothing changes).
    pub fn begin(&mut self) -> Option<String> {
        let id = trim_input(&self.input);
        if id.is_empty() {
            return None;
        }
        let id = id.to_owned();
        self.input.clear();
        self.phase = LookupPhase::Fetching;
        Some(id)
    }

    /// Apply the outcome of fetching the collection for identifier `id`.
    pub fn resolve(&mut self, id: &str, result: Result<UserDirectory, ApiError>) {
        let directory = match result {
            Ok(directory) => directory,
            Err(e) => {
                leptos::logging::error!("user lookup failed: {e}");
                self.phase = LookupPhase::Failed;
                return;
            }
        };
        if let Some(user) = directory.find(id) {
            self.banner = Some(Banner {
                tone: BannerTone::Success,
                text: format!("Usuario encontrado: {}", user.full_name()),
            });
            self.detail = Some(user.clone());
            self.phase = LookupPhase::Found;
        } else {
            self.banner = Some(Banner { tone: BannerTone::Failure, text: NOT_REGISTERED.to_owned() });
            self.detail = None;
            self.phase = LookupPhase::NotFound;
        }
    }

    pub fn view(&self) -> LookupView {
        LookupView {
            searching: self.is_searching(),
            banner: self.banner.clone(),
            detail: self.detail.clone(),
        }
    }
}

/// Display model: a busy flag while a fetch is outstanding, the banner
/// (hidden when `None`) and the detail panel (hidden when `None`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LookupView {
    pub searching: bool,
    pub banner: Option<Banner>,
    pub detail: Option<UserRecord>,
}
