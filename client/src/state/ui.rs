//! Transient UI chrome: the notice banner.
//!
//! DESIGN
//! ======
//! Only one notice shows at a time. Each `show` bumps a sequence number and
//! the auto-dismiss timer clears the notice only if no newer one replaced it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::time::Duration;

use booking::filter::Tone;
use leptos::prelude::*;

/// How long a notice stays up.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub tone: Tone,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn new(tone: Tone, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self { tone, title: title.into(), text: text.into() }
    }

    pub fn success(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Success, title, text)
    }

    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Info, title, text)
    }

    pub fn warning(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Warning, title, text)
    }

    pub fn danger(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Tone::Danger, title, text)
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl UiState {
    /// Replace the current notice. Returns its sequence number.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(notice);
        self.notice_seq
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn expire(&mut self, seq: u64) {
        if self.notice_seq == seq {
            self.notice = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.notice = None;
    }
}

/// Show `notice` and schedule its removal after [`NOTICE_TTL`].
pub fn notify(ui: RwSignal<UiState>, notice: Notice) {
    #[cfg(feature = "hydrate")]
    match notice.tone {
        Tone::Danger => log::error!("{}: {}", notice.title, notice.text),
        Tone::Warning => log::warn!("{}: {}", notice.title, notice.text),
        _ => log::info!("{}: {}", notice.title, notice.text),
    }

    let seq = ui.try_update(|u| u.show(notice)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(NOTICE_TTL).await;
        ui.update(|u| u.expire(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}
