//! Persisted hydration state and the pure reducer that mutates it.
//!
//! The store never changes [`PersistedState`] directly: every mutation is
//! expressed as an [`Action`] and applied through [`reduce`], which makes the
//! business rules testable without any storage attached.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use crate::models::{calculate_daily_goal, Profile};

/// Format of the keys in [`PersistedState::history`].
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// The fields written to durable storage on every mutation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    pub has_onboarded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    /// Millilitres, derived from the last profile set.
    pub daily_goal: f64,
    /// Millilitres logged for the current day, never negative.
    pub today_intake: f64,
    /// Intake totals keyed by `YYYY-MM-DD`.
    pub history: BTreeMap<String, f64>,
}

/// Any subset of the persisted fields.
///
/// Used both for loading a stored record and for bulk restores. Fields that
/// are `None` leave the current value alone; nothing is validated.
///
/// `profile` distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`), which clears the profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_onboarded: Option<bool>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub profile: Option<Option<Profile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_goal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_intake: Option<f64>,
    /// `null` entries (how a non-finite total is written) are dropped.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_history"
    )]
    pub history: Option<BTreeMap<String, f64>>,
}

fn deserialize_history<'de, D>(
    deserializer: D,
) -> Result<Option<BTreeMap<String, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Option<f64>>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|entries| {
        entries
            .into_iter()
            .filter_map(|(key, ml)| ml.map(|ml| (key, ml)))
            .collect()
    }))
}

impl StatePatch {
    pub fn is_empty(&self) -> bool {
        self.has_onboarded.is_none()
            && self.profile.is_none()
            && self.daily_goal.is_none()
            && self.today_intake.is_none()
            && self.history.is_none()
    }
}

impl From<PersistedState> for StatePatch {
    fn from(state: PersistedState) -> Self {
        Self {
            has_onboarded: Some(state.has_onboarded),
            profile: Some(state.profile),
            daily_goal: Some(state.daily_goal),
            today_intake: Some(state.today_intake),
            history: Some(state.history),
        }
    }
}

/// A mutation of the hydration state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the profile and recompute the daily goal.
    SetProfile(Profile),
    /// Add `ml` (possibly negative) to today's intake and record it under `date_key`.
    AddWater { ml: f64, date_key: String },
    /// Zero today's intake. History is left as is.
    ResetToday,
    /// Shallow-merge the given fields.
    Restore(StatePatch),
}

/// Applies `action` to `state` and returns the new state.
pub fn reduce(mut state: PersistedState, action: Action) -> PersistedState {
    match action {
        Action::SetProfile(profile) => {
            state.daily_goal = calculate_daily_goal(profile.weight, profile.activity);
            state.profile = Some(profile);
            state.has_onboarded = true;
        }
        Action::AddWater { ml, date_key } => {
            let intake = (state.today_intake + ml).max(0.0);
            state.today_intake = intake;
            state.history.insert(date_key, intake);
        }
        Action::ResetToday => {
            state.today_intake = 0.0;
        }
        Action::Restore(patch) => state.merge(patch),
    }
    state
}

impl PersistedState {
    /// Overwrites every field present in `patch`.
    pub fn merge(&mut self, patch: StatePatch) {
        if let Some(has_onboarded) = patch.has_onboarded {
            self.has_onboarded = has_onboarded;
        }
        if let Some(profile) = patch.profile {
            self.profile = profile;
        }
        if let Some(daily_goal) = patch.daily_goal {
            self.daily_goal = daily_goal;
        }
        if let Some(today_intake) = patch.today_intake {
            self.today_intake = today_intake;
        }
        if let Some(history) = patch.history {
            self.history = history;
        }
    }

    /// Fraction of the daily goal reached today. Zero when there is no goal.
    pub fn progress(&self) -> f64 {
        if self.daily_goal > 0.0 {
            self.today_intake / self.daily_goal
        } else {
            0.0
        }
    }

    /// Millilitres still missing to reach the goal, floored at zero.
    pub fn remaining(&self) -> f64 {
        (self.daily_goal - self.today_intake).max(0.0)
    }

    /// History entries between `from` and `to`, both inclusive, oldest first.
    pub fn history_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<(NaiveDate, f64)> {
        if from > to {
            return Vec::new();
        }
        self.history
            .range(date_key(from)..=date_key(to))
            .filter_map(|(key, ml)| {
                NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
                    .ok()
                    .map(|date| (date, *ml))
            })
            .collect()
    }
}

/// History key for `date`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// History key for the current UTC date.
pub fn today_key() -> String {
    date_key(Utc::now().date_naive())
}
