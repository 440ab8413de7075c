use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identifiant fort pour un utilisateur de la rotation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Configuration de rotation : liste ordonnée d'utilisateurs, ancre UTC,
/// intervalle en jours. Les doublons dans `users` sont des slots distincts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    pub users: Vec<UserId>,
    pub anchor: DateTime<Utc>,
    pub interval_days: i64,
}

impl RotationConfig {
    pub fn new(
        users: Vec<UserId>,
        anchor: DateTime<Utc>,
        interval_days: i64,
    ) -> Result<Self, String> {
        let config = Self {
            users,
            anchor,
            interval_days,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.users.is_empty() {
            return Err("user list cannot be empty".to_string());
        }
        if self.interval_days <= 0 {
            return Err("interval_days must be > 0".to_string());
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::days(self.interval_days)
    }
}

/// Override manuel : `user` prend la main sur l'intervalle UTC [start, end).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    pub user: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Override {
    /// Crée un override en validant que `end > start`.
    pub fn new(user: UserId, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, String> {
        if end <= start {
            return Err("override end must be after start".to_string());
        }
        Ok(Self { user, start, end })
    }
}

/// Créneau calculé (forme de travail, précision chrono complète)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftAssignment {
    pub user: UserId,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ShiftAssignment {
    /// Vrai si l'instant `t` tombe dans [start, end).
    pub fn covers(&self, t: DateTime<Utc>) -> bool {
        self.start <= t && t < self.end
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Créneau de sortie : bornes formatées en UTC seconde entière
/// (`YYYY-MM-DDTHH:MM:SSZ`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub user: UserId,
    pub start_at: String,
    pub end_at: String,
}
