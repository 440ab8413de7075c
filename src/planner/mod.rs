mod overrides;
mod rotation;
mod types;
mod util;
mod window;

pub use types::PlanError;

use crate::model::{Override, RotationConfig, ScheduledShift, ShiftAssignment};
use chrono::{DateTime, Utc};

/// Planner : encapsule une config de rotation validée et ses overrides
#[derive(Debug, Clone)]
pub struct Planner {
    config: RotationConfig,
    overrides: Vec<Override>,
}

impl Planner {
    /// Construit un planner, en rejetant les configs invalides
    /// (liste vide, intervalle ≤ 0).
    pub fn new(config: RotationConfig) -> Result<Self, PlanError> {
        config.validate().map_err(PlanError::InvalidConfig)?;
        Ok(Self {
            config,
            overrides: Vec::new(),
        })
    }

    pub fn config(&self) -> &RotationConfig {
        &self.config
    }

    pub fn overrides(&self) -> &[Override] {
        &self.overrides
    }

    /// Ajoute des overrides, en rejetant ceux dont `end ≤ start`.
    pub fn add_overrides(&mut self, overrides: Vec<Override>) -> Result<(), PlanError> {
        for ov in &overrides {
            if ov.end <= ov.start {
                return Err(PlanError::InvalidOverride(ov.user.as_str().to_string()));
            }
        }
        self.overrides.extend(overrides);
        Ok(())
    }

    /// Rotation de base : créneaux contigus alignés sur l'ancre,
    /// couvrant au moins [from, until).
    pub fn base_schedule(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<ShiftAssignment>, PlanError> {
        check_window(from, until)?;
        rotation::base_schedule(&self.config, from, until)
    }

    /// Planning après application des overrides, non tronqué à la fenêtre.
    pub fn assignments(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<ShiftAssignment>, PlanError> {
        let base = self.base_schedule(from, until)?;
        Ok(overrides::apply(base, &self.overrides))
    }

    /// Pipeline complet : rotation, overrides, troncature à [from, until).
    ///
    /// Les overrides sont appliqués par début croissant ; si deux overrides
    /// se chevauchent, le dernier appliqué l'emporte sur la zone commune.
    pub fn plan(
        &self,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<ScheduledShift>, PlanError> {
        let assigned = self.assignments(from, until)?;
        Ok(window::clip(assigned, from, until))
    }
}

fn check_window(from: DateTime<Utc>, until: DateTime<Utc>) -> Result<(), PlanError> {
    if from >= until {
        return Err(PlanError::InvalidWindow);
    }
    Ok(())
}
