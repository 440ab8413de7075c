#![forbid(unsafe_code)]
//! Roulement — calcul de planning d'astreinte par rotation (sans BD).
//!
//! - Rotation cyclique ancrée, intervalle fixe.
//! - Overrides manuels qui découpent les créneaux de base.
//! - Troncature du résultat à la fenêtre demandée.
//! - Tout en UTC ; parsing RFC3339 ; sortie en seconde entière.

pub mod io;
pub mod model;
pub mod planner;

pub use model::{Override, RotationConfig, ScheduledShift, ShiftAssignment, UserId};
pub use planner::{PlanError, Planner};
