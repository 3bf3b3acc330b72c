//! Salary formulas and fixed pay rates.

use crate::employee::{BackendTechnology, FrontendTechnology, QualificationLevel, Role};

/// Fixed monthly base salary per role.
const CHIEF_INFO_OFFICER_BASE: f64 = 15_000.0;
const PROJECT_MANAGER_BASE: f64 = 10_000.0;
const BACKEND_DEVELOPER_BASE: f64 = 7_000.0;
const FRONTEND_DEVELOPER_BASE: f64 = 6_500.0;
const DATABASE_ENGINEER_BASE: f64 = 8_000.0;
const DEVOPS_ENGINEER_BASE: f64 = 7_500.0;
const TESTER_BASE: f64 = 5_500.0;

/// Experience multiplier: +10% per year, continuous in the fractional year.
///
/// `experience_bonus(18)` is `1.15`, not `1.10`; months are not floored
/// to whole years.
pub fn experience_bonus(months: u32) -> f64 {
    1.0 + (f64::from(months) / 12.0) * 0.10
}

/// Qualification multiplier: Junior 1.0, Middle 1.5, Senior 2.0.
pub fn qualification_multiplier(level: QualificationLevel) -> f64 {
    match level {
        QualificationLevel::Junior => 1.0,
        QualificationLevel::Middle => 1.50,
        QualificationLevel::Senior => 2.0,
    }
}

fn backend_tech_bonus(technology: BackendTechnology) -> f64 {
    match technology {
        BackendTechnology::DotNet => 1.15,
        BackendTechnology::Spring => 1.10,
        BackendTechnology::Django => 1.05,
    }
}

fn frontend_tech_bonus(technology: FrontendTechnology) -> f64 {
    match technology {
        FrontendTechnology::React => 1.15,
        FrontendTechnology::Angular => 1.10,
        FrontendTechnology::Vue => 1.05,
    }
}

/// Computes the monthly salary for a role at the given experience.
///
/// Pure and deterministic: identical role, qualification, technology, and
/// experience inputs always produce exactly equal values. All inputs are
/// pre-validated by record construction, so there are no error conditions.
pub fn salary_for(role: &Role, experience_months: u32) -> f64 {
    let bonus = experience_bonus(experience_months);
    match role {
        Role::ChiefInfoOfficer => CHIEF_INFO_OFFICER_BASE * bonus,
        Role::ProjectManager => PROJECT_MANAGER_BASE * bonus,
        Role::BackendDeveloper { level, technology } => {
            BACKEND_DEVELOPER_BASE
                * qualification_multiplier(*level)
                * bonus
                * backend_tech_bonus(*technology)
        }
        Role::FrontendDeveloper { level, technology } => {
            FRONTEND_DEVELOPER_BASE
                * qualification_multiplier(*level)
                * bonus
                * frontend_tech_bonus(*technology)
        }
        Role::DatabaseEngineer { level } => {
            DATABASE_ENGINEER_BASE * qualification_multiplier(*level) * bonus
        }
        Role::DevOpsEngineer { level } => {
            DEVOPS_ENGINEER_BASE * qualification_multiplier(*level) * bonus
        }
        Role::Tester { level } => TESTER_BASE * qualification_multiplier(*level) * bonus,
    }
}
