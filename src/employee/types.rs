//! Role and qualification vocabulary.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Employee identifier.
///
/// Must be positive (checked at record construction) and unique within
/// a queue (checked by the queue on insertion).
pub type EmployeeId = u32;

/// Qualification level for developers, engineers, and testers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QualificationLevel {
    Junior,
    Middle,
    Senior,
}

impl fmt::Display for QualificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualificationLevel::Junior => write!(f, "Junior"),
            QualificationLevel::Middle => write!(f, "Middle"),
            QualificationLevel::Senior => write!(f, "Senior"),
        }
    }
}

/// Backend technology stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackendTechnology {
    DotNet,
    Spring,
    Django,
}

impl fmt::Display for BackendTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendTechnology::DotNet => write!(f, ".NET"),
            BackendTechnology::Spring => write!(f, "Spring"),
            BackendTechnology::Django => write!(f, "Django"),
        }
    }
}

/// Frontend technology stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FrontendTechnology {
    Angular,
    React,
    Vue,
}

impl fmt::Display for FrontendTechnology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendTechnology::Angular => write!(f, "Angular"),
            FrontendTechnology::React => write!(f, "React"),
            FrontendTechnology::Vue => write!(f, "Vue"),
        }
    }
}

/// The closed set of role kinds.
///
/// Qualified roles carry their level inline; developer roles additionally
/// carry a technology choice. The attribute sets are fixed and known in
/// advance, so a closed variant replaces open inheritance: salary dispatch
/// is a single `match` in [`crate::policy::salary_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    ChiefInfoOfficer,
    ProjectManager,
    BackendDeveloper {
        level: QualificationLevel,
        technology: BackendTechnology,
    },
    FrontendDeveloper {
        level: QualificationLevel,
        technology: FrontendTechnology,
    },
    DatabaseEngineer {
        level: QualificationLevel,
    },
    DevOpsEngineer {
        level: QualificationLevel,
    },
    Tester {
        level: QualificationLevel,
    },
}

impl Role {
    /// Human-readable role title.
    pub fn title(&self) -> &'static str {
        match self {
            Role::ChiefInfoOfficer => "Chief Information Officer",
            Role::ProjectManager => "Project Manager",
            Role::BackendDeveloper { .. } => "Backend Developer",
            Role::FrontendDeveloper { .. } => "Frontend Developer",
            Role::DatabaseEngineer { .. } => "Database Engineer",
            Role::DevOpsEngineer { .. } => "DevOps Engineer",
            Role::Tester { .. } => "Tester",
        }
    }

    /// The qualification level, for roles that carry one.
    pub fn qualification_level(&self) -> Option<QualificationLevel> {
        match self {
            Role::ChiefInfoOfficer | Role::ProjectManager => None,
            Role::BackendDeveloper { level, .. }
            | Role::FrontendDeveloper { level, .. }
            | Role::DatabaseEngineer { level }
            | Role::DevOpsEngineer { level }
            | Role::Tester { level } => Some(*level),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.qualification_level() {
            Some(level) => write!(f, "{} {}", level, self.title()),
            None => write!(f, "{}", self.title()),
        }
    }
}
