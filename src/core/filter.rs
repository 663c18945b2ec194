use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::models::Project;

/// Cost ranges offered by the investment dropdown, in millions USD.
///
/// Each bracket is open below and closed above, so a boundary value belongs to
/// the lower bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InvestmentBracket {
    #[serde(rename = "0-50")]
    UpTo50,
    #[serde(rename = "50-200")]
    From50To200,
    #[serde(rename = "200-500")]
    From200To500,
    #[serde(rename = "500+")]
    Over500,
}

impl InvestmentBracket {
    pub const ALL: [InvestmentBracket; 4] = [
        InvestmentBracket::UpTo50,
        InvestmentBracket::From50To200,
        InvestmentBracket::From200To500,
        InvestmentBracket::Over500,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvestmentBracket::UpTo50 => "0-50",
            InvestmentBracket::From50To200 => "50-200",
            InvestmentBracket::From200To500 => "200-500",
            InvestmentBracket::Over500 => "500+",
        }
    }

    pub fn contains(self, cost_million: f64) -> bool {
        match self {
            InvestmentBracket::UpTo50 => cost_million <= 50.0,
            InvestmentBracket::From50To200 => cost_million > 50.0 && cost_million <= 200.0,
            InvestmentBracket::From200To500 => cost_million > 200.0 && cost_million <= 500.0,
            InvestmentBracket::Over500 => cost_million > 500.0,
        }
    }
}

impl fmt::Display for InvestmentBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown investment bracket {0:?}")]
pub struct ParseBracketError(pub String);

impl FromStr for InvestmentBracket {
    type Err = ParseBracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.as_str() == s)
            .ok_or_else(|| ParseBracketError(s.to_string()))
    }
}

/// The four filter dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Region,
    Type,
    Status,
    Investment,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Region,
        FilterField::Type,
        FilterField::Status,
        FilterField::Investment,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Region => "Region",
            FilterField::Type => "Type",
            FilterField::Status => "Status",
            FilterField::Investment => "Investment",
        }
    }
}

/// Currently selected dropdown values. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicates {
    pub region: Option<String>,
    pub project_type: Option<String>,
    pub status: Option<String>,
    pub investment: Option<InvestmentBracket>,
}

impl FilterPredicates {
    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.project_type.is_none()
            && self.status.is_none()
            && self.investment.is_none()
    }

    /// Apply a dropdown change. An empty selection clears the constraint.
    pub fn set(
        &mut self,
        field: FilterField,
        selection: Option<&str>,
    ) -> Result<(), ParseBracketError> {
        let selection = selection.filter(|value| !value.is_empty());
        match field {
            FilterField::Region => self.region = selection.map(str::to_string),
            FilterField::Type => self.project_type = selection.map(str::to_string),
            FilterField::Status => self.status = selection.map(str::to_string),
            FilterField::Investment => {
                self.investment = selection.map(str::parse).transpose()?;
            }
        }
        Ok(())
    }

    pub fn get(&self, field: FilterField) -> Option<String> {
        match field {
            FilterField::Region => self.region.clone(),
            FilterField::Type => self.project_type.clone(),
            FilterField::Status => self.status.clone(),
            FilterField::Investment => self.investment.map(|b| b.as_str().to_string()),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        let differs = |wanted: &Option<String>, actual: &String| {
            wanted.as_ref().is_some_and(|value| value != actual)
        };
        if differs(&self.region, &project.region)
            || differs(&self.project_type, &project.project_type)
            || differs(&self.status, &project.status)
        {
            return false;
        }
        match self.investment {
            Some(bracket) => project
                .cost_million
                .is_some_and(|cost| bracket.contains(cost)),
            None => true,
        }
    }
}

/// Keep the projects matching every active predicate, in their original order.
pub fn apply_filters(projects: &[Project], predicates: &FilterPredicates) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| predicates.matches(project))
        .cloned()
        .collect()
}
