use crate::db::CompanyFilter;
use crate::models::Company;

/// Outcome of the most recent filtered listing, split by whether the company
/// matched an active dimension only through a "no preference" row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    pub names: Vec<String>,
    pub blank: Vec<Company>,
    pub full: Vec<Company>,
}

impl FilterOutcome {
    /// Partition `companies` for `filter`. A company is blank when the first
    /// active dimension (majors, then work authorizations, then positions)
    /// with an empty attribute list is found.
    pub fn partition(filter: &CompanyFilter, companies: &[Company]) -> Self {
        let mut outcome = Self::default();
        for company in companies {
            outcome.names.push(company.name.clone());
            if is_blank_match(filter, company) {
                outcome.blank.push(company.clone());
            } else {
                outcome.full.push(company.clone());
            }
        }
        outcome
    }
}

fn is_blank_match(filter: &CompanyFilter, company: &Company) -> bool {
    (!filter.majors.is_empty() && company.majors.is_empty())
        || (!filter.work_auths.is_empty() && company.work_auths.is_empty())
        || (!filter.positions.is_empty() && company.positions.is_empty())
}

/// Results remembered between calls so the UI can re-read them without
/// querying again. Each new filter or search replaces its slot wholesale.
#[derive(Debug, Clone, Default)]
pub struct LastResults {
    filtered: Option<FilterOutcome>,
    searched_names: Vec<String>,
}

impl LastResults {
    /// Replace the remembered filter outcome.
    pub fn record_filter(&mut self, outcome: FilterOutcome) {
        self.filtered = Some(outcome);
    }

    /// Replace the remembered search names with those of `companies`.
    pub fn record_search(&mut self, companies: &[Company]) {
        self.searched_names = companies.iter().map(|c| c.name.clone()).collect();
    }

    /// `None` until a filtered listing has run.
    pub fn filtered_names(&self) -> Option<Vec<String>> {
        self.filtered.as_ref().map(|outcome| outcome.names.clone())
    }

    pub fn blank_matches(&self) -> Vec<Company> {
        self.filtered
            .as_ref()
            .map(|outcome| outcome.blank.clone())
            .unwrap_or_default()
    }

    pub fn full_matches(&self) -> Vec<Company> {
        self.filtered
            .as_ref()
            .map(|outcome| outcome.full.clone())
            .unwrap_or_default()
    }

    pub fn searched_names(&self) -> Vec<String> {
        self.searched_names.clone()
    }
}
