//! crates/job_board_core/src/filters.rs
//!
//! The three independent filter dimensions of the listings search.

use crate::domain::{EmploymentType, SalaryFloor};

/// A read-only projection of the filter state, used to build the outbound query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Selected employment types in the order they were toggled on. No duplicates.
    pub employment_types: Vec<EmploymentType>,
    pub salary_floor: Option<SalaryFloor>,
    pub search_text: String,
}

impl FilterSelection {
    /// Comma-separated employment type ids, e.g. `FULLTIME,PARTTIME`.
    pub fn employment_type_csv(&self) -> String {
        self.employment_types
            .iter()
            .map(|t| t.id())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Query parameters for `GET /jobs`. All three keys are always present;
    /// an absent salary floor is sent as an empty value.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("employment_type", self.employment_type_csv()),
            (
                "minimum_package",
                self.salary_floor
                    .map(|floor| floor.amount().to_string())
                    .unwrap_or_default(),
            ),
            ("search", self.search_text.clone()),
        ]
    }
}

/// Owns the filter selection. Mutated only through explicit user commands.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    selection: FilterSelection,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the type if absent, removes it if present.
    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType) {
        let types = &mut self.selection.employment_types;
        match types.iter().position(|t| *t == employment_type) {
            Some(index) => {
                types.remove(index);
            }
            None => types.push(employment_type),
        }
    }

    /// Single-select overwrite. There is no "no floor" option once one is chosen.
    pub fn set_salary_floor(&mut self, floor: SalaryFloor) {
        self.selection.salary_floor = Some(floor);
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.selection.search_text = text.into();
    }

    pub fn snapshot(&self) -> FilterSelection {
        self.selection.clone()
    }
}
