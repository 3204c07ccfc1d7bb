//! Filter criteria model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Relative date range selectable in the event list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    CurrentWeek,
    LastWeek,
    CurrentMonth,
    LastMonth,
}

impl DateRange {
    /// Value of the `dateFilter` query parameter, `None` for [`DateRange::All`]
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            DateRange::All => None,
            DateRange::Today => Some("today"),
            DateRange::CurrentWeek => Some("currentweek"),
            DateRange::LastWeek => Some("lastweek"),
            DateRange::CurrentMonth => Some("currentmonth"),
            DateRange::LastMonth => Some("lastmonth"),
        }
    }
}

/// The user's current search and filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive title substring; empty means no constraint
    pub free_text_query: String,
    /// When set, overrides `date_range`
    pub explicit_date: Option<NaiveDate>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.free_text_query = query.into();
        self
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.explicit_date = Some(date);
        self
    }

    pub fn in_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Reset every control
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether any date constraint is active
    pub fn is_date_bounded(&self) -> bool {
        self.explicit_date.is_some() || self.date_range != DateRange::All
    }

    /// Query parameters understood by the `all-events` endpoint
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.free_text_query.is_empty() {
            params.push(("search", self.free_text_query.clone()));
        }

        match self.explicit_date {
            Some(date) => params.push(("specificDate", date.format("%Y-%m-%d").to_string())),
            None => {
                if let Some(value) = self.date_range.query_value() {
                    params.push(("dateFilter", value.to_string()));
                }
            }
        }

        params
    }
}
