//! Event list pipeline
//!
//! Every event-browsing view is derived from the same in-memory snapshot by
//! [`EventListPipeline::derive_view`]: filter by title, filter by date window,
//! order by the view's sort key and optionally keep the first N.
//!
//! The derivation is a pure function of `(events, criteria, reference_now, view)`.
//! It never mutates the snapshot and never reads the wall clock; callers inject
//! `reference_now` (see [`crate::state::clock`]).

pub mod range;

use chrono::{DateTime, FixedOffset, Weekday};

use crate::config::PipelineConfig;
use crate::models::event::Event;
use crate::models::filter::FilterCriteria;

pub use range::{resolve_window, Interval};

/// Sort key of a derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewOrder {
    /// Most recent first; undated events trail when no date filter is active
    Recent,
    /// Only events after `reference_now`, soonest first
    Upcoming,
    /// Highest attendee count first
    TopByPopularity,
}

/// Named view variant: ordering plus optional truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View {
    pub order: ViewOrder,
    pub limit: Option<usize>,
}

impl View {
    /// Full listing, most recent first
    pub const fn recent() -> Self {
        Self { order: ViewOrder::Recent, limit: None }
    }

    /// All future events, soonest first
    pub const fn upcoming() -> Self {
        Self { order: ViewOrder::Upcoming, limit: None }
    }

    /// Dashboard highlight of the next `n` events
    pub const fn upcoming_highlight(n: usize) -> Self {
        Self { order: ViewOrder::Upcoming, limit: Some(n) }
    }

    /// Dashboard highlight of the `n` most attended events
    pub const fn top_events(n: usize) -> Self {
        Self { order: ViewOrder::TopByPopularity, limit: Some(n) }
    }

    pub const fn with_limit(self, n: usize) -> Self {
        Self { limit: Some(n), ..self }
    }

    pub fn name(&self) -> &'static str {
        match self.order {
            ViewOrder::Recent => "recent",
            ViewOrder::Upcoming => "upcoming",
            ViewOrder::TopByPopularity => "top_by_popularity",
        }
    }
}

/// Filtering and ordering shared by every event view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventListPipeline {
    week_start: Weekday,
}

impl Default for EventListPipeline {
    fn default() -> Self {
        Self::new(Weekday::Mon)
    }
}

impl EventListPipeline {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    /// Build from validated configuration, falling back to Monday weeks
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.week_start().unwrap_or(Weekday::Mon))
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Derive an ordered view of `events`.
    ///
    /// Events whose timestamp does not parse never appear in a date-bounded
    /// or upcoming view. In an unbounded view they are kept: after all dated
    /// events in a recent listing, by attendee count in a popularity listing.
    pub fn derive_view(
        &self,
        events: &[Event],
        criteria: &FilterCriteria,
        reference_now: DateTime<FixedOffset>,
        view: View,
    ) -> Vec<Event> {
        let offset = *reference_now.offset();
        let window = resolve_window(criteria, reference_now, self.week_start);
        let needle = criteria.free_text_query.to_lowercase();

        let selected: Vec<(Option<DateTime<FixedOffset>>, &Event)> = events
            .iter()
            .filter(|event| needle.is_empty() || event.title.to_lowercase().contains(&needle))
            .map(|event| (event.occurs_at_in(offset), event))
            .filter(|(occurs_at, _)| match (window, occurs_at) {
                (None, _) => true,
                (Some(window), Some(at)) => window.contains(*at),
                (Some(_), None) => false,
            })
            .collect();

        let ordered: Vec<&Event> = match view.order {
            ViewOrder::Recent => {
                let (mut dated, undated): (Vec<_>, Vec<_>) =
                    selected.into_iter().partition(|(occurs_at, _)| occurs_at.is_some());
                dated.sort_by(|a, b| b.0.cmp(&a.0));
                dated.into_iter().chain(undated).map(|(_, event)| event).collect()
            }
            ViewOrder::Upcoming => {
                let mut future: Vec<(DateTime<FixedOffset>, &Event)> = selected
                    .into_iter()
                    .filter_map(|(occurs_at, event)| occurs_at.map(|at| (at, event)))
                    .filter(|(at, _)| *at > reference_now)
                    .collect();
                future.sort_by(|a, b| a.0.cmp(&b.0));
                future.into_iter().map(|(_, event)| event).collect()
            }
            ViewOrder::TopByPopularity => {
                let mut popular: Vec<&Event> = selected.into_iter().map(|(_, event)| event).collect();
                popular.sort_by(|a, b| b.attendee_count.cmp(&a.attendee_count));
                popular
            }
        };

        let limit = view.limit.unwrap_or(usize::MAX);
        ordered.into_iter().take(limit).cloned().collect()
    }
}

/// Number of events whose timestamp does not parse in `offset`
pub fn malformed_count(events: &[Event], offset: FixedOffset) -> usize {
    events.iter().filter(|event| event.occurs_at_in(offset).is_none()).count()
}
