use crate::core::errors::{AdminLogError, Result};
use crate::core::models::log_entry::ActionType;

/// Action-type constraint of a structured query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionFilter {
    #[default]
    Any,
    Only(ActionType),
}

impl ActionFilter {
    /// Wire code for the `type` query parameter (`0` = any).
    pub fn code(self) -> i64 {
        match self {
            ActionFilter::Any => 0,
            ActionFilter::Only(t) => t.code().unwrap_or(0),
        }
    }

    /// Parse a command-line value; `any`/`all`/`0` mean no constraint.
    pub fn parse(value: &str) -> Result<Self> {
        let v = value.trim();
        if v.is_empty() || matches!(v.to_ascii_lowercase().as_str(), "any" | "all" | "0") {
            return Ok(ActionFilter::Any);
        }
        ActionType::parse_name(v)
            .map(ActionFilter::Only)
            .ok_or_else(|| AdminLogError::InvalidArgument {
                detail: format!(
                    "unknown action type '{v}'. Use one of: any, user, channel, config, redemption, log"
                ),
            })
    }
}

/// The full description of what the user is looking at.
///
/// Two descriptors are equal iff every field matches; the controller uses
/// that equality to decide whether a filter change invalidates the cache.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDescriptor {
    pub actor: Option<String>,
    pub action: ActionFilter,
    pub start_time: i64,
    pub end_time: i64,
    pub keyword: Option<String>,
}

impl FilterDescriptor {
    /// A structured filter over `[start_time, end_time]` with no other constraints.
    pub fn window(start_time: i64, end_time: i64) -> Self {
        Self {
            start_time,
            end_time,
            ..Self::default()
        }
    }

    pub fn with_actor(mut self, actor: Option<&str>) -> Self {
        self.actor = normalize(actor);
        self
    }

    pub fn with_action(mut self, action: ActionFilter) -> Self {
        self.action = action;
        self
    }

    pub fn with_keyword(mut self, keyword: Option<&str>) -> Self {
        self.keyword = normalize(keyword);
        self
    }

    /// Reject windows that can never match anything.
    pub fn validate(&self) -> Result<()> {
        if self.end_time != 0 && self.start_time > self.end_time {
            return Err(AdminLogError::InvalidTimeRange {
                detail: format!(
                    "start ({}) is after end ({})",
                    self.start_time, self.end_time
                ),
            });
        }
        Ok(())
    }

    /// Which endpoint this descriptor resolves to.
    pub fn query_mode(&self) -> QueryMode {
        match &self.keyword {
            Some(kw) => QueryMode::FullText(kw.clone()),
            None => QueryMode::Structured(self.clone()),
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Structured paging and keyword search never compose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    Structured(FilterDescriptor),
    FullText(String),
}
