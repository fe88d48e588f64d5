use crate::types::{ActivityType, CronTrigger, EventId, Guid, IsoPeriod, TaskIdentifier};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

/// Pointer to a task the participant's app knows how to run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TaskReference {
    pub identifier: TaskIdentifier,
}

impl TaskReference {
    pub fn new(identifier: impl Into<TaskIdentifier>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }
}

/// Pointer to a specific published survey version. Without `versioned_on`
/// the server resolves the most recently published version.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyReference {
    pub guid: Guid,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub versioned_on: Option<OffsetDateTime>,
}

/// One thing a schedule asks a participant to do: run a task or take a survey.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub label: String,
    pub label_detail: Option<String>,
    pub activity_type: ActivityType,
    pub task: Option<TaskReference>,
    pub survey: Option<SurveyReference>,
}

impl Activity {
    /// An activity that runs a named task.
    pub fn task(label: impl Into<String>, task: TaskReference) -> Self {
        Self {
            label: label.into(),
            label_detail: None,
            activity_type: ActivityType::Task,
            task: Some(task),
            survey: None,
        }
    }

    /// An activity that presents a survey.
    pub fn survey(label: impl Into<String>, survey: SurveyReference) -> Self {
        Self {
            label: label.into(),
            label_detail: None,
            activity_type: ActivityType::Survey,
            task: None,
            survey: Some(survey),
        }
    }
}

/// A recurrence rule plus the activities it assigns.
///
/// At most one of `cron_trigger` and `event_id` is meaningful on a schedule.
/// The client does not enforce this.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub label: Option<String>,
    pub cron_trigger: Option<CronTrigger>,
    pub event_id: Option<EventId>,
    pub expires: Option<IsoPeriod>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.activities.push(activity);
    }
}

/// Assigns the same schedule to every participant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SimpleScheduleStrategy {
    pub schedule: Schedule,
}

/// One weighted arm of an A/B test.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGroup {
    pub percentage: i32,
    pub schedule: Schedule,
}

/// Splits participants into weighted groups, each with its own schedule.
///
/// Group percentages conventionally sum to 100. The client does not check
/// the total; the server does.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ABTestScheduleStrategy {
    #[serde(default)]
    pub schedule_groups: Vec<ScheduleGroup>,
}

impl ABTestScheduleStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a weighted group. Groups keep their insertion order.
    pub fn add_group(&mut self, percentage: i32, schedule: Schedule) {
        self.schedule_groups.push(ScheduleGroup {
            percentage,
            schedule,
        });
    }

    pub fn groups(&self) -> &[ScheduleGroup] {
        &self.schedule_groups
    }
}

/// How a plan turns into concrete schedules for participants, keyed by the
/// `type` field on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ScheduleStrategy {
    #[serde(rename = "SimpleScheduleStrategy")]
    Simple(SimpleScheduleStrategy),
    #[serde(rename = "ABTestScheduleStrategy")]
    AbTest(ABTestScheduleStrategy),
}

impl ScheduleStrategy {
    pub fn simple(schedule: Schedule) -> Self {
        Self::Simple(SimpleScheduleStrategy { schedule })
    }

    pub fn as_simple(&self) -> Option<&SimpleScheduleStrategy> {
        match self {
            Self::Simple(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ab_test(&self) -> Option<&ABTestScheduleStrategy> {
        match self {
            Self::AbTest(s) => Some(s),
            _ => None,
        }
    }
}

/// A study-level rule assigning one or more schedules to participants,
/// optionally limited to a range of app versions.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePlan {
    pub guid: Option<Guid>,
    pub label: Option<String>,
    /// Optimistic lock. Send it back unchanged when updating.
    pub version: Option<i64>,
    pub min_app_version: Option<i32>,
    pub max_app_version: Option<i32>,
    pub strategy: ScheduleStrategy,
}

impl SchedulePlan {
    pub fn new(strategy: ScheduleStrategy) -> Self {
        Self {
            guid: None,
            label: None,
            version: None,
            min_app_version: None,
            max_app_version: None,
            strategy,
        }
    }
}
