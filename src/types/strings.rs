use aliri_braid::braid;

/// Bridge user's account name.
#[braid(serde)]
pub struct Username;

/// Token returned by sign-in, sent back with every authenticated request.
#[braid(serde)]
pub struct SessionToken;

/// Server-assigned unique identifier for a survey or schedule plan.
#[braid(serde)]
pub struct Guid;

/// Identifier of the study an account belongs to, e.g. `api`.
#[braid(serde)]
pub struct StudyIdentifier;

/// Identifier of a task a participant's app knows how to run, e.g. `task:CCC`.
#[braid(serde)]
pub struct TaskIdentifier;

/// Identifier of an event that triggers an event-based schedule,
/// e.g. `task:CCC:finished`.
#[braid(serde)]
pub struct EventId;

/// Quartz-style cron expression, e.g. `0 0 11 ? * MON,WED,FRI *`
#[braid(serde)]
pub struct CronTrigger;

/// ISO-8601 duration, e.g. `PT1H`.
#[braid(serde)]
pub struct IsoPeriod;

/// Date in ISO-8601 format.
#[braid(serde)]
pub struct DateString;
