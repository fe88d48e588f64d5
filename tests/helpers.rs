//! Shared fixtures for integration tests against a live Bridge server.
//!
//! Each test creates ephemeral accounts, runs a sequence of calls, then
//! tears the accounts down. Cleanup is best-effort: a teardown failure is
//! ignored so it does not mask the assertion that actually failed.
#![allow(dead_code)]

use bridge::config::Config;
use bridge::models::*;
use bridge::types::*;
use bridge::{Account, Session};
use fake::Fake;
use uuid::Uuid;

pub type AnyResult = anyhow::Result<()>;

pub const TESTING_URL: &str = "http://localhost:9000/";
pub const TEST_STUDY: &str = "api";

/// Connection settings: `bridge-sdk.properties` in the crate root when
/// present, local defaults otherwise.
pub fn test_config() -> (BridgeUrl, StudyIdentifier) {
    match Config::load() {
        Ok(config) => (config.host().unwrap(), config.study().unwrap()),
        Err(_) => (
            BridgeUrl::from_static(TESTING_URL),
            StudyIdentifier::new(TEST_STUDY.to_string()),
        ),
    }
}

/// `sdk-<prefix>-<random>` name for throwaway resources.
pub fn random_identifier(prefix: &str) -> String {
    let tail = Uuid::new_v4().simple().to_string();
    format!("sdk-{}-{}", prefix, &tail[..8])
}

// ========================================
//            EPHEMERAL ACCOUNTS
// ========================================

/// An ephemeral signed-in account, deleted at the end of a test.
pub struct TestUser {
    pub session: Session,
    pub username: Username,
    pub password: String,
}

impl TestUser {
    /// Deleting the account also revokes its sessions.
    pub async fn sign_out_and_delete(self) {
        let _ = self.session.delete_self().await;
    }
}

/// Create and sign in an ephemeral user with the given roles. No roles
/// makes an ordinary consented participant.
pub async fn create_and_sign_in_user(prefix: &str, roles: &[Role]) -> TestUser {
    let (url, study) = test_config();
    let username = Username::new(random_identifier(prefix));
    let email: String = fake::faker::internet::en::SafeEmail().fake();
    // satisfies any sane password policy
    let password = format!("{}-Aa1!", random_identifier("pw"));
    let account = Account::new(url, study, username.clone(), password.clone());
    account.sign_up(&email, roles).await.unwrap();
    let session = account.into_session().await.unwrap();
    TestUser {
        session,
        username,
        password,
    }
}

// ========================================
//         CANONICAL SCHEDULE PLANS
// ========================================

fn task_activity(task: &str) -> Activity {
    Activity::task("Task activity", TaskReference::new(task))
}

fn hourly_cron_schedule(task: &str) -> Schedule {
    let mut schedule = Schedule::new();
    schedule.label = Some("Test label for the user".to_string());
    schedule.cron_trigger = Some(CronTrigger::new("0 0 11 ? * MON,WED,FRI *".to_string()));
    schedule.expires = Some(IsoPeriod::new("PT1H".to_string()));
    schedule.add_activity(task_activity(task));
    schedule
}

/// Cron-based plan assigning the same schedule to everybody.
pub fn simple_schedule_plan() -> SchedulePlan {
    let mut plan = SchedulePlan::new(ScheduleStrategy::simple(hourly_cron_schedule("task:CCC")));
    plan.label = Some("Cron-based schedule".to_string());
    plan
}

/// Plan splitting participants 40/40/20 across three schedules.
pub fn ab_test_schedule_plan() -> SchedulePlan {
    let mut strategy = ABTestScheduleStrategy::new();
    strategy.add_group(40, hourly_cron_schedule("task:AAA"));
    strategy.add_group(40, hourly_cron_schedule("task:BBB"));
    strategy.add_group(20, hourly_cron_schedule("task:CCC"));
    let mut plan = SchedulePlan::new(ScheduleStrategy::AbTest(strategy));
    plan.label = Some("A/B Test Schedule Plan".to_string());
    plan.min_app_version = Some(2);
    plan.max_app_version = Some(8);
    plan
}

/// Event-based plan that reschedules a task each time it finishes.
pub fn persistent_schedule_plan() -> SchedulePlan {
    let mut schedule = Schedule::new();
    schedule.label = Some("Test label".to_string());
    schedule.event_id = Some(EventId::new("task:CCC:finished".to_string()));
    schedule.add_activity(task_activity("CCC"));
    let mut plan = SchedulePlan::new(ScheduleStrategy::simple(schedule));
    plan.label = Some("Persistent schedule".to_string());
    plan
}

pub fn simple_schedule(plan: &SchedulePlan) -> &Schedule {
    &plan.strategy.as_simple().unwrap().schedule
}

// ========================================
//            CANONICAL SURVEY
// ========================================

/// Canonical survey exercising every constraint kind, in a fixed question
/// order that tests rely on (index 1 is the medical check-up date).
pub fn test_survey() -> Survey {
    let mut survey = Survey::new("General Blood Pressure Survey", random_identifier("survey"));

    survey.add_question(SurveyQuestion::new(
        "high_bp",
        "Do you have high blood pressure?",
        UiHint::Checkbox,
        Constraints::Boolean(BooleanConstraints::default()),
    ));
    survey.add_question(SurveyQuestion::new(
        "last_checkup",
        "When did you last have a medical check-up?",
        UiHint::DatePicker,
        Constraints::Date(DateConstraints {
            allow_future: false,
            earliest_value: None,
            latest_value: None,
        }),
    ));
    survey.add_question(SurveyQuestion::new(
        "next_checkup",
        "When is your next medical check-up scheduled?",
        UiHint::DateTimePicker,
        Constraints::DateTime(DateTimeConstraints { allow_future: true }),
    ));
    survey.add_question(SurveyQuestion::new(
        "deleuterium",
        "What dose of deleuterium do you take daily?",
        UiHint::NumberField,
        Constraints::Decimal(DecimalConstraints {
            min_value: Some(0.0),
            max_value: Some(10.0),
            step: Some(0.1),
            rules: vec![],
        }),
    ));
    survey.add_question(SurveyQuestion::new(
        "bp_x_day",
        "How many times a day do you take your blood pressure?",
        UiHint::NumberField,
        Constraints::Integer(IntegerConstraints {
            min_value: Some(0),
            max_value: Some(8),
            step: None,
            rules: vec![SurveyRule::new(Operator::Le, 2, "medication")],
        }),
    ));
    survey.add_question(SurveyQuestion::new(
        "sleep",
        "How long did you sleep last night?",
        UiHint::Slider,
        Constraints::Duration(DurationConstraints::default()),
    ));
    survey.add_question(SurveyQuestion::new(
        "medication",
        "What time do you usually take your medication?",
        UiHint::TimePicker,
        Constraints::Time(TimeConstraints::default()),
    ));
    survey.add_question(SurveyQuestion::new(
        "feeling",
        "Which of these feelings have you had today?",
        UiHint::List,
        Constraints::MultiValue(MultiValueConstraints {
            allow_other: true,
            allow_multiple: true,
            enumeration: vec![
                SurveyQuestionOption::new("Dizziness"),
                SurveyQuestionOption::new("Fainting"),
                SurveyQuestionOption::new("Headaches"),
            ],
        }),
    ));
    survey
}
