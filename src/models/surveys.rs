use crate::types::{DataType, DateString, Guid, Operator, UiHint};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

/// A versioned, guid-identified ordered collection of questions.
///
/// `guid` and `versioned_on` together identify a unique survey version.
/// Both are assigned by the server: they are `None` on a survey built
/// locally and always present on one returned by a client call.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub guid: Option<Guid>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub versioned_on: Option<OffsetDateTime>,
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub questions: Vec<SurveyQuestion>,
}

impl Survey {
    pub fn new(name: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            guid: None,
            versioned_on: None,
            name: name.into(),
            identifier: identifier.into(),
            published: false,
            questions: Vec::new(),
        }
    }

    pub fn add_question(&mut self, question: SurveyQuestion) {
        self.questions.push(question);
    }
}

/// One question of a survey, with a typed answer constraint.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub guid: Option<Guid>,
    pub identifier: String,
    pub prompt: String,
    pub ui_hint: UiHint,
    pub constraints: Constraints,
}

impl SurveyQuestion {
    pub fn new(
        identifier: impl Into<String>,
        prompt: impl Into<String>,
        ui_hint: UiHint,
        constraints: Constraints,
    ) -> Self {
        Self {
            guid: None,
            identifier: identifier.into(),
            prompt: prompt.into(),
            ui_hint,
            constraints,
        }
    }
}

/// The valid answer shape for a survey question, keyed by the `dataType`
/// field on the wire. Each variant carries only the fields relevant to it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "dataType")]
pub enum Constraints {
    #[serde(rename = "boolean")]
    Boolean(BooleanConstraints),
    #[serde(rename = "date")]
    Date(DateConstraints),
    #[serde(rename = "datetime")]
    DateTime(DateTimeConstraints),
    #[serde(rename = "decimal")]
    Decimal(DecimalConstraints),
    #[serde(rename = "integer")]
    Integer(IntegerConstraints),
    #[serde(rename = "duration")]
    Duration(DurationConstraints),
    #[serde(rename = "time")]
    Time(TimeConstraints),
    #[serde(rename = "multivalue")]
    MultiValue(MultiValueConstraints),
}

impl Constraints {
    /// The declared data type of the answer.
    pub fn data_type(&self) -> DataType {
        match self {
            Constraints::Boolean(_) => DataType::Boolean,
            Constraints::Date(_) => DataType::Date,
            Constraints::DateTime(_) => DataType::DateTime,
            Constraints::Decimal(_) => DataType::Decimal,
            Constraints::Integer(_) => DataType::Integer,
            Constraints::Duration(_) => DataType::Duration,
            Constraints::Time(_) => DataType::Time,
            Constraints::MultiValue(_) => DataType::MultiValue,
        }
    }

    /// Branching rules, for the numeric constraint kinds that carry them.
    pub fn rules(&self) -> &[SurveyRule] {
        match self {
            Constraints::Decimal(c) => &c.rules,
            Constraints::Integer(c) => &c.rules,
            _ => &[],
        }
    }

    pub fn as_multi_value(&self) -> Option<&MultiValueConstraints> {
        match self {
            Constraints::MultiValue(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BooleanConstraints {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateConstraints {
    #[serde(default)]
    pub allow_future: bool,
    pub earliest_value: Option<DateString>,
    pub latest_value: Option<DateString>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeConstraints {
    #[serde(default)]
    pub allow_future: bool,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DecimalConstraints {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<SurveyRule>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct IntegerConstraints {
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub step: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<SurveyRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DurationConstraints {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeConstraints {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MultiValueConstraints {
    #[serde(default)]
    pub allow_other: bool,
    #[serde(default)]
    pub allow_multiple: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enumeration: Vec<SurveyQuestionOption>,
}

/// One selectable answer in a multi-value question. Without an explicit
/// `value`, the label itself is recorded as the answer.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SurveyQuestionOption {
    pub label: String,
    pub value: Option<String>,
}

impl SurveyQuestionOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }
}

/// Branching rule: when the answer satisfies `operator` against `value`,
/// skip ahead to the question named by `skip_to`.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRule {
    pub operator: Operator,
    pub value: serde_json::Value,
    pub skip_to: Option<String>,
}

impl SurveyRule {
    pub fn new(operator: Operator, value: impl Into<serde_json::Value>, skip_to: &str) -> Self {
        Self {
            operator,
            value: value.into(),
            skip_to: Some(skip_to.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_constraints_tagged_by_data_type() {
        let constraints = Constraints::Integer(IntegerConstraints {
            min_value: Some(0),
            max_value: Some(4),
            step: Some(1),
            rules: vec![SurveyRule::new(Operator::Le, 2, "medication")],
        });
        let json = serde_json::to_value(&constraints).unwrap();
        assert_eq!(json["dataType"], "integer");
        assert_eq!(json["minValue"], 0);
        assert_eq!(json["rules"][0]["operator"], "le");
        assert_eq!(json["rules"][0]["skipTo"], "medication");

        let back: Constraints = serde_json::from_value(json).unwrap();
        assert_eq!(back.data_type(), DataType::Integer);
        assert_eq!(back.rules().len(), 1);
        assert_eq!(back, constraints);
    }

    #[test]
    fn test_deserialize_multi_value_constraints() {
        let json = serde_json::json!({
            "dataType": "multivalue",
            "allowMultiple": true,
            "enumeration": [{"label": "Walking"}, {"label": "Running", "value": "run"}]
        });
        let constraints: Constraints = serde_json::from_value(json).unwrap();
        assert_eq!(constraints.data_type(), DataType::MultiValue);
        let multi = constraints.as_multi_value().unwrap();
        assert!(multi.allow_multiple);
        assert!(!multi.allow_other);
        assert_eq!(multi.enumeration[1].value.as_deref(), Some("run"));
    }

    #[test]
    fn test_survey_round_trip() {
        let mut survey = Survey::new("General Blood Pressure Survey", "bloodpressure");
        survey.add_question(SurveyQuestion::new(
            "high_bp",
            "Do you have high blood pressure?",
            UiHint::Checkbox,
            Constraints::Boolean(BooleanConstraints::default()),
        ));
        let json = serde_json::to_value(&survey).unwrap();
        // server-assigned fields are omitted until the server fills them in
        assert!(json.get("guid").is_none());
        assert!(json.get("versionedOn").is_none());
        assert_eq!(json["questions"][0]["uiHint"], "checkbox");
        assert_eq!(json["questions"][0]["constraints"]["dataType"], "boolean");

        let back: Survey = serde_json::from_value(json).unwrap();
        assert_eq!(back, survey);
    }

    #[test]
    fn test_versioned_on_rfc3339() {
        let json = serde_json::json!({
            "guid": "f6a71580-ed06-4f0d-a316-7b6bd1a89b1b",
            "versionedOn": "2015-01-27T17:46:31.237Z",
            "name": "name",
            "identifier": "ident",
            "published": true
        });
        let survey: Survey = serde_json::from_value(json).unwrap();
        assert_eq!(
            survey.versioned_on,
            Some(datetime!(2015-01-27 17:46:31.237 UTC))
        );
        assert!(survey.published);
        assert!(survey.questions.is_empty());
    }
}
