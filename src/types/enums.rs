use serde::{Deserialize, Serialize};

/// The kind of data a survey question's answer must have.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Boolean,
    Date,
    DateTime,
    Decimal,
    Integer,
    Duration,
    Time,
    MultiValue,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Boolean => "boolean",
            DataType::Date => "date",
            DataType::DateTime => "datetime",
            DataType::Decimal => "decimal",
            DataType::Integer => "integer",
            DataType::Duration => "duration",
            DataType::Time => "time",
            DataType::MultiValue => "multivalue",
        }
    }
}

/// Hint for how a participant-facing app should render a question.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum UiHint {
    Checkbox,
    Combobox,
    DatePicker,
    DateTimePicker,
    List,
    NumberField,
    RadioButton,
    Select,
    Slider,
    TextField,
    TimePicker,
    Toggle,
}

/// Comparison operator of a survey branching rule. `De` matches an answer
/// the participant declined to give.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    De,
}

/// Elevated account roles. Accounts without one are participants.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Developer,
    Researcher,
    Admin,
}

/// Content type of a study's templated emails.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
pub enum MimeType {
    #[serde(rename = "text/plain")]
    Text,
    #[serde(rename = "text/html")]
    Html,
}

/// What kind of thing an [crate::models::Activity] asks a participant to do.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Task,
    Survey,
}
