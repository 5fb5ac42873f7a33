use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Identifiers come back as JSON numbers from the backend and as strings from
/// some fixtures. Either way they are kept as opaque text.
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Empty when the backend omits it; the caller already knows the id.
    #[serde(default, deserialize_with = "opaque_id")]
    pub program_id: String,
    pub program_name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(deserialize_with = "opaque_id")]
    pub course_id: String,
    pub course_name: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDescriptor {
    #[serde(default)]
    pub branch_name: String,
    #[serde(rename = "name", default)]
    pub institution_name: String,
    #[serde(default)]
    pub college_name: String,
    #[serde(default)]
    pub program_name: String,
    #[serde(default)]
    pub course_name: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub degree_offered: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(deserialize_with = "opaque_id")]
    pub scheduled_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(rename = "programScheduledResponseDto", default)]
    pub descriptor: ScheduleDescriptor,
}
