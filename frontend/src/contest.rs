use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// List-view representation of a contest, as returned by `GET /api/contests`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: ContestStatus,
    pub total_problems: u32,
    pub total_participants: u32,
}

impl ContestSummary {
    /// route of the contest detail page
    pub fn href(&self) -> String {
        format!("/contest/{}", self.id)
    }
}

/// Contest status tag
///
/// The backend may send tags we don't know about, those are kept as
/// [`ContestStatus::Unknown`] with the raw text so they still render.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ContestStatus {
    Ongoing,
    Upcoming,
    Unknown(String),
}

/// Visual category of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusTone {
    Green,
    Blue,
    Neutral,
}

impl ContestStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContestStatus::Ongoing => "ONGOING",
            ContestStatus::Upcoming => "UPCOMING",
            ContestStatus::Unknown(raw) => raw,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            ContestStatus::Ongoing => StatusTone::Green,
            ContestStatus::Upcoming => StatusTone::Blue,
            ContestStatus::Unknown(_) => StatusTone::Neutral,
        }
    }
}

impl From<String> for ContestStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ONGOING" => ContestStatus::Ongoing,
            "UPCOMING" => ContestStatus::Upcoming,
            _ => {
                tracing::debug!(status = %value, "unrecognized contest status");
                ContestStatus::Unknown(value)
            }
        }
    }
}

impl From<&str> for ContestStatus {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl From<ContestStatus> for String {
    fn from(value: ContestStatus) -> Self {
        match value {
            ContestStatus::Unknown(raw) => raw,
            status => status.as_str().to_owned(),
        }
    }
}

impl Display for ContestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_tone() {
        assert_eq!(ContestStatus::from("ONGOING").tone(), StatusTone::Green);
        assert_eq!(ContestStatus::from("UPCOMING").tone(), StatusTone::Blue);
        for raw in ["", "ENDED", "ongoing", "PAUSED"] {
            let status = ContestStatus::from(raw);
            assert_eq!(status.tone(), StatusTone::Neutral, "{raw:?}");
            assert_eq!(status.as_str(), raw);
        }
    }

    #[test]
    fn parse_summary() {
        let raw = r#"{
            "id": 7,
            "title": "Weekly #7",
            "description": "Seven problems, two hours",
            "status": "ENDED",
            "totalProblems": 7,
            "totalParticipants": 130
        }"#;
        let contest: ContestSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(contest.id, 7);
        assert_eq!(contest.status, ContestStatus::Unknown("ENDED".into()));
        assert_eq!(contest.total_problems, 7);
        assert_eq!(contest.total_participants, 130);
        assert_eq!(contest.href(), "/contest/7");

        let back = serde_json::to_value(&contest).unwrap();
        assert_eq!(back["status"], "ENDED");
        assert_eq!(back["totalParticipants"], 130);
    }

    #[test]
    fn reject_negative_count() {
        let raw = r#"{"id":1,"title":"t","description":"d","status":"ONGOING",
            "totalProblems":-1,"totalParticipants":0}"#;
        assert!(serde_json::from_str::<ContestSummary>(raw).is_err());
    }
}
