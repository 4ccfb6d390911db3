use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementRequest {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: RequestPriority,
    pub category: RequestCategory,
    pub status: RequestStatus,
    pub user_email: String,
    pub user_name: String,
    pub assigned_to: Option<String>,
    pub admin_response: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewImprovementRequest {
    pub title: String,
    pub description: String,
    pub priority: RequestPriority,
    pub category: RequestCategory,
    pub user_email: String,
    pub user_name: String,
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestChanges {
    pub status: Option<RequestStatus>,
    pub admin_response: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPriority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCategory {
    #[default]
    Feature,
    Bug,
    Improvement,
    Design,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Rejected,
}

macro_rules! string_tags {
    ($ty:ty { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok(Self::$variant),)+
                    other => Err(format!("unknown value: {}", other)),
                }
            }
        }
    };
}

string_tags!(RequestPriority { Low => "low", Medium => "medium", High => "high" });
string_tags!(RequestCategory {
    Feature => "feature",
    Bug => "bug",
    Improvement => "improvement",
    Design => "design",
    Other => "other",
});
string_tags!(RequestStatus {
    Pending => "pending",
    InProgress => "in_progress",
    Completed => "completed",
    Rejected => "rejected",
});

impl RequestStatus {
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ];
}
