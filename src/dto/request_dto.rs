use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::improvement_request::{
    ImprovementRequest, RequestCategory, RequestChanges, RequestPriority, RequestStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 5000))]
    pub description: String,
    #[serde(default)]
    pub priority: RequestPriority,
    #[serde(default)]
    pub category: RequestCategory,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestPayload {
    pub status: Option<RequestStatus>,
    #[validate(length(max = 5000))]
    pub admin_response: Option<String>,
}

impl From<UpdateRequestPayload> for RequestChanges {
    fn from(payload: UpdateRequestPayload) -> Self {
        Self {
            status: payload.status,
            admin_response: payload.admin_response,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RequestListResponse {
    pub items: Vec<ImprovementRequest>,
    pub total: usize,
}

impl From<Vec<ImprovementRequest>> for RequestListResponse {
    fn from(items: Vec<ImprovementRequest>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Per-status counts over the requests visible to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl RequestSummary {
    pub fn tally(requests: &[ImprovementRequest]) -> Self {
        let mut summary = Self {
            total: requests.len(),
            ..Default::default()
        };
        for request in requests {
            match request.status {
                RequestStatus::Pending => summary.pending += 1,
                RequestStatus::InProgress => summary.in_progress += 1,
                RequestStatus::Completed => summary.completed += 1,
                RequestStatus::Rejected => summary.rejected += 1,
            }
        }
        summary
    }
}
