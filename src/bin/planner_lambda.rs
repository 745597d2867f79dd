//! AWS Lambda handler for the contribution planner API
//!
//! Accepts JSON events tagged by `action`:
//!   {"action":"get_contribution"}
//!   {"action":"preview","selection":{"kind":"percent","value":8}}
//!   {"action":"save_contribution","selection":{"kind":"dollar","value":400}}
//!   {"action":"update_account","snapshot":{"age":31,"salary":125000,"pay_periods_per_year":26,"current_balance":18000}}
//!
//! State lives in memory for the lifetime of the execution environment.

use contribution_planner::{
    service::{ContributionView, PlannerService},
    store::InMemoryStore,
    AccountSnapshot, ContributionSelection, PlannerError, ProjectionAssumptions,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum PlannerRequest {
    GetContribution,
    Preview { selection: ContributionSelection },
    SaveContribution { selection: ContributionSelection },
    UpdateAccount { snapshot: AccountSnapshot },
}

#[derive(Debug, Serialize)]
struct PlannerResponse {
    status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ContributionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl PlannerResponse {
    fn ok(view: ContributionView) -> Self {
        Self { status: 200, data: Some(view), error: None }
    }

    fn error(status: u16, message: String) -> Self {
        warn!("request failed ({}): {}", status, message);
        Self { status, data: None, error: Some(message) }
    }
}

type SharedService = Mutex<PlannerService<InMemoryStore>>;

fn respond(result: contribution_planner::Result<ContributionView>) -> PlannerResponse {
    match result {
        Ok(view) => PlannerResponse::ok(view),
        Err(e @ PlannerError::Validation(_)) => PlannerResponse::error(400, e.to_string()),
        Err(e) => PlannerResponse::error(500, e.to_string()),
    }
}

fn dispatch(service: &mut PlannerService<InMemoryStore>, payload: Value) -> PlannerResponse {
    let request: PlannerRequest = match serde_json::from_value(payload) {
        Ok(r) => r,
        Err(e) => return PlannerResponse::error(400, format!("Invalid request: {}", e)),
    };

    respond(match request {
        PlannerRequest::GetContribution => service.current(),
        PlannerRequest::Preview { selection } => service.preview(selection),
        PlannerRequest::SaveContribution { selection } => service.save(selection),
        PlannerRequest::UpdateAccount { snapshot } => service.update_snapshot(snapshot),
    })
}

/// Lock the shared service and dispatch; a poisoned lock is a store failure
fn handle(service: &SharedService, payload: Value) -> PlannerResponse {
    match service.lock() {
        Ok(mut guard) => dispatch(&mut guard, payload),
        Err(_) => respond(Err(PlannerError::Store("planner state lock poisoned".to_string()))),
    }
}

async fn handler(
    service: &SharedService,
    event: LambdaEvent<Value>,
) -> Result<PlannerResponse, Error> {
    Ok(handle(service, event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let assumptions = ProjectionAssumptions::from_env().map_err(PlannerError::from)?;
    let service = Mutex::new(PlannerService::new(InMemoryStore::demo(), assumptions));
    let service = &service;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(service, event).await
    }))
    .await
}
