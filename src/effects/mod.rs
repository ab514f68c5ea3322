//! Effectful calculator operations using Stillwater 0.11.0.
//!
//! This module is the imperative shell around the pure core: it owns the
//! transition table, talks to the evaluation service, and applies outcomes.
//!
//! # Key Concepts
//!
//! - **Transitions**: Rows of event kind, guard, and synchronous action
//! - **Calculator**: Executes rows, runs evaluations, and keeps the tape
//! - **Service**: The remote collaborator, reached through [`ServiceEnv`]
//!
//! Evaluations are built as `impl Effect` values and run against a
//! [`ServiceEnv`], so tests can swap the HTTP client for a scripted one.

mod http;
mod machine;
mod service;
mod transition;

pub use http::HttpEvaluationService;
pub use machine::{evaluate, Calculator, PendingRequest, StepResult};
pub use service::{EvaluationError, EvaluationService, ServiceEnv};
pub use transition::{standard_table, Command, Transition, TransitionAction};
