//! BuntuBuild AI - contribution advisor adapter.
//!
//! Wraps an external LLM HTTP API behind [`AdvisorTrait`]: the caller sends
//! its savings figures, the provider returns a suggested monthly
//! contribution with a short reasoning paragraph. One request, one response;
//! no retries, no streaming, no tool loop.
//!
//! - `advisor`: the trait and the reqwest-backed implementation
//! - `prompt_template`: versioned prompt with `{{placeholder}}` rendering
//! - `types`: request/response DTOs shared with the HTTP layer
//! - `error`: advisor error taxonomy with stable client-facing codes

pub mod advisor;
pub mod error;
pub mod prompt_template;
pub mod types;

pub use advisor::{AdvisorTrait, HttpAdvisor};
pub use error::{AdvisorError, AdvisorResult};
pub use prompt_template::{render_contribution_prompt, PROMPT_TEMPLATE_VERSION};
pub use types::{ContributionSuggestion, ContributionSuggestionRequest};
