use serde::Serialize;

use salescast_core::{classify, LexiconScorer, SentimentResult};

use crate::cli::SentimentArgs;
use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct SentimentResponseData {
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<SentimentResult>,
}

pub fn run(args: &SentimentArgs) -> Result<CommandResult, CliError> {
    let scorer = LexiconScorer::new();

    // Empty text short-circuits: nothing is scored, nothing is rendered.
    let sentiment = classify(&scorer, &args.text);

    let data = serde_json::to_value(SentimentResponseData { sentiment })?;
    Ok(CommandResult::ok(data))
}
