use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use typeprompt::{DesiredType, DigitSet, PromptError, PromptOptions, TypedValue};

/// Ask one typed question on the terminal and print the answer.
#[derive(Debug, Parser)]
#[command(name = "typeprompt", version, about)]
struct Args {
    /// Question shown to the user.
    message: String,

    /// Answer type: string, integer, float, number or boolean.
    #[arg(short = 't', long = "type", default_value = "string")]
    kind: DesiredType,

    /// Only accept digits 1-9 for numeric answers.
    #[arg(long)]
    legacy_digits: bool,

    /// Options as JSON, e.g. '{"type":"integer"}'. Overrides --type.
    #[arg(long, env = "TYPEPROMPT_OPTIONS")]
    options: Option<String>,

    /// Print the answer as JSON.
    #[arg(long)]
    json: bool,
}

impl Args {
    fn prompt_options(&self) -> Result<PromptOptions, PromptError> {
        let opts = match &self.options {
            Some(json) => PromptOptions::from_json(json)?,
            None => PromptOptions::new(self.kind),
        };
        if self.legacy_digits {
            return Ok(opts.with_digits(DigitSet::Legacy));
        }
        Ok(opts)
    }
}

fn render(answer: &TypedValue, json: bool) -> Result<String, PromptError> {
    if json {
        return serde_json::to_string(answer).map_err(PromptError::Encode);
    }
    Ok(answer.to_string())
}

async fn run(args: Args) -> Result<(), PromptError> {
    let opts = args.prompt_options()?;
    tracing::debug!(
        kind = %opts.kind,
        digits = ?opts.digits,
        json = args.json,
        "options resolved"
    );

    let answer = typeprompt::input(&args.message, Some(opts)).await?;
    tracing::debug!(answer = %answer, "answer received");

    println!("{}", render(&answer, args.json)?);
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
