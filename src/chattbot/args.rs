use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "chattbot")]
#[command(
    about = "Validates and dispatches a single bot action",
    long_about = "chattbot takes an action_type and a request, checks them against the \
                  built-out registry, validates any additional arguments, and runs the \
                  matching routine. Use --describe to see what a pair does without \
                  running it."
)]
pub struct Cli {
    /// The action type to perform (e.g. "command", or an alias like "c")
    pub action_type: String,

    /// The specific request under the action type (e.g. "gen_comm")
    pub request: String,

    /// Additional arguments as a JSON object, e.g. '{"command": "echo hi"}'.
    /// A bare key:value,key:value form is accepted as a deprecated fallback.
    #[arg(long, default_value = "{}")]
    pub add_args: String,

    /// Describe the resolved action/request instead of running it
    #[arg(long)]
    pub describe: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
