use chicktrack::cmd::fields::FieldsCommand;
use chicktrack::cmd::records::RecordsCommand;
use chicktrack::cmd::summary::SummaryCommand;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chicktrack", version, about = "ChickTrack farm record reporting")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a collection with filtering, sorting and paging
    Records(RecordsCommand),
    /// Farm-wide totals across collections
    Summary(SummaryCommand),
    /// Show the filter fields derived from a dataset
    Fields(FieldsCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Records(cmd) => cmd.exec(),
        Command::Summary(cmd) => cmd.exec(),
        Command::Fields(cmd) => cmd.exec(),
    }
}
