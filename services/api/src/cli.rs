use crate::advise::{run_advise, run_foods, AdviseArgs, FoodsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use food_iq::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Food IQ",
    about = "Serve nutrition lookups and food-safety advice, or query them from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print nutrition and rule-based advice for one food
    Advise(AdviseArgs),
    /// List the foods in the nutrition catalog
    Foods(FoodsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Nutrition CSV to serve instead of the configured or bundled dataset
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Advise(args) => run_advise(args),
        Command::Foods(args) => run_foods(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advise_collects_repeated_conditions_and_goals() {
        let cli = Cli::try_parse_from([
            "food-iq",
            "advise",
            "--food",
            "samosa",
            "--condition",
            "obesity",
            "--condition",
            "diabetes",
            "--goal",
            "weight loss",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Advise(args)) => {
                assert_eq!(args.food, "samosa");
                assert_eq!(args.condition, vec!["obesity", "diabetes"]);
                assert_eq!(args.goal, vec!["weight loss"]);
                assert!(!args.json);
            }
            other => panic!("expected advise command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["food-iq"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "food-iq",
            "serve",
            "--port",
            "8081",
            "--catalog",
            "data/custom.csv",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8081));
                assert_eq!(args.catalog, Some(PathBuf::from("data/custom.csv")));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
