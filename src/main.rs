use clap::Parser;
use depsketch::cli::{AnalyzeArgs, Cli, Command};
use depsketch::{cmd_analyze, cmd_init};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Some(Command::Analyze(args)) => cmd_analyze(args),
        Some(Command::Init(args)) => cmd_init(args),
        None => {
            // Bare `depsketch <path>` behaves as the analyze command
            let args = AnalyzeArgs {
                path: cli.path,
                ..Default::default()
            };
            cmd_analyze(args)
        }
    };

    std::process::exit(exit_code);
}
