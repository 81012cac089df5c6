use clap::Parser;
use outdraw::cli::Args;
use outdraw::cli::Session;

fn main() -> anyhow::Result<()> {
    outdraw::log();
    let args = Args::parse();
    Session::from(args).run()
}
