use sloperkit::cli::{self, Command};
use sloperkit::{init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let command = cli::parse_args(std::env::args().skip(1))?;

    match command {
        Command::Version => println!("sloperkit {} (built {})", VERSION, BUILD_DATE),
        Command::Help => println!("{}", cli::USAGE),
        Command::Draft(args) => {
            init_logging()?;
            let written = cli::run(&args)?;
            if !args.points {
                tracing::info!("Drafted {} file(s)", written.len());
            }
        }
    }

    Ok(())
}
