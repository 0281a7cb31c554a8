use clap::Parser;
use miette::Result;
use grt::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Simulate(args) => grt::cli::commands::simulate::run(args, &global),
        Commands::Sensitivity(args) => grt::cli::commands::sensitivity::run(args, &global),
        Commands::Export(args) => grt::cli::commands::export::run(args, &global),
        Commands::Dashboard(args) => grt::cli::commands::dashboard::run(args, &global),
        Commands::Catalog(args) => grt::cli::commands::catalog::run(args, &global),
        Commands::Config(cmd) => grt::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => grt::cli::commands::completions::run(args),
    }
}
