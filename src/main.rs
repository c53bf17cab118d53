use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use is_terminal::IsTerminal;
use lgit::areas::repository::Repository;
use lgit::artifacts::core::PagerWriter;
use lgit::commands::porcelain::log::LogOptions;
use lgit::errors::RepositoryError;
use std::process::ExitCode;

const FATAL_EXIT_CODE: u8 = 128;

#[derive(Parser)]
#[command(
    name = "lgit",
    version = "0.1.0",
    about = "A minimal local version control system",
    long_about = "lgit tracks file contents in a content-addressed object store, \
    keeps a staging index, and records timestamp-identified commits on branches. \
    It works on the local disk only.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Add file contents to the index",
        long_about = "This command stores the content of the given files in the object store \
        and stages them. Directories are added recursively; '.' adds the whole working tree."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The paths to add")]
        paths: Vec<String>,
    },
    #[command(
        name = "rm",
        about = "Remove files from the working tree and from the index"
    )]
    Rm {
        #[arg(index = 1, required = true, help = "The files to remove")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes as a new commit",
        long_about = "This command creates a new commit on the current branch with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
    },
    #[command(name = "status", about = "Show the working tree status")]
    Status {
        #[arg(long, help = "Give the output in an easy-to-parse format")]
        porcelain: bool,
    },
    #[command(name = "ls-files", about = "List the tracked files")]
    LsFiles,
    #[command(
        name = "config",
        about = "Get or set the commit author",
        long_about = "Without options this command prints the configured author; \
        with --author it sets it."
    )]
    Config {
        #[arg(long, help = "The author recorded in new commits")]
        author: Option<String>,
    },
    #[command(name = "log", about = "Show the commit history of the current branch")]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
    },
    #[command(
        name = "branch",
        about = "List or create branches",
        long_about = "Without arguments this command lists the branches, marking the current one. \
        With a name it creates a branch pointing at the current commit."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(name = "checkout", about = "Switch branches")]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to")]
        branch: String,
    },
    #[command(
        name = "stash",
        about = "Stash the changes in a dirty working directory away",
        long_about = "Without a subcommand this command saves the staged state and resets \
        the working tree to the current commit."
    )]
    Stash {
        #[command(subcommand)]
        command: Option<StashCommands>,
    },
}

#[derive(Subcommand)]
enum StashCommands {
    #[command(name = "list", about = "List the stash entries")]
    List,
    #[command(name = "apply", about = "Apply a stash entry on top of the working tree")]
    Apply {
        #[arg(index = 1, help = "The stash id")]
        stash: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => match error.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::AlreadyInitialized(_)) => {
                eprintln!("warning: {error}");
                ExitCode::SUCCESS
            }
            _ => {
                eprintln!("fatal: {error:#}");
                ExitCode::from(FATAL_EXIT_CODE)
            }
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => pwd.join(path),
                None => pwd,
            };
            let mut repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::Add { paths } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.add(&paths).await?
        }
        Commands::Rm { paths } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.rm(&paths).await?
        }
        Commands::Commit { message } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.commit(message.as_deref()).await?
        }
        Commands::Status { porcelain } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.status(porcelain).await?
        }
        Commands::LsFiles => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.ls_files().await?
        }
        Commands::Config { author } => {
            let repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.configure(author.as_deref())?
        }
        Commands::Log { oneline } => {
            let options = LogOptions { oneline };

            if use_pager() {
                let pager = minus::Pager::new();
                let repository =
                    Repository::discover(&pwd, Box::new(PagerWriter::new(pager.clone())))?;

                repository.log(&options)?;
                minus::page_all(pager)?;
            } else {
                let repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

                repository.log(&options)?
            }
        }
        Commands::Branch { name } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.branch(name.as_deref())?
        }
        Commands::Checkout { branch } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            repository.checkout(&branch).await?
        }
        Commands::Stash { command } => {
            let mut repository = Repository::discover(&pwd, Box::new(std::io::stdout()))?;

            match command {
                None => repository.stash().await?,
                Some(StashCommands::List) => repository.stash_list()?,
                Some(StashCommands::Apply { stash }) => repository.stash_apply(&stash)?,
            }
        }
    }

    Ok(())
}

/// Page only interactive output, and never when `NO_PAGER` is set
fn use_pager() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}
