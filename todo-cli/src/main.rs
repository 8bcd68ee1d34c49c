use clap::{Parser, Subcommand};
use todo_cli::{render, render_task};
use todo_list_core::{
    ClientConfig, Command, HttpTaskStore, NewTask, TaskController, TaskId, TaskStore,
};
use tracing_subscriber::EnvFilter;

/// Manage the to-do list kept by the remote task store
#[derive(Parser, Debug)]
struct Cli {
    /// Base URL of the task API, overriding `todo.toml` and TODO_API_BASE_URL
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Show all tasks
    List,
    /// Show a single task
    Show { id: u32 },
    /// Add a new task
    Add { description: String },
    /// Mark a task as completed
    Done { id: u32 },
    /// Mark a task as not completed
    Undo { id: u32 },
    /// Delete a task
    Delete { id: u32 },
}

impl Commands {
    /// Maps the subcommand onto the controller command it stands for.
    /// `List` needs nothing beyond the initial load.
    fn into_command(self) -> anyhow::Result<Option<Command>> {
        let command = match self {
            Commands::List | Commands::Show { .. } => None,
            Commands::Add { description } => {
                NewTask::new(description.as_str())?;
                Some(Command::Add { description })
            }
            Commands::Done { id } => Some(Command::SetCompleted {
                id: TaskId::new(id),
                is_completed: true,
            }),
            Commands::Undo { id } => Some(Command::SetCompleted {
                id: TaskId::new(id),
                is_completed: false,
            }),
            Commands::Delete { id } => Some(Command::Delete {
                id: TaskId::new(id),
            }),
        };
        Ok(command)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match args.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::load()?,
    };
    tracing::debug!("Using task API at {}", config.api_base_url);
    let store = HttpTaskStore::new(&config);

    if let Commands::Show { id } = args.command {
        let task = store.get_task(TaskId::new(id)).await?;
        println!("{}", render_task(&task));
        return Ok(());
    }

    let command = args.command.into_command()?;
    let mut controller = TaskController::new(store);
    controller.load().await?;

    let outcome = match command {
        Some(command) => controller.dispatch(command).await,
        None => Ok(()),
    };
    print!("{}", render(controller.state()));
    outcome?;
    Ok(())
}
