use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod call_cmd;

#[derive(Parser)]
#[command(name = "toolbox", about = "Toolbox CLI - list and call tools on an MCP server")]
struct Cli {
    /// MCP JSON-RPC endpoint
    #[arg(
        long,
        env = "TOOLBOX_URL",
        default_value = "http://localhost:8000/mcp-server/mcp"
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tools the server exposes
    List,

    /// Call a tool and print its text result
    Call {
        /// Tool name, e.g. `multiply`
        name: String,

        /// Arguments as a JSON object, e.g. '{"a": 2, "b": 3}'
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = call_cmd::McpClient::new(&cli.url);

    match cli.command {
        Commands::List => {
            for tool in client.list_tools().await? {
                println!("{:<24} {}", tool.name, tool.description);
            }
        }
        Commands::Call { name, args } => {
            let arguments = call_cmd::parse_arguments(&args)?;
            println!("{}", client.call_tool(&name, arguments).await?);
        }
    }

    Ok(())
}
