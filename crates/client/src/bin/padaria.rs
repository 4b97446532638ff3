use std::process::ExitCode;

use clap::{Parser, Subcommand};
use padaria_client::api::{HttpProductsApi, ProductsApi};
use padaria_client::control::{DeleteControl, ID_ATTR, NOME_ATTR};
use padaria_client::list::ProductList;
use padaria_client::trigger::{ClickOutcome, DeletionTrigger};
use padaria_client::ui::{StderrNotifier, TerminalDialog};

#[derive(Parser, Debug)]
#[command(author, version, about = "Bakery inventory client", long_about = None)]
struct Cli {
    /// Base URL of the padaria API server.
    #[arg(long, env = "PADARIA_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List products with the attributes of their delete controls.
    List,
    /// Delete a product, as if its delete control were clicked.
    Delete {
        /// Value of the control's `data-id` attribute.
        #[arg(long)]
        id: Option<String>,
        /// Value of the control's `data-nome` attribute.
        #[arg(long)]
        nome: Option<String>,
        /// Confirm without prompting.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "padaria_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpProductsApi::new(&cli.api_url);

    match cli.command {
        Command::List => {
            let list = ProductList::new(api.list_products().await?);
            if list.is_empty() {
                println!("Nenhum produto cadastrado.");
            }
            for (product, control) in list.rows() {
                println!(
                    "{:>6}  {:<40}  [excluir {ID_ATTR}={:?} {NOME_ATTR}={:?}]",
                    product.id,
                    product.nome,
                    control.attribute(ID_ATTR).unwrap_or_default(),
                    control.attribute(NOME_ATTR).unwrap_or_default(),
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Delete { id, nome, yes } => {
            let mut control = DeleteControl::new();
            if let Some(id) = id {
                control = control.with_attribute(ID_ATTR, id);
            }
            if let Some(nome) = nome {
                control = control.with_attribute(NOME_ATTR, nome);
            }

            let trigger = DeletionTrigger::new(api, TerminalDialog::new(yes), StderrNotifier);

            let code = match trigger.delete_from_control(&control).await {
                ClickOutcome::Deleted(_) => ExitCode::SUCCESS,
                ClickOutcome::Cancelled => {
                    eprintln!("Exclusão cancelada.");
                    ExitCode::SUCCESS
                }
                ClickOutcome::Rejected(_) | ClickOutcome::Failed(_) => ExitCode::FAILURE,
            };
            Ok(code)
        }
    }
}
