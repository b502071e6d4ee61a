//! `catalog`: command-line front end for the product catalog API.

use std::io::{BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::bail;
use clap::{Parser, Subcommand};

use catalog_client::{
    CatalogPage, ClientConfig, DeleteOutcome, FetchOutcome, HttpProductStore, PageSnapshot,
    ProductEditor, ProductStore, messages,
};
use catalog_core::ProductId;
use catalog_observability::LogFormat;
use catalog_products::{Product, ProductForm, QueryChange, QueryParams};

#[derive(Parser)]
#[command(name = "catalog")]
#[command(version, about = "Manage products in the catalog API")]
struct Cli {
    /// Base URL of the catalog API (default: $CATALOG_API_URL or http://localhost:4000)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Emit logs as JSON instead of compact text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List products, optionally filtered
    List {
        /// Name substring
        #[arg(long)]
        name: Option<String>,

        /// Category (e.g. BEVERAGE)
        #[arg(long)]
        category: Option<String>,

        /// Only active (`true`) or inactive (`false`) products
        #[arg(long)]
        active: Option<String>,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },

    /// Show one product
    Show { id: String },

    /// Create a product
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        price: String,

        #[arg(long)]
        category: String,
    },

    /// Edit a product; omitted fields keep their stored value
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// `true` or `false`
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a product (asks for confirmation)
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if cli.json_logs {
        catalog_observability::init();
    } else {
        catalog_observability::tracing::init(LogFormat::Compact);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.api_url.as_deref() {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(api_url = %config.api_url(), "using catalog API");
    let store = Arc::new(HttpProductStore::new(&config));

    match cli.command {
        Command::List {
            name,
            category,
            active,
            per_page,
            page,
        } => {
            let mut query = QueryParams::default();
            let edits = [
                ("name", name),
                ("category", category.map(|c| c.to_uppercase())),
                ("isActive", active),
                ("perPage", per_page.map(|n| n.to_string())),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    query = query.apply(QueryChange::from_field(field, &value)?);
                }
            }
            query = query.apply(QueryChange::Page(page));

            let page = CatalogPage::with_query(store, query);
            if page.refresh().await != FetchOutcome::Applied {
                bail!(failure_message(&page.snapshot().await));
            }
            print_list(&page.snapshot().await);
        }

        Command::Show { id } => {
            let id: ProductId = id.parse()?;
            let product = store.get(&id).await.map_err(|e| {
                tracing::debug!(error = %e, "get rejected");
                anyhow::anyhow!(messages::LOAD_PRODUCT_FAILED)
            })?;
            print_details(&product);
        }

        Command::Create {
            name,
            description,
            price,
            category,
        } => {
            let mut form = ProductForm {
                name,
                description,
                price,
                ..ProductForm::default()
            };
            form.set_category(&category.to_uppercase())?;

            let editor = ProductEditor::new(store);
            match editor.create(&form).await {
                Ok(product) => println!("created {}", product.id),
                Err(e) => {
                    tracing::debug!(error = %e, "create rejected");
                    bail!(e.user_message());
                }
            }
        }

        Command::Update {
            id,
            name,
            description,
            price,
            category,
            active,
        } => {
            let id: ProductId = id.parse()?;
            let editor = ProductEditor::new(store);
            let mut form = editor
                .load_for_edit(&id)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;

            if let Some(name) = name {
                form.name = name;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(price) = price {
                form.price = price;
            }
            if let Some(category) = category {
                form.set_category(&category.to_uppercase())?;
            }
            if let Some(active) = active {
                form.is_active = active;
            }

            match editor.update(&id, &form).await {
                Ok(product) => println!("updated {}", product.id),
                Err(e) => {
                    tracing::debug!(error = %e, "update rejected");
                    bail!(e.user_message());
                }
            }
        }

        Command::Delete { id, yes } => {
            let id: ProductId = id.parse()?;
            let page = CatalogPage::new(store);
            page.request_delete(id.clone()).await;

            if !yes && !confirm(&format!("Delete product {id}?"))? {
                page.cancel_delete().await;
                println!("cancelled");
                return Ok(());
            }

            match page.confirm_delete().await {
                DeleteOutcome::Deleted { id, refresh } => {
                    println!("deleted {id}");
                    if refresh == FetchOutcome::Failed {
                        eprintln!("warning: {}", failure_message(&page.snapshot().await));
                    }
                }
                DeleteOutcome::Failed { error, .. } => {
                    tracing::debug!(error = %error, "delete rejected");
                    bail!(failure_message(&page.snapshot().await));
                }
                DeleteOutcome::NothingPending => {}
            }
        }
    }

    Ok(())
}

fn failure_message(snapshot: &PageSnapshot) -> String {
    snapshot
        .list
        .error
        .clone()
        .unwrap_or_else(|| "request failed".to_string())
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt} [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_list(snapshot: &PageSnapshot) {
    if snapshot.list.is_empty() {
        println!("No products found.");
        return;
    }

    for p in &snapshot.list.products {
        println!(
            "{:<28} {:<32} {:>10} {:<14} {}",
            p.id,
            p.name,
            p.display_price(),
            p.category,
            p.status_label()
        );
    }

    let pagination = snapshot.list.pagination;
    if pagination.is_visible() {
        println!(
            "page {} of {}",
            pagination.current_page, pagination.total_pages
        );
    }
}

fn print_details(product: &Product) {
    println!("ID:          {}", product.id);
    println!("Name:        {}", product.name);
    println!("Description: {}", product.description);
    println!("Price:       ${}", product.display_price());
    println!("Category:    {}", product.category);
    println!("Status:      {}", product.status_label());
    println!("Created:     {}", product.created_at);
    println!("Updated:     {}", product.updated_at);
}
