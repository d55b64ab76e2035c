use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use scholaris_cli::create_director;
use scholaris_config::{DatabaseConfig, PasswordConfig};
use scholaris_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "scholaris-cli")]
#[command(about = "Scholaris CLI - Administrative tools for Scholaris", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a Director account, the root of the hierarchy
    CreateDirector {
        /// Display name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;

    match cli.command {
        Commands::CreateDirector {
            name,
            email,
            password,
        } => {
            let name = match name {
                Some(name) => name,
                None => Input::new().with_prompt("Name").interact_text()?,
            };

            let email = match email {
                Some(email) => email,
                None => Input::new().with_prompt("Email address").interact_text()?,
            };

            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()?,
            };

            let cost = PasswordConfig::from_env().bcrypt_cost;
            match create_director(&pool, &name, &email, &password, cost).await {
                Ok(id) => {
                    println!("\n✅ Director created successfully!");
                    println!("   Id: {}", id);
                    println!("   Email: {}", email);
                    println!("   Name: {}", name);
                }
                Err(e) => {
                    eprintln!("\n❌ Error creating director: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
