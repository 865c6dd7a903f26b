use anyhow::Result;
use authlog_tools::commands;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "authlog")]
#[command(about = "Authentication log analysis tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an authentication log export
    Analyze {
        /// Path to the CSV export (.csv, .csv.gz, .csv.zst)
        csv_file: String,

        /// Directory where chart images are written
        #[arg(long, default_value = "static/plots")]
        plots_dir: String,

        /// Write the full analysis result as JSON
        #[arg(short, long)]
        output: Option<String>,
    },

    /// List an export's columns and how they resolve to roles
    Columns {
        /// Path to the CSV export
        csv_file: String,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            csv_file,
            plots_dir,
            output,
        } => commands::analyze::run(&csv_file, &plots_dir, output.as_deref()),
        Commands::Columns { csv_file } => commands::columns::run(&csv_file),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "authlog", &mut std::io::stdout());
            Ok(())
        }
    }
}
