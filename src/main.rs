use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use simple_os::config::ShellConfig;
use simple_os::repl::{run_interactive, run_script, ReplOptions};
use simple_os::shell::{Shell, ShellOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "simple-os")]
#[command(about = "A simulated terminal over an in-memory file tree")]
#[command(version)]
struct Cli {
    /// Run the given lines (newline separated) and exit
    #[arg(short = 'c')]
    script: Option<String>,

    /// TOML file with the initial tree, processes and banner
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Start directory
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Print the final session (cwd, scrollback, stats) as JSON
    #[arg(long = "json")]
    json: bool,

    /// Show the stats bar above each prompt
    #[arg(long = "status-line")]
    status_line: bool,

    /// Script file to run line by line
    #[arg()]
    script_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match ShellConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellConfig::default(),
    };
    let refresh_interval = Duration::from_millis(config.refresh_interval_ms.max(1));

    let mut shell = match Shell::new(ShellOptions { config, cwd: cli.cwd }) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Determine script source: -c, file, or interactive
    let script = if let Some(s) = cli.script {
        Some(s)
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => Some(content),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file.display(), e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    match script {
        Some(script) => match run_script(&mut shell, &script) {
            Ok(outputs) => {
                if !cli.json {
                    for text in outputs.iter().filter(|t| !t.is_empty()) {
                        println!("{}", text);
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            let options = ReplOptions {
                refresh_interval,
                status_line: cli.status_line,
            };
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            if let Err(e) = run_interactive(&mut shell, stdin, &mut stdout, &options).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::json!({
            "cwd": shell.cwd(),
            "scrollback": shell.scrollback(),
            "stats": shell.stats(),
            "editing": shell.edit_buffer().map(|b| b.name.as_str()),
        }));
    }
}
