use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;

mod registry;

use registry::{Decoder, Fields, decoders};

#[derive(Parser)]
#[command(name = "armid")]
#[command(about = "Decode and inspect Azure Resource Manager resource IDs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a resource ID and print its components
    Decode {
        /// The ARM resource ID (or a `left|right` association ID)
        id: String,

        /// Restrict decoding to a single kind (see `armid kinds`)
        #[arg(long, short)]
        kind: Option<String>,

        /// Accept any casing for provider path segments
        #[arg(long)]
        insensitive: bool,

        /// Print the decoded fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the resource-ID kinds this tool understands
    Kinds,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Decode {
            id,
            kind,
            insensitive,
            json,
        } => run_decode(&id, kind.as_deref(), insensitive, json),
        Commands::Kinds => run_kinds(),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_decode(id: &str, kind: Option<&str>, insensitive: bool, json: bool) -> Result<(), String> {
    let (kind, fields) = match kind {
        Some(name) => {
            let decoder = find_decoder(name)?;
            let fields = decoder
                .decode(id, insensitive)
                .map_err(|e| e.to_string())?;
            (decoder.kind, fields)
        }
        None => detect(id, insensitive)?,
    };

    if json {
        print_json(kind, &fields);
    } else {
        println!("{} {}", "kind:".bold(), kind.green());
        for (name, value) in &fields {
            println!("{} {}", format!("{name}:").bold(), value);
        }
    }
    Ok(())
}

fn find_decoder(name: &str) -> Result<Decoder, String> {
    decoders()
        .into_iter()
        .find(|d| d.kind == name)
        .ok_or_else(|| format!("unknown kind `{name}` (run `armid kinds` for the full list)"))
}

fn detect(id: &str, insensitive: bool) -> Result<(&'static str, Fields), String> {
    for decoder in decoders() {
        match decoder.decode(id, insensitive) {
            Ok(fields) => return Ok((decoder.kind, fields)),
            Err(e) => debug!("{}: {e}", decoder.kind),
        }
    }
    Err(format!("`{id}` did not decode as any known resource-ID kind"))
}

fn print_json(kind: &str, fields: &Fields) {
    let mut object = serde_json::Map::new();
    object.insert("kind".to_string(), serde_json::json!(kind));
    for (name, value) in fields {
        object.insert(name.to_string(), serde_json::json!(value));
    }
    println!("{}", serde_json::Value::Object(object));
}

fn run_kinds() -> Result<(), String> {
    for decoder in decoders() {
        println!("{}", decoder.kind.green().bold());
        println!("    {}", decoder.template);
    }
    Ok(())
}
