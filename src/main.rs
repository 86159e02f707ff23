//! Varity Binary
//!
//! Run with: `varity <COMMAND> [OPTIONS]`

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use varity::{ArityResolver, Binder, EventClass, ImplRegistry, Manifest, Span};

#[derive(Parser)]
#[command(name = "varity")]
#[command(about = "Arity-directed call resolution and boilerplate generation")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a call site against an implementation manifest
    Resolve {
        /// The base name to dispatch on
        base: String,

        /// The argument list, as one comma-delimited string
        #[arg(default_value = "")]
        args: String,

        /// Implementation manifest path
        #[arg(short, long, default_value = "varity.toml")]
        manifest: PathBuf,

        /// Emit the resolution as JSON instead of call text
        #[arg(long)]
        json: bool,
    },
    /// Generate event-contract boilerplate for a type
    Event {
        /// The event type name
        type_name: String,

        /// The category flags expression
        #[arg(short, long)]
        category: String,
    },
    /// Generate a method-to-callable binder
    Bind {
        /// Binder arguments: `method` or `receiver, method`
        args: String,

        /// How many parameters the callable forwards
        #[arg(short, long, default_value = "1")]
        forwarded: usize,
    },
    /// Print an example implementation manifest
    Manifest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Resolve {
            base,
            args,
            manifest,
            json,
        } => cmd_resolve(&base, &args, &manifest, json),
        Commands::Event {
            type_name,
            category,
        } => cmd_event(&type_name, &category),
        Commands::Bind { args, forwarded } => cmd_bind(&args, forwarded),
        Commands::Manifest => {
            print!("{}", Manifest::example().to_toml_string());
            Ok(())
        }
    }
}

/// Loads the manifest, tokenizes the argument list, and resolves.
fn cmd_resolve(base: &str, args: &str, manifest_path: &Path, json: bool) -> Result<()> {
    let manifest = Manifest::from_path(manifest_path)
        .with_context(|| format!("failed to load manifest {}", manifest_path.display()))?;
    let registry = ImplRegistry::from_manifest(&manifest)?;
    debug!("loaded {} implementation families", registry.len());

    let arguments = match varity::split_arguments(args) {
        Ok(arguments) => arguments,
        Err(e) => return fail_with(e.into_diagnostic(), args),
    };

    let call_span = Span::new(0, args.len());
    let resolver = ArityResolver::new(&registry);
    let call = match resolver.resolve(base, call_span, &arguments) {
        Ok(call) => call,
        Err(e) => return fail_with(e.into_diagnostic(), args),
    };

    if json {
        let payload = serde_json::json!({
            "base": call.base,
            "target": call.target,
            "arity": call.arity,
            "args": call.args.iter().map(|a| a.text.clone()).collect::<Vec<_>>(),
            "rendered": call.render(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", call.render());
    }

    Ok(())
}

/// Prints event-contract boilerplate.
fn cmd_event(type_name: &str, category: &str) -> Result<()> {
    let class = EventClass::new(type_name, category)?;
    print!("{}", class.emit());
    Ok(())
}

/// Prints a binder closure, dispatching the one- or two-argument form by
/// count.
fn cmd_bind(args: &str, forwarded: usize) -> Result<()> {
    let arguments = match varity::split_arguments(args) {
        Ok(arguments) => arguments,
        Err(e) => return fail_with(e.into_diagnostic(), args),
    };

    let span = Span::new(0, args.len());
    let binder = Binder::from_arguments(span, &arguments)?.forwarding(forwarded)?;
    println!("{}", binder.emit());
    Ok(())
}

/// Renders a diagnostic against the argument-list input and exits
/// nonzero.
fn fail_with(diagnostic: varity::Diagnostic, source: &str) -> Result<()> {
    eprint!("{}", diagnostic.render("<arguments>", source)?);
    std::process::exit(1)
}
