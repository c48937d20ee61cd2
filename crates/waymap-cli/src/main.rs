#![forbid(unsafe_code)]

//! Waymap renderer binary entry point.
//!
//! Loads a persona (from a JSON file or the built-in demo), runs the
//! layout pass, and writes a complete SVG document. Logging goes to stderr
//! and is controlled by `RUST_LOG` (e.g. `RUST_LOG=waymap=debug`).

mod cli;
mod demo;

use std::fs;
use std::io::Write;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use waymap::{Error, Persona, SvgExporter, calculate_node_positions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = cli::Opts::parse();
    if let Err(e) = run(&opts) {
        eprintln!("waymap: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &cli::Opts) -> Result<(), Error> {
    let persona = load_persona(opts)?;
    let config = opts.layout_config();

    if opts.list {
        print_outline(&persona);
        return Ok(());
    }

    let positions = calculate_node_positions(&persona, &config);
    debug!(
        center = positions.center.len(),
        left = positions.left.len(),
        right = positions.right.len(),
        connections = positions.connections.len(),
        "layout computed"
    );

    let svg = SvgExporter::default().export(&persona, &config);
    match &opts.output {
        Some(path) => {
            fs::write(path, &svg)?;
            info!(path = %path.display(), bytes = svg.len(), "wrote SVG");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn load_persona(opts: &cli::Opts) -> Result<Persona, Error> {
    match &opts.input {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            let persona = Persona::from_json(&raw)?;
            info!(persona = persona.id.as_str(), path = %path.display(), "loaded persona");
            Ok(persona)
        }
        None => {
            debug!("no input file, using demo persona");
            let persona = demo::persona();
            persona.validate()?;
            Ok(persona)
        }
    }
}

fn print_outline(persona: &Persona) {
    println!("{} ({})", persona.title, persona.id);
    for section in &persona.sections {
        println!("  [{}] {}", section.id, section.label);
        for topic in &section.topics {
            println!(
                "    {} - {} ({:?} side, {} children)",
                topic.id,
                topic.title,
                topic.children_side,
                topic.children.len()
            );
            for child in &topic.children {
                println!("      {} - {}", child.id, child.title);
            }
        }
    }
}
