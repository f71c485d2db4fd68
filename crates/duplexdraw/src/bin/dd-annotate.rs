use std::io::Write;
use std::process;
use log::error;
use log::info;
use log::LevelFilter;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use duplexdraw::input_parsers::FastaRecord;
use duplexdraw::input_parsers::molecule_ruler;
use duplexdraw::input_parsers::read_duplex_input;
use duplexdraw::input_parsers::read_fasta_like_input;
use duplexdraw::pipeline::Annotation;
use duplexdraw::pipeline::annotate;
use duplexdraw::render_parsers::RenderArguments;


#[derive(Debug, Args)]
pub struct AnnotateInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Sequence given directly, skips reading INPUT
    #[arg(short = 'e', long, requires = "structure")]
    pub sequence: Option<String>,

    /// Structure given directly (dot-bracket or hybrid notation)
    #[arg(short = 'u', long, requires = "sequence")]
    pub structure: Option<String>,

    /// Fail on records without a structure line instead of using an open chain
    #[arg(long)]
    pub strict: bool,

    /// Print the annotation as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "dd-annotate")]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub input: AnnotateInput,

    #[command(flatten, next_help_heading = "Drawing options")]
    pub render: RenderArguments,
}

fn init_logging(level: LevelFilter) {
    Builder::from_env(env_logger::Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn read_record(input: &AnnotateInput) -> Result<FastaRecord> {
    if let (Some(sequence), Some(structure)) = (&input.sequence, &input.structure) {
        return Ok(FastaRecord {
            header: None,
            sequence: sequence.clone(),
            structure: Some(structure.clone()),
        });
    }
    if input.strict {
        read_duplex_input(&input.input)
    } else {
        read_fasta_like_input(&input.input)
    }
}

fn print_summary(ann: &Annotation) {
    let ruler = molecule_ruler(ann.lengths, ann.molecules == 2);

    info!("{}", ruler.magenta());
    println!("{}\n{}", ann.sequence, ann.structure);
    info!("{}", ruler.magenta());
    println!("{} {}", "renderer:".cyan(), ann.renderer.structure);

    let ticks: Vec<String> = ann.ticks.iter()
        .filter_map(|t| t.label.map(|l| format!("{}:{}", t.position, l)))
        .collect();
    println!("{} {}", "ticks:".cyan(), ticks.join(" "));

    for (i, region) in ann.regions.iter().enumerate() {
        println!("{} {}..{}", format!("region {}:", i + 1).green(), region.start, region.end);
    }
    if !ann.highlighted_nodes.is_empty() {
        let nodes: Vec<String> = ann.highlighted_nodes.iter().map(|n| n.to_string()).collect();
        println!("{} {}", "highlighted:".green(), nodes.join(","));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.render.build_config(cli.input.verbose);
    init_logging(config.log_level);

    let record = read_record(&cli.input)?;
    if let Some(h) = &record.header {
        println!("{}", h.yellow())
    }

    let structure = record.structure_or_open_chain();
    let annotation = match annotate(&config, &record.sequence, &structure) {
        Ok(a) => a,
        Err(e) => {
            error!("{} {}", "ERROR:".red(), e);
            process::exit(2);
        }
    };

    if cli.input.json {
        println!("{}", serde_json::to_string_pretty(&annotation)?);
    } else {
        print_summary(&annotation);
    }
    Ok(())
}
