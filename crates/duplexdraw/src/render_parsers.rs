
use clap::Args;
use log::debug;
use log::LevelFilter;

use dd_annotate::Coloring;
use dd_annotate::Highlighting;

use crate::pipeline::PipelineConfig;
use crate::validation::validate_offset;

/// Numbering and highlighting options.
#[derive(Debug, Args)]
pub struct RenderArguments {
    /// Coordinate of the first nucleotide of molecule 1 (0 is not an option)
    #[arg(long, default_value = "1", value_parser = validate_offset, allow_hyphen_values = true)]
    pub offset1: i64,

    /// Coordinate of the first nucleotide of molecule 2 (0 is not an option)
    #[arg(long, default_value = "1", value_parser = validate_offset, allow_hyphen_values = true)]
    pub offset2: i64,

    /// Node coloring: "default" (renderer colors) or "distinct" (one color per molecule)
    #[arg(short, long, default_value = "default")]
    pub coloring: Coloring,

    /// Intermolecular highlighting: "nothing", "basepairs" or "region"
    #[arg(short = 'H', long, default_value = "region")]
    pub highlighting: Highlighting,
}

impl RenderArguments {
    pub fn build_config(&self, verbosity: u8) -> PipelineConfig {
        let log_level = match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        let config = PipelineConfig {
            offsets: (self.offset1, self.offset2),
            coloring: self.coloring,
            highlighting: self.highlighting,
            log_level,
        };
        debug!("Pipeline configuration: {:?}", config);
        config
    }
}
