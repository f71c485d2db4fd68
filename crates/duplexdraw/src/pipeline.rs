
use log::info;
use log::warn;
use log::LevelFilter;
use serde::Serialize;

use dd_structure::MoleculeCount;
use dd_annotate::Coloring;
use dd_annotate::Highlighting;
use dd_annotate::NodeLayout;
use dd_annotate::Region;
use dd_annotate::RenderedLayout;
use dd_annotate::RendererInput;
use dd_annotate::Tick;
use dd_annotate::FILLER_NODES;
use dd_annotate::locate_pairs;
use dd_annotate::locate_regions;
use dd_annotate::numbering;
use dd_annotate::tick_labels;

use crate::error::ValidationError;
use crate::validation::ValidatedInput;
use crate::validation::validate_input;

/// Everything that shapes a single validate -> annotate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Coordinates of the first nucleotide of each molecule.
    pub offsets: (i64, i64),
    pub coloring: Coloring,
    pub highlighting: Highlighting,
    pub log_level: LevelFilter,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            offsets: (1, 1),
            coloring: Coloring::default(),
            highlighting: Highlighting::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

/// The finished hand-off for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub molecules: usize,
    /// Nucleotides per molecule, 0 for a missing second molecule.
    pub lengths: (usize, usize),
    /// Canonical, unpadded sequence and structure.
    pub sequence: String,
    pub structure: String,
    /// Padded copies for the renderer.
    pub renderer: RendererInput,
    /// One coordinate per nucleotide node, fillers excluded.
    pub numbering: Vec<i64>,
    pub ticks: Vec<Tick>,
    pub colors: Option<Vec<&'static str>>,
    pub highlighting: Highlighting,
    pub regions: Vec<Region>,
    /// 1-based renderer nodes to mark.
    pub highlighted_nodes: Vec<usize>,
}

/// Validates raw text input and annotates it, resolving renderer nodes locally.
pub fn annotate(
    config: &PipelineConfig,
    sequence: &str,
    structure: &str,
) -> Result<Annotation, ValidationError> {
    let input = validate_input(sequence, structure, config.offsets)?;
    let renderer = RendererInput::new(&input.structure, &input.sequence);
    let layout = NodeLayout::resolve(&renderer)?;
    annotate_with_layout(config, &input, renderer, &layout)
}

/// Annotates validated input against the node layout reported by a renderer.
pub fn annotate_with_layout<L: RenderedLayout>(
    config: &PipelineConfig,
    input: &ValidatedInput,
    renderer: RendererInput,
    layout: &L,
) -> Result<Annotation, ValidationError> {
    let lengths = input.sequence.lengths();
    let labels = numbering(config.offsets, lengths)?;
    let ticks = tick_labels(&labels, lengths.0, input.molecules);

    let fillers = match input.molecules {
        MoleculeCount::One => 0,
        MoleculeCount::Two => FILLER_NODES,
    };
    if layout.node_count() != labels.len() + fillers {
        warn!("Renderer reports {} nodes, expected {}",
            layout.node_count(), labels.len() + fillers);
    }

    let mut regions = Vec::new();
    let mut highlighted_nodes = Vec::new();
    match (config.highlighting, input.structure.second.as_ref()) {
        (Highlighting::Nothing, _) => (),
        (_, None) => {
            info!("Single molecule: skipping {:?} highlighting", config.highlighting);
        }
        (Highlighting::Region, Some(second)) => {
            let (r1, r2) = locate_regions(&input.structure.first, second)?;
            highlighted_nodes = r1.nodes().chain(r2.nodes()).collect();
            regions = vec![r1, r2];
        }
        (Highlighting::Basepairs, Some(_)) => {
            highlighted_nodes = locate_pairs(lengths.0, &layout.basepair_links());
        }
    }
    info!("Annotated {} molecule(s) with {} nodes, {} highlighted",
        input.molecules, labels.len(), highlighted_nodes.len());

    Ok(Annotation {
        molecules: input.structure.iter().count(),
        lengths,
        sequence: input.sequence.to_string(),
        structure: input.structure.to_string(),
        renderer,
        numbering: labels,
        ticks,
        colors: config.coloring.node_colors(lengths),
        highlighting: config.highlighting,
        regions,
        highlighted_nodes,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use dd_annotate::CoordinateOverflow;
    use dd_annotate::NoIntermolecularPairs;
    use dd_structure::HybridError;
    use crate::error::OffsetError;

    const SEQ: &str = "ACGAUCAGAGAUCAGAGCAUACGACAGCAG&ACGAAAAAAAGAGCAUACGACAGCAG";

    fn config(offsets: (i64, i64), coloring: Coloring, highlighting: Highlighting) -> PipelineConfig {
        PipelineConfig { offsets, coloring, highlighting, ..Default::default() }
    }

    #[test]
    fn test_annotate_single_molecule() {
        let cfg = config((-2, 2000), Coloring::Distinct, Highlighting::Region);
        let ann = annotate(&cfg,
            "ACGAUCAGAGAUCAGAGCAUACGACCCCAAAGGGAGCAGAAAAAAAAA",
            "..((((...))))...((...((..(((...))).((.....))))))").unwrap();
        assert_eq!(ann.molecules, 1);
        assert_eq!(ann.numbering.len(), 48);
        assert_eq!(&ann.numbering[..4], &[-2, -1, 1, 2]);
        assert_eq!(ann.ticks.len(), 4);
        assert_eq!(ann.ticks[0], Tick { position: 10, label: Some(8) });
        assert_eq!(ann.colors.as_ref().map(|c| c.len()), Some(48));
        assert!(ann.regions.is_empty());
        assert!(ann.highlighted_nodes.is_empty());
        assert_eq!(ann.renderer.structure, ann.structure);
    }

    #[test]
    fn test_annotate_hybrid_regions() {
        let cfg = config((1, 1), Coloring::Distinct, Highlighting::Region);
        let ann = annotate(&cfg, SEQ, "1|||&5|||").unwrap();
        assert_eq!(ann.molecules, 2);
        assert_eq!(ann.lengths, (30, 26));
        assert_eq!(ann.regions, vec![
            Region { start: 1, end: 3 },
            Region { start: 30 + 2 + 5, end: 30 + 2 + 7 },
        ]);
        assert_eq!(ann.highlighted_nodes, vec![1, 2, 3, 37, 38, 39]);
        assert_eq!(ann.colors.as_ref().unwrap()[30], "lightgreen");
        let decoded = format!("((({}&....))){}", ".".repeat(27), ".".repeat(19));
        assert_eq!(ann.structure, decoded);
        assert_eq!(ann.renderer.structure,
            format!("((({}&......))){}", ".".repeat(27), ".".repeat(19)));
        assert_eq!(ann.renderer.structure.chars().count(), ann.structure.chars().count() + FILLER_NODES);
        assert_eq!(ann.renderer.sequence.chars().count(), ann.sequence.chars().count() + FILLER_NODES);
        assert_eq!(ann.numbering.len(), 30 + 26);
        // position 30 is the last nucleotide of molecule one, 31 and 32 are fillers
        assert_eq!(ann.ticks[2], Tick { position: 30, label: Some(30) });
        assert_eq!(ann.ticks[3], Tick { position: 40, label: Some(8) });
    }

    #[test]
    fn test_annotate_basepairs() {
        let cfg = config((-2, -2), Coloring::Default, Highlighting::Basepairs);
        let ann = annotate(&cfg, "AUAUGCGAAUUG&CGCAAUUCGA", "....(((..(((&))..)))..)").unwrap();
        assert_eq!(ann.colors, None);
        let mut nodes = ann.highlighted_nodes.clone();
        nodes.sort_unstable();
        assert_eq!(nodes, vec![5, 6, 7, 10, 11, 12, 15, 16, 19, 20, 21, 24]);
    }

    #[test]
    fn test_annotate_without_crossing_pairs() {
        let cfg = config((-2, -2), Coloring::Default, Highlighting::Region);
        let err = annotate(&cfg, "GGGCGAAACGCCAAA&AACCCGAAACGGGAA", "(((((...)))..))&..(((((...)))))")
            .unwrap_err();
        assert_eq!(err, ValidationError::NoIntermolecularPairs(NoIntermolecularPairs { molecule: 1 }));

        let cfg = config((-2, -2), Coloring::Default, Highlighting::Basepairs);
        let ann = annotate(&cfg, "GGGCGAAACGCCAAA&AACCCGAAACGGGAA", "(((((...)))..))&..(((((...)))))")
            .unwrap();
        assert!(ann.highlighted_nodes.is_empty());
    }

    #[test]
    fn test_annotate_rejects_invalid_input() {
        let cfg = PipelineConfig::default();
        assert!(matches!(annotate(&cfg, "ACGU", "((.)"), Err(ValidationError::Structure(_))));
        assert!(matches!(annotate(&cfg, "ACXU", "(..)"), Err(ValidationError::Sequence(_))));
        assert!(matches!(annotate(&cfg, SEQ, "40|||&5|||"), Err(ValidationError::Hybrid(_))));
    }

    #[test]
    fn test_annotation_serializes() {
        let cfg = config((1, 1), Coloring::Default, Highlighting::Nothing);
        let ann = annotate(&cfg, "GGA&UCC", "(((&)))").unwrap();
        let json = serde_json::to_value(&ann).unwrap();
        assert_eq!(json["renderer"]["structure"], "(((&..)))");
        assert_eq!(json["highlighting"], "nothing");
        assert_eq!(json["numbering"], serde_json::json!([1, 2, 3, 1, 2, 3]));
        assert!(json["colors"].is_null());
    }

    #[test]
    fn test_annotate_offset_at_the_end_of_the_range() {
        let cfg = config((i64::MAX, 1), Coloring::Default, Highlighting::Region);
        let err = annotate(&cfg, "ACGU", "(..)").unwrap_err();
        assert_eq!(err, ValidationError::Offset(OffsetError::OutOfRange(
            CoordinateOverflow { molecule: 1, offset: i64::MAX, length: 4 })));

        let err = annotate(&cfg, "ACGU&ACGU", "9223372036854775807|&1|").unwrap_err();
        assert!(matches!(err, ValidationError::Hybrid(HybridError::EndOutOfBounds { molecule: 1, .. })));

        let cfg = config((i64::MAX - 4, 1), Coloring::Default, Highlighting::Region);
        let ann = annotate(&cfg, "ACGU", "(..)").unwrap();
        assert_eq!(ann.numbering.last(), Some(&(i64::MAX - 1)));
    }
}
