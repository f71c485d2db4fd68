//! The renderer drops the first two nodes of a second molecule. Its input gets
//! two filler positions right after the separator to compensate; everything
//! else (lengths, numbering, regions) works on the unpadded molecules.

use serde::Serialize;

use dd_structure::SEPARATOR;
use dd_structure::PairTable;
use dd_structure::Sequence;
use dd_structure::Structure;
use dd_structure::StructureError;

/// Nodes the renderer counts between the two molecules.
pub const FILLER_NODES: usize = 2;
const FILLER: char = '.';

/// Inserts the filler positions after the (single) separator.
pub fn pad_for_renderer(text: &str) -> String {
    let mut padded = String::with_capacity(text.len() + FILLER_NODES);
    for (i, part) in text.splitn(2, SEPARATOR).enumerate() {
        if i > 0 {
            padded.push(SEPARATOR);
            padded.extend(std::iter::repeat_n(FILLER, FILLER_NODES));
        }
        padded.push_str(part);
    }
    padded
}

/// Renderer-facing copies of structure and sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RendererInput {
    pub structure: String,
    pub sequence: String,
}

impl RendererInput {
    pub fn new(structure: &Structure, sequence: &Sequence) -> Self {
        RendererInput {
            structure: pad_for_renderer(&structure.to_string()),
            sequence: pad_for_renderer(&sequence.to_string()),
        }
    }

    /// The padded structure as the renderer lays it out: one node per
    /// character, the separator is not a node.
    pub fn node_structure(&self) -> String {
        self.structure.chars().filter(|&c| c != SEPARATOR).collect()
    }
}

/// What the core reads back from a renderer after layout.
pub trait RenderedLayout {
    /// Number of nucleotide nodes, fillers included.
    fn node_count(&self) -> usize;

    /// Resolved base pairs as 1-based node indices.
    fn basepair_links(&self) -> Vec<(usize, usize)>;
}

/// Resolves nodes and base pairs from the renderer input the same way the
/// renderer does, for hosts that do not query a live renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLayout {
    table: PairTable,
}

impl NodeLayout {
    pub fn resolve(input: &RendererInput) -> Result<Self, StructureError> {
        let table = PairTable::try_from(input.node_structure().as_str())?;
        Ok(NodeLayout { table })
    }
}

impl RenderedLayout for NodeLayout {
    fn node_count(&self) -> usize {
        self.table.len()
    }

    fn basepair_links(&self) -> Vec<(usize, usize)> {
        self.table.pairs()
            .into_iter()
            .map(|(i, j)| (i + 1, j + 1))
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_for_renderer() {
        assert_eq!(pad_for_renderer("((..&..))"), "((..&....))");
        assert_eq!(pad_for_renderer("ACGU&GGCC"), "ACGU&..GGCC");
        assert_eq!(pad_for_renderer("((..))"), "((..))");
    }

    #[test]
    fn test_renderer_input_keeps_data_unpadded() {
        let st = Structure::try_from("((.&.))").unwrap();
        let seq = Sequence::try_from("GGA&acc").unwrap();
        let input = RendererInput::new(&st, &seq);
        assert_eq!(input.structure, "((.&...))");
        assert_eq!(input.sequence, "GGA&..ACC");
        assert_eq!(input.node_structure(), "((....))");
        assert_eq!(st.to_string(), "((.&.))");
        assert_eq!(st.lengths(), (3, 3));
    }

    #[test]
    fn test_node_layout() {
        let st = Structure::try_from("(((((...)))..))&..(((((...)))))").unwrap();
        let seq = Sequence::try_from("GGGCGAAACGCCAAA&AACCCGAAACGGGAA").unwrap();
        let layout = NodeLayout::resolve(&RendererInput::new(&st, &seq)).unwrap();
        assert_eq!(layout.node_count(), 15 + FILLER_NODES + 15);
        let links = layout.basepair_links();
        assert_eq!(links.len(), 10);
        assert_eq!(links[0], (1, 15));
        assert_eq!(links[5], (20, 32));
    }

    #[test]
    fn test_node_layout_intermolecular_links() {
        let st = Structure::try_from("....(((..(((&))..)))..)").unwrap();
        let seq = Sequence::try_from("AUAUGCGAAUUG&CGCAAUUCGA").unwrap();
        let layout = NodeLayout::resolve(&RendererInput::new(&st, &seq)).unwrap();
        let links = layout.basepair_links();
        assert_eq!(links[0], (5, 24));
        assert_eq!(links.iter().filter(|&&(i, j)| i <= 12 && j > 12).count(), 6);
    }
}
