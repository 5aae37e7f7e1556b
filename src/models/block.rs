use serde::{Deserialize, Serialize};

/// Node type reported by SiYuan for a search hit
///
/// Only `NodeDocument` changes how an item is rendered; unlisted node types
/// deserialize as [`BlockType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockType {
    NodeDocument,
    NodeHeading,
    NodeParagraph,
    NodeList,
    NodeListItem,
    NodeBlockquote,
    NodeSuperBlock,
    NodeCodeBlock,
    NodeMathBlock,
    NodeTable,
    NodeHTMLBlock,
    NodeBlockQueryEmbed,
    NodeAttributeView,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(rename = "hPath")]
    pub h_path: String,
}

/// A block annotated with the label of the workspace it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedBlock {
    pub workspace: String,
    pub block: Block,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_block_ignores_extra_fields() {
        let json = r#"{
            "id": "20250126173708-abcdefg",
            "rootID": "20250126173708-root000",
            "box": "20210808180117-notebk",
            "content": "hello <mark>world</mark>",
            "type": "NodeParagraph",
            "hPath": "/Notes/Daily",
            "ial": {}
        }"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.id, "20250126173708-abcdefg");
        assert_eq!(block.block_type, BlockType::NodeParagraph);
        assert_eq!(block.h_path, "/Notes/Daily");
    }

    #[test]
    fn test_unknown_block_type_is_other() {
        let json = r#"{"id":"x","content":"","type":"NodeWidget","hPath":"/"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Other);
    }

    #[test]
    fn test_missing_field_is_error() {
        let json = r#"{"id":"x","content":"","type":"NodeDocument"}"#;
        assert!(serde_json::from_str::<Block>(json).is_err());
    }
}
