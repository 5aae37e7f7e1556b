use std::io::Write;

use anyhow::{Context, Result};

use crate::models::{BlockType, ItemIcon, ItemList, LauncherItem, TaggedBlock};

/// Maximum title length in characters
pub const TITLE_MAX_CHARS: usize = 50;

/// Tokens the kernel wraps around matched keywords
const HIGHLIGHT_TOKENS: [&str; 2] = ["<mark>", "</mark>"];

pub const ICON_FILE: &str = "./icon_file.png";
pub const ICON_BLOCK: &str = "./icon_block.png";

const BLOCK_URI_PREFIX: &str = "siyuan://blocks/";

/// Strip highlight markup from block content and cut it to [`TITLE_MAX_CHARS`]
///
/// # Examples
///
/// ```
/// use siyuan_search::formatter::clean_title;
///
/// assert_eq!(clean_title("learning <mark>rust</mark>"), "learning rust");
/// ```
pub fn clean_title(content: &str) -> String {
    let mut title = content.to_string();
    for token in HIGHLIGHT_TOKENS {
        title = title.replace(token, "");
    }
    title.chars().take(TITLE_MAX_CHARS).collect()
}

/// Icon for a block: documents get the file icon, everything else the block icon
pub fn icon_for(block_type: BlockType) -> &'static str {
    if block_type == BlockType::NodeDocument { ICON_FILE } else { ICON_BLOCK }
}

/// URI that opens a block in SiYuan
pub fn block_uri(block_id: &str) -> String {
    format!("{}{}", BLOCK_URI_PREFIX, block_id)
}

/// Map tagged blocks to launcher items, numbering them from 1 in input order
pub fn format_items(blocks: &[TaggedBlock]) -> ItemList {
    let items = blocks
        .iter()
        .enumerate()
        .map(|(index, tagged)| LauncherItem {
            uid: index + 1,
            title: clean_title(&tagged.block.content),
            subtitle: format!("{}: {}", tagged.workspace, tagged.block.h_path),
            arg: block_uri(&tagged.block.id),
            icon: ItemIcon { path: icon_for(tagged.block.block_type).to_string() },
        })
        .collect();

    ItemList { items }
}

/// Serialize an item list as the process's JSON output
pub fn write_items<W: Write>(items: &ItemList, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, items).context("Failed to serialize launcher items")?;
    writer.flush().context("Failed to flush launcher items")?;
    Ok(())
}
