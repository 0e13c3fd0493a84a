//! Plain text rendering of fragment trees.

use crate::model::Fragment;

/// Convert rendered fragments to plain text.
///
/// Blocks are separated by a newline. Math shows its notation and errors
/// show their message.
pub fn to_text(fragments: &[Fragment]) -> String {
    let mut output = String::new();
    for fragment in fragments {
        let text = fragment.plain_text();
        if matches!(fragment, Fragment::Block { .. }) && !output.is_empty() && !output.ends_with('\n')
        {
            output.push('\n');
        }
        output.push_str(&text);
    }
    output.trim().to_string()
}
