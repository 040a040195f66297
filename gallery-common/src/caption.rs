//! Display captions synthesized from a photo's identifier and author.
//!
//! Nothing here is fetched: the catalog only knows ids and authors, so the
//! detail view derives a title and a paragraph from them.

/// Number of entries in the title rotation.
const TITLE_ROTATION_LEN: usize = 8;

/// Rotation slot for an identifier: its leading decimal digits modulo 8.
///
/// Identifiers without leading digits use slot 0. Only the remainder is
/// accumulated, so arbitrarily long numeric ids never overflow.
fn title_slot(id: &str) -> usize {
    id.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0usize, |acc, digit| {
            (acc * 10 + usize::from(digit - b'0')) % TITLE_ROTATION_LEN
        })
}

/// Title for the detail view, picked from a fixed rotation.
pub fn photo_title(id: &str, author: &str) -> String {
    match title_slot(id) {
        0 => format!("Moment {id}"),
        1 => format!("Captured Beauty #{id}"),
        2 => format!("{author}'s Vision #{id}"),
        3 => format!("Frame {id}"),
        4 => format!("Artistic Expression #{id}"),
        5 => format!("Through the Lens {id}"),
        6 => format!("Snapshot {id}"),
        _ => format!("Visual Story #{id}"),
    }
}

/// Descriptive paragraph crediting the author.
pub fn photo_description(author: &str) -> String {
    format!(
        "This stunning photograph was captured by {author}. The image showcases exceptional \
         composition and lighting, demonstrating the photographer's keen eye for detail and \
         artistic vision. Each element in the frame contributes to a harmonious visual \
         narrative that draws the viewer in."
    )
}
