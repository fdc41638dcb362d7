//! Naming scheme for uploaded assets.
//!
//! An upload is stored under `<token>.<extension>` where the token is a
//! fresh UUIDv4 and the extension is taken from the client-supplied
//! filename. Collision avoidance is structural: the token space is large
//! enough that uniqueness holds even under concurrent uploads, no lock
//! required.

use uuid::Uuid;

/// Derive the stored-name extension from a client filename.
///
/// The extension is the text after the final `.`. When the filename
/// contains no `.` at all, the whole filename is used as the extension --
/// a quirk of the observed behaviour that is kept deliberately rather
/// than special-cased. No check that the extension matches the content.
///
/// # Examples
///
/// ```
/// use geomark_core::asset_naming::derive_extension;
///
/// assert_eq!(derive_extension("photo.png"), "png");
/// assert_eq!(derive_extension("a.b.png"), "png");
/// assert_eq!(derive_extension("noext"), "noext");
/// ```
pub fn derive_extension(original_filename: &str) -> &str {
    match original_filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => original_filename,
    }
}

/// Generate a fresh, collision-resistant stored name for an upload.
///
/// Case of the extension is preserved (`photo.PNG` stores as
/// `<token>.PNG`).
pub fn stored_name(original_filename: &str) -> String {
    format!(
        "{}.{}",
        Uuid::new_v4(),
        derive_extension(original_filename)
    )
}
