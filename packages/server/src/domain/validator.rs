//! Edit validator: cheap shape checks performed before session state is consulted.

use super::{
    error::EditValidationError,
    palette::{Color, Palette},
    value_object::PixelIndex,
};

/// An edit whose color is in the palette and whose index is inside the canvas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEdit {
    pub index: PixelIndex,
    pub color: Color,
}

/// Validate a proposed edit.
///
/// The color is checked first, then the index against `[0, cell_count)`.
pub fn validate_edit(
    palette: &Palette,
    cell_count: usize,
    raw_index: i64,
    raw_color: &str,
) -> Result<ValidatedEdit, EditValidationError> {
    let color = palette
        .resolve(raw_color)
        .ok_or_else(|| EditValidationError::ColorNotAllowed(raw_color.to_string()))?;

    let index = PixelIndex::checked(raw_index, cell_count).ok_or(
        EditValidationError::IndexOutOfRange {
            index: raw_index,
            cell_count,
        },
    )?;

    Ok(ValidatedEdit { index, color })
}
