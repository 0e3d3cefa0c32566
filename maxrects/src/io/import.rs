use std::collections::HashSet;
use std::str::FromStr;

use log::debug;

use crate::entities::Piece;
use crate::error::{InputError, PackError};
use crate::geometry::primitives::Rect;
use crate::io::ext_repr::{ExtInstance, ExtPiece};

/// Converts an external piece into an internal one.
pub fn import_piece(ext_piece: &ExtPiece) -> Result<Piece, PackError> {
    let piece = Piece::from_rectangle(ext_piece.width, ext_piece.height, ext_piece.id)?;
    match &ext_piece.hole {
        None => Ok(piece),
        Some(h) => {
            let hole = Rect::from_xywh(h.x, h.y, h.width, h.height).map_err(|e| {
                PackError::InvalidPiece {
                    id: ext_piece.id,
                    reason: format!("invalid hole: {e}"),
                }
            })?;
            Piece::from_shape_with_hole(&piece, &Piece::from_shape(hole.into(), ext_piece.id))
        }
    }
}

/// Converts all pieces of an instance, in input order.
pub fn import_pieces(ext_pieces: &[ExtPiece]) -> Result<Vec<Piece>, PackError> {
    let mut ids = HashSet::new();
    ext_pieces
        .iter()
        .map(|ext_piece| {
            if !ids.insert(ext_piece.id) {
                return Err(PackError::InvalidPiece {
                    id: ext_piece.id,
                    reason: "duplicate id".to_string(),
                });
            }
            import_piece(ext_piece)
        })
        .collect()
}

/// Parses the plain text instance format:
///
/// ```text
/// <bin width> <bin height>
/// <number of pieces N>
/// <width> <height>      (N lines, the piece id is the zero-based index of the line)
/// ```
///
/// Blank lines are skipped, tokens beyond the second on a piece line are ignored.
pub fn parse_text_instance(content: &str, name: &str) -> Result<ExtInstance, InputError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| malformed(0, "empty input"))?;
    let header_tokens = header.split_whitespace().collect::<Vec<_>>();
    if header_tokens.len() != 2 {
        return Err(malformed(
            header_line,
            format!("expected '<bin width> <bin height>', found '{header}'"),
        ));
    }
    let bin_width = parse_dimension(header_tokens[0], header_line)?;
    let bin_height = parse_dimension(header_tokens[1], header_line)?;

    let (count_line, count) = lines
        .next()
        .ok_or_else(|| malformed(0, "missing number of pieces"))?;
    let n_pieces = parse_token::<usize>(count, count_line)?;

    let mut pieces = Vec::with_capacity(n_pieces);
    for (line, content) in lines {
        if pieces.len() == n_pieces {
            return Err(malformed(
                line,
                format!("more pieces than the {n_pieces} announced"),
            ));
        }
        let mut tokens = content.split_whitespace();
        let (Some(w), Some(h)) = (tokens.next(), tokens.next()) else {
            return Err(malformed(line, "expected '<width> <height>'"));
        };
        pieces.push(ExtPiece {
            id: pieces.len(),
            width: parse_dimension(w, line)?,
            height: parse_dimension(h, line)?,
            hole: None,
        });
    }

    if pieces.len() != n_pieces {
        return Err(malformed(
            0,
            format!("expected {n_pieces} pieces, found {}", pieces.len()),
        ));
    }

    debug!(
        "[IO] parsed instance '{name}': bin {bin_width} x {bin_height}, {} pieces",
        pieces.len()
    );

    Ok(ExtInstance {
        name: name.to_string(),
        bin_width,
        bin_height,
        pieces,
    })
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<T, InputError> {
    token
        .parse::<T>()
        .map_err(|_| malformed(line, format!("invalid number '{token}'")))
}

fn parse_dimension(token: &str, line: usize) -> Result<f64, InputError> {
    let value = parse_token::<f64>(token, line)?;
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(malformed(
            line,
            format!("dimension must be strictly positive, found '{token}'"),
        )),
    }
}

fn malformed(line: usize, reason: impl Into<String>) -> InputError {
    InputError::MalformedInput {
        line,
        reason: reason.into(),
    }
}
