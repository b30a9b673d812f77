//! GameState-to-FEN serializer, for fixtures and diagnostics.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights());
    let en_passant = game_state
        .en_passant_target()
        .map(|square| square.to_string())
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

/// Piece placement, rank 8 first, runs of empty squares collapsed to digits.
fn generate_board_field(game_state: &GameState) -> String {
    let rows: Vec<String> = (0..8u8)
        .rev()
        .map(|rank| {
            let mut row = String::with_capacity(8);
            let mut gap = 0u8;
            for square in (0..8u8).map(|file| Square::at(rank, file)) {
                match game_state.piece_at(square) {
                    None => gap += 1,
                    Some(piece) => {
                        flush_gap(&mut row, &mut gap);
                        row.push(piece_to_fen_char(piece.color, piece.kind));
                    }
                }
            }
            flush_gap(&mut row, &mut gap);
            row
        })
        .collect();
    rows.join("/")
}

fn flush_gap(row: &mut String, gap: &mut u8) {
    if *gap != 0 {
        row.push(char::from(b'0' + *gap));
        *gap = 0;
    }
}

pub fn piece_to_fen_char(color: Color, piece: PieceKind) -> char {
    match color {
        Color::White => piece.letter(),
        Color::Black => piece.letter().to_ascii_lowercase(),
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    for (color, wing, ch) in [
        (Color::White, CastleWing::Kingside, 'K'),
        (Color::White, CastleWing::Queenside, 'Q'),
        (Color::Black, CastleWing::Kingside, 'k'),
        (Color::Black, CastleWing::Queenside, 'q'),
    ] {
        if rights.has(color, wing) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
