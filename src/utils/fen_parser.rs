//! FEN-to-GameState parser.
//!
//! Builds a fully populated state from a Forsyth-Edwards Notation string.
//! FEN carries no per-piece move history, so `has_moved` is inferred: a king
//! or rook counts as unmoved only while a matching castling right survives,
//! and a pawn only while it stands on its home rank.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{king_home_square, wing_of_rook_home};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    infer_has_moved(&mut game_state);
    game_state
        .validate()
        .map_err(|err| invalid(&err.to_string()))?;

    Ok(game_state)
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file = file
                    .checked_add(empty_count as u8)
                    .filter(|total| *total <= 8)
                    .ok_or_else(|| invalid("board rank has too many files"))?;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;

            let square = Square::new(board_rank, file)
                .ok_or_else(|| invalid("board rank has too many files"))?;
            game_state.put_piece(Piece::new(kind, color, square));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.grant(Color::White, CastleWing::Kingside),
            'Q' => rights.grant(Color::White, CastleWing::Queenside),
            'k' => rights.grant(Color::Black, CastleWing::Kingside),
            'q' => rights.grant(Color::Black, CastleWing::Queenside),
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    if square.rank() != 2 && square.rank() != 5 {
        return Err(invalid(&format!("en passant square {square} is not on rank 3 or 6")));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| (color, kind))
}

fn infer_has_moved(game_state: &mut GameState) {
    let rights = game_state.castling_rights;
    for slot in game_state.board.iter_mut() {
        let Some(piece) = slot else {
            continue;
        };
        piece.has_moved = match piece.kind {
            PieceKind::Pawn => piece.square.rank() != piece.color.pawn_home_rank(),
            PieceKind::King => {
                piece.square != king_home_square(piece.color)
                    || CastleWing::BOTH
                        .iter()
                        .all(|wing| !rights.has(piece.color, *wing))
            }
            PieceKind::Rook => !wing_of_rook_home(piece.color, piece.square)
                .is_some_and(|wing| rights.has(piece.color, wing)),
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move(), Color::White);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert!(game_state.pieces().all(|piece| !piece.has_moved));
    }

    #[test]
    fn castling_rights_drive_has_moved_inference() {
        let game_state = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let moved = |name: &str| {
            let square = crate::utils::algebraic::algebraic_to_square(name).expect("square");
            game_state.piece_at(square).expect("piece").has_moved
        };
        assert!(!moved("e1"));
        assert!(!moved("h1"));
        assert!(moved("a1"));
        assert!(!moved("a8"));
        assert!(moved("h8"));
        assert!(!moved("e8"));
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let digit_run = format!("{}/8/8/8/8/8/8/8 w - - 0 1", "8".repeat(40));
        for fen in [
            "8/8/8/8/8/8/8 w - - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0",
            digit_run.as_str(),
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "{fen} should be rejected"
            );
        }
    }

    #[test]
    fn positions_without_one_king_per_side_are_rejected() {
        for fen in [
            "8/8/8/8/8/8/8/R6K w - - 0 1",
            "4k3/8/8/8/8/8/8/8 b - - 0 1",
            "4k3/8/8/8/8/8/8/K6K w - - 0 1",
        ] {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "{fen} should be rejected"
            );
        }
    }
}
