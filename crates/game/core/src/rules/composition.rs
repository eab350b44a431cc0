//! Which pieces may join which stacks.

use crate::state::{Piece, PieceKind, base_kind_of};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompositionError {
    #[error("cannot stack across colors")]
    ColorMismatch,

    #[error("{incoming} cannot join a {base} stack")]
    KindMismatch { base: PieceKind, incoming: PieceKind },

    #[error("{base} stack limit is {limit}, combined height would be {combined}")]
    SizeLimit {
        base: PieceKind,
        limit: usize,
        combined: usize,
    },
}

/// Decides whether `incoming` (bottom-to-top) may be placed on top of
/// `target`.
///
/// 1. An empty target always accepts.
/// 2. With `check_color`, the two top pieces must share a color.
/// 3. Unless the target's base is General, every incoming piece must be a
///    General or of the target's base kind.
/// 4. The combined height must fit the limit of the combined base kind.
///
/// The first failing check is reported.
pub fn can_stack_on(
    target: &[Piece],
    incoming: &[Piece],
    check_color: bool,
) -> Result<(), CompositionError> {
    let (Some(target_top), Some(incoming_top)) = (target.last(), incoming.last()) else {
        return Ok(());
    };

    if check_color && target_top.color != incoming_top.color {
        return Err(CompositionError::ColorMismatch);
    }

    let base = base_kind_of(target);
    if base != PieceKind::General {
        if let Some(stray) = incoming
            .iter()
            .find(|piece| piece.kind != PieceKind::General && piece.kind != base)
        {
            return Err(CompositionError::KindMismatch {
                base,
                incoming: stray.kind,
            });
        }
    }

    check_height(target.iter().chain(incoming).copied())
}

/// Height check for a sequence about to become a stack, keyed by its own base
/// kind.
pub fn check_height(pieces: impl IntoIterator<Item = Piece>) -> Result<(), CompositionError> {
    let combined: Vec<Piece> = pieces.into_iter().collect();
    let base = base_kind_of(&combined);
    let limit = base.stack_limit();
    if combined.len() > limit {
        return Err(CompositionError::SizeLimit {
            base,
            limit,
            combined: combined.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Color, PieceId};

    fn pieces(color: Color, kinds: &[PieceKind], first_id: u8) -> Vec<Piece> {
        kinds
            .iter()
            .enumerate()
            .map(|(offset, kind)| Piece::revealed(PieceId(first_id + offset as u8), *kind, color))
            .collect()
    }

    #[test]
    fn empty_target_accepts_anything() {
        let incoming = pieces(Color::Red, &[PieceKind::Horse], 0);
        assert_eq!(can_stack_on(&[], &incoming, true), Ok(()));
    }

    #[test]
    fn color_checked_only_on_request() {
        let target = pieces(Color::Red, &[PieceKind::Soldier], 0);
        let incoming = pieces(Color::Black, &[PieceKind::Soldier], 1);
        assert_eq!(
            can_stack_on(&target, &incoming, true),
            Err(CompositionError::ColorMismatch)
        );
        assert_eq!(can_stack_on(&target, &incoming, false), Ok(()));
    }

    #[test]
    fn incoming_must_match_base_or_be_general() {
        let target = pieces(Color::Red, &[PieceKind::General, PieceKind::Cannon], 0);

        let generals = pieces(Color::Red, &[PieceKind::General], 2);
        assert_eq!(can_stack_on(&target, &generals, true), Ok(()));

        let cannons = pieces(Color::Red, &[PieceKind::Cannon], 2);
        assert_eq!(can_stack_on(&target, &cannons, true), Ok(()));

        let horse = pieces(Color::Red, &[PieceKind::Horse], 2);
        assert_eq!(
            can_stack_on(&target, &horse, true),
            Err(CompositionError::KindMismatch {
                base: PieceKind::Cannon,
                incoming: PieceKind::Horse
            })
        );
    }

    #[test]
    fn general_base_accepts_any_kind_and_adopts_it() {
        let target = pieces(Color::Red, &[PieceKind::General], 0);
        let incoming = pieces(Color::Red, &[PieceKind::Soldier, PieceKind::Soldier], 1);
        assert_eq!(can_stack_on(&target, &incoming, true), Ok(()));
    }

    #[test]
    fn general_pair_is_capped_at_two() {
        let target = pieces(Color::Red, &[PieceKind::General], 0);
        let incoming = pieces(Color::Black, &[PieceKind::General], 1);
        assert_eq!(can_stack_on(&target, &incoming, false), Ok(()));

        let pair = pieces(Color::Red, &[PieceKind::General, PieceKind::General], 0);
        let third = pieces(Color::Red, &[PieceKind::General], 2);
        assert_eq!(
            can_stack_on(&pair, &third, true),
            Err(CompositionError::SizeLimit {
                base: PieceKind::General,
                limit: 2,
                combined: 3
            })
        );
    }

    #[test]
    fn limit_follows_the_combined_base() {
        let target = pieces(Color::Red, &[PieceKind::Horse; 4], 0);
        let incoming = pieces(Color::Red, &[PieceKind::Horse; 3], 4);
        assert_eq!(
            can_stack_on(&target, &incoming, true),
            Err(CompositionError::SizeLimit {
                base: PieceKind::Horse,
                limit: 6,
                combined: 7
            })
        );

        let soldiers = pieces(Color::Red, &[PieceKind::Soldier; 7], 0);
        let more = pieces(Color::Red, &[PieceKind::Soldier; 5], 7);
        assert_eq!(can_stack_on(&soldiers, &more, true), Ok(()));
    }
}
