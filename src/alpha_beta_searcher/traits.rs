//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

use smallvec::{Array, SmallVec};

/// Represents the state of a two-player zero-sum game.
pub trait GameState: Clone + Send + Sync {
    /// Returns true if the player to move is the maximizing player.
    fn is_maximizing_player(&self) -> bool;
}

/// Represents an action that derives a successor game state.
pub trait GameMove: Clone + Send + Sync + PartialEq + Debug {
    type State: GameState;
    type Error: Debug;

    /// Returns the state reached by playing this move. The given state is
    /// never modified, so sibling branches of the search stay independent.
    fn apply(&self, state: &Self::State) -> Result<Self::State, Self::Error>;
}

/// Generates all legal moves from a given game state.
pub trait MoveGenerator<S: GameState>: Clone + Send + Sync {
    type Move: GameMove<State = S>;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the player to move, in the order the
    /// search should consider them.
    fn generate_moves(&self, state: &S) -> Self::MoveList;
}

/// Evaluates a game position and returns a score. Higher scores favor the
/// maximizing player.
pub trait Evaluator<S: GameState>: Clone + Send + Sync {
    /// Score of a decided position, or None if the game is still open.
    /// `remaining_depth` lets quicker wins (and slower losses) score better.
    fn terminal_score(&self, state: &S, remaining_depth: u8) -> Option<i16>;

    /// Static evaluation at the search horizon.
    fn evaluate(&self, state: &S) -> i16;

    /// Score of an undecided position in which the player to move has no
    /// legal move.
    fn no_moves_score(&self, _state: &S) -> i16 {
        0
    }
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + Send {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M: Send> MoveCollection<M> for Vec<M> {}

impl<A> MoveCollection<A::Item> for SmallVec<A>
where
    A: Array + Send,
    A::Item: Send,
{
}
