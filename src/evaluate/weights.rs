// Far larger than any sum of positional terms, so a decided game always
// outweighs the heuristic.
pub const WIN_SCORE: i16 = 10_000;

pub const CENTER_CONTROL: i16 = 50;

// Opponent threats weigh more than our own, biasing the engine towards
// blocking over advancing.
pub const OWN_THREAT: i16 = 20;
pub const OPPONENT_THREAT: i16 = 25;

pub const DRAW_SCORE: i16 = 0;
