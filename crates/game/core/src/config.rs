/// Game configuration constants.
///
/// Every value here is part of the rules both sides play by; nothing is
/// runtime-tunable except through the constructors on
/// [`ActorState`](crate::ActorState).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of offense tiers (tier value doubles as damage).
    pub const TIERS: usize = 3;
    /// Upper bound on candidate actions per ply: every tier, defense, no-op.
    pub const MAX_CANDIDATES: usize = Self::TIERS + 2;

    // ===== starting values =====
    pub const STARTING_VITALITY: i32 = 10;
    pub const OFFENSE_USES: u8 = 3;
    pub const PLAYER_GUARDS: u8 = 2;
    /// The engine side starts with one extra guard.
    pub const ENGINE_GUARDS: u8 = Self::PLAYER_GUARDS + 1;
}
