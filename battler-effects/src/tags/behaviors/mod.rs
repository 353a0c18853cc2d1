mod disruption;
mod guard;
mod persistent;
mod residual;

pub(crate) use disruption::{
    Confusion,
    Disable,
    Drowsiness,
    Flinch,
};
pub(crate) use guard::{
    Endurance,
    MagnetRise,
    Protection,
    SemiInvulnerability,
};
pub(crate) use persistent::{
    FocusEnergy,
    Trap,
};
pub(crate) use residual::{
    Bind,
    Ingrain,
    LeechSeed,
    Nightmare,
    PerishSong,
};
