use std::rc::Rc;

use battler_data::{
    Boost,
    MoveData,
    Stat,
    Status,
    Type,
    Weather,
};

use crate::{
    battle::CombatantId,
    common::{
        BooleanHolder,
        Holder,
        IntegerHolder,
        NumberHolder,
    },
    effect::Cancellable,
    tags::TagType,
};

/// Parameters for the immunity hooks and
/// [`Hook::ReceivedDamageMultiplier`][`crate::hooks::Hook::ReceivedDamageMultiplier`].
///
/// One instance is threaded through every immunity check of a hit, so a later hook sees an
/// earlier cancellation.
#[derive(Debug, Clone)]
pub struct PreDefendParams {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub move_data: Rc<MoveData>,
    pub move_type: Type,
    pub type_multiplier: NumberHolder,
    pub cancelled: BooleanHolder,
    pub damage_multiplier: NumberHolder,
}

impl PreDefendParams {
    pub fn new(
        attacker: CombatantId,
        defender: CombatantId,
        move_data: Rc<MoveData>,
        move_type: Type,
        type_multiplier: f64,
    ) -> Self {
        Self {
            attacker,
            defender,
            move_data,
            move_type,
            type_multiplier: NumberHolder::new(type_multiplier),
            cancelled: BooleanHolder::new(false),
            damage_multiplier: NumberHolder::new(1.0),
        }
    }
}

/// Parameters for [`Hook::MoveTypeChange`][`crate::hooks::Hook::MoveTypeChange`].
///
/// `power` is a multiplier on base power that comes with the new type.
#[derive(Debug, Clone)]
pub struct MoveTypeParams {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub move_data: Rc<MoveData>,
    pub move_type: Holder<Type>,
    pub power: NumberHolder,
}

impl MoveTypeParams {
    pub fn new(attacker: CombatantId, defender: CombatantId, move_data: Rc<MoveData>) -> Self {
        let move_type = move_data.primary_type;
        Self {
            attacker,
            defender,
            move_data,
            move_type: Holder::new(move_type),
            power: NumberHolder::new(1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccuracyParams {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub move_data: Rc<MoveData>,
    /// Percent chance to hit, after stat stages.
    pub accuracy: NumberHolder,
}

#[derive(Debug, Clone)]
pub struct PowerParams {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub move_data: Rc<MoveData>,
    pub move_type: Type,
    pub power: NumberHolder,
}

/// Parameters shared by every critical hit hook of one hit.
#[derive(Debug, Clone)]
pub struct CritParams {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub move_data: Rc<MoveData>,
    pub stage: IntegerHolder,
    pub forced: BooleanHolder,
    pub blocked: BooleanHolder,
    pub multiplier: NumberHolder,
}

#[derive(Debug, Clone)]
pub struct StabParams {
    pub attacker: CombatantId,
    pub move_type: Type,
    pub multiplier: NumberHolder,
}

/// Parameters for stat multiplier hooks.
///
/// `target` owns the stat. For the field-wide hook, the first effect to apply sets `applied`
/// and the rest stand down.
#[derive(Debug, Clone)]
pub struct StatParams {
    pub target: CombatantId,
    pub opponent: Option<CombatantId>,
    pub stat: Stat,
    pub move_data: Option<Rc<MoveData>>,
    pub multiplier: NumberHolder,
    pub applied: BooleanHolder,
}

#[derive(Debug, Clone)]
pub struct StatStageParams {
    /// Whose stages are being read.
    pub target: CombatantId,
    pub stat: Stat,
    pub ignored: BooleanHolder,
}

#[derive(Debug, Clone)]
pub struct PostDamageParams {
    pub attacker: CombatantId,
    pub defender: CombatantId,
    pub move_data: Rc<MoveData>,
    pub damage: u16,
    pub critical: bool,
}

#[derive(Debug, Clone)]
pub struct StatStageChangeParams {
    pub target: CombatantId,
    pub source: Option<CombatantId>,
    pub boost: Boost,
    pub stages: i8,
    pub cancelled: BooleanHolder,
}

#[derive(Debug, Clone)]
pub struct StatusParams {
    pub target: CombatantId,
    pub source: Option<CombatantId>,
    pub status: Status,
    pub cancelled: BooleanHolder,
}

#[derive(Debug, Clone)]
pub struct TagParams {
    pub target: CombatantId,
    pub source: Option<CombatantId>,
    pub tag_type: TagType,
    pub cancelled: BooleanHolder,
}

/// Parameters for hooks that only decide whether something is blocked.
#[derive(Debug, Clone)]
pub struct CancelParams {
    pub target: CombatantId,
    pub source: Option<CombatantId>,
    pub cancelled: BooleanHolder,
}

impl CancelParams {
    pub fn new(target: CombatantId, source: Option<CombatantId>) -> Self {
        Self {
            target,
            source,
            cancelled: BooleanHolder::new(false),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TurnParams {
    pub turn: u64,
}

#[derive(Debug, Clone)]
pub struct FaintParams {
    pub fainted: CombatantId,
    pub attacker: Option<CombatantId>,
    pub move_data: Option<Rc<MoveData>>,
}

#[derive(Debug, Clone)]
pub struct WeatherParams {
    pub previous: Option<Weather>,
    pub weather: Option<Weather>,
}

macro_rules! impl_cancellable {
    ($($params:ty),* $(,)?) => {
        $(
            impl Cancellable for $params {
                fn cancelled_holder(&self) -> &BooleanHolder {
                    &self.cancelled
                }

                fn cancelled_holder_mut(&mut self) -> &mut BooleanHolder {
                    &mut self.cancelled
                }
            }
        )*
    };
}

impl_cancellable!(
    PreDefendParams,
    StatStageChangeParams,
    StatusParams,
    TagParams,
    CancelParams,
);
