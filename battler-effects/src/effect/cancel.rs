use crate::common::BooleanHolder;

/// Hook parameters that carry a "cancelled" flag.
pub trait Cancellable {
    fn cancelled_holder(&self) -> &BooleanHolder;
    fn cancelled_holder_mut(&mut self) -> &mut BooleanHolder;

    fn cancelled(&self) -> bool {
        self.cancelled_holder().get()
    }
}

/// The reusable "cancel the interaction" behavior.
///
/// Units that only cancel delegate both steps here. The first unit to cancel wins; later units
/// observe the flag and stand down.
pub struct CancelInteraction;

impl CancelInteraction {
    pub fn can_apply<P>(params: &P) -> bool
    where
        P: Cancellable,
    {
        !params.cancelled()
    }

    pub fn apply<P>(params: &mut P)
    where
        P: Cancellable,
    {
        params.cancelled_holder_mut().set(true);
    }
}
