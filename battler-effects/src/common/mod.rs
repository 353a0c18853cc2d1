mod holder;

pub use holder::{
    BooleanHolder,
    Holder,
    IntegerHolder,
    NumberHolder,
};
